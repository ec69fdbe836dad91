use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("itch-slides")
        .version("1.0.0")
        .about("Generate slideshow data from an itch.io creator page")
        .arg(clap::arg!([INPUT] "Creator page URL, local HTML file, or '-' for stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file, or '-' for stdout")
                .value_name("FILE")
                .default_value("slides.json")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (json, toml)")
                .value_name("FORMAT")
                .default_value("json")
                .value_parser(["json", "toml"]),
        )
        .arg(clap::arg!(--base_url <URL> "Base URL for resolving links in file or stdin input").value_name("URL"))
        .arg(clap::arg!(-n --max <NUM> "Maximum number of slides").default_value("24"))
        .arg(
            clap::arg!(--selectors <FILE> "Selector chain file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--placeholder_image <URL> "Image used when a game has no thumbnail").value_name("URL"))
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--compact "Write single-line JSON"))
        .arg(clap::arg!(--play "Play the slides in the terminal instead of writing a file"))
        .arg(clap::arg!(--interval <SECS> "Seconds between slides in play mode").default_value("5"))
        .arg(clap::arg!(--rounds <NUM> "Full passes through the slides in play mode").default_value("1"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "itch-slides", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "itch-slides", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "itch-slides", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "itch-slides", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
