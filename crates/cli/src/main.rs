mod echo;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use itch_slides_core::{
    Carousel, ChainLoader, DEFAULT_CREATOR_URL, ErrorKind, ExtractConfig, ExtractedSlides, Extractor, FetchConfig,
    OutputFormat, SampleSlides, SlideRecord, SlidesError, fetch_file, fetch_stdin, fetch_url, render,
    slides_or_fallback,
};
use owo_colors::OwoColorize;
use url::Url;

use crate::echo::{
    format_size, print_banner, print_error, print_extraction_details, print_info, print_slide, print_step,
    print_success, print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Steps reported in verbose mode: read, extract, write or play.
const STEPS: usize = 3;

/// Generate slideshow data from an itch.io creator page
#[derive(Parser, Debug)]
#[command(name = "itch-slides")]
#[command(version)]
#[command(about = "Generate slideshow data from an itch.io creator page", long_about = None)]
struct Args {
    /// Creator page URL, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT", default_value = DEFAULT_CREATOR_URL)]
    input: String,

    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = "slides.json", value_name = "FILE")]
    output: PathBuf,

    /// Output format (json, toml)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Base URL for resolving links in file or stdin input
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Maximum number of slides
    #[arg(short = 'n', long = "max", default_value = "24", value_name = "NUM")]
    max: usize,

    /// Selector chain file (default: ~/.config/itch-slides/selectors.txt if present)
    #[arg(long, value_name = "FILE")]
    selectors: Option<PathBuf>,

    /// Image used when a game has no thumbnail
    #[arg(long, value_name = "URL")]
    placeholder_image: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Write single-line JSON
    #[arg(long)]
    compact: bool,

    /// Play the slides in the terminal instead of writing a file
    #[arg(long)]
    play: bool,

    /// Seconds between slides in play mode
    #[arg(long, default_value = "5", value_name = "SECS")]
    interval: u64,

    /// Full passes through the slides in play mode
    #[arg(long, default_value = "1", value_name = "NUM")]
    rounds: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Where the page markup comes from
enum Source {
    Stdin,
    Url(String),
    File(String),
}

impl Source {
    fn from_input(input: &str) -> Self {
        if input == "-" {
            Source::Stdin
        } else if input.starts_with("http://") || input.starts_with("https://") {
            Source::Url(input.to_string())
        } else {
            Source::File(input.to_string())
        }
    }

    /// The page's own URL, used when `--base-url` is not given.
    ///
    /// Stdin has none; relative references then stay unresolved.
    fn own_url(&self) -> Option<String> {
        match self {
            Source::Stdin => None,
            Source::Url(url) => Some(url.clone()),
            Source::File(path) => std::path::absolute(path)
                .ok()
                .and_then(|abs| Url::from_file_path(abs).ok())
                .map(String::from),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            exit_code(&err)
        }
    }
}

/// 1 when the page had no slides, 2 for everything else.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    let extraction_failed = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<SlidesError>())
        .any(|cause| cause.kind() == ErrorKind::Extraction);

    if extraction_failed { ExitCode::from(1) } else { ExitCode::from(2) }
}

async fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let mut loader = ChainLoader::default();
    if let Some(path) = &args.selectors {
        loader = loader.explicit(path);
    }
    if args.verbose
        && let Some(path) = loader.source_path()
    {
        print_info(&format!("Selector chain from {}", path.display().bright_white()));
    }
    let chain = loader.load().context("Failed to load selector chain")?;

    let mut builder = ExtractConfig::builder().max_count(args.max).chain(chain);
    if let Some(placeholder) = &args.placeholder_image {
        builder = builder.placeholder_image(placeholder.clone());
    }
    let extractor = Extractor::new(&builder.build()).context("Invalid selector chain")?;

    let result = load_slides(&args, &extractor).await;

    let slides = if args.play {
        let extracted = result.map(|extracted| extracted.slides);
        let (slides, substituted) =
            slides_or_fallback(extracted, &SampleSlides::default()).context("Failed to load slides")?;
        if substituted {
            print_warning("Could not load slides from the page. Using sample slides.");
        }
        slides
    } else {
        result.context("Failed to extract slides")?.slides
    };

    if args.play {
        if args.verbose {
            print_step(3, STEPS, "Playing slides");
        }
        play(slides, Duration::from_secs(args.interval), args.rounds).await;
        return Ok(());
    }

    if args.verbose {
        print_step(3, STEPS, "Writing output");
        eprintln!(
            "  {} {}",
            "Format:".dimmed(),
            format!("{:?}", args.format).bright_white()
        );
        eprintln!();
    }

    let output = render(&slides, args.format, !args.compact).context("Failed to render slides")?;
    write_output(&args.output, &output, slides.len())
}

/// Reads the input and extracts slides from it.
///
/// Returns the library error unchanged so the caller can pick a fallback.
async fn load_slides(args: &Args, extractor: &Extractor) -> Result<ExtractedSlides, SlidesError> {
    let source = Source::from_input(&args.input);

    let html = match &source {
        Source::Stdin => {
            if args.verbose {
                print_step(1, STEPS, "Reading from stdin");
            }
            fetch_stdin()?
        }
        Source::Url(url) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Fetching {}", url.bright_white().underline()));
            }
            let config = FetchConfig {
                timeout: args.timeout,
                user_agent: args.user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
            };
            fetch_url(url, &config).await?
        }
        Source::File(path) => {
            if args.verbose {
                print_step(1, STEPS, &format!("Reading from file {}", path.bright_white()));
            }
            fetch_file(path)?
        }
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
        eprintln!();
    }

    let base_url = args.base_url.clone().or_else(|| source.own_url()).unwrap_or_default();

    if args.verbose {
        print_step(2, STEPS, "Extracting slides");
        if !base_url.is_empty() {
            eprintln!("  {} {}", "Base URL:".dimmed(), base_url.bright_white());
        }
    }

    let extracted = extractor.extract(&html, &base_url)?;

    if args.verbose {
        print_extraction_details(&extracted);
    }

    Ok(extracted)
}

fn write_output(path: &Path, output: &str, count: usize) -> anyhow::Result<()> {
    if path.as_os_str() == "-" {
        print!("{}", output);
        return Ok(());
    }

    fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
    print_success(&format!("Wrote {} slides to {}", count, path.display().bright_white()));
    Ok(())
}

/// Terminal slideshow: shows each slide for `interval`, `rounds` times over.
async fn play(slides: Vec<SlideRecord>, interval: Duration, rounds: usize) {
    let mut carousel = Carousel::new(slides, interval, Instant::now());
    let total = carousel.len();
    let mut remaining = total.saturating_mul(rounds);

    while remaining > 0 {
        if let Some(slide) = carousel.current() {
            print_slide(carousel.index() + 1, total, slide);
        }
        remaining -= 1;
        if remaining == 0 {
            break;
        }

        let wait = carousel.next_advance_at().saturating_duration_since(Instant::now());
        tokio::time::sleep(wait).await;
        carousel.tick(Instant::now());
    }
}
