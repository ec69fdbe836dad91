use owo_colors::OwoColorize;

use itch_slides_core::{ExtractedSlides, SlideRecord};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "itch-slides".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Slideshow data from itch.io creator pages\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print extraction details summary
pub fn print_extraction_details(extracted: &ExtractedSlides) {
    eprintln!("  {} {}", "Matched:".dimmed(), extracted.source.to_string().bright_white());
    eprintln!(
        "  {} {}",
        "Candidates:".dimmed(),
        extracted.candidate_count.to_string().bright_white()
    );
    eprintln!(
        "  {} {}\n",
        "Slides:".dimmed(),
        extracted.slides.len().to_string().bright_white()
    );
}

/// Print one slide of the terminal slideshow to stdout
pub fn print_slide(position: usize, total: usize, slide: &SlideRecord) {
    println!("{}", "─".repeat(60).dimmed());
    println!("{} {}", format!("[{}/{}]", position, total).dimmed(), slide.title.bold().bright_white());
    if !slide.description.is_empty() {
        println!("  {}", slide.description);
    }
    if let Some(image) = &slide.image_url {
        println!("  {} {}", "Image:".dimmed(), image.bright_blue());
    }
    println!("  {} {}", "Link:".dimmed(), slide.link_url.underline());
}

/// Format byte size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
