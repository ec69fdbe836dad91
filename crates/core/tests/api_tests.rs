//! Library API integration tests
use itch_slides_core::*;

const CREATOR_URL: &str = "https://ducky-dev.itch.io";

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

#[test]
fn test_creator_page_slides() {
    let html = read_fixture("creator_page.html");
    let extracted = Extractor::new(&ExtractConfig::default()).unwrap().extract(&html, CREATOR_URL).unwrap();

    assert_eq!(extracted.source, MatchSource::Selector(".game_cell".to_string()));
    assert_eq!(extracted.candidate_count, 4);

    let titles: Vec<_> = extracted.slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Ten Deadly Games - Jamsepticeye",
            "Exiled",
            "Kyle is Famous: Complete Edition",
            "Kyle is Famous"
        ]
    );

    let exiled = &extracted.slides[1];
    assert_eq!(exiled.link_url, "https://ducky-dev.itch.io/exiled");
    assert_eq!(exiled.description, "A compact puzzle-thriller full of monsters and mystery.");
    assert!(exiled.image_url.as_deref().unwrap().starts_with("https://img.itch.zone/"));
}

#[test]
fn test_creator_page_relative_urls() {
    let html = read_fixture("creator_page.html");
    let slides = extract_with_limit(&html, CREATOR_URL, 12).unwrap();

    assert_eq!(slides[2].link_url, "https://ducky-dev.itch.io/kyle-is-famous-ce");
    assert!(slides[2].image_url.as_deref().unwrap().contains("img.itch.zone"));
    assert_eq!(slides[3].link_url, "https://ducky-dev.itch.io/kyle-is-famous");
    assert_eq!(slides[3].image_url.as_deref(), Some("https://ducky-dev.itch.io/thumbs/kyle.png"));
}

#[test]
fn test_project_cells_win_over_column() {
    let html = read_fixture("project_cells.html");
    let extracted =
        Extractor::new(&ExtractConfig::default()).unwrap().extract(&html, "https://legacy.itch.io/").unwrap();

    assert_eq!(extracted.source, MatchSource::Selector(".project_cell".to_string()));
    assert_eq!(extracted.slides.len(), 2);
    assert_eq!(extracted.slides[0].title, "First Project");
    assert_eq!(extracted.slides[0].description, "The first one");
    assert_eq!(extracted.slides[0].image_url.as_deref(), Some("https://legacy.itch.io/img/first.png"));
    assert_eq!(extracted.slides[1].title, "Second Project");
    assert_eq!(extracted.slides[1].image_url, None);
}

#[test]
fn test_links_only_fallback() {
    let html = read_fixture("links_only.html");
    let extracted = Extractor::new(&ExtractConfig::default()).unwrap().extract(&html, "https://example.com/").unwrap();

    assert_eq!(extracted.source, MatchSource::LinkFallback);
    let titles: Vec<_> = extracted.slides.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Space Game", "Puzzle"]);
}

#[test]
fn test_empty_page_fails() {
    let html = read_fixture("empty_page.html");
    let err = extract_with_limit(&html, "https://example.com/", 12).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Extraction);
}

#[test]
fn test_sample_fallback_for_empty_page() {
    let html = read_fixture("empty_page.html");
    let result = extract_with_limit(&html, "https://example.com/", 12);
    let (slides, substituted) = slides_or_fallback(result, &SampleSlides::default()).unwrap();

    assert!(substituted);
    assert_eq!(slides[0].title, "Sample Game 1");
}

#[test]
fn test_chain_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("selectors.txt");
    std::fs::write(&path, "# only the project layout\nselector: .project_cell\n").unwrap();

    let chain = ChainLoader::new().explicit(&path).load().unwrap();
    let config = ExtractConfig::builder().chain(chain).build();

    let html = read_fixture("creator_page.html");
    let extracted = Extractor::new(&config).unwrap().extract(&html, CREATOR_URL).unwrap();
    assert_eq!(extracted.source, MatchSource::LinkFallback);

    let slides = extract_slides(&read_fixture("project_cells.html"), "https://legacy.itch.io/", &config).unwrap();
    assert_eq!(slides.len(), 2);
}

#[test]
fn test_generated_file_loads_back() {
    let html = read_fixture("creator_page.html");
    let slides = extract_with_limit(&html, CREATOR_URL, 24).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slides.json");
    std::fs::write(&path, slides_to_json(&slides, &JsonConfig::default()).unwrap()).unwrap();

    assert_eq!(load_slides_json(&path).unwrap(), slides);
}

#[test]
fn test_carousel_over_extracted_slides() {
    use std::time::Instant;

    let html = read_fixture("creator_page.html");
    let slides = extract_with_limit(&html, CREATOR_URL, 12).unwrap();
    let now = Instant::now();
    let mut carousel = Carousel::new(slides, DEFAULT_INTERVAL, now);

    carousel.advance(Direction::Previous, now);
    assert_eq!(carousel.current().unwrap().title, "Kyle is Famous");
}
