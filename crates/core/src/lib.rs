pub mod carousel;
pub mod chain;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod formatters;
pub mod parse;
pub mod slide;

pub use carousel::{Carousel, DEFAULT_INTERVAL, Direction};
pub use chain::{ChainLoader, ChainParser, CompiledChain, Directive, SelectorChain};
pub use error::{ErrorKind, Result, SlidesError};
pub use extract::{
    DEFAULT_MAX_SLIDES, ExtractConfig, ExtractConfigBuilder, ExtractedSlides, Extractor, MatchSource,
    PLACEHOLDER_IMAGE, extract_slides, extract_with_limit,
};
pub use fallback::{FallbackProvider, NoFallback, SampleSlides, slides_or_fallback};
pub use fetch::{DEFAULT_CREATOR_URL, FetchConfig, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_slides, fetch_url};
pub use formatters::{
    JsonConfig, OutputFormat, load_slides_json, parse_slides_json, render, slides_to_json, slides_to_toml,
};
pub use parse::Document;
pub use slide::{SlideRecord, UNTITLED};
