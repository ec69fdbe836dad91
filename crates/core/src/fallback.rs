//! Recovery policies for failed fetches and extractions.
//!
//! Each call site decides what happens when no slides can be produced. The
//! embedded slideshow substitutes [`SampleSlides`]; the generator and the
//! server use [`NoFallback`] and report the error instead.

use crate::fetch::DEFAULT_CREATOR_URL;
use crate::extract::PLACEHOLDER_IMAGE;
use crate::{ErrorKind, Result, SlideRecord, SlidesError};

/// Supplies substitute slides when fetching or extraction fails.
pub trait FallbackProvider {
    /// Returns replacement slides for `error`, or `None` to propagate it.
    fn fallback(&self, error: &SlidesError) -> Option<Vec<SlideRecord>>;
}

/// Never substitutes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FallbackProvider for NoFallback {
    fn fallback(&self, _error: &SlidesError) -> Option<Vec<SlideRecord>> {
        None
    }
}

/// Static sample slides, used for fetch and extraction failures only.
///
/// Configuration errors still propagate so a broken selector file is not
/// hidden behind sample data.
#[derive(Debug, Clone)]
pub struct SampleSlides {
    slides: Vec<SlideRecord>,
}

impl SampleSlides {
    pub fn new(slides: Vec<SlideRecord>) -> Self {
        Self { slides }
    }
}

impl Default for SampleSlides {
    fn default() -> Self {
        Self::new(vec![
            SlideRecord::new(
                "Sample Game 1",
                "A sample game fallback",
                Some(PLACEHOLDER_IMAGE.to_string()),
                DEFAULT_CREATOR_URL,
            ),
            SlideRecord::new(
                "Sample Game 2",
                "Second sample",
                Some(PLACEHOLDER_IMAGE.to_string()),
                DEFAULT_CREATOR_URL,
            ),
        ])
    }
}

impl FallbackProvider for SampleSlides {
    fn fallback(&self, error: &SlidesError) -> Option<Vec<SlideRecord>> {
        match error.kind() {
            ErrorKind::Fetch | ErrorKind::Extraction => Some(self.slides.clone()),
            ErrorKind::Other => None,
        }
    }
}

impl<F> FallbackProvider for F
where
    F: Fn(&SlidesError) -> Option<Vec<SlideRecord>>,
{
    fn fallback(&self, error: &SlidesError) -> Option<Vec<SlideRecord>> {
        self(error)
    }
}

/// Applies `provider` to a failed result.
///
/// Returns the slides and whether they came from the provider.
pub fn slides_or_fallback(
    result: Result<Vec<SlideRecord>>, provider: &dyn FallbackProvider,
) -> Result<(Vec<SlideRecord>, bool)> {
    match result {
        Ok(slides) => Ok((slides, false)),
        Err(error) => match provider.fallback(&error) {
            Some(slides) => Ok((slides, true)),
            None => Err(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extraction_error() -> SlidesError {
        SlidesError::Extraction("no slides found".to_string())
    }

    #[test]
    fn test_no_fallback_propagates() {
        let result = slides_or_fallback(Err(extraction_error()), &NoFallback);
        assert!(matches!(result, Err(SlidesError::Extraction(_))));
    }

    #[test]
    fn test_sample_slides_substitute() {
        let (slides, substituted) = slides_or_fallback(Err(extraction_error()), &SampleSlides::default()).unwrap();
        assert!(substituted);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "Sample Game 1");
        assert_eq!(slides[0].image_url.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert_eq!(slides[1].link_url, DEFAULT_CREATOR_URL);
    }

    #[test]
    fn test_sample_slides_cover_fetch_errors() {
        let err = SlidesError::HttpStatus { status: 503 };
        assert!(SampleSlides::default().fallback(&err).is_some());
    }

    #[test]
    fn test_sample_slides_keep_config_errors() {
        let err = SlidesError::Config("bad selector file".to_string());
        let result = slides_or_fallback(Err(err), &SampleSlides::default());
        assert!(matches!(result, Err(SlidesError::Config(_))));
    }

    #[test]
    fn test_success_passes_through() {
        let slide = SlideRecord::new("Real", "", None, "https://example.itch.io/real");
        let (slides, substituted) = slides_or_fallback(Ok(vec![slide.clone()]), &SampleSlides::default()).unwrap();
        assert!(!substituted);
        assert_eq!(slides, vec![slide]);
    }

    #[test]
    fn test_closure_provider() {
        let provider = |_: &SlidesError| Some(Vec::<SlideRecord>::new());
        let (slides, substituted) = slides_or_fallback(Err(extraction_error()), &provider).unwrap();
        assert!(substituted);
        assert!(slides.is_empty());
    }
}
