//! Display-loop state for the slideshow.
//!
//! [`Carousel`] owns the current slide index and the auto-advance deadline.
//! Every explicit transition (`show`, `advance`, `resume`) restarts the
//! timer; [`Carousel::tick`] performs the automatic advance.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use itch_slides_core::{Carousel, Direction, SlideRecord};
//!
//! let slides = vec![
//!     SlideRecord::new("One", "", None, "https://example.itch.io/one"),
//!     SlideRecord::new("Two", "", None, "https://example.itch.io/two"),
//! ];
//! let start = Instant::now();
//! let mut carousel = Carousel::new(slides, Duration::from_secs(5), start);
//!
//! carousel.advance(Direction::Previous, start);
//! assert_eq!(carousel.index(), 1);
//! assert!(carousel.tick(start + Duration::from_secs(5)));
//! assert_eq!(carousel.index(), 0);
//! ```

use std::time::{Duration, Instant};

use crate::SlideRecord;

/// Auto-advance interval used by the slideshow.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Deadline used when `now + interval` is not representable.
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// Manual navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<SlideRecord>,
    current: usize,
    interval: Duration,
    next_advance_at: Instant,
    paused: bool,
}

impl Carousel {
    pub fn new(slides: Vec<SlideRecord>, interval: Duration, now: Instant) -> Self {
        Self { slides, current: 0, interval, next_advance_at: deadline(now, interval), paused: false }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// When the next automatic advance is due.
    pub fn next_advance_at(&self) -> Instant {
        self.next_advance_at
    }

    pub fn current(&self) -> Option<&SlideRecord> {
        self.slides.get(self.current)
    }

    /// Shows slide `index`, wrapping around the end, and restarts the timer.
    pub fn show(&mut self, index: usize, now: Instant) {
        if self.slides.is_empty() {
            return;
        }
        self.current = index % self.slides.len();
        self.restart_timer(now);
    }

    /// Moves one slide in `direction` with wrap-around and restarts the timer.
    pub fn advance(&mut self, direction: Direction, now: Instant) {
        if self.slides.is_empty() {
            return;
        }
        let len = self.slides.len();
        let index = match direction {
            Direction::Next => (self.current + 1) % len,
            Direction::Previous => (self.current + len - 1) % len,
        };
        self.show(index, now);
    }

    /// Advances if the deadline has passed and the carousel is not paused.
    ///
    /// Returns whether the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused || self.slides.is_empty() || now < self.next_advance_at {
            return false;
        }
        self.advance(Direction::Next, now);
        true
    }

    /// Stops automatic advancing, e.g. while the pointer hovers a slide.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes automatic advancing with a fresh interval.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.restart_timer(now);
    }

    fn restart_timer(&mut self, now: Instant) {
        self.next_advance_at = deadline(now, self.interval);
    }
}

fn deadline(now: Instant, interval: Duration) -> Instant {
    now.checked_add(interval).or_else(|| now.checked_add(FAR_FUTURE)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(count: usize) -> Vec<SlideRecord> {
        (0..count)
            .map(|i| SlideRecord::new(format!("Game {i}"), "", None, format!("https://example.itch.io/{i}")))
            .collect()
    }

    #[test]
    fn test_starts_at_first_slide() {
        let carousel = Carousel::new(slides(3), DEFAULT_INTERVAL, Instant::now());
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current().unwrap().title, "Game 0");
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        let now = Instant::now();
        let mut carousel = Carousel::new(slides(3), DEFAULT_INTERVAL, now);

        carousel.advance(Direction::Previous, now);
        assert_eq!(carousel.index(), 2);
        carousel.advance(Direction::Next, now);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_show_wraps_index() {
        let now = Instant::now();
        let mut carousel = Carousel::new(slides(3), DEFAULT_INTERVAL, now);
        carousel.show(7, now);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_tick_waits_for_deadline() {
        let start = Instant::now();
        let mut carousel = Carousel::new(slides(2), Duration::from_secs(5), start);

        assert!(!carousel.tick(start + Duration::from_secs(4)));
        assert_eq!(carousel.index(), 0);
        assert!(carousel.tick(start + Duration::from_secs(5)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_manual_navigation_restarts_timer() {
        let start = Instant::now();
        let mut carousel = Carousel::new(slides(3), Duration::from_secs(5), start);

        let later = start + Duration::from_secs(4);
        carousel.advance(Direction::Next, later);
        assert_eq!(carousel.next_advance_at(), later + Duration::from_secs(5));
        assert!(!carousel.tick(start + Duration::from_secs(6)));
    }

    #[test]
    fn test_pause_blocks_tick() {
        let start = Instant::now();
        let mut carousel = Carousel::new(slides(2), Duration::from_secs(1), start);

        carousel.pause();
        assert!(carousel.is_paused());
        assert!(!carousel.tick(start + Duration::from_secs(10)));

        let resumed = start + Duration::from_secs(10);
        carousel.resume(resumed);
        assert!(!carousel.tick(resumed));
        assert!(carousel.tick(resumed + Duration::from_secs(1)));
    }

    #[test]
    fn test_huge_interval_never_advances() {
        let start = Instant::now();
        let mut carousel = Carousel::new(slides(2), Duration::from_secs(u64::MAX), start);

        assert!(carousel.next_advance_at() > start);
        assert!(!carousel.tick(start + Duration::from_secs(60 * 60 * 24)));

        carousel.advance(Direction::Next, start);
        assert_eq!(carousel.index(), 1);
        assert!(carousel.next_advance_at() > start);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let now = Instant::now();
        let mut carousel = Carousel::new(Vec::new(), DEFAULT_INTERVAL, now);

        carousel.advance(Direction::Next, now);
        carousel.show(3, now);
        assert!(!carousel.tick(now + DEFAULT_INTERVAL));
        assert!(carousel.current().is_none());
        assert!(carousel.is_empty());
    }
}
