//! HTTP service that turns itch.io creator pages into slide data.
//!
//! `GET /api/slides?url=<page>` fetches the page, extracts slides with the
//! shared [`itch_slides_core::Extractor`], and returns them as a JSON array.
//! Any other path falls through to the static file directory.

pub mod app;
pub mod config;
pub mod routes;
pub mod state;

pub use app::build_app;
pub use config::Config;
pub use state::AppState;
