use std::path::PathBuf;
use std::time::Duration;

use axum::{Router, http::Method, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::routes::{health_handler, slides_handler};
use crate::state::AppState;

/// Build the Axum application router
///
/// API routes take precedence; every other path is served from `static_dir`
/// when one is given.
pub fn build_app(state: AppState, static_dir: Option<PathBuf>, timeout: Duration) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]).allow_headers(Any);

    let mut router = Router::new()
        .route("/api/slides", get(slides_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .layer(TimeoutLayer::new(timeout))
            .layer(CompressionLayer::new()),
    )
}
