use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use itch_slides_core::fetch_slides;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SlidesQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvalidUrlResponse {
    pub error: String,
}

/// Body of a failed extraction; `fallback` tells clients to show their own slides.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub fallback: bool,
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// True when `url` is an absolute URL whose host is `domain` or one of its subdomains.
pub fn is_allowed_host(url: &str, domain: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    match parsed.host_str() {
        Some(host) => {
            let host = host.to_ascii_lowercase();
            let domain = domain.to_ascii_lowercase();
            host == domain || host.ends_with(&format!(".{domain}"))
        }
        None => false,
    }
}

/// GET /api/slides?url=<creator page>
pub async fn slides_handler(State(state): State<AppState>, Query(query): Query<SlidesQuery>) -> Response {
    let url = query
        .url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| state.default_url.clone());

    if !is_allowed_host(&url, &state.allowed_domain) {
        tracing::warn!(url = %url, domain = %state.allowed_domain, "Rejected slides request");
        let body = InvalidUrlResponse { error: format!("Invalid {} URL", state.allowed_domain) };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    tracing::debug!(url = %url, "Fetching slides");

    match fetch_slides(&url, &state.fetch, &state.extractor).await {
        Ok(extracted) => {
            tracing::info!(
                url = %url,
                source = %extracted.source,
                candidates = extracted.candidate_count,
                slides = extracted.slides.len(),
                "Extracted slides"
            );
            Json(extracted.slides).into_response()
        }
        Err(err) => {
            tracing::error!(url = %url, error = %err, "Failed to fetch slides");
            let body = ErrorResponse {
                error: "Failed to fetch slides",
                message: err.to_string(),
                fallback: true,
                kind: err.kind().as_str(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_host_exact_and_subdomain() {
        assert!(is_allowed_host("https://itch.io/games", "itch.io"));
        assert!(is_allowed_host("https://ducky-dev.itch.io", "itch.io"));
        assert!(is_allowed_host("https://Ducky-Dev.ITCH.io/", "itch.io"));
    }

    #[test]
    fn test_allowed_host_rejects_lookalikes() {
        assert!(!is_allowed_host("https://notitch.io", "itch.io"));
        assert!(!is_allowed_host("https://itch.io.evil.com", "itch.io"));
        assert!(!is_allowed_host("https://example.com/?u=itch.io", "itch.io"));
    }

    #[test]
    fn test_allowed_host_rejects_unparsable() {
        assert!(!is_allowed_host("ducky-dev.itch.io", "itch.io"));
        assert!(!is_allowed_host("", "itch.io"));
    }
}
