//! Cross-origin access for the JSON API.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Creates the CORS layer for `/api` routes.
///
/// `origins` is `*` (any origin) or a comma-separated list of exact origins,
/// e.g. `https://app.example.com,http://localhost:3000`. Entries that are not
/// valid header values are skipped with a warning.
pub fn layer(origins: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.trim() == "*" {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    fn app(origins: &str) -> Router {
        Router::new()
            .route("/links", get(|| async { "ok" }))
            .layer(layer(origins))
    }

    async fn allow_origin_for(origins: &str, request_origin: &str) -> Option<String> {
        let response = app(origins)
            .oneshot(
                Request::builder()
                    .uri("/links")
                    .header(header::ORIGIN, request_origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let allowed = allow_origin_for("*", "https://anywhere.example").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let allowed = allow_origin_for(
            "https://app.example.com, http://localhost:3000",
            "http://localhost:3000",
        )
        .await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));
    }

    #[tokio::test]
    async fn test_unlisted_origin_is_not_allowed() {
        let allowed = allow_origin_for("https://app.example.com", "https://evil.example").await;
        assert!(allowed.is_none());
    }
}
