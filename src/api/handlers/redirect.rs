//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` set to the target, empty body
/// - **404 Not Found**: unknown code or a code with an invalid format
///
/// Both 404 cases return the same body, so callers cannot probe the code format.
pub async fn redirect_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(code) = code?;
    let target_url = state.link_service.resolve_redirect(&code).await?;

    debug!(%code, %target_url, "Redirecting");

    let location = location_header(&target_url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` header value.
///
/// Targets are stored as submitted; a target with non-ASCII characters is sent
/// in its percent-encoded serialization instead.
fn location_header(target_url: &str) -> Result<HeaderValue, AppError> {
    if target_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(target_url)
    {
        return Ok(value);
    }

    Url::parse(target_url)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored target URL cannot be used as a redirect",
                json!({ "target_url": target_url }),
            )
        })
}
