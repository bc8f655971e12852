//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::view::LinkView;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the link statistics page.
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub link: LinkView,
}

/// Shown when the requested code does not exist.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Unknown codes render `templates/not_found.html` with status 404. So do
/// codes that don't decode as UTF-8; the page then omits the code.
pub async fn stats_handler(
    code: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Ok(Path(code)) = code else {
        return Ok((
            StatusCode::NOT_FOUND,
            NotFoundTemplate {
                code: String::new(),
            },
        )
            .into_response());
    };

    match state.link_service.get_link(&code).await {
        Ok(link) => Ok(StatsTemplate {
            link: LinkView::new(&state, link),
        }
        .into_response()),
        Err(AppError::NotFound { .. }) => {
            Ok((StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response())
        }
        Err(e) => Err(e),
    }
}
