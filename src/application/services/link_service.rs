//! Link creation, lookup, deletion and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{
    generate_code, is_reserved, is_valid_format, validate_custom_code,
};
use crate::utils::url_validator::validate_target_url;
use serde_json::json;
use tracing::{debug, info};

/// Number of random candidates tried before giving up on code generation.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for managing short links.
///
/// Holds the only handle to the link store, injected at construction so tests
/// and tools can substitute their own repository.
#[derive(Clone)]
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute URL with an explicit scheme
    /// - `custom_code` - Optional caller-chosen code; an empty string counts as absent
    ///
    /// # Code Selection
    ///
    /// - A custom code is validated and checked for existence once
    /// - Otherwise random codes are drawn until an unused one is found, up to
    ///   [`MAX_GENERATION_ATTEMPTS`] times
    ///
    /// The existence checks are advisory. Two concurrent creators can both pass
    /// them; the store's primary key rejects the second insert, which surfaces
    /// here as [`AppError::Conflict`].
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for a malformed URL or custom code
    /// - [`AppError::Conflict`] if the code is already taken
    /// - [`AppError::GenerationExhausted`] if every generated code collided
    /// - [`AppError::Internal`] on store errors
    pub async fn create_link(
        &self,
        target_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Link, AppError> {
        let target_url = validate_target_url(target_url).map_err(|e| {
            AppError::bad_request(
                "Invalid URL format. Must include protocol (http:// or https://)",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let code = match custom_code.filter(|c| !c.is_empty()) {
            Some(custom) => {
                validate_custom_code(custom)?;

                if self.link_repository.exists(custom).await? {
                    return Err(AppError::conflict(
                        "Short code already exists",
                        json!({ "code": custom }),
                    ));
                }

                custom.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        let link = self
            .link_repository
            .create(NewLink { code, target_url })
            .await?;

        info!(code = %link.code, target_url = %link.target_url, "Link created");

        Ok(link)
    }

    /// Returns every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Retrieves a link by its exact code.
    ///
    /// The code is not format-checked; an impossible code simply isn't found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(AppError::link_not_found)
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing was deleted.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(AppError::link_not_found());
        }

        info!(code, "Link deleted");
        Ok(())
    }

    /// Resolves a short code to its target and records the click.
    ///
    /// A code with an invalid format is reported exactly like a missing one.
    /// Lookup and increment are separate store operations; if the link is
    /// deleted in between, the click is dropped and the redirect still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for invalid or unknown codes.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve_redirect(&self, code: &str) -> Result<String, AppError> {
        if !is_valid_format(code) {
            return Err(AppError::link_not_found());
        }

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(AppError::link_not_found)?;

        if self.link_repository.record_click(code).await? {
            debug!(code, "Click recorded");
        } else {
            debug!(code, "Link removed before click could be recorded");
        }

        Ok(link.target_url)
    }

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Draws random codes until one is unused.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if !is_reserved(&code) && !self.link_repository.exists(&code).await? {
                return Ok(code);
            }

            debug!(attempt, %code, "Generated code collided");
        }

        Err(AppError::GenerationExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
