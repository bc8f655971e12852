//! Web dashboard layer for browser-based UI.
//!
//! Server-rendered pages built with Askama templates. The pages read through
//! the same [`crate::application::services::LinkService`] as the API; the
//! create and delete buttons call the JSON API from the browser.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;
