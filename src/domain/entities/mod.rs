//! Core domain entities.
//!
//! - [`Link`] - A stored short code with its target and click counters
//! - [`NewLink`] - Input for inserting a new link

pub mod link;

pub use link::{Link, NewLink};
