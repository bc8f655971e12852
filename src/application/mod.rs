//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations the HTTP
//! handlers, the web dashboard and the admin CLI call.
//!
//! - [`services::link_service::LinkService`] - Create, list, inspect, delete and resolve links

pub mod services;
