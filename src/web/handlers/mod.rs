//! HTML template rendering handlers for the web dashboard.

mod dashboard;
mod stats;
mod view;

pub use dashboard::dashboard_handler;
pub use stats::stats_handler;
