//! Display-ready link data for templates.

use chrono::{DateTime, Utc};

use crate::domain::entities::Link;
use crate::state::AppState;

/// A link with every field pre-formatted for rendering.
pub struct LinkView {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub clicks: i32,
    pub created_at: String,
    pub last_clicked: String,
    pub was_clicked: bool,
}

impl LinkView {
    pub fn new(state: &AppState, link: Link) -> Self {
        Self {
            was_clicked: link.was_clicked(),
            short_url: state.short_url(&link.code),
            code: link.code,
            target_url: link.target_url,
            clicks: link.clicks,
            created_at: format_timestamp(link.created_at),
            last_clicked: link
                .last_clicked
                .map(format_timestamp)
                .unwrap_or_else(|| "Never".to_string()),
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
