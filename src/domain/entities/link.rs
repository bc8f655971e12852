//! Link entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to its target URL, with click accounting.
///
/// `code` and `target_url` never change after creation. `clicks` and
/// `last_clicked` are only touched by the redirect path.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub clicks: i32,
    pub created_at: DateTime<Utc>,
    pub last_clicked: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        target_url: String,
        clicks: i32,
        created_at: DateTime<Utc>,
        last_clicked: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            target_url,
            clicks,
            created_at,
            last_clicked,
        }
    }

    /// Returns true if the link has been followed at least once.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for creating a new link.
///
/// Counters are not part of the input: a fresh link always starts with
/// zero clicks and no `last_clicked`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
