//! Shareable pricing link entity.

use chrono::{DateTime, Utc};

/// An opaque link pointing at one pricing package, with a view counter.
///
/// The counter starts at zero and only ever grows, by one per successful
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareableLink {
    pub id: String,
    pub package_id: String,
    pub created_at: DateTime<Utc>,
    pub view_count: u64,
}

impl ShareableLink {
    /// Creates a fresh link with no views.
    pub fn new(id: String, package_id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            package_id,
            created_at,
            view_count: 0,
        }
    }

    /// Counts one view.
    pub fn record_view(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }
}

/// Input data for registering a new link.
#[derive(Debug, Clone)]
pub struct NewShareableLink {
    pub id: String,
    pub package_id: String,
}
