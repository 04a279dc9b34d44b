//! Active entry — the work session the timer is currently tracking.
//!
//! The dashboard only cares whether an active entry exists. The fields are
//! carried so that the backend can hand over the entry as it knows it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EntryId;

/// UTC instant at which an entry started.
pub type Timestamp = DateTime<Utc>;

/// A running (not yet stopped) time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveEntry {
    pub id: EntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub started_at: Timestamp,
}

impl ActiveEntry {
    /// Create a builder for constructing an [`ActiveEntry`].
    #[must_use]
    pub fn builder() -> ActiveEntryBuilder {
        ActiveEntryBuilder::default()
    }
}

/// Step-by-step builder for [`ActiveEntry`].
#[derive(Debug, Default)]
pub struct ActiveEntryBuilder {
    id: Option<EntryId>,
    description: Option<String>,
    started_at: Option<Timestamp>,
}

impl ActiveEntryBuilder {
    #[must_use]
    pub fn id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn started_at(mut self, started_at: Timestamp) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Consume the builder and return an [`ActiveEntry`].
    ///
    /// Missing fields default to a fresh id and the current time.
    #[must_use]
    pub fn build(self) -> ActiveEntry {
        ActiveEntry {
            id: self.id.unwrap_or_default(),
            description: self.description,
            started_at: self.started_at.unwrap_or_else(Utc::now),
        }
    }
}
