//! Dashboard summary statistics and their projection into display rows.
//!
//! [`TimeStats`] is the already-computed summary handed over by the
//! time-tracking backend. [`project`] turns it into the four cards shown at
//! the top of the time dashboard. Projection is pure and total: it never
//! fails and identical input always yields identical rows.

pub mod format;
pub mod row;

use serde::{Deserialize, Serialize};

pub use format::{format_hours, pluralize};
pub use row::{ColorToken, RowAction, StatIcon, StatRow};

use crate::entry::ActiveEntry;
use crate::error::{TimeDashError, ValidationError};

/// Route of the reports view the last card links to.
pub const REPORTS_PATH: &str = "/dashboard/time/reports";

/// Delay between the entrance animations of two consecutive cards.
pub const ENTRANCE_STAGGER_MS: u64 = 100;

/// Already-computed summary for the time dashboard.
///
/// Every field defaults to zero / absent, so `{}` deserializes to an idle
/// summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeStats {
    pub total_hours_today: f64,
    pub total_entries: u32,
    pub active_entry: Option<ActiveEntry>,
    pub weekly_hours: f64,
}

impl TimeStats {
    /// Whether a timer is currently running.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active_entry.is_some()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TimeDashError::Validation`] when an hour amount is negative
    /// or not a finite number.
    pub fn validate(&self) -> Result<(), TimeDashError> {
        check_hours("total_hours_today", self.total_hours_today)?;
        check_hours("weekly_hours", self.weekly_hours)?;
        Ok(())
    }
}

fn check_hours(field: &'static str, hours: f64) -> Result<(), ValidationError> {
    if !hours.is_finite() {
        return Err(ValidationError::NonFiniteHours { field });
    }
    if hours < 0.0 {
        return Err(ValidationError::NegativeHours { field });
    }
    Ok(())
}

/// Project a summary into the four dashboard rows.
///
/// Order is fixed: today, status, this week, reports. Only the last row is
/// an action and it always links to [`REPORTS_PATH`].
#[must_use]
pub fn project(stats: &TimeStats) -> [StatRow; 4] {
    let (status, status_detail, status_color) = if stats.is_tracking() {
        ("Running", "In progress", ColorToken::Green)
    } else {
        ("Stopped", "Not tracking", ColorToken::Gray)
    };

    [
        StatRow {
            label: "Today".to_string(),
            value: format_hours(stats.total_hours_today, 1),
            sub_label: pluralize(stats.total_entries, "session", "sessions"),
            icon: StatIcon::Clock,
            color: ColorToken::Blue,
            action: RowAction::Static,
        },
        StatRow {
            label: "Status".to_string(),
            value: status.to_string(),
            sub_label: status_detail.to_string(),
            icon: StatIcon::Activity,
            color: status_color,
            action: RowAction::Static,
        },
        StatRow {
            label: "This Week".to_string(),
            value: format_hours(stats.weekly_hours, 0),
            sub_label: "Total hours".to_string(),
            icon: StatIcon::Calendar,
            color: ColorToken::Purple,
            action: RowAction::Static,
        },
        StatRow {
            label: "Reports".to_string(),
            value: "View".to_string(),
            sub_label: "Analytics".to_string(),
            icon: StatIcon::BarChart,
            color: ColorToken::Orange,
            action: RowAction::Navigate {
                href: REPORTS_PATH.to_string(),
            },
        },
    ]
}

/// Entrance animation delay of the card at `index`.
#[must_use]
pub fn entrance_delay_ms(index: usize) -> u64 {
    u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(ENTRANCE_STAGGER_MS)
}
