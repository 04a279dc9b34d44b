//! Stat row — one card of the dashboard summary.

use serde::{Deserialize, Serialize};

/// Icon shown in the top corner of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatIcon {
    Clock,
    Activity,
    Calendar,
    BarChart,
}

impl StatIcon {
    /// Token used in CSS class names and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Activity => "activity",
            Self::Calendar => "calendar",
            Self::BarChart => "bar-chart",
        }
    }
}

impl std::fmt::Display for StatIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accent color of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Blue,
    Green,
    Gray,
    Purple,
    Orange,
}

impl ColorToken {
    /// Token used in CSS class names and JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Gray => "gray",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens when a card is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowAction {
    /// Informational card, nothing to activate.
    Static,
    /// The whole card is a link to `href`.
    Navigate { href: String },
}

/// A projected display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRow {
    pub label: String,
    pub value: String,
    pub sub_label: String,
    pub icon: StatIcon,
    pub color: ColorToken,
    pub action: RowAction,
}

impl StatRow {
    /// Whether the card renders as a navigable element.
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self.action, RowAction::Navigate { .. })
    }

    /// Navigation target, if the card is an action.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        match &self.action {
            RowAction::Navigate { href } => Some(href),
            RowAction::Static => None,
        }
    }
}
