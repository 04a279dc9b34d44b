//! Stat card component for displaying one projected summary row.

use leptos::prelude::*;
use timedash_domain::stats::{StatRow, entrance_delay_ms};

/// A card showing a row's label, icon, value and sub-label.
///
/// The accent color comes from the row's color token; the entrance animation
/// is delayed according to the card's position in the grid.
#[component]
pub fn StatCard(
    /// The projected row to display.
    row: StatRow,
    /// Position of the card in the grid.
    index: usize,
) -> impl IntoView {
    let class = format!("stat-card stat-card--{}", row.color);
    let style = format!("animation-delay: {}ms", entrance_delay_ms(index));
    let icon_class = format!("stat-card__icon icon-{}", row.icon);

    view! {
        <div class=class style=style>
            <div class="stat-card__header">
                <span class="stat-card__label">{row.label}</span>
                <span class=icon_class aria-hidden="true"></span>
            </div>
            <div class="stat-card__value">{row.value}</div>
            <div class="stat-card__sub-label">{row.sub_label}</div>
        </div>
    }
}
