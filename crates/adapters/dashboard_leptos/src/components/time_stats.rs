//! Summary grid for the time dashboard.

use leptos::prelude::*;
use leptos_router::components::A;
use timedash_domain::stats::{StatRow, TimeStats, project};

use super::StatCard;

/// How one projected row is placed in the grid.
#[derive(Debug, PartialEq)]
enum GridCard {
    Static(StatRow),
    Link { href: String, row: StatRow },
}

fn grid_cards(stats: &TimeStats) -> Vec<GridCard> {
    project(stats)
        .into_iter()
        .map(|row| match row.href().map(str::to_owned) {
            Some(href) => GridCard::Link { href, row },
            None => GridCard::Static(row),
        })
        .collect()
}

/// The four summary cards. Action rows are wrapped in a router link.
#[component]
pub fn TimeStatsGrid(
    /// Already-computed summary to display.
    stats: TimeStats,
) -> impl IntoView {
    let cards = grid_cards(&stats)
        .into_iter()
        .enumerate()
        .map(|(index, card)| match card {
            GridCard::Link { href, row } => view! {
                <A href=href>
                    <StatCard row index/>
                </A>
            }
            .into_any(),
            GridCard::Static(row) => view! { <StatCard row index/> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="stat-grid">
            {cards}
        </div>
    }
}
