//! Placeholder grid shown while the summary loads.

use leptos::prelude::*;
use timedash_domain::stats::entrance_delay_ms;

/// Number of placeholder cards, one per projected row.
const PLACEHOLDER_CARDS: usize = 4;

/// Grey card outlines with the same stagger as the real cards.
#[component]
pub fn StatGridSkeleton() -> impl IntoView {
    let cards = (0..PLACEHOLDER_CARDS)
        .map(|index| {
            let style = format!("animation-delay: {}ms", entrance_delay_ms(index));
            view! {
                <div class="stat-card stat-card--skeleton" style=style aria-hidden="true">
                    <div class="stat-card__header"></div>
                    <div class="stat-card__value"></div>
                    <div class="stat-card__sub-label"></div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="stat-grid" aria-busy="true">
            {cards}
        </div>
    }
}
