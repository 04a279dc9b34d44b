use leptos::prelude::*;

use crate::api;
use crate::components::{StatGridSkeleton, TimeStatsGrid};

/// Time tracking overview with the summary cards.
#[component]
pub fn TimeDashboard() -> impl IntoView {
    let summary = LocalResource::new(|| api::fetch_summary());

    view! {
        <div class="time-dashboard">
            <h1>"Time Tracking"</h1>
            <Suspense fallback=move || view! { <StatGridSkeleton/> }>
                {move || {
                    summary.read().as_deref().map(|result| match result {
                        Ok(stats) => view! {
                            <TimeStatsGrid stats=stats.clone()/>
                        }.into_any(),
                        Err(err) => view! {
                            <p class="error">{"Failed to load summary: "} {err.to_string()}</p>
                        }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
