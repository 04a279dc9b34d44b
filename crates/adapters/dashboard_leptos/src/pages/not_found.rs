use leptos::prelude::*;
use leptos_router::hooks::use_location;
use timedash_domain::stats::REPORTS_PATH;

/// Shown for any path this dashboard does not render itself.
///
/// The reports view lives outside this app, so following the reports card
/// here lands on this page with a pointer back.
#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    let message = move || {
        let path = pathname.get();
        if path == REPORTS_PATH {
            "Reports are served by the reporting view, not this dashboard.".to_string()
        } else {
            format!("Nothing to show at {path}.")
        }
    };

    view! {
        <div class="not-found">
            <h1>"Not found"</h1>
            <p>{message}</p>
            <p>
                <a href="/dashboard/time">"Back to the time dashboard"</a>
            </p>
        </div>
    }
}
