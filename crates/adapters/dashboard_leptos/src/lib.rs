use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;

use pages::{NotFound, TimeDashboard};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=TimeDashboard/>
                    <Route path=path!("/dashboard/time") view=TimeDashboard/>
                </Routes>
            </main>
        </Router>
    }
}
