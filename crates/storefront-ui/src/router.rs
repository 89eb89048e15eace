//! Router configuration for the storefront
//!
//! The routing collaborator: maps the current path to a page component.
//! Anything without a route renders the not-found page.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{Home, NotFoundPage};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
}

/// Main router component; the active route renders into the app shell
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| {
                tracing::debug!("No route matched, rendering not-found page");
                view! { <NotFoundPage /> }
            }>
                <Route path=StaticSegment("") view=Home />
            </Routes>
        </Router>
    }
}
