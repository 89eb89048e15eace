//! Main application component
//!
//! `AppShell` is the full-viewport container. It provides the session-long
//! context values (theme, navigator, viewport width) and renders whatever
//! route is active as its children. `App` plugs the router into the shell.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::navigation::NavigatorHandle;
use crate::router::AppRouter;
use crate::theme::Theme;
use crate::viewport::provide_viewport;

/// Full-viewport page container
///
/// Holds no state and does no routing; `children` is the single
/// "render active route" extension point.
#[component]
pub fn AppShell(
    #[prop(optional)] theme: Theme,
    #[prop(optional)] navigator: NavigatorHandle,
    children: Children,
) -> impl IntoView {
    provide_context(theme);
    provide_context(navigator);
    provide_viewport();

    view! {
        <div class="app-shell" style="min-height:100vh;display:flex;flex-direction:column">
            {children()}
        </div>
    }
}

/// Main application component with router integration
#[component]
pub fn App(#[prop(optional)] config: SiteConfig) -> impl IntoView {
    tracing::info!("Mounting storefront shell");

    view! {
        <AppShell theme=config.theme>
            <AppRouter />
        </AppShell>
    }
}
