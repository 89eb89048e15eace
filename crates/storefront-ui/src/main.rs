//! WASM entry point for the Leptos CSR app
//!
//! Loads the site configuration embedded in the host page, installs the
//! console tracing subscriber and mounts the `App` component to the body.

use leptos::prelude::*;
use storefront_ui::App;
use storefront_ui::config::SiteConfig;
use storefront_ui::logging;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    if let Err(e) = logging::init(&config.log_filter) {
        web_sys::console::error_1(&e.to_string().into());
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring invalid site configuration, using defaults");
    }

    mount_to_body(move || {
        view! {
            <App config=config />
        }
    });
}
