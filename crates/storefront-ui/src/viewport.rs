//! Viewport width signal
//!
//! The app shell installs one window `resize` listener for the session and
//! shares the current width through context. Grids read it to report their
//! logical column count; the actual reflow is done by CSS media queries.

use leptos::prelude::*;

/// Width assumed when no browser window is available
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Current viewport width in CSS pixels
#[derive(Debug, Clone, Copy)]
pub struct ViewportWidth(pub ReadSignal<f64>);

#[cfg(target_arch = "wasm32")]
fn current_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .filter(|width| width.is_finite() && *width > 0.0)
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}

#[cfg(not(target_arch = "wasm32"))]
const fn current_width() -> f64 {
    DEFAULT_VIEWPORT_WIDTH
}

/// Creates the viewport signal and provides it to descendants
pub fn provide_viewport() -> ViewportWidth {
    let (width, set_width) = signal(current_width());

    #[cfg(target_arch = "wasm32")]
    {
        // Lives for the app session; the shell is never unmounted.
        let _listener = window_event_listener(leptos::ev::resize, move |_| {
            set_width.set(current_width());
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = set_width;

    let viewport = ViewportWidth(width);
    provide_context(viewport);
    viewport
}

/// Viewport width from context, or the default width outside an app shell
pub fn use_viewport_width() -> Signal<f64> {
    let viewport = use_context::<ViewportWidth>();
    Signal::derive(move || viewport.map_or(DEFAULT_VIEWPORT_WIDTH, |ViewportWidth(width)| width.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_width_is_default() {
        assert!((current_width() - DEFAULT_VIEWPORT_WIDTH).abs() < f64::EPSILON);
    }
}
