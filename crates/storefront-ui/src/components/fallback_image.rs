//! Image with a one-shot fallback source
//!
//! Loading itself is left to the browser. When the `error` event fires the
//! source switches to the fallback once; if the fallback also fails the
//! image simply stays broken.

use std::borrow::Cow;

use leptos::prelude::*;

/// Source selection state for a [`FallbackImage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: Cow<'static, str>,
    fallback: Option<Cow<'static, str>>,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<Cow<'static, str>>) -> Self {
        Self {
            primary: primary.into(),
            fallback: None,
            failed: false,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<Cow<'static, str>>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// URL the `<img>` should currently load
    pub fn current(&self) -> &str {
        match (&self.fallback, self.failed) {
            (Some(fallback), true) => fallback,
            _ => &self.primary,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        self.failed && self.fallback.is_some()
    }

    /// Records a load failure of the current source.
    ///
    /// Returns `true` if the source switched to the fallback.
    pub fn on_error(&mut self) -> bool {
        if self.failed || self.fallback.is_none() {
            return false;
        }
        self.failed = true;
        true
    }
}

/// `<img>` that swaps to its fallback source on load failure
#[component]
pub fn FallbackImage(
    source: ImageSource,
    #[prop(into)] alt: String,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    let source = RwSignal::new(source);

    let on_error = move |_| {
        let switched = source.try_update(ImageSource::on_error).unwrap_or(false);
        if switched {
            source.with_untracked(|s| {
                tracing::warn!(fallback = s.current(), "Image failed to load, using fallback");
            });
        }
    };

    view! {
        <img
            src=move || source.with(|s| s.current().to_owned())
            alt=alt
            style=style
            data-fallback=move || source.with(|s| s.is_fallback().to_string())
            on:error=on_error
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: &str = "/assets/images/not-found.svg";
    const FALLBACK: &str = "https://via.placeholder.com/300x300?text=404";

    #[test]
    fn test_starts_on_primary() {
        let source = ImageSource::new(PRIMARY).with_fallback(FALLBACK);
        assert_eq!(source.current(), PRIMARY);
        assert!(!source.is_fallback());
    }

    #[test]
    fn test_error_switches_to_fallback_once() {
        let mut source = ImageSource::new(PRIMARY).with_fallback(FALLBACK);
        assert!(source.on_error());
        assert_eq!(source.current(), FALLBACK);
        assert!(source.is_fallback());

        // Fallback failing too leaves it in place
        assert!(!source.on_error());
        assert_eq!(source.current(), FALLBACK);
    }

    #[test]
    fn test_error_without_fallback_keeps_primary() {
        let mut source = ImageSource::new(PRIMARY);
        assert!(!source.on_error());
        assert_eq!(source.current(), PRIMARY);
        assert!(!source.is_fallback());
    }

    #[test]
    fn test_owned_sources() {
        let source = ImageSource::new(String::from("a.png")).with_fallback(String::from("b.png"));
        assert_eq!(source.current(), "a.png");
    }

    #[test]
    fn test_fallback_image_component_exists() {
        let _component = FallbackImage;
    }
}
