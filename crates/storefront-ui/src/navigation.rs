//! Navigation capability
//!
//! Every link-like element in the shell goes through a [`Navigator`] taken
//! from context, so the presentational components never depend on a
//! particular routing mechanism. The default [`RouterNavigator`] emits plain
//! anchors: `leptos_router` intercepts same-origin anchor clicks and pushes
//! them onto history, while external anchors open a new browsing context.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

/// Opaque destination consumed by the router; passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationTarget(Cow<'static, str>);

impl NavigationTarget {
    /// Site root
    pub const ROOT: Self = Self::from_static("/");

    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for NavigationTarget {
    fn from(path: &'static str) -> Self {
        Self::from_static(path)
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

/// How activating a link affects the current page context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkKind {
    /// In-app route; pushes a history entry
    #[default]
    Internal,
    /// Off-site destination; opens without replacing the current page
    External,
}

/// Anchor attributes produced by a navigator for one link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAttributes {
    pub href: String,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

/// Routing collaborator seen by the presentational components
pub trait Navigator: Send + Sync {
    /// Builds the anchor for a link to `target`
    fn link(&self, target: &NavigationTarget, kind: LinkKind) -> LinkAttributes;
}

/// Navigator backed by `leptos_router`'s anchor interception
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterNavigator;

impl Navigator for RouterNavigator {
    fn link(&self, target: &NavigationTarget, kind: LinkKind) -> LinkAttributes {
        match kind {
            LinkKind::Internal => LinkAttributes {
                href: target.as_str().to_owned(),
                target: None,
                rel: None,
            },
            LinkKind::External => LinkAttributes {
                href: target.as_str().to_owned(),
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
            },
        }
    }
}

/// Shareable navigator stored in context
#[derive(Clone)]
pub struct NavigatorHandle(Arc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Arc::new(navigator))
    }

    pub fn link(&self, target: &NavigationTarget, kind: LinkKind) -> LinkAttributes {
        self.0.link(target, kind)
    }
}

impl Default for NavigatorHandle {
    fn default() -> Self {
        Self::new(RouterNavigator)
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorHandle").finish_non_exhaustive()
    }
}

/// Navigator from context, or the router-backed default
pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_default()
}

/// Anchor routed through the context navigator
#[component]
pub fn NavLink(
    #[prop(into)] to: NavigationTarget,
    #[prop(optional)] kind: LinkKind,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let LinkAttributes { href, target, rel } = use_navigator().link(&to, kind);

    view! {
        <a href=href target=target rel=rel class=class style=style title=title>
            {children()}
        </a>
    }
}
