//! Inline SVG icon set
//!
//! Stroke icons on a 24×24 grid. Every shape is expressed as path data so a
//! single `<path>` loop renders any icon.

use leptos::prelude::*;

use crate::theme::{ColorToken, units_to_rem, use_theme};

/// Icons used by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    ShoppingBag,
    MapMarker,
    Phone,
    Envelope,
    PaperPlane,
    Facebook,
    Twitter,
    Instagram,
    Youtube,
}

impl IconKind {
    /// Accessible name
    pub const fn label(self) -> &'static str {
        match self {
            Self::ShoppingBag => "Shopping bag",
            Self::MapMarker => "Address",
            Self::Phone => "Phone",
            Self::Envelope => "Email",
            Self::PaperPlane => "Send",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::Youtube => "YouTube",
        }
    }

    /// SVG path data, drawn in order
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ShoppingBag => &[
                "M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z",
                "M3 6h18",
                "M16 10a4 4 0 0 1-8 0",
            ],
            Self::MapMarker => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Self::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
                 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 \
                 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 \
                 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Self::Envelope => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Self::PaperPlane => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
            Self::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            Self::Twitter => &[
                "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 \
                 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
            ],
            Self::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
            Self::Youtube => &[
                "M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 \
                 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 \
                 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 \
                 0-.46-5.33z",
                "M9.75 15.02l5.75-3.27-5.75-3.27v6.54z",
            ],
        }
    }
}

/// Square icon, `size_units` × 0.25rem, stroked in `color` (or the inherited text color)
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 4)] size_units: u8,
    #[prop(optional, into)] color: Option<ColorToken>,
) -> impl IntoView {
    let size = units_to_rem(size_units);
    let color = color.map_or_else(|| "currentColor".to_owned(), |token| use_theme().color(&token));
    let style = format!("width:{size}rem;height:{size}rem;flex-shrink:0;color:{color}");

    view! {
        <svg
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=kind.label()
            data-icon=kind.label()
            style=style
        >
            {kind.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
