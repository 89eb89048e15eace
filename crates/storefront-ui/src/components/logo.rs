//! Brand mark: shopping-bag icon plus wordmark, linking to the site root

use leptos::prelude::*;

use crate::brand::{BRAND_NAME, SizeVariant, resolve_brand};
use crate::components::icon::{Icon, IconKind};
use crate::navigation::{LinkKind, NavLink, NavigationTarget};
use crate::theme::{ColorToken, use_theme};

/// Brand logo sized by `size` (default medium), colored by `color` (default `brand.500`)
#[component]
pub fn Logo(
    #[prop(optional)] size: SizeVariant,
    #[prop(optional, into)] color: Option<ColorToken>,
) -> impl IntoView {
    let presentation = resolve_brand(size, color);
    let theme = use_theme();
    let wordmark_style = format!(
        "font-size:{};font-weight:700;letter-spacing:-0.025em;color:{}",
        presentation.text_size.css(),
        theme.color(&presentation.color)
    );

    view! {
        <NavLink
            to=NavigationTarget::ROOT
            kind=LinkKind::Internal
            class="logo"
            style="display:inline-flex;align-items:center;gap:0.5rem;text-decoration:none"
            title=BRAND_NAME
        >
            <Icon
                kind=IconKind::ShoppingBag
                size_units=presentation.icon_size_units
                color=presentation.color.clone()
            />
            <span class="logo-wordmark" data-size=size.to_string() style=wordmark_style>
                {BRAND_NAME}
            </span>
        </NavLink>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_component_exists() {
        let _component = Logo;
    }
}
