//! Site footer
//!
//! Brand block, three link lists, an inert newsletter sign-up, then payment
//! badges, legal copy and trust badges. Column reflow is pure CSS generated
//! from the grids in [`crate::layout`]; each grid also reports its current
//! logical column count in a `data-columns` attribute.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::components::logo::Logo;
use crate::content::{Badge, FooterSection, Newsletter, footer_content};
use crate::layout::{ResponsiveGrid, footer_link_grid, payment_badge_grid, trust_badge_grid};
use crate::navigation::{LinkKind, NavLink};
use crate::theme::{Breakpoints, ColorToken, FontSize, Theme, use_theme};
use crate::viewport::use_viewport_width;

pub const LINK_GRID_CLASS: &str = "footer-links-grid";
pub const PAYMENT_GRID_CLASS: &str = "footer-payment-grid";
pub const TRUST_GRID_CLASS: &str = "footer-trust-grid";

/// Media-query stylesheet for the three footer grids
pub fn footer_stylesheet(breakpoints: &Breakpoints) -> String {
    [
        (LINK_GRID_CLASS, footer_link_grid()),
        (PAYMENT_GRID_CLASS, payment_badge_grid()),
        (TRUST_GRID_CLASS, trust_badge_grid()),
    ]
    .iter()
    .map(|(class, grid)| grid.to_css(&format!(".{class}"), breakpoints))
    .collect()
}

fn text_style(size: FontSize, theme: &Theme, color: Option<&ColorToken>) -> String {
    color.map_or_else(
        || format!("font-size:{};margin:0", size.css()),
        |token| format!("font-size:{};margin:0;color:{}", size.css(), theme.color(token)),
    )
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    let width = use_viewport_width();
    let content = footer_content();
    let breakpoints = theme.breakpoints;
    let stylesheet = footer_stylesheet(&breakpoints);

    let columns = move |grid: ResponsiveGrid| move || {
        grid.columns_at(width.get(), &breakpoints).to_string()
    };
    let link_columns = columns(footer_link_grid());
    let payment_columns = columns(payment_badge_grid());
    let trust_columns = columns(trust_badge_grid());

    tracing::debug!(
        sections = content.sections.len(),
        payment_badges = content.payment_badges.len(),
        trust_badges = content.trust_badges.len(),
        "Rendering footer"
    );

    let small = text_style(FontSize::Sm, &theme, None);
    let footer_style = format!(
        "background:{};color:{};margin-top:2.5rem",
        theme.color(&ColorToken::GRAY_50),
        theme.color(&ColorToken::GRAY_700)
    );
    let divider_style = format!(
        "margin:1.5rem 0;border:0;border-top:1px solid {}",
        theme.color(&ColorToken::GRAY_300)
    );
    let registration_style = format!(
        "{};margin-top:0.5rem",
        text_style(FontSize::Xs, &theme, Some(&ColorToken::GRAY_500))
    );

    view! {
        <footer class="site-footer" style=footer_style>
            <style>{stylesheet}</style>
            <div class="footer-container" style="max-width:80rem;margin:0 auto;padding:2.5rem 1rem;display:flex;flex-direction:column">
                <div class=LINK_GRID_CLASS data-columns=link_columns>
                    <div class="footer-brand" style="display:flex;flex-direction:column;gap:1.5rem">
                        <div>
                            <Logo size=content.logo_size />
                        </div>
                        <p style=small.clone()>{content.copyright}</p>
                        <div class="footer-contact" style="display:flex;flex-direction:column;gap:0.75rem">
                            {content
                                .contact
                                .iter()
                                .map(|line| {
                                    view! {
                                        <div style="display:flex;align-items:center;gap:0.5rem">
                                            <Icon kind=line.icon color=ColorToken::GRAY_600 />
                                            <span style=small.clone()>{line.text}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="footer-social" style="display:flex;gap:1.5rem">
                            {content
                                .social
                                .iter()
                                .map(|social| {
                                    view! {
                                        <NavLink
                                            to=social.target.clone()
                                            kind=LinkKind::External
                                            class="footer-social-link"
                                            title=social.label
                                        >
                                            <Icon kind=social.icon size_units=6 color=social.color.clone() />
                                        </NavLink>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {content
                        .sections
                        .iter()
                        .map(|section| view! { <FooterLinkList section=section /> })
                        .collect_view()}

                    <NewsletterSignup newsletter=content.newsletter />
                </div>

                <hr style=divider_style />

                <div style="padding-top:1.5rem">
                    <div class=PAYMENT_GRID_CLASS data-columns=payment_columns>
                        {content.payment_badges.iter().map(badge_image).collect_view()}
                    </div>
                </div>

                <div class="footer-legal" style="padding-top:1.5rem;text-align:center">
                    <p style=small.clone()>{content.tagline}</p>
                    <p style=registration_style>{content.registration}</p>
                </div>

                <div style="padding-top:1rem;text-align:center">
                    <div
                        class=TRUST_GRID_CLASS
                        data-columns=trust_columns
                        style="max-width:600px;margin:0 auto"
                    >
                        {content.trust_badges.iter().map(badge_image).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

fn badge_image(badge: &'static Badge) -> impl IntoView {
    view! {
        <img
            class="footer-badge"
            src=badge.src
            alt=badge.alt
            loading="lazy"
            style=format!("height:{}px;width:100%;object-fit:contain", badge.height_px)
        />
    }
}

/// Headed list of internal links
#[component]
fn FooterLinkList(section: &'static FooterSection) -> impl IntoView {
    let theme = use_theme();
    let heading_style = format!(
        "font-size:{};font-weight:700;margin:0 0 0.5rem 0;color:{}",
        FontSize::Sm.css(),
        theme.color(&ColorToken::GRAY_700)
    );

    view! {
        <nav
            class="footer-section"
            aria-label=section.heading
            style="display:flex;flex-direction:column;align-items:flex-start;gap:0.5rem"
        >
            <h5 style=heading_style>{section.heading}</h5>
            {section
                .links
                .iter()
                .map(|link| {
                    view! {
                        <NavLink to=link.target.clone() class="footer-link" style="color:inherit;text-decoration:none">
                            {link.label}
                        </NavLink>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Newsletter sign-up block. Presentation only: no validation, no submit handler.
#[component]
fn NewsletterSignup(newsletter: Newsletter) -> impl IntoView {
    let theme = use_theme();
    let heading_style = format!(
        "font-size:{};font-weight:700;margin:0 0 0.5rem 0",
        FontSize::Sm.css()
    );
    let input_style = format!(
        "width:100%;box-sizing:border-box;padding:0.5rem 4.5rem 0.5rem 1rem;background:{};border:1px solid {};border-radius:0.375rem",
        theme.color(&ColorToken::WHITE),
        theme.color(&ColorToken::GRAY_300)
    );
    let button_style = format!(
        "position:absolute;right:0.25rem;height:1.75rem;padding:0 0.75rem;border:none;border-radius:0.375rem;background:{};color:{};display:inline-flex;align-items:center",
        theme.color(&ColorToken::BRAND_500),
        theme.color(&ColorToken::WHITE)
    );

    view! {
        <div
            class="footer-newsletter"
            style="display:flex;flex-direction:column;align-items:flex-start;gap:0.5rem"
        >
            <h5 style=heading_style>{newsletter.heading}</h5>
            <p style=text_style(FontSize::Sm, &theme, None)>{newsletter.description}</p>
            <div style="position:relative;display:flex;align-items:center;width:100%">
                <input
                    type="email"
                    name="email"
                    placeholder=newsletter.placeholder
                    aria-label=newsletter.placeholder
                    style=input_style
                />
                <button type="button" aria-label=IconKind::PaperPlane.label() style=button_style>
                    <Icon kind=IconKind::PaperPlane />
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_component_exists() {
        let _component = Footer;
    }

    #[test]
    fn test_stylesheet_covers_all_grids() {
        let css = footer_stylesheet(&Breakpoints::default());
        assert!(css.contains(".footer-links-grid{"));
        assert!(css.contains(".footer-payment-grid{"));
        assert!(css.contains(".footer-trust-grid{"));
        // link grid: sm + md, payment: md, trust: md
        assert_eq!(css.matches("@media").count(), 4);
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        let breakpoints = Breakpoints::default();
        assert_eq!(footer_stylesheet(&breakpoints), footer_stylesheet(&breakpoints));
    }

    #[test]
    fn test_text_style_with_color() {
        let theme = Theme::default();
        assert_eq!(
            text_style(FontSize::Xs, &theme, Some(&ColorToken::GRAY_500)),
            "font-size:0.75rem;margin:0;color:#718096"
        );
        assert_eq!(text_style(FontSize::Sm, &theme, None), "font-size:0.875rem;margin:0");
    }
}
