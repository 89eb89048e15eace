//! 404 Not Found page component

use leptos::prelude::*;

use crate::components::fallback_image::{FallbackImage, ImageSource};
use crate::navigation::{LinkKind, NavLink, NavigationTarget};
use crate::theme::{ColorToken, FontSize, use_theme};

pub const ILLUSTRATION_SRC: &str = "/assets/images/not-found.svg";
pub const ILLUSTRATION_FALLBACK_SRC: &str = "https://via.placeholder.com/300x300?text=404";
pub const ILLUSTRATION_ALT: &str = "Không tìm thấy trang";
pub const HEADING: &str = "404";
pub const TITLE: &str = "Không tìm thấy trang";
pub const DESCRIPTION: &str =
    "Trang bạn đang tìm kiếm có thể đã bị xóa, đổi tên hoặc tạm thời không khả dụng.";
pub const HOME_ACTION_LABEL: &str = "Trở về trang chủ";

/// Fills the shell's flex column (or the viewport when used alone) and centers its content
const PAGE_STYLE: &str = "flex:1;min-height:100vh;box-sizing:border-box;width:100%;max-width:80rem;\
     margin:0 auto;padding:5rem 1rem;display:flex;flex-direction:column;justify-content:center";

/// Illustration source with its placeholder fallback
pub fn illustration_source() -> ImageSource {
    ImageSource::new(ILLUSTRATION_SRC).with_fallback(ILLUSTRATION_FALLBACK_SRC)
}

/// 404 Not Found page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let theme = use_theme();
    let heading_style = format!(
        "font-size:{};font-weight:700;margin:0;color:{}",
        FontSize::FiveXl.css(),
        theme.color(&ColorToken::BRAND_600)
    );
    let title_style = format!(
        "font-size:{};font-weight:700;margin:0 0 1rem 0",
        FontSize::FourXl.css()
    );
    let description_style = format!(
        "font-size:{};max-width:28rem;margin:0;color:{}",
        FontSize::Lg.css(),
        theme.color(&ColorToken::GRAY_600)
    );
    let action_style = format!(
        "display:inline-flex;align-items:center;height:3rem;padding:0 1.5rem;border-radius:0.375rem;\
         font-size:{};font-weight:600;text-decoration:none;background:{};color:{}",
        FontSize::Lg.css(),
        theme.color(&ColorToken::BRAND_500),
        theme.color(&ColorToken::WHITE)
    );

    view! {
        <main
            class="not-found-page"
            style=PAGE_STYLE
        >
            <div style="display:flex;flex-direction:column;align-items:center;gap:2rem;text-align:center">
                <FallbackImage
                    source=illustration_source()
                    alt=ILLUSTRATION_ALT
                    style="max-width:300px;width:100%"
                />

                <h1 style=heading_style>{HEADING}</h1>

                <h2 style=title_style>{TITLE}</h2>

                <p style=description_style>{DESCRIPTION}</p>

                <div style="padding-top:1rem">
                    <NavLink
                        to=NavigationTarget::ROOT
                        kind=LinkKind::Internal
                        class="not-found-home"
                        style=action_style
                    >
                        {HOME_ACTION_LABEL}
                        <span style="margin-left:0.5rem" aria-hidden="true">"→"</span>
                    </NavLink>
                </div>
            </div>
        </main>
    }
}
