//! Home page component

use leptos::prelude::*;

use crate::brand::SizeVariant;
use crate::components::{Footer, Logo};

/// Home page: brand header and the site footer
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page" style="display:flex;flex-direction:column;min-height:100vh">
            <header style="padding:1rem;display:flex;align-items:center">
                <Logo size=SizeVariant::Medium />
            </header>
            <main style="flex:1;padding:2.5rem 1rem;text-align:center">
                <h1>"Chào mừng đến với ShopEasy"</h1>
            </main>
            <Footer />
        </div>
    }
}
