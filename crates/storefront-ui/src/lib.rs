//! Leptos 0.7 CSR presentational shell for the ShopEasy storefront
//!
//! This crate provides the page container, brand mark, site footer and
//! 404 page of the storefront front end. Components are pure functions of
//! their props and of immutable context values provided by the app shell.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Routing delegated to leptos_router behind a `Navigator` capability
//! - Theme tokens and breakpoints supplied as an immutable context value
//!
//! ## Module Structure
//! - `app`: `AppShell` container and root `App` component
//! - `router`: Route definitions
//! - `pages`: Top-level page components
//! - `components`: Logo, footer, icons and images
//! - `brand`: Brand mark size variants
//! - `layout`: Responsive grid model
//! - `navigation`: Link targets and the navigator capability
//! - `theme`: Color tokens, type scale and breakpoints
//! - `content`: Literal footer content
//! - `viewport`: Viewport width signal
//! - `config`: Site configuration
//! - `logging`: Browser console tracing subscriber
//! - `error`: Error types and handling

#![forbid(unsafe_code)]

pub mod app;
pub mod brand;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod logging;
pub mod navigation;
pub mod pages;
pub mod router;
pub mod theme;
pub mod viewport;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::{App, AppShell};
pub use error::{Result, UiError};

#[cfg(test)]
mod tests;
