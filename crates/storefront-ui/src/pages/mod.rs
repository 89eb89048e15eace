//! Page components for the storefront
//!
//! This module contains the top-level page components for each route.

pub mod home;
pub mod not_found;

pub use home::Home;
pub use not_found::NotFoundPage;
