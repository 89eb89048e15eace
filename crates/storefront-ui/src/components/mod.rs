//! Reusable presentational components

pub mod fallback_image;
pub mod footer;
pub mod icon;
pub mod logo;

pub use fallback_image::{FallbackImage, ImageSource};
pub use footer::Footer;
pub use icon::{Icon, IconKind};
pub use logo::Logo;
