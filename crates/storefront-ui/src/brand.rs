//! Brand mark size variants
//!
//! Resolves a [`SizeVariant`] and an optional color override into the
//! concrete [`BrandPresentation`] the `Logo` renders with. The variant set is
//! closed, so resolution is a total function; only text tokens coming from
//! outside the type system can fail, and they fail loudly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UiError;
use crate::theme::{ColorToken, FontSize, units_to_rem};

/// Wordmark rendered next to the brand icon
pub const BRAND_NAME: &str = "Minh Plaza";

/// Named brand mark scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeVariant {
    #[serde(alias = "sm")]
    Small,
    #[default]
    #[serde(alias = "md")]
    Medium,
    #[serde(alias = "lg")]
    Large,
}

impl SizeVariant {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];
}

impl fmt::Display for SizeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
        }
    }
}

impl FromStr for SizeVariant {
    type Err = UiError;

    /// Accepts the full names and the short `sm`/`md`/`lg` forms.
    /// Anything else is a caller bug and is rejected rather than defaulted.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "small" | "sm" => Ok(Self::Small),
            "medium" | "md" => Ok(Self::Medium),
            "large" | "lg" => Ok(Self::Large),
            other => Err(UiError::UnknownSizeVariant(other.to_owned())),
        }
    }
}

/// Resolved visual parameters for the brand mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPresentation {
    pub color: ColorToken,
    /// Icon edge length in 0.25rem units
    pub icon_size_units: u8,
    pub text_size: FontSize,
}

impl BrandPresentation {
    pub fn icon_size_rem(&self) -> f32 {
        units_to_rem(self.icon_size_units)
    }
}

/// Maps a size variant (and optional color override) to its presentation
///
/// Pure: identical inputs always produce identical output.
pub fn resolve_brand(variant: SizeVariant, color: Option<ColorToken>) -> BrandPresentation {
    let (icon_size_units, text_size) = match variant {
        SizeVariant::Small => (5, FontSize::Xl),
        SizeVariant::Medium => (6, FontSize::TwoXl),
        SizeVariant::Large => (8, FontSize::ThreeXl),
    };

    BrandPresentation {
        color: color.unwrap_or(ColorToken::BRAND_500),
        icon_size_units,
        text_size,
    }
}
