//! Design tokens: named colors, the type scale and responsive breakpoints
//!
//! Components never carry literal color values. They name a [`ColorToken`]
//! and ask the [`Theme`] found in context to resolve it. The theme is an
//! immutable value provided once by the app shell for the whole session.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use leptos::prelude::use_context;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, UiError};

/// Pixels per CSS `em` used when comparing viewport widths to breakpoints
pub const PX_PER_EM: f64 = 16.0;

/// CSS length of one spacing/size unit (Chakra-style 0.25rem scale)
pub const REM_PER_UNIT: f32 = 0.25;

/// Converts spacing units to rem
pub fn units_to_rem(units: u8) -> f32 {
    f32::from(units) * REM_PER_UNIT
}

/// A named color token such as `brand.500` or `gray.600`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorToken(Cow<'static, str>);

impl ColorToken {
    pub const BRAND_500: Self = Self::from_static("brand.500");
    pub const BRAND_600: Self = Self::from_static("brand.600");
    pub const GRAY_50: Self = Self::from_static("gray.50");
    pub const GRAY_300: Self = Self::from_static("gray.300");
    pub const GRAY_500: Self = Self::from_static("gray.500");
    pub const GRAY_600: Self = Self::from_static("gray.600");
    pub const GRAY_700: Self = Self::from_static("gray.700");
    pub const BLUE_400: Self = Self::from_static("blue.400");
    pub const BLUE_500: Self = Self::from_static("blue.500");
    pub const PINK_500: Self = Self::from_static("pink.500");
    pub const RED_500: Self = Self::from_static("red.500");
    pub const WHITE: Self = Self::from_static("white");

    /// Creates a token from a static name
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the token name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ColorToken {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for ColorToken {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// Named steps of the type scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    TwoXl,
    #[serde(rename = "3xl")]
    ThreeXl,
    #[serde(rename = "4xl")]
    FourXl,
    #[serde(rename = "5xl")]
    FiveXl,
}

impl FontSize {
    /// Token name as used in design documents (`"2xl"`)
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::TwoXl => "2xl",
            Self::ThreeXl => "3xl",
            Self::FourXl => "4xl",
            Self::FiveXl => "5xl",
        }
    }

    /// Size in rem
    pub const fn rem(self) -> f32 {
        match self {
            Self::Xs => 0.75,
            Self::Sm => 0.875,
            Self::Md => 1.0,
            Self::Lg => 1.125,
            Self::Xl => 1.25,
            Self::TwoXl => 1.5,
            Self::ThreeXl => 1.875,
            Self::FourXl => 2.25,
            Self::FiveXl => 3.0,
        }
    }

    /// CSS length, e.g. `1.5rem`
    pub fn css(self) -> String {
        format!("{}rem", self.rem())
    }
}

/// Responsive breakpoint names, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order
    pub const ALL: [Self; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Xl];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

/// Minimum viewport widths (in em) at which each breakpoint applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 30.0,
            md: 48.0,
            lg: 62.0,
            xl: 80.0,
        }
    }
}

impl Breakpoints {
    pub const fn min_width_em(&self, breakpoint: Breakpoint) -> f64 {
        match breakpoint {
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    pub fn min_width_px(&self, breakpoint: Breakpoint) -> f64 {
        self.min_width_em(breakpoint) * PX_PER_EM
    }

    /// Whether a viewport of `width_px` is at or above `breakpoint`
    pub fn is_active(&self, breakpoint: Breakpoint, width_px: f64) -> bool {
        width_px >= self.min_width_px(breakpoint)
    }

    /// Checks that every breakpoint is positive, finite and larger than the previous one
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidBreakpoint` naming the first offending breakpoint.
    pub fn validate(&self) -> Result<()> {
        let mut previous = 0.0_f64;
        for breakpoint in Breakpoint::ALL {
            let value = self.min_width_em(breakpoint);
            if !value.is_finite() || value <= previous {
                return Err(UiError::InvalidBreakpoint {
                    name: breakpoint.name(),
                    value: value.to_string(),
                });
            }
            previous = value;
        }
        Ok(())
    }
}

const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("brand.50", "#E6F6FF"),
    ("brand.100", "#BAE3FF"),
    ("brand.200", "#7CC4FA"),
    ("brand.300", "#47A3F3"),
    ("brand.400", "#2186EB"),
    ("brand.500", "#0967D2"),
    ("brand.600", "#0552B5"),
    ("brand.700", "#03449E"),
    ("brand.800", "#01337D"),
    ("brand.900", "#002159"),
    ("gray.50", "#F7FAFC"),
    ("gray.100", "#EDF2F7"),
    ("gray.200", "#E2E8F0"),
    ("gray.300", "#CBD5E0"),
    ("gray.400", "#A0AEC0"),
    ("gray.500", "#718096"),
    ("gray.600", "#4A5568"),
    ("gray.700", "#2D3748"),
    ("gray.800", "#1A202C"),
    ("gray.900", "#171923"),
    ("blue.400", "#4299E1"),
    ("blue.500", "#3182CE"),
    ("pink.500", "#D53F8C"),
    ("red.500", "#E53E3E"),
    ("white", "#FFFFFF"),
];

fn default_palette() -> BTreeMap<String, String> {
    DEFAULT_PALETTE
        .iter()
        .map(|(token, value)| ((*token).to_owned(), (*value).to_owned()))
        .collect()
}

/// Palette entries from configuration override the defaults one by one
fn merge_palette<'de, D>(deserializer: D) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut palette = default_palette();
    palette.extend(overrides);
    Ok(palette)
}

/// Immutable design-token set shared through context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "merge_palette")]
    pub palette: BTreeMap<String, String>,
    pub breakpoints: Breakpoints,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl Theme {
    /// Resolves a color token to a CSS color
    ///
    /// Unknown tokens resolve to a CSS custom property so a host stylesheet
    /// can still supply them.
    pub fn color(&self, token: &ColorToken) -> String {
        self.palette.get(token.as_str()).cloned().unwrap_or_else(|| {
            tracing::warn!(token = %token, "Unknown color token, deferring to CSS variable");
            format!("var(--color-{})", token.as_str().replace('.', "-"))
        })
    }

    /// # Errors
    ///
    /// Returns an error if the breakpoints are not strictly increasing.
    pub fn validate(&self) -> Result<()> {
        self.breakpoints.validate()
    }
}

/// Theme from context, or the default theme outside an app shell
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_resolution_is_deterministic() {
        let theme = Theme::default();
        assert_eq!(theme.color(&ColorToken::BRAND_500), "#0967D2");
        assert_eq!(
            theme.color(&ColorToken::BRAND_500),
            theme.color(&ColorToken::BRAND_500)
        );
    }

    #[test]
    fn test_unknown_token_resolves_to_css_variable() {
        let theme = Theme::default();
        let color = theme.color(&ColorToken::from_static("teal.300"));
        assert_eq!(color, "var(--color-teal-300)");
    }

    #[test]
    fn test_every_named_constant_is_in_default_palette() {
        let theme = Theme::default();
        let tokens = [
            ColorToken::BRAND_500,
            ColorToken::BRAND_600,
            ColorToken::GRAY_50,
            ColorToken::GRAY_300,
            ColorToken::GRAY_500,
            ColorToken::GRAY_600,
            ColorToken::GRAY_700,
            ColorToken::BLUE_400,
            ColorToken::BLUE_500,
            ColorToken::PINK_500,
            ColorToken::RED_500,
            ColorToken::WHITE,
        ];
        for token in &tokens {
            assert!(
                theme.palette.contains_key(token.as_str()),
                "missing {token}"
            );
        }
    }

    #[test]
    fn test_default_breakpoints_are_valid() {
        assert!(Breakpoints::default().validate().is_ok());
        assert!((Breakpoints::default().min_width_px(Breakpoint::Md) - 768.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakpoints_out_of_order_rejected() {
        let breakpoints = Breakpoints {
            sm: 30.0,
            md: 20.0,
            lg: 62.0,
            xl: 80.0,
        };
        assert_eq!(
            breakpoints.validate(),
            Err(UiError::InvalidBreakpoint {
                name: "md",
                value: "20".to_string()
            })
        );
    }

    #[test]
    fn test_non_positive_breakpoint_rejected() {
        let breakpoints = Breakpoints {
            sm: 0.0,
            ..Breakpoints::default()
        };
        assert!(breakpoints.validate().is_err());
    }

    #[test]
    fn test_breakpoint_activation_is_inclusive() {
        let breakpoints = Breakpoints::default();
        assert!(breakpoints.is_active(Breakpoint::Sm, 480.0));
        assert!(!breakpoints.is_active(Breakpoint::Sm, 479.9));
    }

    #[test]
    fn test_font_size_css() {
        assert_eq!(FontSize::TwoXl.css(), "1.5rem");
        assert_eq!(FontSize::ThreeXl.token(), "3xl");
    }

    #[test]
    fn test_units_to_rem() {
        assert!((units_to_rem(8) - 2.0).abs() < f32::EPSILON);
        assert!((units_to_rem(6) - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_palette_overrides_merge_with_defaults() -> std::result::Result<(), String> {
        let theme: Theme = serde_json::from_str(r##"{"palette": {"brand.500": "#FF5722"}}"##)
            .map_err(|e| e.to_string())?;
        assert_eq!(theme.color(&ColorToken::BRAND_500), "#FF5722");
        assert_eq!(theme.color(&ColorToken::GRAY_700), "#2D3748");
        assert_eq!(theme.breakpoints, Breakpoints::default());
        Ok(())
    }
}
