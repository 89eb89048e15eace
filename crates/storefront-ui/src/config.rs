//! Site configuration
//!
//! The host page may embed a JSON document in
//! `<script id="site-config" type="application/json">` to override the log
//! filter and theme tokens. Every field is optional; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};
use crate::theme::Theme;

/// Id of the inline configuration element in the host page
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info,storefront_ui=debug";

/// Runtime configuration for the storefront shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` for malformed JSON and
    /// `UiError::InvalidBreakpoint` for unusable theme breakpoints.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| UiError::InvalidConfig(e.to_string()))?;
        config.theme.validate()?;
        Ok(config)
    }

    /// Loads the configuration embedded in the host page
    ///
    /// An absent or empty config element yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is present but invalid.
    pub fn load() -> Result<Self> {
        match inline_config().filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(not(target_arch = "wasm32"))]
const fn inline_config() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Breakpoints, ColorToken};

    #[test]
    fn test_empty_document_yields_defaults() -> Result<()> {
        assert_eq!(SiteConfig::from_json("{}")?, SiteConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_override() -> Result<()> {
        let config = SiteConfig::from_json(
            r##"{
                "log_filter": "warn",
                "theme": {
                    "palette": { "brand.500": "#C05621" },
                    "breakpoints": { "md": 50 }
                }
            }"##,
        )?;
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.theme.color(&ColorToken::BRAND_500), "#C05621");
        assert_eq!(config.theme.color(&ColorToken::GRAY_50), "#F7FAFC");
        assert!((config.theme.breakpoints.md - 50.0).abs() < f64::EPSILON);
        assert!((config.theme.breakpoints.sm - Breakpoints::default().sm).abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(UiError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_bad_breakpoints_rejected() {
        let result = SiteConfig::from_json(r#"{"theme": {"breakpoints": {"lg": 10}}}"#);
        assert!(matches!(
            result,
            Err(UiError::InvalidBreakpoint { name: "lg", .. })
        ));
    }

    #[test]
    fn test_load_without_host_page_is_default() -> Result<()> {
        assert_eq!(SiteConfig::load()?, SiteConfig::default());
        Ok(())
    }
}
