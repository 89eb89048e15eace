//! Behavioral tests for brand mark size resolution

use crate::brand::{BrandPresentation, SizeVariant, resolve_brand};
use crate::error::UiError;
use crate::theme::{ColorToken, FontSize, Theme};

// ============================================================================
// VARIANT RESOLUTION BEHAVIORS
// ============================================================================

#[test]
fn given_any_variant_when_resolved_then_sizes_are_non_empty() {
    for variant in SizeVariant::ALL {
        // When
        let presentation = resolve_brand(variant, None);

        // Then
        assert!(presentation.icon_size_units > 0, "{variant} has no icon size");
        assert!(presentation.icon_size_rem() > 0.0, "{variant} has no icon size");
        assert!(!presentation.text_size.token().is_empty(), "{variant} has no text size");
    }
}

#[test]
fn given_larger_variant_when_resolved_then_icon_and_text_grow() {
    let sizes: Vec<BrandPresentation> = SizeVariant::ALL
        .iter()
        .map(|variant| resolve_brand(*variant, None))
        .collect();

    for pair in sizes.windows(2) {
        if let [smaller, larger] = pair {
            assert!(smaller.icon_size_units < larger.icon_size_units);
            assert!(smaller.text_size.rem() < larger.text_size.rem());
        }
    }
}

#[test]
fn given_large_variant_and_no_color_when_resolved_then_default_brand_color_and_eight_units() {
    // Given / When
    let presentation = resolve_brand(SizeVariant::Large, None);

    // Then
    assert_eq!(presentation.color, ColorToken::BRAND_500);
    assert_eq!(presentation.icon_size_units, 8);
    assert_eq!(presentation.text_size, FontSize::ThreeXl);
    assert_eq!(Theme::default().color(&presentation.color), "#0967D2");
}

#[test]
fn given_no_variant_when_resolved_then_identical_to_explicit_medium() {
    assert_eq!(
        resolve_brand(SizeVariant::default(), None),
        resolve_brand(SizeVariant::Medium, None)
    );
}

#[test]
fn given_same_inputs_when_resolved_twice_then_results_are_identical() {
    let first = resolve_brand(SizeVariant::Small, Some(ColorToken::GRAY_700));
    let second = resolve_brand(SizeVariant::Small, Some(ColorToken::GRAY_700));
    assert_eq!(first, second);
}

// ============================================================================
// CONFIGURATION ERROR BEHAVIORS
// ============================================================================

#[test]
fn given_unknown_token_when_parsed_then_configuration_error_not_default() {
    for token in ["xl", "MEDIUM", "tiny", " md"] {
        let result = token.parse::<SizeVariant>();
        assert_eq!(
            result,
            Err(UiError::UnknownSizeVariant(token.to_string())),
            "token {token:?} should be rejected"
        );
    }
}
