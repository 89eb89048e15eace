//! Behavioral tests for the not-found page

use crate::pages::not_found::{
    HEADING, HOME_ACTION_LABEL, ILLUSTRATION_FALLBACK_SRC, ILLUSTRATION_SRC, illustration_source,
};

#[test]
fn given_fresh_page_when_illustration_loads_then_primary_asset_used() {
    let source = illustration_source();
    assert_eq!(source.current(), ILLUSTRATION_SRC);
    assert!(!source.is_fallback());
}

#[test]
fn given_primary_illustration_fails_when_error_reported_then_placeholder_substituted() {
    // Given
    let mut source = illustration_source();

    // When
    let switched = source.on_error();

    // Then
    assert!(switched);
    assert_eq!(source.current(), ILLUSTRATION_FALLBACK_SRC);
}

#[test]
fn given_placeholder_also_fails_when_error_reported_then_no_further_swap() {
    let mut source = illustration_source();
    let _ = source.on_error();

    assert!(!source.on_error(), "Fallback should only be applied once");
    assert_eq!(source.current(), ILLUSTRATION_FALLBACK_SRC);
}

#[test]
fn given_page_copy_when_checked_then_heading_and_home_action_present() {
    assert_eq!(HEADING, "404");
    assert_eq!(HOME_ACTION_LABEL, "Trở về trang chủ");
}
