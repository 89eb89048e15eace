//! Behavioral tests for the storefront shell
//!
//! This module provides BDD-style tests using given-when-then naming convention.
//! Tests focus on component behavior rather than implementation details.

mod brand_behaviors;
mod not_found_behaviors;
