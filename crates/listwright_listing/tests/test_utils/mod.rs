//! Test utilities for the listing pipeline.
//!
//! This module provides a scripted generation backend and fact fixtures.

use listwright_core::NormalizedFactSet;
use rust_decimal::Decimal;

pub mod mock_backend;

#[allow(unused_imports)]
pub use mock_backend::{MockBackend, MockBehavior, MockFailure, MockResponse};

/// Facts that satisfy every built-in marketplace rule.
#[allow(dead_code)]
pub fn complete_facts() -> NormalizedFactSet {
    NormalizedFactSet::builder()
        .brand_name("Acme")
        .product_name("Wireless Mouse")
        .category("Electronics")
        .description("Ergonomic mouse for everyday use")
        .price(Some(Decimal::new(1999, 2)))
        .currency("USD")
        .features(vec![
            "2.4GHz wireless".to_string(),
            "USB-C charging".to_string(),
            "Silent clicks".to_string(),
            "1600 DPI sensor".to_string(),
            "Ambidextrous shape".to_string(),
            "70-day battery".to_string(),
        ])
        .usps(vec![
            "Two-year warranty".to_string(),
            "Recycled plastics".to_string(),
            "Free returns".to_string(),
            "Made locally".to_string(),
        ])
        .build()
        .expect("Failed to build complete facts")
}
