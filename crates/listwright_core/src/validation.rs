//! Validation issue values.

use serde::{Deserialize, Serialize};

/// A single required-field violation of a fact set against a marketplace rule.
///
/// Variants are declared in check order; the `Display` strings are the
/// user-facing messages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Rule requires a brand and none is present
    #[display("Brand name is required for this marketplace")]
    BrandRequired,
    /// Rule requires a price and it is missing or zero
    #[display("Price is required for this marketplace")]
    PriceRequired,
    /// Rule requires a category and none is present
    #[display("Category is required for this marketplace")]
    CategoryRequired,
    /// Product name is always required
    #[display("Product name is required")]
    ProductNameMissing,
    /// Description is always required
    #[display("Product description is required")]
    DescriptionMissing,
    /// At least one feature is always required
    #[display("At least one feature is required")]
    FeaturesMissing,
}
