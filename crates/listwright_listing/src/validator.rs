//! Required-field checks of a fact set against one marketplace rule.

use listwright_core::{MarketplaceRule, NormalizedFactSet, ValidationIssue};

/// Validate `facts` against `rule`.
///
/// Returns every violated check in fixed order; an empty list means valid.
///
/// # Examples
///
/// ```
/// use listwright_core::{MarketplaceRule, NormalizedFactSet, ValidationIssue};
/// use listwright_listing::validate;
///
/// let facts = NormalizedFactSet::builder()
///     .product_name("Wireless Mouse")
///     .description("Ergonomic mouse")
///     .features(vec!["2.4GHz".to_string(), "USB-C".to_string()])
///     .build()
///     .unwrap();
/// let rule = MarketplaceRule::new("m", "M", "{product_name}", "{product_description}", 80)
///     .with_requires_brand(true)
///     .with_requires_price(true);
///
/// assert_eq!(
///     validate(&facts, &rule),
///     vec![ValidationIssue::BrandRequired, ValidationIssue::PriceRequired]
/// );
/// ```
pub fn validate(facts: &NormalizedFactSet, rule: &MarketplaceRule) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if *rule.requires_brand() && is_blank(facts.brand_name()) {
        issues.push(ValidationIssue::BrandRequired);
    }
    if *rule.requires_price() && !facts.price().is_some_and(|price| !price.is_zero()) {
        issues.push(ValidationIssue::PriceRequired);
    }
    if *rule.requires_category() && is_blank(facts.category()) {
        issues.push(ValidationIssue::CategoryRequired);
    }
    if is_blank(facts.product_name()) {
        issues.push(ValidationIssue::ProductNameMissing);
    }
    if is_blank(facts.description()) {
        issues.push(ValidationIssue::DescriptionMissing);
    }
    if facts.features().iter().all(|f| is_blank(f)) {
        issues.push(ValidationIssue::FeaturesMissing);
    }

    issues
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
