//! Marketplace rule catalog.
//!
//! The built-in catalog is created once per process and shared read-only.
//! Custom catalogs can be assembled from user-supplied rules.

use indexmap::IndexMap;
use listwright_core::{MarketplaceRule, MaxBullets};
use listwright_error::{CatalogError, CatalogErrorKind};
use std::sync::{Arc, LazyLock};
use tracing::debug;

static BUILTIN: LazyLock<Arc<RuleCatalog>> = LazyLock::new(|| Arc::new(RuleCatalog::builtin_rules()));

/// Immutable registry of marketplace rules keyed by marketplace key.
///
/// # Examples
///
/// ```
/// use listwright_listing::RuleCatalog;
///
/// let catalog = RuleCatalog::builtin();
/// let rule = catalog.lookup("meesho").unwrap();
/// assert_eq!(rule.display_name(), "Meesho");
/// assert!(catalog.lookup("ebay").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    rules: IndexMap<String, MarketplaceRule>,
}

impl RuleCatalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> Arc<RuleCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Build a catalog from custom rules.
    ///
    /// # Errors
    ///
    /// Fails on duplicate keys, on `max_title_length <= 3` (no room for the
    /// truncation marker) and on a bullet limit of zero.
    pub fn from_rules(rules: impl IntoIterator<Item = MarketplaceRule>) -> Result<Self, CatalogError> {
        let mut map = IndexMap::new();
        for rule in rules {
            let key = rule.key().clone();
            if *rule.max_title_length() <= 3 {
                return Err(CatalogError::new(CatalogErrorKind::InvalidRule {
                    key,
                    reason: "max_title_length must be greater than 3".to_string(),
                }));
            }
            if rule.max_bullets().limit() == Some(0) {
                return Err(CatalogError::new(CatalogErrorKind::InvalidRule {
                    key,
                    reason: "max_bullets must be positive or unbounded".to_string(),
                }));
            }
            if map.contains_key(&key) {
                return Err(CatalogError::new(CatalogErrorKind::DuplicateMarketplace(key)));
            }
            map.insert(key, rule);
        }
        debug!(count = map.len(), "Built rule catalog");
        Ok(Self { rules: map })
    }

    /// Look up one marketplace rule.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedMarketplace` for unknown keys.
    pub fn lookup(&self, key: &str) -> Result<&MarketplaceRule, CatalogError> {
        self.rules.get(key).ok_or_else(|| {
            CatalogError::new(CatalogErrorKind::UnsupportedMarketplace(key.to_string()))
        })
    }

    /// Marketplace keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &MarketplaceRule> {
        self.rules.values()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn builtin_rules() -> Self {
        let rules = [
            MarketplaceRule::new(
                "amazon_in",
                "Amazon India",
                "{brand} {product_name} - {key_features}",
                "**{brand} {product_name}**\n\n{product_description}\n\n**Key Features:**\n{features}\n\n**Specifications:**\n{specifications}\n\n**Why Choose {brand}?**\n{usps}\n\n{additional_notes}",
                200,
            )
            .with_max_bullets(MaxBullets::Limited(5))
            .with_requires_technical_specs(true)
            .with_allows_html(true)
            .with_requires_brand(true)
            .with_requires_price(true)
            .with_requires_category(true),
            MarketplaceRule::new(
                "flipkart",
                "Flipkart",
                "{brand} {product_name} ({key_features})",
                "{product_description}\n\n{features_bullets}\n\n**Specifications:**\n{specifications}\n\n{usps_bullets}\n\n{additional_notes}",
                100,
            )
            .with_requires_technical_specs(true)
            .with_requires_brand(true)
            .with_requires_price(true)
            .with_requires_category(true),
            MarketplaceRule::new(
                "meesho",
                "Meesho",
                "{brand} {product_name}",
                "{product_description}\n\n{features_bullets}\n\n{usps_bullets}",
                60,
            )
            .with_max_bullets(MaxBullets::Limited(3))
            .with_requires_price(true)
            .with_requires_category(true),
            MarketplaceRule::new(
                "myntra",
                "Myntra",
                "{brand} {product_name} | {key_features}",
                "{brand} presents {product_name} - {key_features}\n\n{product_description}\n\n**Features:**\n{features}\n\n**Specifications:**\n{specifications}\n\n{usps_bullets}",
                80,
            )
            .with_max_bullets(MaxBullets::Limited(4))
            .with_requires_technical_specs(true)
            .with_allows_html(true)
            .with_requires_brand(true)
            .with_requires_price(true)
            .with_requires_category(true),
            MarketplaceRule::new(
                "ajio",
                "Ajio",
                "{brand} {product_name}",
                "{product_description}\n\n**Key Features:**\n{features}\n\n**Material & Care:**\n{material_care}\n\n{usps_bullets}",
                70,
            )
            .with_max_bullets(MaxBullets::Limited(5))
            .with_allows_html(true)
            .with_requires_brand(true)
            .with_requires_price(true)
            .with_requires_category(true),
            MarketplaceRule::new(
                "nykaa",
                "Nykaa",
                "{brand} {product_name} - {key_features}",
                "**{brand} {product_name}**\n\n{product_description}\n\n**Key Benefits:**\n{features}\n\n**How To Use:**\n{usage_instructions}\n\n**Ingredients:**\n{ingredients}\n\n{usps_bullets}",
                120,
            )
            .with_max_bullets(MaxBullets::Limited(5))
            .with_allows_html(true)
            .with_requires_brand(true)
            .with_requires_price(true)
            .with_requires_category(true),
            MarketplaceRule::new(
                "shopify",
                "Shopify",
                "{product_name} by {brand}",
                "# {product_name}\n\n{product_description}\n\n## Features\n{features}\n\n## Specifications\n{specifications}\n\n## Why Choose This Product?\n{usps}",
                255,
            )
            .with_allows_html(true)
            .with_requires_price(true),
            MarketplaceRule::new(
                "etsy",
                "Etsy",
                "{product_name} - Handmade by {brand}",
                "{product_description}\n\n✨ **Features:**\n{features}\n\n📏 **Details:**\n{specifications}\n\n💖 {usps_bullets}\n\n{additional_notes}",
                140,
            )
            .with_max_bullets(MaxBullets::Limited(5))
            .with_allows_html(true)
            .with_requires_price(true)
            .with_requires_category(true),
        ];

        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.key().clone(), rule))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_in_catalog_order() {
        let catalog = RuleCatalog::builtin();
        let keys: Vec<_> = catalog.keys().collect();
        assert_eq!(
            keys,
            ["amazon_in", "flipkart", "meesho", "myntra", "ajio", "nykaa", "shopify", "etsy"]
        );
    }

    #[test]
    fn builtin_rules_pass_custom_validation() {
        let rules: Vec<_> = RuleCatalog::builtin().iter().cloned().collect();
        assert!(RuleCatalog::from_rules(rules).is_ok());
    }

    #[test]
    fn unknown_key_message() {
        let err = RuleCatalog::builtin().lookup("ebay").unwrap_err();
        assert_eq!(err.kind.to_string(), "No template found for marketplace: ebay");
    }

    #[test]
    fn rejects_duplicates() {
        let rule = MarketplaceRule::new("a", "A", "{product_name}", "{product_description}", 50);
        let err = RuleCatalog::from_rules([rule.clone(), rule]).unwrap_err();
        assert!(matches!(err.kind, CatalogErrorKind::DuplicateMarketplace(ref k) if k == "a"));
    }

    #[test]
    fn rejects_tiny_title_limit_and_zero_bullets() {
        let tiny = MarketplaceRule::new("a", "A", "{product_name}", "{product_description}", 3);
        assert!(RuleCatalog::from_rules([tiny]).is_err());

        let zero = MarketplaceRule::new("b", "B", "{product_name}", "{product_description}", 40)
            .with_max_bullets(MaxBullets::Limited(0));
        assert!(RuleCatalog::from_rules([zero]).is_err());
    }
}
