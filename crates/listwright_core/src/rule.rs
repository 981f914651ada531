//! Marketplace rule records.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Upper bound on bullet items a marketplace accepts.
///
/// Serialized as an optional integer: `null` / absent means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum MaxBullets {
    /// At most this many items
    Limited(usize),
    /// No limit
    #[default]
    Unbounded,
}

impl MaxBullets {
    /// The numeric limit, if any.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Self::Limited(n) => Some(*n),
            Self::Unbounded => None,
        }
    }

    /// The leading slice of `items` this limit allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use listwright_core::MaxBullets;
    ///
    /// let items = ["a", "b", "c"];
    /// assert_eq!(MaxBullets::Limited(2).apply(&items), &["a", "b"]);
    /// assert_eq!(MaxBullets::Unbounded.apply(&items), &["a", "b", "c"]);
    /// ```
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self {
            Self::Limited(n) => &items[..items.len().min(*n)],
            Self::Unbounded => items,
        }
    }
}

impl From<Option<usize>> for MaxBullets {
    fn from(value: Option<usize>) -> Self {
        value.map_or(Self::Unbounded, Self::Limited)
    }
}

impl From<MaxBullets> for Option<usize> {
    fn from(value: MaxBullets) -> Self {
        value.limit()
    }
}

/// One marketplace's formatting policy, limits and required fields.
///
/// Rules are immutable once placed in a catalog.
///
/// # Examples
///
/// ```
/// use listwright_core::{MarketplaceRule, MaxBullets};
///
/// let rule = MarketplaceRule::new(
///     "meesho",
///     "Meesho",
///     "{brand} {product_name}",
///     "{product_description}",
///     60,
/// )
/// .with_max_bullets(MaxBullets::Limited(3))
/// .with_requires_price(true);
///
/// assert_eq!(*rule.max_title_length(), 60);
/// assert!(*rule.requires_price());
/// assert!(!*rule.requires_brand());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct MarketplaceRule {
    /// Catalog key, e.g. `amazon_in`
    #[setters(skip)]
    key: String,
    /// Human-readable marketplace name
    #[setters(into)]
    display_name: String,
    /// Title template with `{variable}` placeholders
    #[setters(into)]
    title_template: String,
    /// Description template with `{variable}` placeholders
    #[setters(into)]
    description_template: String,
    /// Maximum rendered title length in characters
    max_title_length: usize,
    /// Bullet item limit
    #[serde(default)]
    max_bullets: MaxBullets,
    /// Brand name must be present
    #[serde(default)]
    requires_brand: bool,
    /// Non-zero price must be present
    #[serde(default)]
    requires_price: bool,
    /// Category must be present
    #[serde(default)]
    requires_category: bool,
    /// Specifications are passed through to the listing
    #[serde(default)]
    requires_technical_specs: bool,
    /// Downstream consumers may interpret markup; rendering is unaffected
    #[serde(default)]
    allows_html: bool,
}

impl MarketplaceRule {
    /// Create a rule with no requirements and unbounded bullets.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        title_template: impl Into<String>,
        description_template: impl Into<String>,
        max_title_length: usize,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            title_template: title_template.into(),
            description_template: description_template.into(),
            max_title_length,
            max_bullets: MaxBullets::Unbounded,
            requires_brand: false,
            requires_price: false,
            requires_category: false,
            requires_technical_specs: false,
            allows_html: false,
        }
    }
}
