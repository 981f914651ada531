//! Product facts: the raw form input and the normalized fact set.

use crate::SpecValue;
use derive_builder::Builder;
use derive_getters::Getters;
use derive_setters::Setters;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ordered attribute name to value mapping. Keys are unique; insertion order
/// is the rendering order.
pub type Specifications = IndexMap<String, SpecValue>;

/// Product facts as entered in the form, already resolved by the caller.
///
/// This is the immutable request boundary: the pipeline never reads any
/// other ambient state.
///
/// # Examples
///
/// ```
/// use listwright_core::FormFacts;
///
/// let form: FormFacts = toml::from_str(r#"
///     product_name = "  Wireless Mouse "
///     features = ["2.4GHz", " ", "USB-C"]
/// "#).unwrap();
///
/// let clean = form.sanitized();
/// assert_eq!(clean.product_name, "Wireless Mouse");
/// assert_eq!(clean.features, vec!["2.4GHz", "USB-C"]);
/// assert_eq!(clean.currency, "USD");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFacts {
    /// Brand name
    pub brand_name: String,
    /// Product name
    pub product_name: String,
    /// Product category
    pub category: String,
    /// Prose description
    pub description: String,
    /// Intended audience
    pub target_audience: String,
    /// Price, if known
    pub price: Option<Decimal>,
    /// ISO currency code
    pub currency: String,
    /// Single-line unique selling proposition
    pub usp: String,
    /// Material and care notes
    pub material_care: Option<String>,
    /// Usage instructions
    pub usage_instructions: Option<String>,
    /// Ingredient list
    pub ingredients: Option<String>,
    /// Free-form notes
    pub additional_notes: Option<String>,
    /// Ordered feature list
    pub features: Vec<String>,
    /// Ordered unique selling points
    pub usps: Vec<String>,
    /// Product specifications
    pub specifications: Specifications,
}

impl FormFacts {
    /// Trim every text field, drop blank list entries and blank optional
    /// fields, and default the currency to `USD`.
    pub fn sanitized(&self) -> Self {
        let currency = self.currency.trim();
        Self {
            brand_name: self.brand_name.trim().to_string(),
            product_name: self.product_name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            target_audience: self.target_audience.trim().to_string(),
            price: self.price,
            currency: if currency.is_empty() {
                "USD".to_string()
            } else {
                currency.to_string()
            },
            usp: self.usp.trim().to_string(),
            material_care: trimmed_option(&self.material_care),
            usage_instructions: trimmed_option(&self.usage_instructions),
            ingredients: trimmed_option(&self.ingredients),
            additional_notes: trimmed_option(&self.additional_notes),
            features: trimmed_list(&self.features),
            usps: trimmed_list(&self.usps),
            specifications: self
                .specifications
                .iter()
                .filter(|(key, value)| !key.trim().is_empty() && !value.is_empty())
                .map(|(key, value)| (key.trim().to_string(), value.clone()))
                .collect(),
        }
    }
}

fn trimmed_option(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn trimmed_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// The canonical product description consumed by every marketplace.
///
/// Constructed once per generation request and read-only afterwards.
///
/// # Examples
///
/// ```
/// use listwright_core::NormalizedFactSet;
///
/// let facts = NormalizedFactSet::builder()
///     .product_name("Wireless Mouse")
///     .description("Ergonomic mouse")
///     .features(vec!["2.4GHz".to_string(), "USB-C".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(facts.product_name(), "Wireless Mouse");
/// assert!(facts.brand_name().is_empty());
/// assert!(facts.price().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Getters, Builder, Setters)]
#[builder(default, setter(into))]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct NormalizedFactSet {
    /// Brand name (empty when unknown)
    brand_name: String,
    /// Product name (empty when unknown)
    product_name: String,
    /// Product category (empty when unknown)
    category: String,
    /// Prose description (empty when unknown)
    description: String,
    /// Intended audience
    target_audience: String,
    /// Price, if known
    price: Option<Decimal>,
    /// ISO currency code
    currency: String,
    /// Single-line unique selling proposition
    usp: String,
    /// Material and care notes
    material_care: Option<String>,
    /// Usage instructions
    usage_instructions: Option<String>,
    /// Ingredient list
    ingredients: Option<String>,
    /// Free-form notes
    additional_notes: Option<String>,
    /// Ordered, non-empty feature strings
    features: Vec<String>,
    /// Ordered unique selling points
    usps: Vec<String>,
    /// Product specifications
    specifications: Specifications,
}

impl NormalizedFactSet {
    /// Creates a new fact set builder.
    pub fn builder() -> NormalizedFactSetBuilder {
        NormalizedFactSetBuilder::default()
    }

    /// Form-only fact set, used when no merge is attempted or the merge failed.
    pub fn from_form(form: &FormFacts) -> Self {
        let form = form.sanitized();
        Self {
            brand_name: form.brand_name,
            product_name: form.product_name,
            category: form.category,
            description: form.description,
            target_audience: form.target_audience,
            price: form.price,
            currency: form.currency,
            usp: form.usp,
            material_care: form.material_care,
            usage_instructions: form.usage_instructions,
            ingredients: form.ingredients,
            additional_notes: form.additional_notes,
            features: form.features,
            usps: form.usps,
            specifications: form.specifications,
        }
    }
}
