//! Field-level precedence between seller-entered and inferred facts.

use listwright_core::{FormFacts, NormalizedFactSet, SpecValue, Specifications};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Lines of a transcript used as features when no other source has any.
pub const TRANSCRIPT_FEATURE_LINES: usize = 5;

/// Facts inferred by the generation backend from the merged brief.
///
/// Deserialization is lenient about shapes (a single string where a list is
/// expected, numbers where text is expected, `null` anywhere) and accepts
/// several spellings of a member name. When a reply carries more than one
/// spelling, the first non-empty one in [`InferredFacts`] order wins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InferredFacts {
    /// Product name
    pub product_name: Option<String>,
    /// Brand name
    pub brand_name: Option<String>,
    /// Category
    pub category: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Target audience
    pub target_audience: Option<String>,
    /// Features
    pub features: Vec<String>,
    /// Unique selling points
    pub usps: Vec<String>,
    /// Specifications in reply order
    pub specifications: Specifications,
    /// Additional notes
    pub additional_notes: Option<String>,
}

const PRODUCT_NAME: &[&str] = &["product_name", "productName"];
const BRAND_NAME: &[&str] = &["brand_name", "brandName", "brand"];
const CATEGORY: &[&str] = &["category"];
const DESCRIPTION: &[&str] = &["description"];
const TARGET_AUDIENCE: &[&str] = &["target_audience", "targetAudience"];
const FEATURES: &[&str] = &["features"];
const USPS: &[&str] = &["usps"];
const SPECIFICATIONS: &[&str] = &["specifications"];
const ADDITIONAL_NOTES: &[&str] = &["additional_notes", "additionalNotes"];

impl InferredFacts {
    /// Read the facts from the members of a reply object.
    pub fn from_members(members: &Map<String, Value>) -> Self {
        Self {
            product_name: first_text(members, PRODUCT_NAME),
            brand_name: first_text(members, BRAND_NAME),
            category: first_text(members, CATEGORY),
            description: first_text(members, DESCRIPTION),
            target_audience: first_text(members, TARGET_AUDIENCE),
            features: first_list(members, FEATURES),
            usps: first_list(members, USPS),
            specifications: first_specs(members, SPECIFICATIONS),
            additional_notes: first_text(members, ADDITIONAL_NOTES),
        }
    }
}

impl<'de> Deserialize<'de> for InferredFacts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let members = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_members(&members))
    }
}

/// Resolves each field of the merged fact set.
///
/// - Text fields: a non-empty form value wins, else the inferred value.
/// - `features` / `usps`: a non-empty form list wins, else the inferred list.
/// - `specifications`: union; form keys first and winning on collision.
/// - `price`, `currency`, `usp`, `material_care`, `usage_instructions` and
///   `ingredients` come from the form only.
/// - When no source has features, the first transcript lines are used.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldPrecedence;

impl FieldPrecedence {
    /// Apply the policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use listwright_core::FormFacts;
    /// use listwright_listing::{FieldPrecedence, InferredFacts};
    ///
    /// let form = FormFacts { brand_name: "Acme".into(), ..Default::default() };
    /// let inferred = InferredFacts {
    ///     brand_name: Some("Acme Corp".into()),
    ///     product_name: Some("Kettle".into()),
    ///     ..Default::default()
    /// };
    ///
    /// let facts = FieldPrecedence.resolve(&form, inferred, None);
    /// assert_eq!(facts.brand_name(), "Acme");
    /// assert_eq!(facts.product_name(), "Kettle");
    /// ```
    pub fn resolve(
        &self,
        form: &FormFacts,
        inferred: InferredFacts,
        transcript: Option<&str>,
    ) -> NormalizedFactSet {
        let form = form.sanitized();

        let mut features = prefer_list(&form.features, inferred.features);
        if features.is_empty() {
            features = transcript.map(transcript_features).unwrap_or_default();
        }

        let mut specifications = form.specifications.clone();
        for (key, value) in inferred.specifications {
            specifications.entry(key).or_insert(value);
        }

        let additional_notes = form
            .additional_notes
            .clone()
            .or_else(|| clean(inferred.additional_notes));

        NormalizedFactSet::from_form(&form)
            .with_brand_name(prefer_text(&form.brand_name, inferred.brand_name))
            .with_product_name(prefer_text(&form.product_name, inferred.product_name))
            .with_category(prefer_text(&form.category, inferred.category))
            .with_description(prefer_text(&form.description, inferred.description))
            .with_target_audience(prefer_text(&form.target_audience, inferred.target_audience))
            .with_features(features)
            .with_usps(prefer_list(&form.usps, inferred.usps))
            .with_specifications(specifications)
            .with_additional_notes(additional_notes)
    }
}

/// First non-blank transcript lines, trimmed.
pub fn transcript_features(transcript: &str) -> Vec<String> {
    transcript
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(TRANSCRIPT_FEATURE_LINES)
        .map(str::to_string)
        .collect()
}

fn prefer_text(form: &str, inferred: Option<String>) -> String {
    if form.is_empty() {
        clean(inferred).unwrap_or_default()
    } else {
        form.to_string()
    }
}

fn prefer_list(form: &[String], inferred: Vec<String>) -> Vec<String> {
    if form.is_empty() {
        inferred
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    } else {
        form.to_vec()
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn spellings<'a>(
    members: &'a Map<String, Value>,
    names: &'a [&'a str],
) -> impl Iterator<Item = &'a Value> {
    names.iter().filter_map(|name| members.get(*name))
}

fn first_text(members: &Map<String, Value>, names: &[&str]) -> Option<String> {
    spellings(members, names).find_map(|value| SpecValue::from_json(value).map(|v| v.to_string()))
}

fn first_list(members: &Map<String, Value>, names: &[&str]) -> Vec<String> {
    spellings(members, names)
        .find_map(|value| match SpecValue::from_json(value) {
            Some(SpecValue::List(items)) => Some(items),
            Some(SpecValue::Text(text)) => Some(vec![text]),
            None => None,
        })
        .unwrap_or_default()
}

fn first_specs(members: &Map<String, Value>, names: &[&str]) -> Specifications {
    spellings(members, names)
        .filter_map(Value::as_object)
        .map(|map| {
            map.iter()
                .filter(|(key, _)| !key.trim().is_empty())
                .filter_map(|(key, value)| {
                    SpecValue::from_json(value).map(|v| (key.trim().to_string(), v))
                })
                .collect::<Specifications>()
        })
        .find(|specs| !specs.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_and_null_members_are_accepted() {
        let inferred: InferredFacts = serde_json::from_str(
            r#"{"productName": "X", "brand_name": null, "features": "only one", "specifications": "n/a"}"#,
        )
        .unwrap();
        assert_eq!(inferred.product_name.as_deref(), Some("X"));
        assert!(inferred.brand_name.is_none());
        assert_eq!(inferred.features, vec!["only one"]);
        assert!(inferred.specifications.is_empty());
    }

    #[test]
    fn repeated_spellings_do_not_fail_the_reply() {
        let inferred: InferredFacts = serde_json::from_str(
            r#"{"brand_name": "Acme", "brand": "Acme Corp", "productName": "Kettle",
                "product_name": "", "targetAudience": "Cooks", "target_audience": null}"#,
        )
        .unwrap();
        assert_eq!(inferred.brand_name.as_deref(), Some("Acme"));
        assert_eq!(inferred.product_name.as_deref(), Some("Kettle"));
        assert_eq!(inferred.target_audience.as_deref(), Some("Cooks"));
    }

    #[test]
    fn later_spelling_fills_an_empty_earlier_one() {
        let inferred: InferredFacts =
            serde_json::from_str(r#"{"brand_name": "  ", "brandName": null, "brand": "Acme"}"#)
                .unwrap();
        assert_eq!(inferred.brand_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn transcript_lines_are_capped() {
        let lines = transcript_features("a\n\n b \nc\nd\ne\nf\n");
        assert_eq!(lines, ["a", "b", "c", "d", "e"]);
    }
}
