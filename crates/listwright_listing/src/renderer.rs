//! Template renderer: derives placeholder values from a fact set and fills a
//! marketplace's title and description templates.
//!
//! Placeholders use `{name}` syntax. `{{` and `}}` produce literal braces.
//! Any other brace is a malformed template.

use derive_getters::Getters;
use indexmap::IndexMap;
use listwright_core::{MarketplaceRule, NormalizedFactSet, Specifications};
use listwright_error::{RenderError, RenderErrorKind, RenderResult};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, warn};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("Valid placeholder regex")
});

const BULLET: &str = "• ";
const TRUNCATION_MARKER: &str = "...";
const KEY_FEATURE_COUNT: usize = 3;
const USP_BULLET_COUNT: usize = 3;

const DEFAULT_MATERIAL_CARE: &str = "Not specified";
const DEFAULT_USAGE: &str = "Refer to product packaging for usage instructions";
const DEFAULT_INGREDIENTS: &str = "Refer to product packaging for full ingredient list";

/// Placeholder values derived from one fact set for one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariables {
    values: IndexMap<&'static str, String>,
}

impl TemplateVariables {
    /// Derive every placeholder value for `facts` under `rule`.
    pub fn derive(facts: &NormalizedFactSet, rule: &MarketplaceRule) -> Self {
        let features = facts.features();
        let key_features = features
            .iter()
            .take(KEY_FEATURE_COUNT)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        let mut values = IndexMap::new();
        values.insert("brand", facts.brand_name().clone());
        values.insert("product_name", facts.product_name().clone());
        values.insert("key_features", key_features);
        values.insert("product_description", facts.description().clone());
        values.insert("features", format_bullets(features));
        values.insert(
            "features_bullets",
            format_bullets(rule.max_bullets().apply(features)),
        );
        values.insert("usps", facts.usps().join("\n"));
        values.insert(
            "usps_bullets",
            format_bullets(&facts.usps()[..facts.usps().len().min(USP_BULLET_COUNT)]),
        );
        values.insert("specifications", format_specifications(facts.specifications()));
        values.insert(
            "additional_notes",
            facts.additional_notes().clone().unwrap_or_default(),
        );
        values.insert(
            "material_care",
            or_default(facts.material_care(), DEFAULT_MATERIAL_CARE),
        );
        values.insert(
            "usage_instructions",
            or_default(facts.usage_instructions(), DEFAULT_USAGE),
        );
        values.insert(
            "ingredients",
            or_default(facts.ingredients(), DEFAULT_INGREDIENTS),
        );

        Self { values }
    }

    /// Value of one placeholder.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Placeholder names in derivation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }
}

/// Rendered title and description for one marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RenderedText {
    /// Length-limited title
    title: String,
    /// Description
    description: String,
}

/// Render the title and description of `rule` from `facts`.
///
/// # Errors
///
/// Returns `MissingTemplateVariable` when either template references a
/// placeholder the derivation does not produce, and `MalformedTemplate` for
/// unmatched braces.
///
/// # Examples
///
/// ```
/// use listwright_core::{MarketplaceRule, NormalizedFactSet};
/// use listwright_listing::render;
///
/// let facts = NormalizedFactSet::builder()
///     .brand_name("Acme")
///     .product_name("Kettle")
///     .description("Boils water")
///     .features(vec!["1.7L".to_string(), "Steel".to_string()])
///     .build()
///     .unwrap();
/// let rule = MarketplaceRule::new(
///     "demo",
///     "Demo",
///     "{brand} {product_name} - {key_features}",
///     "{product_description}\n{features}",
///     80,
/// );
///
/// let text = render(&facts, &rule).unwrap();
/// assert_eq!(text.title(), "Acme Kettle - 1.7L, Steel");
/// assert_eq!(text.description(), "Boils water\n• 1.7L\n• Steel");
/// ```
pub fn render(facts: &NormalizedFactSet, rule: &MarketplaceRule) -> RenderResult<RenderedText> {
    let vars = TemplateVariables::derive(facts, rule);

    let title = substitute(rule.title_template(), &vars, "title")?;
    let title = truncate_title(&title, *rule.max_title_length());
    if title.truncated {
        warn!(
            marketplace = %rule.key(),
            original_len = title.original_len,
            max = rule.max_title_length(),
            "Truncating title"
        );
    }

    let description = substitute(rule.description_template(), &vars, "description")?;
    debug!(marketplace = %rule.key(), "Rendered templates");

    Ok(RenderedText {
        title: title.text,
        description,
    })
}

/// Fill `template` from `vars`.
///
/// # Errors
///
/// See [`render`].
pub fn substitute(template: &str, vars: &TemplateVariables, which: &str) -> RenderResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();
        out.push_str(&resolve(&caps, whole.as_str(), vars, which)?);
    }
    out.push_str(&template[last..]);

    Ok(out)
}

fn resolve(
    caps: &Captures<'_>,
    token: &str,
    vars: &TemplateVariables,
    which: &str,
) -> RenderResult<String> {
    match token {
        "{{" => Ok("{".to_string()),
        "}}" => Ok("}".to_string()),
        _ => {
            let Some(name) = caps.get(1) else {
                return Err(RenderError::new(RenderErrorKind::MalformedTemplate {
                    template: which.to_string(),
                    reason: format!("unmatched '{}'", token),
                }));
            };
            vars.get(name.as_str()).map(str::to_string).ok_or_else(|| {
                RenderError::new(RenderErrorKind::MissingTemplateVariable {
                    template: which.to_string(),
                    variable: name.as_str().to_string(),
                })
            })
        }
    }
}

struct TruncatedTitle {
    text: String,
    truncated: bool,
    original_len: usize,
}

/// Cut `title` to `max` characters, ending in `...`, when it is longer.
fn truncate_title(title: &str, max: usize) -> TruncatedTitle {
    let original_len = title.chars().count();
    if original_len <= max {
        return TruncatedTitle {
            text: title.to_string(),
            truncated: false,
            original_len,
        };
    }
    let keep = max.saturating_sub(TRUNCATION_MARKER.len());
    let mut text: String = title.chars().take(keep).collect();
    text.push_str(TRUNCATION_MARKER);
    TruncatedTitle {
        text,
        truncated: true,
        original_len,
    }
}

/// Each item prefixed with `• `, one per line.
pub fn format_bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", BULLET, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Each specification as `- key: value`, one per line.
pub fn format_specifications(specs: &Specifications) -> String {
    specs
        .iter()
        .map(|(key, value)| format!("- {}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVariables {
        let facts = NormalizedFactSet::builder()
            .brand_name("Acme")
            .product_name("Kettle")
            .build()
            .unwrap();
        let rule = MarketplaceRule::new("t", "T", "", "", 50);
        TemplateVariables::derive(&facts, &rule)
    }

    #[test]
    fn escaped_braces_become_literals() {
        let out = substitute("{{{brand}}}", &vars(), "title").unwrap();
        assert_eq!(out, "{Acme}");
    }

    #[test]
    fn lone_brace_is_malformed() {
        let err = substitute("{brand} }", &vars(), "title").unwrap_err();
        assert!(matches!(err.kind, RenderErrorKind::MalformedTemplate { .. }));
    }

    #[test]
    fn unknown_placeholder_is_missing_variable() {
        let err = substitute("{colour}", &vars(), "description").unwrap_err();
        assert_eq!(
            err.kind,
            RenderErrorKind::MissingTemplateVariable {
                template: "description".to_string(),
                variable: "colour".to_string(),
            }
        );
        assert_eq!(err.kind.to_string(), "Missing required template variable: colour");
    }

    #[test]
    fn truncation_is_character_based() {
        let t = truncate_title("ééééééééééé", 8);
        assert_eq!(t.text, "ééééé...");
        assert_eq!(t.text.chars().count(), 8);
        assert!(t.truncated);
    }

    #[test]
    fn title_at_limit_is_untouched() {
        let t = truncate_title("abcdef", 6);
        assert_eq!(t.text, "abcdef");
        assert!(!t.truncated);
    }

    #[test]
    fn optional_defaults_apply() {
        let v = vars();
        assert_eq!(v.get("material_care"), Some(DEFAULT_MATERIAL_CARE));
        assert_eq!(v.get("usage_instructions"), Some(DEFAULT_USAGE));
        assert_eq!(v.get("ingredients"), Some(DEFAULT_INGREDIENTS));
        assert_eq!(v.get("additional_notes"), Some(""));
        assert_eq!(v.get("key_features"), Some(""));
        assert_eq!(v.get("features"), Some(""));
    }
}
