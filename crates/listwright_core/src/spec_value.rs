//! Specification attribute values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A product specification value: a single scalar or an ordered list of scalars.
///
/// Non-string scalars (numbers, booleans) are kept in their textual form.
///
/// # Examples
///
/// ```
/// use listwright_core::SpecValue;
///
/// let colors = SpecValue::List(vec!["Black".into(), "White".into()]);
/// assert_eq!(colors.to_string(), "Black, White");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SpecValue {
    /// A single scalar value
    Text(String),
    /// An ordered sequence of scalar values
    List(Vec<String>),
}

impl SpecValue {
    /// Convert an arbitrary JSON value into a specification value.
    ///
    /// Returns `None` for `null`, empty strings and empty lists. Nested
    /// objects are kept as compact JSON text.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(items) => {
                let items: Vec<String> = items.iter().filter_map(scalar_text).collect();
                if items.is_empty() {
                    None
                } else {
                    Some(Self::List(items))
                }
            }
            other => scalar_text(other).map(Self::Text),
        }
    }

    /// Whether the value carries no text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        nested => nested.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

impl std::fmt::Display for SpecValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for SpecValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<'de> Deserialize<'de> for SpecValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value).unwrap_or_else(|| Self::Text(String::new())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_booleans_become_text() {
        assert_eq!(SpecValue::from_json(&json!(250)), Some(SpecValue::Text("250".into())));
        assert_eq!(SpecValue::from_json(&json!(true)), Some(SpecValue::Text("true".into())));
    }

    #[test]
    fn null_and_empty_values_are_dropped() {
        assert_eq!(SpecValue::from_json(&json!(null)), None);
        assert_eq!(SpecValue::from_json(&json!("  ")), None);
        assert_eq!(SpecValue::from_json(&json!([])), None);
        assert_eq!(SpecValue::from_json(&json!([null, ""])), None);
    }

    #[test]
    fn lists_keep_order() {
        let value = SpecValue::from_json(&json!(["Cotton", 2, "Silk"])).unwrap();
        assert_eq!(value.to_string(), "Cotton, 2, Silk");
    }
}
