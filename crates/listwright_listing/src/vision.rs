//! Vision-derived facts, the optional image input of the merge.

use crate::extraction::parse_json_reply;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// Attribute key used when the analysis reply is not a JSON object.
pub const ANALYSIS_KEY: &str = "analysis";

/// Product attributes read from a photo, or why there are none.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VisionFacts {
    /// No image was supplied
    #[default]
    Absent,
    /// Image analysis was attempted and failed
    Failed(String),
    /// Attributes in reply order
    Attributes(IndexMap<String, Value>),
}

impl VisionFacts {
    /// Interpret an image-analysis reply.
    ///
    /// JSON object replies become attributes (an `error` member marks the
    /// analysis as failed). Other non-blank text is kept whole under the
    /// `analysis` key.
    ///
    /// # Examples
    ///
    /// ```
    /// use listwright_listing::VisionFacts;
    ///
    /// let facts = VisionFacts::from_analysis(r#"Sure: {"brand_name": "Acme"}"#);
    /// assert!(matches!(facts, VisionFacts::Attributes(ref a) if a["brand_name"] == "Acme"));
    ///
    /// assert_eq!(VisionFacts::from_analysis("   "), VisionFacts::Absent);
    /// ```
    pub fn from_analysis(reply: &str) -> Self {
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            return Self::Absent;
        }

        match parse_json_reply::<Value>(trimmed) {
            Ok(Value::Object(map)) => {
                if let Some(error) = map.get("error") {
                    let reason = match error {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    return Self::Failed(reason);
                }
                Self::Attributes(map.into_iter().collect())
            }
            Ok(_) | Err(_) => {
                debug!("Image analysis reply is not a JSON object, keeping as text");
                let mut attrs = IndexMap::new();
                attrs.insert(ANALYSIS_KEY.to_string(), Value::String(trimmed.to_string()));
                Self::Attributes(attrs)
            }
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Failed(_) => "failed",
            Self::Attributes(_) => "attributes",
        }
    }

    /// Section text for the merge brief.
    pub fn brief_section(&self) -> String {
        match self {
            Self::Attributes(attrs) if !attrs.is_empty() => attrs
                .iter()
                .map(|(key, value)| format!("- {}: {}", key, display_value(value)))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => "No image analysis available.".to_string(),
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
