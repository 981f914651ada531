//! Structured data extraction from free-text backend replies.

use listwright_error::ParseError;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Parse a backend reply as JSON.
///
/// First the trimmed reply is parsed directly. Failing that, the substring
/// from the first `{` to the last `}` is parsed. Anything else is a
/// `ParseError` carrying the raw reply; no partial data is guessed.
///
/// # Errors
///
/// Returns a `ParseError` whose reason starts with "parse failed".
///
/// # Examples
///
/// ```
/// use listwright_listing::parse_json_reply;
/// use serde_json::Value;
///
/// let value: Value = parse_json_reply("Here is the data: {\"a\": 1} thanks").unwrap();
/// assert_eq!(value["a"], 1);
///
/// let err = parse_json_reply::<Value>("no json here").unwrap_err();
/// assert_eq!(err.raw, "no json here");
/// ```
pub fn parse_json_reply<T: DeserializeOwned>(reply: &str) -> Result<T, ParseError> {
    match serde_json::from_str::<T>(reply.trim()) {
        Ok(value) => return Ok(value),
        Err(e) => debug!(error = %e, "Direct parse failed, trying brace span"),
    }

    let Some(candidate) = brace_span(reply) else {
        return Err(ParseError::new(
            "parse failed: no JSON object found in reply",
            reply,
        ));
    };

    serde_json::from_str::<T>(candidate)
        .map_err(|e| ParseError::new(format!("parse failed: {}", e), reply))
}

/// Substring from the first `{` to the last `}`, inclusive.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
