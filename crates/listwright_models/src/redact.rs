//! Secret redaction and failure classification for upstream errors.

use listwright_error::{AuthError, BackendError, ListwrightError};
use regex::Regex;
use std::sync::LazyLock;

static SECRET_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sk-[A-Za-z0-9_\-]{6,}").expect("Valid secret token regex"));

const REDACTED: &str = "[REDACTED]";

/// Replace the configured key and any `sk-` style token with `[REDACTED]`.
///
/// # Examples
///
/// ```
/// use listwright_models::redact_secrets;
///
/// let clean = redact_secrets("bad key sk-abcdef123456", Some("sk-abcdef123456"));
/// assert_eq!(clean, "bad key [REDACTED]");
/// ```
pub fn redact_secrets(text: &str, api_key: Option<&str>) -> String {
    let mut out = text.to_string();
    if let Some(key) = api_key.filter(|k| !k.is_empty()) {
        out = out.replace(key, REDACTED);
    }
    SECRET_TOKEN.replace_all(&out, REDACTED).into_owned()
}

/// Whether an upstream status/body pair signals a credential problem.
pub fn is_auth_failure(status: Option<u16>, body: &str) -> bool {
    status == Some(401)
        || body.contains("invalid_api_key")
        || body.contains("Incorrect API key provided")
}

/// Turn an upstream failure into an `AuthError` or `BackendError`.
///
/// The message is always redacted before it is stored.
#[track_caller]
pub fn classify_failure(
    status: Option<u16>,
    body: &str,
    api_key: Option<&str>,
) -> ListwrightError {
    let detail = redact_secrets(body, api_key);
    if is_auth_failure(status, body) {
        AuthError::new(format!(
            "Invalid OpenAI API key. Please check your API key and try again. ({})",
            detail
        ))
        .into()
    } else if let Some(code) = status {
        BackendError::new(format!("OpenAI request failed with status {}: {}", code, detail))
            .into()
    } else {
        BackendError::new(format!("OpenAI request failed: {}", detail)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listwright_error::ListwrightErrorKind;

    #[test]
    fn redacts_configured_key_even_without_prefix() {
        let clean = redact_secrets("key=abc123secret rejected", Some("abc123secret"));
        assert_eq!(clean, "key=[REDACTED] rejected");
    }

    #[test]
    fn redacts_unknown_sk_tokens() {
        let clean = redact_secrets("Incorrect API key provided: sk-proj-zzzz9999", None);
        assert!(!clean.contains("sk-proj"));
        assert!(clean.contains(REDACTED));
    }

    #[test]
    fn leaves_short_sk_words_alone() {
        assert_eq!(redact_secrets("task sk-1 done", None), "task sk-1 done");
    }

    #[test]
    fn status_401_is_auth() {
        let err = classify_failure(Some(401), "unauthorized", None);
        assert!(matches!(err.kind(), ListwrightErrorKind::Auth(_)));
    }

    #[test]
    fn invalid_key_body_is_auth_without_status() {
        let err = classify_failure(None, "error code invalid_api_key", None);
        assert!(err.is_auth());
    }

    #[test]
    fn other_status_is_backend_and_redacted() {
        let err = classify_failure(Some(500), "boom sk-abcdefgh", Some("sk-abcdefgh"));
        match err.kind() {
            ListwrightErrorKind::Backend(e) => {
                assert!(e.message.contains("500"));
                assert!(!e.message.contains("sk-abcdefgh"));
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }
}
