//! Credential error types.

/// Missing or rejected upstream credential.
///
/// The message must never contain the credential itself; callers build it
/// from already-redacted text.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Auth Error: {} at line {} in {}", message, line, file)]
pub struct AuthError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl AuthError {
    /// Create a new AuthError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use listwright_error::AuthError;
    ///
    /// let err = AuthError::new("Missing OpenAI API key");
    /// assert!(err.message.contains("Missing"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
