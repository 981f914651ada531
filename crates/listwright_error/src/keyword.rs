//! Keyword extraction error types.

/// Keyword extraction failure. Never fatal to a listing; the generator
/// downgrades it to an empty keyword list.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Keyword Error: {} at line {} in {}", message, line, file)]
pub struct KeywordError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl KeywordError {
    /// Create a new KeywordError with the given message at the current location.
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
