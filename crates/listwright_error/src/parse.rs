//! Reply parsing error types.

/// A backend reply that could not be parsed into the expected structure.
///
/// The raw reply is retained verbatim for diagnosis.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Parse Error: {} at line {} in {}", reason, line, file)]
pub struct ParseError {
    /// Why parsing failed
    pub reason: String,
    /// The unparsed reply text
    pub raw: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use listwright_error::ParseError;
    ///
    /// let err = ParseError::new("parse failed", "not json");
    /// assert_eq!(err.raw, "not json");
    /// ```
    #[track_caller]
    pub fn new(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            raw: raw.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
