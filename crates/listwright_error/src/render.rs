//! Template rendering error types.

/// Specific error conditions for template rendering.
///
/// These are Rule Catalog / renderer inconsistencies, not user errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RenderErrorKind {
    /// Template references a placeholder the variable derivation did not produce
    #[display("Missing required template variable: {}", variable)]
    MissingTemplateVariable {
        /// Which template ("title" or "description")
        template: String,
        /// The unresolved placeholder name
        variable: String,
    },
    /// Template contains an unmatched brace
    #[display("Malformed {} template: {}", template, reason)]
    MalformedTemplate {
        /// Which template ("title" or "description")
        template: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Template rendering error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Render Error: {} at line {} in {}", kind, line, file)]
pub struct RenderError {
    /// The specific error condition
    pub kind: RenderErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl RenderError {
    /// Create a new RenderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RenderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
