//! Source merge error types.

use crate::{AuthError, BackendError, ParseError};

/// Specific error conditions for the multi-source merge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MergeErrorKind {
    /// Credential missing or rejected by the generation backend
    #[display("Authentication failed: {}", _0)]
    Auth(String),
    /// Generation backend call failed
    #[display("Generation backend failed: {}", _0)]
    Backend(String),
    /// Reply was not parseable as the merge schema
    #[display("Failed to parse model output: {}", reason)]
    Parse {
        /// Why parsing failed
        reason: String,
        /// The raw reply text
        raw: String,
    },
}

/// Merge error with location tracking.
///
/// No partial fact set is ever attached; the caller decides whether to
/// continue with form-only facts.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Merge Error: {} at line {} in {}", kind, line, file)]
pub struct MergeError {
    /// The specific error condition
    pub kind: MergeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl MergeError {
    /// Create a new MergeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MergeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether the failure was a credential problem (fatal for every backend call).
    pub fn is_auth(&self) -> bool {
        matches!(self.kind, MergeErrorKind::Auth(_))
    }

    /// The raw reply text, when the failure was a parse failure.
    pub fn raw_reply(&self) -> Option<&str> {
        match &self.kind {
            MergeErrorKind::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl From<AuthError> for MergeError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        Self::new(MergeErrorKind::Auth(err.message))
    }
}

impl From<BackendError> for MergeError {
    #[track_caller]
    fn from(err: BackendError) -> Self {
        Self::new(MergeErrorKind::Backend(err.message))
    }
}

impl From<ParseError> for MergeError {
    #[track_caller]
    fn from(err: ParseError) -> Self {
        Self::new(MergeErrorKind::Parse {
            reason: err.reason,
            raw: err.raw,
        })
    }
}

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;
