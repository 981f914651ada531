//! Top-level error wrapper types.

use crate::{
    AuthError, BackendError, BuilderError, CatalogError, ConfigError, HttpError, JsonError, KeywordError,
    MergeError, ParseError, RenderError,
};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use listwright_error::{ListwrightError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ListwrightError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ListwrightErrorKind {
    /// Missing or invalid credential
    #[from(AuthError)]
    Auth(AuthError),
    /// Upstream capability call failed
    #[from(BackendError)]
    Backend(BackendError),
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Reply parsing error
    #[from(ParseError)]
    Parse(ParseError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Rule catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Template defect
    #[from(RenderError)]
    Render(RenderError),
    /// Source merge error
    #[from(MergeError)]
    Merge(MergeError),
    /// Keyword extraction error
    #[from(KeywordError)]
    Keyword(KeywordError),
}

/// Listwright error with kind discrimination.
///
/// # Examples
///
/// ```
/// use listwright_error::{ConfigError, ListwrightResult};
///
/// fn might_fail() -> ListwrightResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Listwright Error: {}", _0)]
pub struct ListwrightError(Box<ListwrightErrorKind>);

impl ListwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: ListwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ListwrightErrorKind {
        &self.0
    }

    /// Whether this error is a credential failure.
    pub fn is_auth(&self) -> bool {
        match self.kind() {
            ListwrightErrorKind::Auth(_) => true,
            ListwrightErrorKind::Merge(merge) => merge.is_auth(),
            _ => false,
        }
    }
}

// Generic From implementation for any type that converts to ListwrightErrorKind
impl<T> From<T> for ListwrightError
where
    T: Into<ListwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Listwright operations.
pub type ListwrightResult<T> = std::result::Result<T, ListwrightError>;
