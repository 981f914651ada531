//! Rule catalog error types.

/// Specific error conditions for rule catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// Marketplace key has no rule in the catalog
    #[display("No template found for marketplace: {}", _0)]
    UnsupportedMarketplace(String),
    /// Two rules share a marketplace key
    #[display("Duplicate rule for marketplace: {}", _0)]
    DuplicateMarketplace(String),
    /// Rule carries unusable limits
    #[display("Invalid rule for marketplace '{}': {}", key, reason)]
    InvalidRule {
        /// Marketplace key
        key: String,
        /// Why the rule was rejected
        reason: String,
    },
}

/// Error type for rule catalog operations.
///
/// # Examples
///
/// ```
/// use listwright_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::UnsupportedMarketplace("ebay".into()));
/// assert!(format!("{}", err).contains("No template found for marketplace: ebay"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The specific error condition
    pub kind: CatalogErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
