//! SEO keyword extraction.

use listwright_error::KeywordError;
use std::collections::BTreeSet;

/// Generic commerce terms added to every keyword set.
pub const GENERIC_TERMS: [&str; 5] = ["buy", "sale", "discount", "best price", "online"];

/// Most keywords returned for one listing.
pub const MAX_KEYWORDS: usize = 20;

/// Source of SEO keywords for a listing.
///
/// Extraction is advisory: the generator turns any error into an empty list.
pub trait KeywordExtractor: Send + Sync + std::fmt::Debug {
    /// Derive keywords from the product's naming fields and features.
    ///
    /// # Errors
    ///
    /// Implementations may fail; callers must not treat that as fatal.
    fn extract(
        &self,
        product_name: &str,
        brand: &str,
        category: &str,
        features: &[String],
    ) -> Result<Vec<String>, KeywordError>;
}

/// Whitespace-token heuristic.
///
/// Tokens are lower-cased and trimmed, duplicates collapse, anything of two
/// characters or fewer is dropped, and the result is capped at
/// [`MAX_KEYWORDS`]. Output is in sorted order.
///
/// # Examples
///
/// ```
/// use listwright_listing::{HeuristicKeywords, KeywordExtractor};
///
/// let keywords = HeuristicKeywords
///     .extract("Wireless Mouse", "Acme", "Electronics", &["USB-C port".to_string()])
///     .unwrap();
/// assert!(keywords.contains(&"wireless".to_string()));
/// assert!(keywords.contains(&"best price".to_string()));
/// assert!(!keywords.iter().any(|k| k.len() <= 2));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicKeywords;

impl KeywordExtractor for HeuristicKeywords {
    fn extract(
        &self,
        product_name: &str,
        brand: &str,
        category: &str,
        features: &[String],
    ) -> Result<Vec<String>, KeywordError> {
        let mut set = BTreeSet::new();
        let sources = [product_name, brand, category]
            .into_iter()
            .chain(features.iter().map(String::as_str));
        for source in sources {
            set.extend(source.to_lowercase().split_whitespace().map(str::to_string));
        }
        set.extend(GENERIC_TERMS.iter().map(|t| t.to_string()));

        Ok(set
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| k.chars().count() > 2)
            .take(MAX_KEYWORDS)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_twenty() {
        let features: Vec<String> = (0..40).map(|i| format!("feature{i:02}")).collect();
        let keywords = HeuristicKeywords.extract("", "", "", &features).unwrap();
        assert_eq!(keywords.len(), MAX_KEYWORDS);
    }

    #[test]
    fn collapses_duplicates_case_insensitively() {
        let keywords = HeuristicKeywords
            .extract("Steel steel STEEL", "", "", &[])
            .unwrap();
        assert_eq!(keywords.iter().filter(|k| *k == "steel").count(), 1);
    }

    #[test]
    fn empty_inputs_yield_generic_terms() {
        let keywords = HeuristicKeywords.extract("", "", "", &[]).unwrap();
        assert_eq!(keywords, ["best price", "buy", "discount", "online", "sale"]);
    }
}
