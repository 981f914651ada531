//! Per-marketplace generation: validate, render, bullet, keyword.

use crate::catalog::RuleCatalog;
use crate::keywords::{HeuristicKeywords, KeywordExtractor};
use crate::renderer::render;
use crate::validator::validate;
use listwright_core::{
    ListingContent, ListingFailure, MarketplaceOutcome, NormalizedFactSet, Specifications,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Produces one [`MarketplaceOutcome`] per marketplace key.
///
/// Cheap to clone; the catalog and keyword extractor are shared.
///
/// # Examples
///
/// ```
/// use listwright_core::NormalizedFactSet;
/// use listwright_listing::MarketplaceGenerator;
///
/// let facts = NormalizedFactSet::builder()
///     .product_name("Kettle")
///     .description("Boils water")
///     .features(vec!["1.7L".to_string()])
///     .build()
///     .unwrap();
///
/// let outcome = MarketplaceGenerator::default().generate_one(&facts, "ebay");
/// assert_eq!(
///     outcome.failure().unwrap().reason(),
///     "No template found for marketplace: ebay"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MarketplaceGenerator {
    catalog: Arc<RuleCatalog>,
    keywords: Arc<dyn KeywordExtractor>,
}

impl Default for MarketplaceGenerator {
    fn default() -> Self {
        Self::new(RuleCatalog::builtin())
    }
}

impl MarketplaceGenerator {
    /// Generator over `catalog` using the heuristic keyword extractor.
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self {
            catalog,
            keywords: Arc::new(HeuristicKeywords),
        }
    }

    /// Replace the keyword extractor.
    pub fn with_keyword_extractor(mut self, keywords: Arc<dyn KeywordExtractor>) -> Self {
        self.keywords = keywords;
        self
    }

    /// The rule catalog in use.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Generate the listing for one marketplace.
    ///
    /// Never fails outright: unknown keys, validation issues and template
    /// defects all come back as [`MarketplaceOutcome::Failure`].
    #[instrument(skip(self, facts), fields(product = %facts.product_name()))]
    pub fn generate_one(&self, facts: &NormalizedFactSet, key: &str) -> MarketplaceOutcome {
        let rule = match self.catalog.lookup(key) {
            Ok(rule) => rule,
            Err(e) => {
                warn!(marketplace = %key, "Unsupported marketplace");
                return MarketplaceOutcome::Failure(ListingFailure::unsupported(e.kind.to_string()));
            }
        };

        let issues = validate(facts, rule);
        if !issues.is_empty() {
            let failure = ListingFailure::validation(&issues);
            warn!(marketplace = %key, reason = %failure.reason(), "Validation failed");
            return MarketplaceOutcome::Failure(failure);
        }

        let text = match render(facts, rule) {
            Ok(text) => text,
            Err(e) => {
                error!(marketplace = %key, error = %e, "Template defect");
                return MarketplaceOutcome::Failure(ListingFailure::template_defect(
                    e.kind.to_string(),
                ));
            }
        };

        let bullet_points = rule.max_bullets().apply(facts.features()).to_vec();

        let keywords = match self.keywords.extract(
            facts.product_name(),
            facts.brand_name(),
            facts.category(),
            facts.features(),
        ) {
            Ok(keywords) => keywords,
            Err(e) => {
                warn!(marketplace = %key, error = %e, "Keyword extraction failed, continuing without keywords");
                Vec::new()
            }
        };

        let specifications = if *rule.requires_technical_specs() {
            facts.specifications().clone()
        } else {
            Specifications::new()
        };

        let built = ListingContent::builder()
            .marketplace(key)
            .marketplace_name(rule.display_name().clone())
            .title(text.title().clone())
            .description(text.description().clone())
            .bullet_points(bullet_points)
            .keywords(keywords)
            .specifications(specifications)
            .build();

        match built {
            Ok(content) => {
                info!(marketplace = %key, title_len = content.title().chars().count(), "Generated listing");
                MarketplaceOutcome::Success(content)
            }
            Err(e) => {
                error!(marketplace = %key, error = %e, "Listing assembly failed");
                MarketplaceOutcome::Failure(ListingFailure::internal(e.to_string()))
            }
        }
    }
}
