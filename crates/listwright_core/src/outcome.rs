//! Per-marketplace outcomes and the batch wrapper.

use crate::{Specifications, ValidationIssue};
use derive_builder::Builder;
use derive_getters::Getters;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Generated listing content for one marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct ListingContent {
    /// Marketplace key
    marketplace: String,
    /// Marketplace display name
    marketplace_name: String,
    /// Rendered, length-limited title
    title: String,
    /// Rendered description
    description: String,
    /// Raw feature strings, limited by the rule's bullet cap
    #[builder(default)]
    bullet_points: Vec<String>,
    /// SEO keywords; order is not significant
    #[builder(default)]
    keywords: Vec<String>,
    /// Specifications, empty unless the marketplace wants them
    #[builder(default)]
    specifications: Specifications,
}

impl ListingContent {
    /// Creates a new listing content builder.
    pub fn builder() -> ListingContentBuilder {
        ListingContentBuilder::default()
    }
}

/// Coarse failure category, so callers can tell user errors from defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Requested marketplace is not in the catalog
    UnsupportedMarketplace,
    /// Facts violate the marketplace's required-field rules
    Validation,
    /// Catalog template and renderer disagree; a programming defect
    TemplateDefect,
    /// Generation task aborted unexpectedly
    Internal,
}

/// Why content could not be generated for one marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ListingFailure {
    /// Failure category
    kind: FailureKind,
    /// Human-readable reason
    reason: String,
    /// Validation messages in check order; empty for non-validation failures
    validation_errors: Vec<String>,
}

impl ListingFailure {
    /// Failure for a marketplace key missing from the catalog.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::UnsupportedMarketplace,
            reason: reason.into(),
            validation_errors: Vec::new(),
        }
    }

    /// Failure carrying the full, ordered list of validation issues.
    ///
    /// # Examples
    ///
    /// ```
    /// use listwright_core::{ListingFailure, ValidationIssue};
    ///
    /// let failure = ListingFailure::validation(&[
    ///     ValidationIssue::BrandRequired,
    ///     ValidationIssue::PriceRequired,
    /// ]);
    /// assert_eq!(
    ///     failure.reason(),
    ///     "Validation failed: Brand name is required for this marketplace; \
    ///      Price is required for this marketplace"
    /// );
    /// assert_eq!(failure.validation_errors().len(), 2);
    /// ```
    pub fn validation(issues: &[ValidationIssue]) -> Self {
        let validation_errors: Vec<String> = issues.iter().map(ToString::to_string).collect();
        Self {
            kind: FailureKind::Validation,
            reason: format!("Validation failed: {}", validation_errors.join("; ")),
            validation_errors,
        }
    }

    /// Failure caused by an aborted generation task.
    pub fn internal(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Internal,
            reason: reason.into(),
            validation_errors: Vec::new(),
        }
    }

    /// Failure caused by a template/renderer inconsistency.
    pub fn template_defect(reason: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::TemplateDefect,
            reason: reason.into(),
            validation_errors: Vec::new(),
        }
    }
}

/// Result of generating content for one marketplace. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MarketplaceOutcome {
    /// Listing generated
    Success(ListingContent),
    /// Listing not generated
    Failure(ListingFailure),
}

impl MarketplaceOutcome {
    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The generated content, if successful.
    pub fn content(&self) -> Option<&ListingContent> {
        match self {
            Self::Success(content) => Some(content),
            Self::Failure(_) => None,
        }
    }

    /// The failure, if unsuccessful.
    pub fn failure(&self) -> Option<&ListingFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

/// Caller-level classification of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BatchStatus {
    /// Every requested marketplace succeeded
    AllSucceeded,
    /// Some succeeded, these keys failed
    Partial {
        /// Failed marketplace keys in request order
        failed: Vec<String>,
    },
    /// Nothing succeeded; treat as a fatal batch failure
    AllFailed,
}

/// Outcomes for every requested marketplace.
///
/// The wrapper itself never fails: `overall_success` is always `true`.
/// Use [`BatchResult::status`] to distinguish all / partial / none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BatchResult {
    /// Always `true`; the batch call did not fail outright
    overall_success: bool,
    /// Outcomes keyed by marketplace, in request order
    outcomes: IndexMap<String, MarketplaceOutcome>,
}

impl BatchResult {
    /// Wrap a populated outcome map.
    pub fn new(outcomes: IndexMap<String, MarketplaceOutcome>) -> Self {
        Self {
            overall_success: true,
            outcomes,
        }
    }

    /// Consume the result, yielding the outcome map.
    pub fn into_outcomes(self) -> IndexMap<String, MarketplaceOutcome> {
        self.outcomes
    }

    /// Successful listings keyed by marketplace.
    pub fn successes(&self) -> impl Iterator<Item = (&String, &ListingContent)> {
        self.outcomes
            .iter()
            .filter_map(|(key, outcome)| outcome.content().map(|content| (key, content)))
    }

    /// Failures keyed by marketplace.
    pub fn failures(&self) -> impl Iterator<Item = (&String, &ListingFailure)> {
        self.outcomes
            .iter()
            .filter_map(|(key, outcome)| outcome.failure().map(|failure| (key, failure)))
    }

    /// Keys of failed marketplaces in request order.
    pub fn failed_keys(&self) -> Vec<String> {
        self.failures().map(|(key, _)| key.clone()).collect()
    }

    /// Three-way classification: all succeeded, partial, or none succeeded.
    ///
    /// An empty batch has zero successes and is therefore `AllFailed`.
    pub fn status(&self) -> BatchStatus {
        let failed = self.failed_keys();
        if failed.len() == self.outcomes.len() {
            BatchStatus::AllFailed
        } else if failed.is_empty() {
            BatchStatus::AllSucceeded
        } else {
            BatchStatus::Partial { failed }
        }
    }

    /// User-facing summary line for the batch, `None` when everything succeeded.
    pub fn summary(&self) -> Option<String> {
        match self.status() {
            BatchStatus::AllSucceeded => None,
            BatchStatus::AllFailed => Some(
                "Failed to generate content for all marketplaces. \
                 Please check your input and try again."
                    .to_string(),
            ),
            BatchStatus::Partial { failed } => Some(format!(
                "Generated content with {} errors. Failed for: {}",
                failed.len(),
                failed.join(", ")
            )),
        }
    }
}
