//! Batch orchestration across the selected marketplaces.

use crate::generator::MarketplaceGenerator;
use indexmap::IndexMap;
use listwright_core::{BatchResult, BatchStatus, ListingFailure, MarketplaceOutcome, NormalizedFactSet};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, instrument, warn};

/// Runs the generator for every requested marketplace and aggregates.
///
/// Marketplaces are independent; a failure for one never affects another.
///
/// # Examples
///
/// ```
/// use listwright_core::{BatchStatus, NormalizedFactSet};
/// use listwright_listing::BatchOrchestrator;
///
/// let facts = NormalizedFactSet::builder()
///     .product_name("Kettle")
///     .description("Boils water")
///     .features(vec!["1.7L".to_string()])
///     .price(Some(rust_decimal::Decimal::new(20, 0)))
///     .build()
///     .unwrap();
///
/// let batch = BatchOrchestrator::default().generate_all(&facts, &["shopify", "ebay"]);
/// assert!(*batch.overall_success());
/// assert_eq!(batch.status(), BatchStatus::Partial { failed: vec!["ebay".to_string()] });
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchOrchestrator {
    generator: MarketplaceGenerator,
}

impl BatchOrchestrator {
    /// Orchestrator around `generator`.
    pub fn new(generator: MarketplaceGenerator) -> Self {
        Self { generator }
    }

    /// The per-marketplace generator.
    pub fn generator(&self) -> &MarketplaceGenerator {
        &self.generator
    }

    /// Generate every requested marketplace in turn.
    #[instrument(skip(self, facts, keys), fields(count = keys.len()))]
    pub fn generate_all<S: AsRef<str>>(&self, facts: &NormalizedFactSet, keys: &[S]) -> BatchResult {
        let outcomes = keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                (key.to_string(), self.generator.generate_one(facts, key))
            })
            .collect();
        finish(outcomes)
    }

    /// Generate every requested marketplace concurrently.
    ///
    /// Outcomes are identical to [`generate_all`](Self::generate_all) and
    /// are stored in request order.
    #[instrument(skip(self, facts, keys), fields(count = keys.len()))]
    pub async fn generate_all_concurrent<S: AsRef<str>>(
        &self,
        facts: Arc<NormalizedFactSet>,
        keys: &[S],
    ) -> BatchResult {
        let mut tasks = JoinSet::new();
        for (index, key) in keys.iter().enumerate() {
            let key = key.as_ref().to_string();
            let generator = self.generator.clone();
            let facts = Arc::clone(&facts);
            tasks.spawn_blocking(move || {
                let outcome = generator.generate_one(&facts, &key);
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<MarketplaceOutcome>> = vec![None; keys.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(e) => error!(error = %e, "Generation task aborted"),
            }
        }

        let outcomes = keys
            .iter()
            .zip(slots)
            .map(|(key, slot)| {
                let outcome = slot.unwrap_or_else(|| {
                    MarketplaceOutcome::Failure(ListingFailure::internal(
                        "Generation task aborted unexpectedly",
                    ))
                });
                (key.as_ref().to_string(), outcome)
            })
            .collect();
        finish(outcomes)
    }
}

fn finish(outcomes: IndexMap<String, MarketplaceOutcome>) -> BatchResult {
    let batch = BatchResult::new(outcomes);
    match batch.status() {
        BatchStatus::AllSucceeded => {
            info!(count = batch.outcomes().len(), "Generated all marketplaces")
        }
        BatchStatus::Partial { ref failed } => warn!(
            succeeded = batch.outcomes().len() - failed.len(),
            failed = ?failed,
            "Partial batch failure"
        ),
        BatchStatus::AllFailed => warn!(count = batch.outcomes().len(), "Every marketplace failed"),
    }
    batch
}
