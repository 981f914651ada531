//! Core data types for the Listwright marketplace listing pipeline.
//!
//! This crate provides the data model shared by every stage: the form input,
//! the normalized fact set, marketplace rules, per-marketplace outcomes, and
//! the request/response shapes of the upstream capability calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod facts;
mod media;
mod outcome;
mod request;
mod rule;
mod spec_value;
mod validation;

pub use facts::{FormFacts, NormalizedFactSet, NormalizedFactSetBuilder, Specifications};
pub use media::{AudioInput, ImageAnalysis, ImageInput, Transcript};
pub use outcome::{
    BatchResult, BatchStatus, FailureKind, ListingContent, ListingContentBuilder, ListingFailure,
    MarketplaceOutcome,
};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use rule::{MarketplaceRule, MaxBullets};
pub use spec_value::SpecValue;
pub use validation::ValidationIssue;
