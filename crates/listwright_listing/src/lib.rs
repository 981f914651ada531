//! The Listwright listing pipeline.
//!
//! Product facts from a form, an optional photo analysis and an optional
//! voice-note transcript are merged into one [`NormalizedFactSet`], which is
//! then rendered into a listing for every selected marketplace.
//!
//! ```text
//! FormFacts + VisionFacts + transcript
//!         │ SourceMerger (one text-generation call)
//!         ▼
//! NormalizedFactSet
//!         │ BatchOrchestrator
//!         ▼
//! MarketplaceGenerator per key: RuleCatalog → validate → render → keywords
//!         ▼
//! BatchResult
//! ```
//!
//! [`NormalizedFactSet`]: listwright_core::NormalizedFactSet

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod catalog;
mod export;
mod extraction;
mod generator;
mod keywords;
mod merger;
mod precedence;
mod renderer;
mod validator;
mod vision;

pub use batch::BatchOrchestrator;
pub use catalog::RuleCatalog;
pub use export::{export_json, export_markdown};
pub use extraction::parse_json_reply;
pub use generator::MarketplaceGenerator;
pub use keywords::{GENERIC_TERMS, HeuristicKeywords, KeywordExtractor, MAX_KEYWORDS};
pub use merger::{MergeBrief, MergeSettings, SourceMerger};
pub use precedence::{FieldPrecedence, InferredFacts, TRANSCRIPT_FEATURE_LINES, transcript_features};
pub use renderer::{
    RenderedText, TemplateVariables, format_bullets, format_specifications, render, substitute,
};
pub use validator::validate;
pub use vision::{ANALYSIS_KEY, VisionFacts};
