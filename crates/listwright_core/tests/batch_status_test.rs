//! Tests for batch classification and outcome shapes.

use indexmap::IndexMap;
use listwright_core::{
    BatchResult, BatchStatus, FailureKind, ListingContent, ListingFailure, MarketplaceOutcome,
    ValidationIssue,
};

fn success(key: &str) -> MarketplaceOutcome {
    MarketplaceOutcome::Success(
        ListingContent::builder()
            .marketplace(key)
            .marketplace_name(key.to_uppercase())
            .title("Title")
            .description("Description")
            .build()
            .expect("Failed to build listing content"),
    )
}

fn failure() -> MarketplaceOutcome {
    MarketplaceOutcome::Failure(ListingFailure::validation(&[ValidationIssue::PriceRequired]))
}

fn batch(entries: Vec<(&str, MarketplaceOutcome)>) -> BatchResult {
    let outcomes: IndexMap<String, MarketplaceOutcome> = entries
        .into_iter()
        .map(|(key, outcome)| (key.to_string(), outcome))
        .collect();
    BatchResult::new(outcomes)
}

#[test]
fn test_all_succeeded() {
    let result = batch(vec![("amazon_in", success("amazon_in")), ("meesho", success("meesho"))]);
    assert_eq!(result.status(), BatchStatus::AllSucceeded);
    assert!(result.summary().is_none());
    assert!(*result.overall_success());
}

#[test]
fn test_partial_failure_lists_failed_keys_in_request_order() {
    let result = batch(vec![
        ("flipkart", failure()),
        ("amazon_in", success("amazon_in")),
        ("etsy", failure()),
    ]);

    assert_eq!(
        result.status(),
        BatchStatus::Partial {
            failed: vec!["flipkart".to_string(), "etsy".to_string()]
        }
    );
    assert_eq!(
        result.summary().unwrap(),
        "Generated content with 2 errors. Failed for: flipkart, etsy"
    );
    assert_eq!(result.successes().count(), 1);
}

#[test]
fn test_all_failed_still_reports_overall_success() {
    let result = batch(vec![("amazon_in", failure()), ("meesho", failure())]);
    assert_eq!(result.status(), BatchStatus::AllFailed);
    assert!(*result.overall_success());
    assert!(result.summary().unwrap().starts_with("Failed to generate content for all"));
}

#[test]
fn test_empty_batch_counts_as_all_failed() {
    let result = batch(Vec::new());
    assert_eq!(result.status(), BatchStatus::AllFailed);
}

#[test]
fn test_outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(failure()).unwrap();
    assert_eq!(json["status"], "failure");
    assert_eq!(json["kind"], "validation");
    assert_eq!(
        json["validation_errors"][0],
        "Price is required for this marketplace"
    );

    let json = serde_json::to_value(success("etsy")).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["marketplace"], "etsy");
}

#[test]
fn test_failure_constructors_set_kind() {
    assert_eq!(
        *ListingFailure::unsupported("No template found for marketplace: ebay").kind(),
        FailureKind::UnsupportedMarketplace
    );
    let defect = ListingFailure::template_defect("Missing required template variable: color");
    assert_eq!(*defect.kind(), FailureKind::TemplateDefect);
    assert!(defect.validation_errors().is_empty());
}
