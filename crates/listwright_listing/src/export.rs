//! Export renderings of a successful listing.

use listwright_core::ListingContent;
use listwright_error::{JsonError, ListwrightResult};
use std::fmt::Write;

/// Pretty-printed JSON of the listing fields.
///
/// # Errors
///
/// Returns a `JsonError` if serialization fails.
pub fn export_json(content: &ListingContent) -> ListwrightResult<String> {
    serde_json::to_string_pretty(content)
        .map_err(|e| JsonError::new(format!("Failed to serialize listing: {}", e)).into())
}

/// Markdown document: title, description, then features, specifications
/// and keywords, each section only when non-empty.
///
/// # Examples
///
/// ```
/// use listwright_core::ListingContent;
/// use listwright_listing::export_markdown;
///
/// let content = ListingContent::builder()
///     .marketplace("etsy")
///     .marketplace_name("Etsy")
///     .title("Mug")
///     .description("A mug.")
///     .bullet_points(vec!["Ceramic".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     export_markdown(&content),
///     "# Mug\n\nA mug.\n\n## Key Features\n- Ceramic\n\n"
/// );
/// ```
pub fn export_markdown(content: &ListingContent) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write!(out, "# {}\n\n{}\n\n", content.title(), content.description());

    if !content.bullet_points().is_empty() {
        out.push_str("## Key Features\n");
        for bullet in content.bullet_points() {
            let _ = writeln!(out, "- {}", bullet);
        }
        out.push('\n');
    }

    if !content.specifications().is_empty() {
        out.push_str("## Specifications\n");
        for (key, value) in content.specifications() {
            let _ = writeln!(out, "- **{}:** {}", key, value);
        }
        out.push('\n');
    }

    if !content.keywords().is_empty() {
        let _ = writeln!(out, "## SEO Keywords\n{}", content.keywords().join(", "));
    }

    out
}
