//! Export renderings of a successful listing.

use listwright_core::{ListingContent, SpecValue, Specifications};
use listwright_listing::{export_json, export_markdown};

fn content() -> ListingContent {
    let mut specs = Specifications::new();
    specs.insert("weight".to_string(), SpecValue::from("85 g"));
    specs.insert("colors".to_string(), SpecValue::List(vec!["Black".into(), "White".into()]));
    ListingContent::builder()
        .marketplace("amazon_in")
        .marketplace_name("Amazon India")
        .title("Acme Mouse")
        .description("Ergonomic mouse")
        .bullet_points(vec!["2.4GHz".to_string(), "USB-C".to_string()])
        .keywords(vec!["acme".to_string(), "mouse".to_string()])
        .specifications(specs)
        .build()
        .unwrap()
}

#[test]
fn test_markdown_sections_in_fixed_order() {
    assert_eq!(
        export_markdown(&content()),
        "# Acme Mouse\n\nErgonomic mouse\n\n\
         ## Key Features\n- 2.4GHz\n- USB-C\n\n\
         ## Specifications\n- **weight:** 85 g\n- **colors:** Black, White\n\n\
         ## SEO Keywords\nacme, mouse\n"
    );
}

#[test]
fn test_markdown_omits_empty_sections() {
    let bare = ListingContent::builder()
        .marketplace("etsy")
        .marketplace_name("Etsy")
        .title("Mug")
        .description("A mug.")
        .build()
        .unwrap();
    assert_eq!(export_markdown(&bare), "# Mug\n\nA mug.\n\n");
}

#[test]
fn test_json_dump_has_all_fields() {
    let json: serde_json::Value = serde_json::from_str(&export_json(&content()).unwrap()).unwrap();
    assert_eq!(json["marketplace"], "amazon_in");
    assert_eq!(json["marketplace_name"], "Amazon India");
    assert_eq!(json["title"], "Acme Mouse");
    assert_eq!(json["bullet_points"][1], "USB-C");
    assert_eq!(json["specifications"]["colors"][0], "Black");
    assert_eq!(json["keywords"].as_array().map(Vec::len), Some(2));
}
