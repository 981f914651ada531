//! Test utilities for the facade crate.

pub mod mock_studio;

#[allow(unused_imports)]
pub use mock_studio::{MockStudio, Scripted};

use listwright::FormFacts;
use rust_decimal::Decimal;

/// Form facts that satisfy every built-in marketplace rule.
#[allow(dead_code)]
pub fn complete_form() -> FormFacts {
    FormFacts {
        brand_name: "Acme".into(),
        product_name: "Wireless Mouse".into(),
        category: "Electronics".into(),
        description: "Ergonomic mouse for everyday use".into(),
        price: Some(Decimal::new(1999, 2)),
        features: vec![
            "2.4GHz wireless".into(),
            "USB-C charging".into(),
            "Silent clicks".into(),
        ],
        usps: vec!["Two-year warranty".into()],
        ..Default::default()
    }
}
