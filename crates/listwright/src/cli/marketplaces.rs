//! `listwright marketplaces`.

use listwright::RuleCatalog;

/// Print the built-in catalog in catalog order.
pub fn list_marketplaces() {
    let catalog = RuleCatalog::builtin();
    println!(
        "{:<12} {:<16} {:>9} {:>8}  requires",
        "key", "name", "title max", "bullets"
    );
    for rule in catalog.iter() {
        let bullets = rule
            .max_bullets()
            .limit()
            .map_or_else(|| "any".to_string(), |n| n.to_string());

        let mut requires = Vec::new();
        if *rule.requires_brand() {
            requires.push("brand");
        }
        if *rule.requires_price() {
            requires.push("price");
        }
        if *rule.requires_category() {
            requires.push("category");
        }
        if *rule.requires_technical_specs() {
            requires.push("specs");
        }

        println!(
            "{:<12} {:<16} {:>9} {:>8}  {}",
            rule.key(),
            rule.display_name(),
            rule.max_title_length(),
            bullets,
            if requires.is_empty() { "-".to_string() } else { requires.join(", ") }
        );
    }
}
