use souq_catalog::{Catalog, CatalogError, Language, PriceRange, parse_amount};

fn shipped_catalog() -> Catalog {
    Catalog::from_json(include_str!("../../souq-web/static/data/products.json"))
        .expect("shipped catalog should parse")
}

#[test]
fn shipped_catalog_satisfies_render_invariants() {
    let catalog = shipped_catalog();
    assert!(!catalog.is_empty(), "shipped catalog should have products");
    for product in &catalog.products {
        assert!(!product.name.is_empty(), "every product needs a name");
        assert!(
            !product.options.is_empty(),
            "every product needs at least one option"
        );
        assert!(
            !product.localized_name(Language::Ar).is_empty(),
            "shipped data is fully bilingual"
        );
    }
}

#[test]
fn shipped_prices_all_parse_with_a_currency() {
    let catalog = shipped_catalog();
    for product in &catalog.products {
        for option in &product.options {
            assert!(
                parse_amount(&option.price).is_some(),
                "price should parse: {}",
                option.price
            );
        }
        let range = PriceRange::of(&product.options).expect("range should exist");
        assert!(!range.currency.is_empty());
        assert!(range.min <= range.max);
    }
}

#[test]
fn catalog_round_trips_through_serde() {
    let catalog = shipped_catalog();
    let saved = serde_json::to_string(&catalog).unwrap();
    let restored: Catalog = serde_json::from_str(&saved).unwrap();
    assert_eq!(restored, catalog, "round-trip mismatch");
}

#[test]
fn normalizer_excludes_nameless_and_optionless_records() {
    let json = r#"[
        { "Name": "Ghost" },
        { "Description": "no name at all", "options": [{ "price": "5 $" }] },
        { "Name": "Real", "options": [{ "name": "Only", "price": "5 $" }] }
    ]"#;
    let catalog = Catalog::from_json(json).expect("array should parse");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.products[0].name, "Real");
}

#[test]
fn non_array_payload_is_an_error_not_a_panic() {
    let err = Catalog::from_json("{}").unwrap_err();
    assert!(matches!(err, CatalogError::NotAnArray));
    assert!(!err.to_string().is_empty());
}
