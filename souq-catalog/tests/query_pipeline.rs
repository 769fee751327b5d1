use souq_catalog::{
    Catalog, CatalogQuery, Language, SortMode, apply, categories, price_sort_key,
};

fn shipped_catalog() -> Catalog {
    Catalog::from_json(include_str!("../../souq-web/static/data/products.json"))
        .expect("shipped catalog should parse")
}

fn query(lang: Language) -> CatalogQuery {
    CatalogQuery {
        lang,
        ..CatalogQuery::default()
    }
}

#[test]
fn category_filters_partition_the_catalog() {
    let catalog = shipped_catalog();
    for lang in [Language::En, Language::Ar] {
        let all = apply(&catalog.products, &query(lang));
        assert_eq!(all.len(), catalog.len(), "All must cover the catalog");

        let mut covered = 0;
        for cat in categories(&catalog.products, lang) {
            let filtered = apply(
                &catalog.products,
                &CatalogQuery {
                    category: Some(cat.clone()),
                    ..query(lang)
                },
            );
            assert!(
                filtered.iter().all(|p| p.localized_category(lang) == cat),
                "filter must only keep matching items"
            );
            covered += filtered.len();
        }
        assert_eq!(
            covered,
            catalog.len(),
            "union of category filters must cover the catalog"
        );
    }
}

#[test]
fn hopeless_search_yields_an_empty_result() {
    let catalog = shipped_catalog();
    let derived = apply(
        &catalog.products,
        &CatalogQuery {
            search: "zzz-no-such-product-zzz".to_string(),
            ..query(Language::En)
        },
    );
    assert!(derived.is_empty());
}

#[test]
fn search_is_language_scoped() {
    let catalog = shipped_catalog();
    let arabic_hit = apply(
        &catalog.products,
        &CatalogQuery {
            search: "ميوزك".to_string(),
            ..query(Language::Ar)
        },
    );
    assert_eq!(arabic_hit.len(), 1);
    assert_eq!(arabic_hit[0].name, "Music Plus");
}

#[test]
fn ascending_and_descending_price_orders_mirror() {
    let catalog = shipped_catalog();
    let asc = apply(
        &catalog.products,
        &CatalogQuery {
            sort: SortMode::PriceAsc,
            ..query(Language::En)
        },
    );
    let desc = apply(
        &catalog.products,
        &CatalogQuery {
            sort: SortMode::PriceDesc,
            ..query(Language::En)
        },
    );

    let asc_keys: Vec<f64> = asc.iter().map(price_sort_key).collect();
    let mut desc_keys: Vec<f64> = desc.iter().map(price_sort_key).collect();
    desc_keys.reverse();
    assert_eq!(asc_keys, desc_keys);
    assert!(asc_keys.windows(2).all(|w| w[0] <= w[1]), "asc must ascend");
}

#[test]
fn name_sort_orders_by_active_language() {
    let catalog = shipped_catalog();
    let sorted = apply(
        &catalog.products,
        &CatalogQuery {
            sort: SortMode::NameAsc,
            ..query(Language::En)
        },
    );
    let names: Vec<&str> = sorted
        .iter()
        .map(|p| p.localized_name(Language::En))
        .collect();
    let mut expected = names.clone();
    expected.sort_unstable();
    assert_eq!(names, expected);
}

#[test]
fn filters_compose_with_sorting() {
    let catalog = shipped_catalog();
    let derived = apply(
        &catalog.products,
        &CatalogQuery {
            category: Some("البث".to_string()),
            search: "شهر".to_string(),
            sort: SortMode::PriceAsc,
            lang: Language::Ar,
        },
    );
    assert!(!derived.is_empty());
    let keys: Vec<f64> = derived.iter().map(price_sort_key).collect();
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    assert!(
        derived
            .iter()
            .all(|p| p.localized_category(Language::Ar) == "البث")
    );
}
