use forsight::symbols::SymbolCatalog;

fn catalog() -> SymbolCatalog {
    SymbolCatalog::new(vec![
        "AEFES".to_string(),
        "AKBNK".to_string(),
        "GARAN".to_string(),
        "THYAO".to_string(),
        "XU100".to_string(),
    ])
}

#[test]
/// Verifies the empty query returns the whole catalog in its original order.
fn empty_query_is_identity() {
    assert_eq!(
        catalog().filter(""),
        vec!["AEFES", "AKBNK", "GARAN", "THYAO", "XU100"]
    );
}

#[test]
/// Verifies ["THYAO","AKBNK"] filtered by "hy" keeps only THYAO,
/// case-insensitively.
fn substring_match_is_case_insensitive() {
    let c = SymbolCatalog::new(vec!["THYAO".to_string(), "AKBNK".to_string()]);
    assert_eq!(c.filter("hy"), vec!["THYAO"]);
    assert_eq!(c.filter("HY"), vec!["THYAO"]);
    assert_eq!(c.filter("akb"), vec!["AKBNK"]);
}

#[test]
/// Verifies matches keep catalog order regardless of where the substring
/// sits inside each symbol.
fn matches_preserve_catalog_order() {
    assert_eq!(catalog().filter("A"), vec!["AEFES", "AKBNK", "GARAN", "THYAO"]);
}

#[test]
/// Verifies filtering is pure: the same query always yields the same rows
/// and never mutates the catalog.
fn refiltering_is_stable() {
    let c = catalog();
    let first = c.filter("an");
    let second = c.filter("an");
    assert_eq!(first, second);
    assert_eq!(c.all().len(), 5);
}

#[test]
/// Verifies caller display caps truncate without reordering.
fn limit_caps_the_result() {
    assert_eq!(catalog().filter_limited("A", 2), vec!["AEFES", "AKBNK"]);
    assert!(catalog().filter_limited("zzz", 5).is_empty());
}
