use forsight::operation_catalog::OperationCatalog;

#[test]
/// Verifies the fixed catalog shape: nine operations in stable order.
fn catalog_lists_nine_operations_in_stable_order() {
    let catalog = OperationCatalog::new();
    let ids: Vec<&str> = catalog.operations().iter().map(|op| op.id).collect();
    assert_eq!(
        ids,
        vec![
            "time-series",
            "valuation",
            "correlation",
            "volatility",
            "ai-prediction",
            "portfolio",
            "technical",
            "sentiment",
            "comparison",
        ]
    );
}

#[test]
/// Verifies category grouping: eight distinct categories, with the two
/// technical-analysis operations sharing one.
fn categories_group_operations() {
    let catalog = OperationCatalog::new();
    let categories = catalog.categories();
    assert_eq!(categories.len(), 8);

    let grouped: usize = categories
        .iter()
        .map(|c| catalog.by_category(c).len())
        .sum();
    assert_eq!(grouped, catalog.len());

    let technical = catalog.by_category("Technical Analysis");
    assert_eq!(technical.len(), 2);
}

#[test]
/// Verifies every descriptor carries the fields the chart workspace
/// header renders.
fn descriptors_are_render_complete() {
    let catalog = OperationCatalog::new();
    for op in catalog.operations() {
        assert!(!op.id.is_empty());
        assert!(!op.title.is_empty());
        assert!(!op.description.is_empty());
        assert!(!op.icon.is_empty());
        assert!(!op.category.is_empty());
        assert!(!op.features.is_empty());
    }
}
