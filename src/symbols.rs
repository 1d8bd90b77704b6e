/// The session-long symbol catalog, fetched once from `GET /symbols` and
/// filtered locally on every keystroke after that.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    symbols: Vec<String>,
}

impl SymbolCatalog {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn all(&self) -> &[String] {
        &self.symbols
    }

    /// Ordered subsequence of symbols whose text contains `query`,
    /// case-insensitively. The empty query matches everything; catalog order
    /// is always preserved.
    pub fn filter(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return self.symbols.clone();
        }
        let needle = query.to_lowercase();
        self.symbols
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Same as [`filter`](Self::filter) but capped to the caller's display
    /// budget (suggestion dropdowns, catalog previews).
    pub fn filter_limited(&self, query: &str, limit: usize) -> Vec<String> {
        let mut matches = self.filter(query);
        matches.truncate(limit);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SymbolCatalog {
        SymbolCatalog::new(vec![
            "AKBNK".to_string(),
            "GARAN".to_string(),
            "THYAO".to_string(),
            "XU100".to_string(),
        ])
    }

    #[test]
    fn empty_query_returns_full_catalog_in_order() {
        assert_eq!(catalog().filter(""), vec!["AKBNK", "GARAN", "THYAO", "XU100"]);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let c = SymbolCatalog::new(vec!["THYAO".to_string(), "AKBNK".to_string()]);
        assert_eq!(c.filter("hy"), vec!["THYAO"]);
        assert_eq!(c.filter("THY"), vec!["THYAO"]);
        assert_eq!(c.filter("zz"), Vec::<String>::new());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        assert_eq!(catalog().filter("a"), vec!["AKBNK", "GARAN", "THYAO"]);
    }

    #[test]
    fn limited_filter_truncates() {
        assert_eq!(catalog().filter_limited("a", 2), vec!["AKBNK", "GARAN"]);
        assert_eq!(catalog().filter_limited("", 10).len(), 4);
    }
}
