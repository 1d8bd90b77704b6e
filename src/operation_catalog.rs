use ratatui::style::Color;

/// One analysis operation the dashboard can open a chart workspace for.
/// The catalog is static; the descriptor travels with the navigation state
/// once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: Color,
    pub category: &'static str,
    pub features: &'static [&'static str],
}

static OPERATIONS: [Operation; 9] = [
    Operation {
        id: "time-series",
        title: "Time Series Analysis",
        description: "Analyze historical price trends, patterns, and seasonality over time",
        icon: "↗",
        color: Color::Indexed(99),
        category: "Technical Analysis",
        features: &["Historical Trends", "Pattern Recognition", "Seasonality Detection"],
    },
    Operation {
        id: "valuation",
        title: "Valuation Metrics",
        description: "Comprehensive valuation analysis including P/E, P/B, EV/EBITDA ratios",
        icon: "◎",
        color: Color::Indexed(204),
        category: "Fundamental Analysis",
        features: &["P/E Ratio", "P/B Ratio", "EV/EBITDA", "Dividend Yield"],
    },
    Operation {
        id: "correlation",
        title: "Correlation Analysis",
        description: "Discover relationships between BIST stocks and global market indices",
        icon: "∿",
        color: Color::Indexed(45),
        category: "Statistical Analysis",
        features: &["Stock Correlations", "Index Relationships", "Sector Analysis"],
    },
    Operation {
        id: "volatility",
        title: "Volatility & Risk",
        description: "Measure market volatility, risk metrics, and price fluctuations",
        icon: "⚡",
        color: Color::Indexed(214),
        category: "Risk Analysis",
        features: &["Historical Volatility", "Beta Analysis", "VaR Calculation"],
    },
    Operation {
        id: "ai-prediction",
        title: "AI Price Prediction",
        description: "Multi-model ML predictions with Random Forest, XGBoost, and LSTM",
        icon: "◈",
        color: Color::Indexed(122),
        category: "AI & Machine Learning",
        features: &["3 ML Models", "Ensemble Predictions", "Confidence Scores"],
    },
    Operation {
        id: "portfolio",
        title: "Portfolio Optimization",
        description: "Optimize portfolio allocation using Modern Portfolio Theory",
        icon: "◔",
        color: Color::Indexed(216),
        category: "Portfolio Management",
        features: &["Efficient Frontier", "Risk-Return Optimization", "Asset Allocation"],
    },
    Operation {
        id: "technical",
        title: "Technical Indicators",
        description: "Advanced technical analysis with 40+ indicators and oscillators",
        icon: "▤",
        color: Color::Indexed(211),
        category: "Technical Analysis",
        features: &["RSI", "MACD", "Bollinger Bands", "Moving Averages"],
    },
    Operation {
        id: "sentiment",
        title: "Market Sentiment",
        description: "Analyze market sentiment using news, social media, and trading volume",
        icon: "↘",
        color: Color::Indexed(183),
        category: "Sentiment Analysis",
        features: &["News Analysis", "Volume Trends", "Market Mood"],
    },
    Operation {
        id: "comparison",
        title: "Multi-Symbol Comparison",
        description: "Compare multiple stocks side-by-side with normalized metrics",
        icon: "≍",
        color: Color::Indexed(182),
        category: "Comparative Analysis",
        features: &["Side-by-Side Comparison", "Normalized Charts", "Performance Metrics"],
    },
];

#[derive(Debug, Clone, Default)]
pub struct OperationCatalog;

impl OperationCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn operations(&self) -> &'static [Operation] {
        &OPERATIONS
    }

    pub fn len(&self) -> usize {
        OPERATIONS.len()
    }

    pub fn is_empty(&self) -> bool {
        OPERATIONS.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Operation> {
        OPERATIONS.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'static Operation> {
        OPERATIONS.iter().find(|op| op.id == id)
    }

    /// Distinct categories in first-appearance order (the grouping the
    /// operations screen renders under).
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for op in &OPERATIONS {
            if !seen.contains(&op.category) {
                seen.push(op.category);
            }
        }
        seen
    }

    pub fn by_category(&self, category: &str) -> Vec<&'static Operation> {
        OPERATIONS.iter().filter(|op| op.category == category).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_nine_operations() {
        let catalog = OperationCatalog::new();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.get(0).unwrap().id, "time-series");
        assert_eq!(catalog.get(8).unwrap().id, "comparison");
        assert!(catalog.get(9).is_none());
    }

    #[test]
    fn categories_are_distinct_and_ordered() {
        let catalog = OperationCatalog::new();
        let categories = catalog.categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0], "Technical Analysis");
        // Technical Analysis appears twice in the catalog but once here.
        assert_eq!(
            categories.iter().filter(|c| **c == "Technical Analysis").count(),
            1
        );
    }

    #[test]
    fn category_lookup_groups_both_technical_operations() {
        let catalog = OperationCatalog::new();
        let technical = catalog.by_category("Technical Analysis");
        assert_eq!(technical.len(), 2);
        assert_eq!(technical[0].id, "time-series");
        assert_eq!(technical[1].id, "technical");
    }

    #[test]
    fn id_lookup_finds_operations() {
        let catalog = OperationCatalog::new();
        assert_eq!(
            catalog.get_by_id("ai-prediction").unwrap().title,
            "AI Price Prediction"
        );
        assert!(catalog.get_by_id("nope").is_none());
    }
}
