use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::model::range::RangeToken;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
    pub default_symbol: String,
    pub default_range: String,
    /// Cap on search-suggestion rows in the analysis workspace.
    pub suggestion_limit: usize,
    /// Cap on the symbol dropdown in the chart workspace.
    pub catalog_preview_limit: usize,
    /// Window of most-recent bars shown in the historical data table.
    pub table_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl UiConfig {
    pub fn default_range_token(&self) -> Result<RangeToken> {
        self.default_range
            .parse()
            .context("ui.default_range is not a valid range token")
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config: Config =
            toml::from_str(&config_str).context("failed to parse config/default.toml")?;

        // The API base is the one deployment-specific knob; the env wins.
        if let Ok(base) = std::env::var("FORSIGHT_API_BASE") {
            if !base.trim().is_empty() {
                config.api.base_url = base.trim().to_string();
            }
        }

        config
            .ui
            .default_range_token()
            .context("ui.default_range is invalid")?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let toml_str = r#"
[api]
base_url = "http://localhost:5000/api"
request_timeout_ms = 10000

[ui]
refresh_rate_ms = 100
default_symbol = "XU100"
default_range = "1Y"
suggestion_limit = 10
catalog_preview_limit = 20
table_rows = 50

[logging]
level = "info"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.ui.default_symbol, "XU100");
        assert_eq!(config.ui.default_range_token().unwrap(), RangeToken::Y1);
        assert_eq!(config.ui.suggestion_limit, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn bad_range_token_is_rejected() {
        let ui = UiConfig {
            refresh_rate_ms: 100,
            default_symbol: "XU100".to_string(),
            default_range: "2Q".to_string(),
            suggestion_limit: 10,
            catalog_preview_limit: 20,
            table_rows: 50,
        };
        assert!(ui.default_range_token().is_err());
    }
}
