use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

use crate::error::FetchError;
use crate::model::range::RangeToken;

use super::types::{CompareRequest, ComparisonResponse, SymbolDetail, TimeRangeResponse};

/// Thin async client for the ForSight analytics API. One instance per
/// session, shared across fetch tasks behind an `Arc`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, request_timeout_ms: u64) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(request_timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| FetchError::Transport("base URL cannot be a base".to_string()))?;
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// `GET /symbols`: the full ordered symbol catalog.
    pub async fn symbols(&self) -> Result<Vec<String>, FetchError> {
        let url = self.endpoint(&["symbols"])?;
        tracing::debug!(%url, "fetching symbol catalog");
        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    /// `GET /symbol/{id}`: statistics, prediction, and the full bar set.
    pub async fn symbol_detail(&self, symbol: &str) -> Result<SymbolDetail, FetchError> {
        let url = self.endpoint(&["symbol", symbol])?;
        tracing::debug!(%url, symbol, "fetching symbol detail");
        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    /// `GET /time-range/{id}?range={token}`. An in-range but empty series is
    /// reported as `FetchError::Empty` so views render the no-data state.
    pub async fn time_range(
        &self,
        symbol: &str,
        range: RangeToken,
    ) -> Result<TimeRangeResponse, FetchError> {
        let mut url = self.endpoint(&["time-range", symbol])?;
        url.query_pairs_mut().append_pair("range", range.as_str());
        tracing::debug!(%url, symbol, range = %range, "fetching time range");
        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp)?;
        let body: TimeRangeResponse = resp.json().await?;
        if body.data.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(body)
    }

    /// `POST /compare`. Fewer than two distinct symbols is a no-op: no
    /// request goes out and the caller gets `Ok(None)`.
    pub async fn compare(
        &self,
        symbols: &[String],
    ) -> Result<Option<ComparisonResponse>, FetchError> {
        let Some(request) = CompareRequest::from_symbols(symbols) else {
            tracing::debug!(count = symbols.len(), "compare skipped, need 2+ symbols");
            return Ok(None);
        };
        let url = self.endpoint(&["compare"])?;
        tracing::debug!(%url, symbols = ?request.symbols, "requesting comparison");
        let resp = self.http.post(url).json(&request).send().await?;
        let resp = check_status(resp)?;
        Ok(Some(resp.json().await?))
    }
}

/// The backend answers "symbol exists but no rows" with 404; that is the
/// empty-result case of the error taxonomy, not a generic status failure.
fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::Empty);
    }
    Err(FetchError::Status {
        status: status.as_u16(),
    })
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim_end_matches('/');
    Url::parse(trimmed).with_context(|| format!("invalid API base URL '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_the_base_path() {
        let client = ApiClient::new("http://localhost:5000/api/", 5_000).unwrap();
        let url = client.endpoint(&["time-range", "THYAO"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/time-range/THYAO");
        let url = client.endpoint(&["symbols"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/symbols");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(ApiClient::new("not a url", 5_000).is_err());
        assert!(ApiClient::new("", 5_000).is_err());
    }

    #[test]
    fn compare_with_too_few_symbols_never_touches_the_network() {
        // Unroutable base URL: the call can only succeed via the no-op path.
        let client = ApiClient::new("http://forsight.invalid/api", 10).unwrap();
        let result =
            tokio_test::block_on(client.compare(std::slice::from_ref(&"THYAO".to_string())));
        assert!(result.unwrap().is_none());
    }
}
