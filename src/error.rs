use thiserror::Error;

/// Everything a fetch boundary can report. Every view consumes this through
/// [`crate::event::FetchState`]; there is no separate alerting path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned HTTP {status}")]
    Status { status: u16 },

    #[error("no data for this symbol/range")]
    Empty,

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        FetchError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_render_with_code() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "server returned HTTP 503");
    }

    #[test]
    fn empty_is_its_own_kind() {
        assert_ne!(FetchError::Empty, FetchError::Status { status: 404 });
    }
}
