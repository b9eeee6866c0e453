//! Station fetch error types.

/// Errors that can occur when fetching station rows.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check VELIB_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Configured token can't be sent as a header
    #[error("invalid API token format")]
    InvalidToken,

    /// Offline source could not be loaded
    #[error("snapshot source: {message}")]
    Snapshot { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = FetchError::Json {
            message: "missing field `results`".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: missing field `results`");

        assert_eq!(
            FetchError::Unauthorized.to_string(),
            "unauthorized: check VELIB_API_KEY"
        );
    }
}
