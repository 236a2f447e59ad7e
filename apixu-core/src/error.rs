use thiserror::Error;

/// Why a weather fetch failed. Every variant is terminal for the call that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The provider rejected the query itself (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid API key (HTTP 401).
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// API key exceeded its quota or was disabled (HTTP 403).
    #[error("API key exceeded quota: {0}")]
    QuotaExceeded(String),

    /// Any other non-2xx status, or an error envelope inside a 2xx body.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The body did not have the shape of a current-conditions payload.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// No response was received (DNS, connection, timeout, unreadable body).
    #[error("Transport error: {0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_kind() {
        let err = WeatherError::AuthenticationFailed("API key is invalid.".into());
        assert_eq!(err.to_string(), "Authentication failed: API key is invalid.");

        let err = WeatherError::QuotaExceeded("HTTP 403 Forbidden".into());
        assert!(err.to_string().contains("quota"));
    }
}
