use reqwest::StatusCode;
use serde_json::Value;

use crate::WeatherError;

/// Detail pulled from an error envelope such as
/// `{"error": {"code": 2006, "message": "API key is invalid."}}`.
#[derive(Debug)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Any object under a top-level `error` key counts as an envelope; its
    /// fields are read leniently so an unexpected shape still reads as an error.
    fn from_body(body: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(body).ok()?;
        let error = value.get("error")?.as_object()?;

        let code = error.get("code").and_then(|c| match c {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        });
        let message = error.get("message").and_then(|m| match m {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        });

        Some(Self { code, message })
    }

    fn describe(&self) -> String {
        match (&self.message, &self.code) {
            (Some(msg), Some(code)) => format!("{msg} (code {code})"),
            (Some(msg), None) => msg.clone(),
            (None, Some(code)) => format!("provider error code {code}"),
            (None, None) => "provider returned an error".to_string(),
        }
    }
}

/// Sorts a reply into success or one [`WeatherError`] kind.
///
/// Non-2xx statuses are classified by status alone, with the envelope (or a
/// truncated body) supplying the message. An error envelope inside a 2xx body
/// overrides the status and is always [`WeatherError::Upstream`].
pub fn classify(status: StatusCode, body: &str) -> Result<(), WeatherError> {
    let envelope = ApiError::from_body(body);

    if status.is_success() {
        return match envelope {
            Some(err) => Err(WeatherError::Upstream(err.describe())),
            None => Ok(()),
        };
    }

    let message = match envelope {
        Some(err) => err.describe(),
        None if body.trim().is_empty() => format!("HTTP {status}"),
        None => format!("HTTP {status}: {}", truncate_body(body)),
    };

    Err(match status {
        StatusCode::BAD_REQUEST => WeatherError::BadRequest(message),
        StatusCode::UNAUTHORIZED => WeatherError::AuthenticationFailed(message),
        StatusCode::FORBIDDEN => WeatherError::QuotaExceeded(message),
        _ => WeatherError::Upstream(message),
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
