//! Error taxonomy for the HTTP boundary.
//!
//! Every failure of a request against the platform API ends up as one of
//! these variants. Views turn them into a single display string and never
//! retry.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single API request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connect, DNS, TLS, body read).
    #[error("could not reach {url}: {message}")]
    Transport { url: String, message: String },
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    /// The server answered with a non-2xx status, or an envelope with
    /// `success: false`.
    #[error("{}", describe_status(*.status, .message.as_deref()))]
    Status {
        status: Option<StatusCode>,
        message: Option<String>,
    },
    /// The body was not JSON, or not any of the shapes the resource uses.
    #[error("unexpected response shape: {0}")]
    Malformed(String),
    /// The configured base URL cannot be joined with a resource path.
    #[error("invalid API URL '{0}'")]
    InvalidUrl(String),
}

fn describe_status(status: Option<StatusCode>, message: Option<&str>) -> String {
    let mut text = match status {
        Some(status) => format!("server responded with {status}"),
        None => "server reported failure".to_string(),
    };
    if let Some(message) = message.filter(|m| !m.is_empty()) {
        text.push_str(": ");
        text.push_str(message);
    }
    text
}

impl ApiError {
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn status(status: StatusCode, message: Option<String>) -> Self {
        ApiError::Status {
            status: Some(status),
            message,
        }
    }

    /// `success: false` inside a 2xx response.
    pub fn rejected(message: Option<String>) -> Self {
        ApiError::Status {
            status: None,
            message,
        }
    }

    /// Classify a reqwest error.
    pub fn from_reqwest(error: &reqwest::Error, url: &str, timeout: Duration) -> Self {
        if error.is_timeout() {
            return ApiError::Timeout(timeout);
        }
        if error.is_decode() {
            return ApiError::Malformed(error.to_string());
        }
        if let Some(status) = error.status() {
            return ApiError::status(status, None);
        }
        ApiError::transport(url, error.to_string())
    }

    /// HTTP status code, if the server answered.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(StatusCode::NOT_FOUND)
    }
}
