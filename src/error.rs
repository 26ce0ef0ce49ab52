use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProbeError>;

#[derive(Error, Debug)]
pub enum ProbeError {
    /// Network failure (`status` is `None`) or a non-success HTTP status.
    #[error("Request to {url} failed: {message}")]
    Request {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProbeError {
    pub(crate) fn request(url: &str, err: reqwest::Error) -> Self {
        ProbeError::Request {
            url: url.to_string(),
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    pub(crate) fn status(url: &str, status: reqwest::StatusCode, body: &str) -> Self {
        let message = if body.is_empty() {
            format!("service returned {}", status)
        } else {
            format!("service returned {}: {}", status, body)
        };
        ProbeError::Request {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message,
        }
    }

    pub(crate) fn decode(url: &str, err: serde_json::Error) -> Self {
        ProbeError::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn is_request_error(&self) -> bool {
        matches!(self, ProbeError::Request { .. })
    }

    pub fn is_decode_error(&self) -> bool {
        matches!(self, ProbeError::Decode { .. })
    }

    /// HTTP status code for errors caused by a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeError::Request { status, .. } => *status,
            _ => None,
        }
    }
}
