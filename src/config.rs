use crate::error::{ProbeError, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:7898";

/// Whether the client keeps idle connections around for reuse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    #[default]
    Pooled,
    /// Idle pool disabled, every request opens a new connection
    Fresh,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub base_url: String, // e.g., "http://localhost:7898", no trailing slash
    pub timeout: Option<Duration>,
    pub mode: ConnectionMode,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            mode: ConnectionMode::Pooled,
        }
    }
}

impl ProbeConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Load probe configuration from environment variables.
    ///
    /// Optional: SEARCHE_BASE_URL (defaults to http://localhost:7898)
    /// Optional: SEARCHE_TIMEOUT_SECS (no timeout if unset)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("SEARCHE_BASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var("SEARCHE_TIMEOUT_SECS")
            .ok()
            .filter(|secs| !secs.trim().is_empty())
        {
            Some(secs) => Some(Duration::from_secs(secs.trim().parse().map_err(|_| {
                ProbeError::Config(format!("Invalid SEARCHE_TIMEOUT_SECS: {}", secs))
            })?)),
            None => None,
        };

        Ok(Self {
            base_url,
            timeout,
            mode: ConnectionMode::Pooled,
        })
    }

    pub fn with_mode(mut self, mode: ConnectionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
