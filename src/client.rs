use crate::config::{ConnectionMode, ProbeConfig};
use crate::error::{ProbeError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// HTTP client owned by a single probe run.
///
/// The underlying `reqwest::Client` is released by `close()` or on drop,
/// whichever comes first. Later calls to `close()` do nothing.
pub struct ProbeClient {
    http_client: Option<reqwest::Client>,
    mode: ConnectionMode,
    releases: Arc<AtomicUsize>,
}

impl ProbeClient {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.mode == ConnectionMode::Fresh {
            builder = builder.pool_max_idle_per_host(0);
        }
        let http_client = builder
            .build()
            .map_err(|e| ProbeError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client: Some(http_client),
            mode: config.mode,
            releases: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    pub fn is_closed(&self) -> bool {
        self.http_client.is_none()
    }

    /// Handle that keeps reporting releases after the client is moved or dropped
    pub fn release_tracker(&self) -> ReleaseTracker {
        ReleaseTracker(Arc::clone(&self.releases))
    }

    /// Release the client and its pooled connections
    pub fn close(&mut self) {
        if self.http_client.take().is_some() {
            self.releases.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("probe client closed");
        }
    }

    fn http(&self, url: &str) -> Result<&reqwest::Client> {
        self.http_client.as_ref().ok_or_else(|| ProbeError::Request {
            url: url.to_string(),
            status: None,
            message: "client already closed".to_string(),
        })
    }

    /// GET `url` and fail on a non-success status. The body is read and dropped.
    pub async fn get(&self, url: &str) -> Result<()> {
        let response = self
            .http(url)?
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::request(url, e))?;
        read_body(url, response).await.map(|_| ())
    }

    /// GET `url` and decode the body as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http(url)?
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::request(url, e))?;
        let body = read_body(url, response).await?;
        serde_json::from_slice(&body).map_err(|e| ProbeError::decode(url, e))
    }

    /// POST `body` as JSON to `url` and decode the response as JSON
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let response = self
            .http(url)?
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ProbeError::request(url, e))?;
        let body = read_body(url, response).await?;
        serde_json::from_slice(&body).map_err(|e| ProbeError::decode(url, e))
    }
}

/// Read-only view of how many times a [`ProbeClient`] was actually released
#[derive(Debug, Clone)]
pub struct ReleaseTracker(Arc<AtomicUsize>);

impl ReleaseTracker {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Drop for ProbeClient {
    fn drop(&mut self) {
        self.close();
    }
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<Vec<u8>> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProbeError::status(url, status, &body));
    }
    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| ProbeError::request(url, e))
}
