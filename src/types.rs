use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A search query against one column of a collection
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub collection_name: String,
    pub column_name: String,
    pub query: String,
    pub limit: i64, // Forwarded as-is, the service validates it
}

impl SearchRequest {
    /// JSON body sent to the search endpoint (collection travels in the path)
    pub fn body(&self) -> SearchBody<'_> {
        SearchBody {
            column_name: &self.column_name,
            query: &self.query,
            limit: self.limit,
        }
    }
}

/// Wire body for `POST /collections/{name}/search`. Field order is the key order on the wire.
#[derive(Debug, Serialize)]
pub struct SearchBody<'a> {
    pub column_name: &'a str,
    pub query: &'a str,
    pub limit: i64,
}

/// The two URLs the reuse probe alternates between
#[derive(Debug, Clone)]
pub struct ReuseTargets {
    pub url1: String,
    pub url2: String,
    pub repetitions: usize,
}

impl ReuseTargets {
    /// Even indices go to `url1`, odd indices to `url2`
    pub fn target_for(&self, index: usize) -> &str {
        if index % 2 == 0 {
            &self.url1
        } else {
            &self.url2
        }
    }
}

/// Elapsed time of one request
#[derive(Debug, Clone)]
pub struct TimingSample {
    pub url: String,
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Result of a connection-reuse run. The warmup is kept apart from the timed samples.
#[derive(Debug, Clone)]
pub struct ReuseReport {
    pub warmup: TimingSample,
    pub samples: Vec<TimingSample>,
}

impl ReuseReport {
    pub fn total_secs(&self) -> f64 {
        self.samples.iter().map(TimingSample::secs).sum()
    }

    /// Mean over the timed samples, warmup excluded
    pub fn average_secs(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.samples.len() as f64
    }
}

/// Body of the service's `GET /` healthcheck
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub version: String,
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
