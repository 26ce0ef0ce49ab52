//! # searche-probe
//!
//! Smoke-test probes for a running searche collections service. Each probe
//! owns one pooled HTTP client for its run, issues its requests one after
//! another and closes the client on the way out, error or not.
//!
//! ## Search probe
//!
//! ```rust,no_run
//! use searche_probe::{run_search_probe, ProbeConfig, SearchRequest};
//!
//! # async fn example() -> searche_probe::Result<()> {
//! let config = ProbeConfig::new("http://localhost:7898");
//! let request = SearchRequest {
//!     collection_name: "test2".to_string(),
//!     column_name: "passage".to_string(),
//!     query: "When was Abraham Lincoln born?".to_string(),
//!     limit: 5,
//! };
//! let hits = run_search_probe(&config, &request).await?;
//! println!("{}", hits);
//! # Ok(())
//! # }
//! ```
//!
//! ## Connection-reuse probe
//!
//! ```rust,no_run
//! use searche_probe::{run_reuse_probe, ProbeConfig, ReuseTargets};
//!
//! # async fn example() -> searche_probe::Result<()> {
//! let config = ProbeConfig::from_env()?;
//! let targets = ReuseTargets {
//!     url1: "http://localhost:7898/collections".to_string(),
//!     url2: "http://localhost:7898/collections".to_string(),
//!     repetitions: 10,
//! };
//! let report = run_reuse_probe(&config, &targets).await?;
//! println!("average: {:.4}s", report.average_secs());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod probe;
pub mod types;

pub use client::{ProbeClient, ReleaseTracker};
pub use config::{ConnectionMode, ProbeConfig, DEFAULT_BASE_URL};
pub use endpoint::{url_for, EndpointTarget};
pub use error::{ProbeError, Result};
pub use probe::{
    compare_connection_modes, run_health_probe, run_reuse_probe, run_reuse_probe_with,
    run_search_probe, run_search_probe_with, ModeComparison,
};
pub use types::*;
