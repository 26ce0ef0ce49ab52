use crate::client::ProbeClient;
use crate::config::{ConnectionMode, ProbeConfig};
use crate::error::{ProbeError, Result};
use crate::types::{ReuseReport, ReuseTargets, TimingSample};
use std::time::Instant;

/// Reuse-probe runs of the same targets with and without connection pooling
#[derive(Debug, Clone)]
pub struct ModeComparison {
    pub pooled: ReuseReport,
    pub fresh: ReuseReport,
}

impl ModeComparison {
    /// How many times slower the fresh-connection average is than the pooled one
    pub fn speedup(&self) -> f64 {
        let pooled = self.pooled.average_secs();
        if pooled == 0.0 {
            return 0.0;
        }
        self.fresh.average_secs() / pooled
    }
}

/// Time one warmup GET to `url1` and then `repetitions` GETs alternating
/// between `url1` and `url2`, all over a single client.
pub async fn run_reuse_probe(config: &ProbeConfig, targets: &ReuseTargets) -> Result<ReuseReport> {
    validate(targets)?;
    let client = ProbeClient::new(config)?;
    run_reuse_probe_with(client, targets).await
}

/// Same as [`run_reuse_probe`] over a caller-built client. The client is closed
/// before returning, whether the run succeeded or not.
pub async fn run_reuse_probe_with(
    mut client: ProbeClient,
    targets: &ReuseTargets,
) -> Result<ReuseReport> {
    let result = match validate(targets) {
        Ok(()) => timed_requests(&client, targets).await,
        Err(e) => Err(e),
    };
    client.close();
    result
}

/// Run the reuse probe once pooled and once with fresh connections
pub async fn compare_connection_modes(
    config: &ProbeConfig,
    targets: &ReuseTargets,
) -> Result<ModeComparison> {
    let pooled = run_reuse_probe(&config.clone().with_mode(ConnectionMode::Pooled), targets).await?;
    let fresh = run_reuse_probe(&config.clone().with_mode(ConnectionMode::Fresh), targets).await?;

    let comparison = ModeComparison { pooled, fresh };
    tracing::info!(
        pooled_avg_secs = comparison.pooled.average_secs(),
        fresh_avg_secs = comparison.fresh.average_secs(),
        "Fresh connections are {:.2}x the pooled latency",
        comparison.speedup()
    );
    Ok(comparison)
}

fn validate(targets: &ReuseTargets) -> Result<()> {
    if targets.repetitions == 0 {
        return Err(ProbeError::Config(
            "repetition count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

async fn timed_requests(client: &ProbeClient, targets: &ReuseTargets) -> Result<ReuseReport> {
    tracing::info!("Making initial request to {}", targets.url1);
    let warmup = timed_get(client, &targets.url1).await?;
    tracing::info!("First request time: {:.4} seconds", warmup.secs());

    tracing::info!(
        "Making {} requests to different endpoints...",
        targets.repetitions
    );
    let mut samples = Vec::with_capacity(targets.repetitions);
    for i in 0..targets.repetitions {
        let sample = timed_get(client, targets.target_for(i)).await?;
        tracing::info!("Request to {}: {:.4} seconds", sample.url, sample.secs());
        samples.push(sample);
    }

    let report = ReuseReport { warmup, samples };
    tracing::info!(
        mode = ?client.mode(),
        "Average time over {} requests: {:.4} seconds",
        report.samples.len(),
        report.average_secs()
    );
    Ok(report)
}

async fn timed_get(client: &ProbeClient, url: &str) -> Result<TimingSample> {
    let start = Instant::now();
    client.get(url).await?;
    Ok(TimingSample {
        url: url.to_string(),
        elapsed: start.elapsed(),
    })
}
