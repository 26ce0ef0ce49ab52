use crate::client::ProbeClient;
use crate::config::ProbeConfig;
use crate::endpoint::EndpointTarget;
use crate::error::Result;
use crate::types::HealthStatus;

/// Fetch and decode the service's root healthcheck
pub async fn run_health_probe(config: &ProbeConfig) -> Result<HealthStatus> {
    let mut client = ProbeClient::new(config)?;
    let result = client
        .get_json::<HealthStatus>(&EndpointTarget::root(&config.base_url).url())
        .await;
    client.close();

    if let Ok(health) = &result {
        tracing::info!(
            version = %health.version,
            status = %health.status,
            "Service at {} is up",
            config.base_url
        );
    }
    result
}
