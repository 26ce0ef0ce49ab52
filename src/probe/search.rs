use crate::client::ProbeClient;
use crate::config::ProbeConfig;
use crate::endpoint::{url_for, EndpointTarget};
use crate::error::Result;
use crate::types::SearchRequest;
use serde_json::Value;

/// Warm the connection with `GET /`, then run one search and return the
/// decoded response untouched.
pub async fn run_search_probe(config: &ProbeConfig, request: &SearchRequest) -> Result<Value> {
    let client = ProbeClient::new(config)?;
    run_search_probe_with(client, &config.base_url, request).await
}

pub async fn run_search_probe_with(
    mut client: ProbeClient,
    base_url: &str,
    request: &SearchRequest,
) -> Result<Value> {
    let result = warmup_and_search(&client, base_url, request).await;
    client.close();
    result
}

async fn warmup_and_search(
    client: &ProbeClient,
    base_url: &str,
    request: &SearchRequest,
) -> Result<Value> {
    let _: Value = client.get_json(&url_for(base_url, "")).await?;
    tracing::debug!("warmup request to {} done", base_url);

    let url = EndpointTarget::search(base_url, &request.collection_name).url();
    tracing::info!(
        collection = %request.collection_name,
        column = %request.column_name,
        limit = request.limit,
        "Searching for {:?}",
        request.query
    );
    client.post_json(&url, &request.body()).await
}
