use clap::Parser;
use searche_probe::{
    compare_connection_modes, run_health_probe, run_reuse_probe, run_search_probe, url_for,
    ProbeConfig, ReuseTargets, SearchRequest,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "searche-probe",
    about = "Smoke-test a running searche service",
    arg_required_else_help = true
)]
struct Cli {
    /// Time repeated requests over one pooled client
    #[arg(short = 'r', long)]
    test_reuse: bool,
    /// Run one search against a collection
    #[arg(short = 's', long)]
    test_search: bool,
    /// Fetch the service healthcheck
    #[arg(long)]
    health: bool,
    /// Run the reuse probe pooled and with fresh connections
    #[arg(long)]
    compare: bool,

    #[arg(long, env = "SEARCHE_BASE_URL")]
    base_url: Option<String>,
    #[arg(long, env = "SEARCHE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[arg(long, default_value = "test2")]
    collection: String,
    #[arg(long, default_value = "passage")]
    column: String,
    #[arg(long, default_value = "When was Abraham Lincoln born?")]
    query: String,
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    limit: i64,

    #[arg(long, default_value = "/collections")]
    first_path: String,
    #[arg(long, default_value = "/collections")]
    second_path: String,
    #[arg(short = 'n', long, default_value = "10")]
    repetitions: usize,
}

impl Cli {
    /// Environment first, flags override
    fn probe_config(&self) -> searche_probe::Result<ProbeConfig> {
        let mut config = ProbeConfig::from_env()?;
        if let Some(url) = &self.base_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Some(Duration::from_secs(secs)));
        }
        Ok(config)
    }

    fn search_request(&self) -> SearchRequest {
        SearchRequest {
            collection_name: self.collection.clone(),
            column_name: self.column.clone(),
            query: self.query.clone(),
            limit: self.limit,
        }
    }

    fn reuse_targets(&self, base_url: &str) -> ReuseTargets {
        ReuseTargets {
            url1: url_for(base_url, &self.first_path),
            url2: url_for(base_url, &self.second_path),
            repetitions: self.repetitions,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli).await {
        tracing::error!("searche-probe run failed: {}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.probe_config()?;

    if cli.health {
        let health = run_health_probe(&config).await?;
        println!("{} (version {})", health.status, health.version);
    }

    if cli.test_reuse {
        let report = run_reuse_probe(&config, &cli.reuse_targets(&config.base_url)).await?;
        println!("First request time: {:.4} seconds", report.warmup.secs());
        for sample in &report.samples {
            println!("Request to {}: {:.4} seconds", sample.url, sample.secs());
        }
        println!(
            "Average time over {} requests: {:.4} seconds",
            report.samples.len(),
            report.average_secs()
        );
    }

    if cli.compare {
        let comparison =
            compare_connection_modes(&config, &cli.reuse_targets(&config.base_url)).await?;
        println!(
            "pooled: {:.4} s avg, fresh: {:.4} s avg ({:.2}x)",
            comparison.pooled.average_secs(),
            comparison.fresh.average_secs(),
            comparison.speedup()
        );
    }

    if cli.test_search {
        let results = run_search_probe(&config, &cli.search_request()).await?;
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}
