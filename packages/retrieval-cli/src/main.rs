// CLI entry point for the retrieval pipeline

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use retrieval::{BrowserEndpoint, JobData, Retriever, RetrieverConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Transport {
    /// Plain HTTP fetch; fine for server-rendered pages
    Http,
    /// Remote headless browser over CDP; needed for JS-heavy boards
    Browser,
}

/// Retrieve a job posting into a normalized JSON record.
///
/// Always prints exactly one JSON object. Exit code 1 signals a run
/// that recovered nothing useful (empty title plus diagnostic notes);
/// partial results still exit 0.
#[derive(Debug, Parser)]
#[command(name = "retrieve", version, about)]
struct Args {
    /// Job-posting URL to retrieve
    #[arg(long, env = "JOB_URL")]
    url: String,

    /// Which transport fetches pages
    #[arg(long, value_enum, default_value = "http")]
    transport: Transport,

    /// Override the default desktop user agent
    #[arg(long)]
    user_agent: Option<String>,

    /// Per-navigation timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// HTTP proxy for the http transport
    #[arg(long, env = "HTTP_PROXY_URL")]
    proxy: Option<String>,

    /// Accept-Language hint, e.g. "en-US"
    #[arg(long)]
    locale: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,retrieval=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = RetrieverConfig::new(&args.url)
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(user_agent) = args.user_agent {
        config = config.with_user_agent(user_agent);
    }
    if let Some(proxy) = args.proxy {
        config = config.with_proxy(proxy);
    }
    if let Some(locale) = args.locale {
        config = config.with_locale(locale);
    }
    if matches!(args.transport, Transport::Browser) {
        match endpoint_from_env() {
            Ok(endpoint) => config = config.with_endpoint(endpoint),
            Err(e) => {
                // The output contract holds even here: one JSON object,
                // non-zero exit.
                let data = endpoint_failure_record(&args.url, &e.to_string());
                println!("{}", serde_json::to_string_pretty(&data)?);
                std::process::exit(1);
            }
        }
    }

    let data = Retriever::new(config).retrieve().await;
    println!("{}", serde_json::to_string_pretty(&data)?);

    // "ran and failed" vs "ran with problems": an empty title alongside
    // diagnostic notes means nothing useful came back.
    if data.job.title.is_empty() && !data.metadata.notes.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// The record emitted when the browser transport cannot even be
/// configured; mirrors the orchestrator's own degraded output.
fn endpoint_failure_record(url: &str, error: &str) -> JobData {
    let mut data = JobData::minimal(url, "browser");
    data.metadata
        .notes
        .push(format!("browser endpoint unconfigured: {error}"));
    data
}

/// Resolve the browser endpoint from the environment.
///
/// `BROWSER_WS_URL` selects a local/self-hosted CDP WebSocket;
/// `BROWSER_CLOUD_URL` + `BROWSER_CLOUD_TOKEN` select a managed cloud
/// endpoint, optionally refined by `BROWSER_CLOUD_ENGINE` and
/// `BROWSER_PROXY_COUNTRY`.
fn endpoint_from_env() -> Result<BrowserEndpoint> {
    if let Ok(ws_url) = std::env::var("BROWSER_WS_URL") {
        return Ok(BrowserEndpoint::local(ws_url));
    }

    let base_url = std::env::var("BROWSER_CLOUD_URL")
        .map_err(|_| anyhow::anyhow!("set BROWSER_WS_URL or BROWSER_CLOUD_URL for --transport browser"))?;
    let token = std::env::var("BROWSER_CLOUD_TOKEN")
        .map_err(|_| anyhow::anyhow!("BROWSER_CLOUD_TOKEN is required with BROWSER_CLOUD_URL"))?;

    let mut endpoint = BrowserEndpoint::cloud(base_url, token);
    if let Ok(engine) = std::env::var("BROWSER_CLOUD_ENGINE") {
        endpoint = endpoint.with_engine(engine);
    }
    if let Ok(country) = std::env::var("BROWSER_PROXY_COUNTRY") {
        endpoint = endpoint.with_proxy_country(country);
    }
    Ok(endpoint)
}
