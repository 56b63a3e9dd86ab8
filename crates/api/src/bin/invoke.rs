//! Run a single serverless-style event through the API.
//!
//! ```text
//! echo '{"httpMethod":"GET","queryStringParameters":{"id":"3"}}' | museum-invoke exhibits
//! ```
//!
//! The event is read from stdin and the response is printed to stdout as
//! `{statusCode, headers, body, isBase64Encoded}`. Logs go to stderr.

use std::io::Read;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use museum_api::config::ServerConfig;
use museum_api::invocation::{build_invocation_app, invoke, Invocation};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "museum_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = match std::env::args().nth(1).as_deref() {
        Some("exhibits") => "/api/v1/exhibits",
        Some("tours") => "/api/v1/tours",
        Some(other) => bail!("unknown resource '{other}', expected 'exhibits' or 'tours'"),
        None => bail!("usage: museum-invoke <exhibits|tours> < event.json"),
    };

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read event from stdin")?;
    let event: Invocation = if raw.trim().is_empty() {
        Invocation::default()
    } else {
        serde_json::from_str(&raw).context("event is not valid JSON")?
    };

    let config = ServerConfig::from_env();
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let app = build_invocation_app(&database_url, &config).context("invalid DATABASE_URL")?;

    let response = invoke(app, path, event)
        .await
        .context("invocation failed")?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
