//! `org-enrich` - look up organizations from the command line.
//!
//! Builds queries from the given names, domains and websites, runs them
//! concurrently and prints every fragment found as one JSON line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use orgenrich::{
    EnrichmentConfig, EnrichmentProvider, EnrichmentRequest, InputFacts,
    OrganizationEnrichmentProvider,
};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "org-enrich", version, about = "Enrich organizations from names, domains and websites")]
struct Args {
    /// Organization name (repeatable)
    #[arg(long = "name", value_name = "NAME")]
    names: Vec<String>,

    /// Email domain (repeatable)
    #[arg(long = "domain", value_name = "DOMAIN")]
    domains: Vec<String>,

    /// Website URL (repeatable)
    #[arg(long = "website", value_name = "URL")]
    websites: Vec<String>,

    /// YAML config file; environment variables override it
    #[arg(long, env = "ENRICHMENT_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.json_logs);

    let mut config = match &args.config {
        Some(path) => EnrichmentConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EnrichmentConfig::default(),
    };
    config.apply_env_overrides();

    let provider = Arc::new(OrganizationEnrichmentProvider::from_config(&config)?);

    let request = EnrichmentRequest::new(InputFacts::new(args.names, args.domains, args.websites));
    let specs = provider.build_queries(&request);
    info!(queries = specs.len(), "enrichment_start");

    let mut tasks = JoinSet::new();
    for spec in specs {
        let provider = Arc::clone(&provider);
        tasks.spawn(async move {
            let result = provider.execute_search(&spec).await;
            (spec, result)
        });
    }

    let mut found = 0usize;
    while let Some(joined) = tasks.join_next().await {
        let (spec, result) = joined.context("lookup task panicked")?;
        match result {
            Ok(Some(hit)) => {
                found += 1;
                let fragment = provider.build_fragment(&hit);
                println!("{}", serde_json::to_string(&fragment)?);
            }
            Ok(None) => debug!(spec = %spec, "no_match"),
            Err(err) if !err.is_loggable() => debug!(spec = %spec, error = %err, "lookup_postponed"),
            Err(err) => warn!(spec = %spec, error = %err, "lookup_error"),
        }
    }

    info!(found, "enrichment_done");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
