//! Repwise Doctor
//!
//! One-shot health run over the tracker's hosted backend: every store
//! check, then the model catalog probe. Store checks fail soft per query;
//! a catalog-level error stops only that probe. Transport failures
//! terminate the run with a non-zero exit.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repwise::config::{generate_default_config, Config};
use repwise::diagnostics::{run_model_probe, DiagnosticsRunner};
use repwise::genai::CatalogError;

#[derive(Parser)]
#[command(name = "repwise-doctor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Health checks for the Repwise workout tracker backend")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to an env-style credential file (KEY="value" lines)
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Print a default config file and exit
    #[arg(long)]
    pub print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "repwise=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Repwise Doctor v{}", env!("CARGO_PKG_VERSION"));

    let config = match (&cli.config, &cli.env_file) {
        (Some(path), _) => Config::load_with_env(path)?,
        (None, Some(path)) => Config::from_env_file(path)?,
        (None, None) => Config::load_default(),
    };

    // Store checks: each query fails soft, the run always completes.
    let report = DiagnosticsRunner::new(&config).run().await;
    print!("{}", report.render());

    // Model catalog probe
    let mut catalog_failed = false;
    match run_model_probe(&config).await {
        Ok(names) => {
            println!("> Models supporting content generation:");
            for name in &names {
                println!("  - {}", name);
            }
            println!("> {} models available", names.len());
        }
        Err(CatalogError::NotConfigured) => {
            tracing::warn!("Model catalog API key not configured; probe skipped");
        }
        Err(CatalogError::Api { message }) => {
            eprintln!("Model catalog error: {}", message);
            catalog_failed = true;
        }
        // Transport-level failure terminates the run
        Err(e) => return Err(e.into()),
    }

    if report.failed() > 0 || catalog_failed {
        tracing::warn!("Doctor finished with failures");
    } else {
        tracing::info!("Doctor finished");
    }

    Ok(())
}
