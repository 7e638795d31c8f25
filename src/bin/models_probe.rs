//! Model Catalog Probe
//!
//! Run with: cargo run --bin repwise-models-probe
//!
//! Zero-argument enumeration of catalog models that support content
//! generation. A top-level catalog error is printed and stops the probe;
//! transport failures exit non-zero.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repwise::config::Config;
use repwise::diagnostics::run_model_probe;
use repwise::genai::CatalogError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "repwise=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_default();

    match run_model_probe(&config).await {
        Ok(names) => {
            println!("> Models supporting content generation:");
            for name in &names {
                println!("  - {}", name);
            }
            println!("> {} models available", names.len());
        }
        Err(CatalogError::NotConfigured) => {
            tracing::warn!("Model catalog API key not configured; nothing to probe");
        }
        Err(CatalogError::Api { message }) => {
            eprintln!("Model catalog error: {}", message);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
