//! Store Probe
//!
//! Run with: cargo run --bin repwise-store-probe
//!
//! Zero-argument read probe against the hosted data store: issues the
//! default check set and prints a projected view of each result. Missing
//! credentials degrade to skipped checks rather than aborting.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repwise::config::Config;
use repwise::diagnostics::DiagnosticsRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "repwise=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load_default();

    let report = DiagnosticsRunner::new(&config).run().await;
    print!("{}", report.render());

    Ok(())
}
