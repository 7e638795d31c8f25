//! # Repwise Support Toolkit
//!
//! Developer-facing diagnostics for the Repwise workout tracker backend:
//! read-only probes against the hosted data store and the generative model
//! catalog, runnable one-shot from the command line.
//!
//! ## Modules
//!
//! - [`config`]: Layered configuration (TOML, env-style files, environment)
//! - [`store`]: Read-only client for the hosted data store REST surface
//! - [`genai`]: Model catalog client and capability filtering
//! - [`diagnostics`]: Parameterized check runner and report rendering
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repwise::config::Config;
//! use repwise::diagnostics::DiagnosticsRunner;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load_default();
//!     let report = DiagnosticsRunner::new(&config).run().await;
//!     print!("{}", report.render());
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod genai;
pub mod store;

// Re-export top-level types for convenience
pub use config::{Config, ConfigError, DiagnosticsConfig, GenAiConfig, LoggingConfig, StoreConfig};

pub use store::{Direction, Row, StoreClient, StoreError, TableQuery};

pub use genai::{generation_capable, CatalogClient, CatalogError, ModelInfo, GENERATE_CAPABILITY};

pub use diagnostics::{
    default_checks, run_model_probe, CheckOutcome, CheckStatus, DiagnosticsRunner, QueryCheck,
    StoreReport,
};
