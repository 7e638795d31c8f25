//! Store and Catalog Diagnostics
//!
//! One-shot, read-only health checks for the tracker's hosted backend. A
//! run is a list of [`QueryCheck`] descriptors driven fail-soft: a check
//! that errors is recorded and the remaining checks still execute. The
//! model catalog probe lives here too.

mod checks;
mod runner;

pub use checks::{default_checks, MembershipFilter, OrderBy, QueryCheck};
pub use runner::{
    run_model_probe, CheckOutcome, CheckStatus, DiagnosticsRunner, StoreReport,
};
