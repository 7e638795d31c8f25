//! Hosted Data Store Client
//!
//! Read-only access to the tracker's hosted relational store over its REST
//! surface. The toolkit only ever issues table reads with projection,
//! ordering, limits, and membership filters; there are no writes, no
//! retries, and no pagination.

mod client;
mod query;

pub use client::{Row, StoreClient};
pub use query::{Direction, TableQuery};

use thiserror::Error;

/// Errors that can occur when talking to the hosted store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No usable credentials in the configuration
    #[error("store credentials not configured")]
    NotConfigured,

    /// The anon key contains bytes that cannot be sent as a header
    #[error("invalid store key: {0}")]
    InvalidKey(String),

    /// Connection-level failure
    #[error("store unavailable")]
    Unavailable,

    /// Request exceeded the configured timeout
    #[error("request timeout")]
    Timeout,

    /// Any other transport failure, including malformed response bodies
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The store answered with an error body
    #[error("store error {status}: {message}")]
    Api { status: u16, message: String },
}
