//! HTTP client module: text bodies, bounded timeouts, no retries.

mod client;

pub use client::{DEFAULT_TIMEOUT_SECS, HttpClient, USER_AGENT};
