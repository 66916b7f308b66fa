//! # Endpoint Core
//!
//! Core types and traits shared by the Endpoint Steps crates.
//!
//! - [`HttpClient`] is the seam between step handlers and the network
//! - [`HttpResponse`] is what a GET step records for later assertions
//! - [`StepError`] is the failure every step reports back to the BDD engine

pub mod client;
pub mod config;
pub mod error;
pub mod replay;
pub mod response;

pub use client::{HttpClient, ReqwestClient};
pub use config::ClientConfig;
pub use error::{BoxError, ErrorKind, Result, StepError};
pub use replay::ReplayClient;
pub use response::HttpResponse;

/// Current Endpoint Steps version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information for logs and `--version` output
pub const BUILD_INFO: &str = concat!(
    "Endpoint Steps ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_NAME"),
    ")"
);
