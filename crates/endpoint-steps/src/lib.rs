//! # Endpoint Steps
//!
//! Cucumber step definitions for exercising HTTP endpoints:
//!
//! ```gherkin
//! Scenario: Health check
//!   Given I have the API endpoint "https://httpbin.org/status/200"
//!   When I send a GET request
//!   Then the response status code should be 200
//! ```
//!
//! Linking this crate registers the steps with [`ScenarioContext`]; run
//! features with [`run_features`] or through `ScenarioContext::cucumber()`.

pub use endpoint_core;

pub mod runner;
mod steps;

pub use runner::{run_features, RunConfig, RunSummary};
pub use steps::{ScenarioContext, STEP_PATTERNS};

// Re-export core types for convenience
pub use endpoint_core::{
    ClientConfig, ErrorKind, HttpClient, HttpResponse, ReplayClient, ReqwestClient, Result,
    StepError,
};
