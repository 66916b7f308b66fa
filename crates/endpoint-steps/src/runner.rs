//! Feature runner
//!
//! Runs Gherkin features against [`ScenarioContext`], installing one
//! configured HTTP client into every scenario.

use crate::steps::ScenarioContext;
use cucumber::writer::Stats as _;
use cucumber::World as _;
use endpoint_core::{ClientConfig, HttpClient, Result};
use serde::{Deserialize, Serialize};
use std::future;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Settings for one run of a feature file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub client: ClientConfig,
    /// Upper bound on scenarios executing at the same time.
    pub max_concurrent_scenarios: usize,
}

impl RunConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            max_concurrent_scenarios: 1,
        }
    }
}

/// Step and error counts reported by a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed_steps: usize,
    pub skipped_steps: usize,
    pub failed_steps: usize,
    pub parsing_errors: usize,
    pub hook_errors: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed_steps == 0 && self.parsing_errors == 0 && self.hook_errors == 0
    }
}

/// Run every scenario under `features` and summarize the outcome.
///
/// Fails only when the configured client cannot be built; scenario
/// failures are reported through the returned [`RunSummary`].
#[instrument(skip(features, config), fields(features = %features.as_ref().display()))]
pub async fn run_features(features: impl AsRef<Path>, config: &RunConfig) -> Result<RunSummary> {
    let client: Arc<dyn HttpClient> = Arc::new(config.client.build_client()?);

    let writer = ScenarioContext::cucumber()
        .max_concurrent_scenarios(config.max_concurrent_scenarios.max(1))
        .before(move |_feature, _rule, _scenario, ctx| {
            ctx.set_client(Arc::clone(&client));
            Box::pin(future::ready(()))
        })
        .with_default_cli()
        .run(features.as_ref())
        .await;

    let summary = RunSummary {
        passed_steps: writer.passed_steps(),
        skipped_steps: writer.skipped_steps(),
        failed_steps: writer.failed_steps(),
        parsing_errors: writer.parsing_errors(),
        hook_errors: writer.hook_errors(),
    };

    if summary.is_success() {
        info!(passed = summary.passed_steps, "Feature run passed");
    } else {
        warn!(
            failed = summary.failed_steps,
            parsing_errors = summary.parsing_errors,
            "Feature run failed"
        );
    }
    Ok(summary)
}
