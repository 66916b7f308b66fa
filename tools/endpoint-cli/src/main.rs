use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use endpoint_steps::{run_features, RunConfig, RunSummary, STEP_PATTERNS};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "endpoint")]
#[command(about = "Endpoint CLI - Run HTTP endpoint scenarios")]
#[command(version = endpoint_steps::endpoint_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a feature file or a directory of feature files
    Run(RunArgs),
    /// List the registered step patterns
    Steps,
}

#[derive(Args)]
struct RunArgs {
    /// Feature file or directory
    features: PathBuf,
    /// JSON run configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
    /// Connect timeout in milliseconds
    #[arg(long)]
    connect_timeout_ms: Option<u64>,
    /// Maximum number of scenarios running at once
    #[arg(long)]
    concurrency: Option<usize>,
}

impl RunArgs {
    fn resolve_config(&self, file_contents: Option<&str>) -> anyhow::Result<RunConfig> {
        let mut config = match file_contents {
            Some(contents) => RunConfig::from_json(contents).context("invalid run configuration")?,
            None => RunConfig::default(),
        };

        if let Some(timeout_ms) = self.timeout_ms {
            config.client.timeout_ms = Some(timeout_ms);
        }
        if let Some(connect_timeout_ms) = self.connect_timeout_ms {
            config.client.connect_timeout_ms = Some(connect_timeout_ms);
        }
        if let Some(concurrency) = self.concurrency {
            config.max_concurrent_scenarios = concurrency;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args).await,
        Commands::Steps => handle_steps(),
    }
}

async fn handle_run(args: RunArgs) -> anyhow::Result<ExitCode> {
    let contents = match &args.config {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        ),
        None => None,
    };
    let config = args.resolve_config(contents.as_deref())?;
    debug!(?config, "Resolved run configuration");

    let summary = run_features(&args.features, &config)
        .await
        .context("failed to start feature run")?;
    println!("{}", format_summary(&summary));

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn handle_steps() -> anyhow::Result<ExitCode> {
    for (keyword, pattern) in STEP_PATTERNS {
        println!("{keyword:<5} {pattern}");
    }
    Ok(ExitCode::SUCCESS)
}

fn format_summary(summary: &RunSummary) -> String {
    let verdict = if summary.is_success() { "passed" } else { "failed" };
    format!(
        "Run {verdict}: {} passed, {} failed, {} skipped steps, {} parsing errors",
        summary.passed_steps, summary.failed_steps, summary.skipped_steps, summary.parsing_errors
    )
}
