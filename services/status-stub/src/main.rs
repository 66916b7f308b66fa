use anyhow::Context;
use clap::Parser;
use endpoint_core::BUILD_INFO;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "status-stub")]
#[command(about = "httpbin-style status endpoints for local scenario runs")]
#[command(version = endpoint_core::VERSION)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8089")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting Status Stub {}", BUILD_INFO);

    let listener = TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    status_stub::serve(listener).await?;

    Ok(())
}
