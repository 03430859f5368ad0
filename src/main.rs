use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use roast_gateway::{ApiServer, Config, OpenAiProvider, RoastProvider};

/// Roast - selfie-to-spoken-roast relay
#[derive(Parser)]
#[command(name = "roast", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "ROAST_PORT", default_value = "8787")]
    port: u16,

    /// Directory with the browser client to serve (optional)
    #[arg(long, env = "ROAST_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,roast_gateway=info",
        1 => "info,roast_gateway=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let provider: Option<Arc<dyn RoastProvider>> = match config.api_key {
        Some(api_key) => Some(Arc::new(OpenAiProvider::new(api_key, config.provider))),
        None => {
            tracing::warn!("OPENAI_API_KEY is not set; roast requests will fail with a configuration error");
            None
        }
    };

    ApiServer::new(provider, cli.port)
        .static_dir(cli.static_dir)
        .run()
        .await?;

    Ok(())
}
