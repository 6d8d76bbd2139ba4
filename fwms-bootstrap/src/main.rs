use anyhow::Result;
use clap::Parser;
use tracing::info;

use fwms_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "fwms-server")]
#[command(about = "From Plate to Plant food waste server", long_about = None)]
struct Args {
    /// Path to config file (falls back to FWMS_CONFIG, then ./config.toml)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(args.config.as_deref()).await?;
    let _log_guard = fwms_bootstrap::telemetry::init_tracing(&config)?;
    info!(
        "config loaded: bind {}, storage {}",
        config.bind_addr,
        config.data_path.as_deref().unwrap_or("memory")
    );

    fwms_bootstrap::run_standalone(config).await
}
