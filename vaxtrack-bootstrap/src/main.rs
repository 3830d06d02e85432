use anyhow::Result;
use clap::Parser;
use tracing::info;

use vaxtrack_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "vaxtrack")]
#[command(about = "Vaccine inventory server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("VAXTRACK_CONFIG", config);
    }

    let config = AppConfig::load().await?;
    let _log_guard = vaxtrack_bootstrap::init_tracing(config.log_dir.as_deref());
    info!(
        vaccines = %config.vaccines_path,
        inventory = %config.inventory_path,
        "configuration loaded"
    );

    vaxtrack_bootstrap::run_standalone(config).await
}
