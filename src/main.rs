use clap::Parser;
use estate_scout::cli::{execute_command, Cli};
use estate_scout::config::{init_logging, ClientConfig};
use estate_scout::{ApiPropertyRepository, HttpPropertyApi, PropertyApplication};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging()?;

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    info!("Using listing API at {}", config.base_url);

    let api = HttpPropertyApi::new(&config)?;
    let app = Arc::new(PropertyApplication::from_repository(
        ApiPropertyRepository::new(api),
    ));

    execute_command(cli.command, app).await
}
