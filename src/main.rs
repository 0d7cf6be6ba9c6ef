use anyhow::{Context, Result};
use clap::Parser;
use satdb::api::{HttpApi, InventoryApi};
use satdb::config::Config;
use satdb::logger::Logger;
use satdb::ui;
use std::path::PathBuf;
use std::sync::Arc;

/// Terminal admin client for the Satellite Components Database
#[derive(Parser, Debug)]
#[command(name = "satdb", version)]
#[command(about = "Manage satellite components and subsystems from the terminal")]
struct Args {
    /// Configuration file to use instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration file
    #[arg(short = 'u', long)]
    api_url: Option<String>,

    /// Write a default configuration file and exit (defaults to the XDG config path)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url)?;
    }

    let logger = Logger::from_config(&config.logging)?;
    log::info!("Starting satdb against {}", config.api.base_url);

    let api: Arc<dyn InventoryApi> =
        Arc::new(HttpApi::new(config.api.base_url.clone()).context("Failed to create API client")?);

    ui::run_app(&config, api, logger).await
}
