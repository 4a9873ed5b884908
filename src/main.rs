use clap::Parser;
use std::io;
use std::path::Path;

mod cli;
mod api;
mod core;
mod models;
mod generators;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;

#[tokio::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_target(true)
        .init();

    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }

    // Command line flags win over the environment
    if let Some(address) = args.address {
        config.web_address = address;
    }
    if let Some(port) = args.port {
        config.web_port = port;
    }
    if args.docs {
        config.api_docs_enabled = true;
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Generate { length, has_symbol, count }) => {
            let mut generator = PasswordGenerator::from_entropy();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            if let Err(e) = cli::handlers::handle_generate(&mut generator, &config, length, has_symbol, count, &mut out) {
                log::error!("Password generation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            api::start_server(config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })
        }
    }
}
