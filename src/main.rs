mod commands;
mod config;
mod error;
mod platform;

use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, TOKEN_FILE};
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,dtbot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if let Some(path) = e.path() {
                error!("  token file: {}", path.display());
            }
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                error!("  caused by: {}", cause);
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}

async fn start() -> Result<(), StartupError> {
    // Token from the first argument, else the first line of bot.properties
    let config = Config::load(std::env::args().nth(1), Path::new(TOKEN_FILE))?;
    info!("Token loaded from {}", config.source);

    platform::telegram::run(config.token).await
}
