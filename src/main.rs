mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError};

const COPYRIGHT_NOTICE: &str = "Cantrip Discord Bot\n\
Copyright (c) 2023 Scott Fisher, Sinjin Serrano, & David Wolfe\n\
This program comes with ABSOLUTELY NO WARRANTY.\n\
This is free software, and you are welcome to redistribute it\n\
under certain conditions; see LICENSE file for details.\n";

#[tokio::main]
async fn main() {
    println!("{}", COPYRIGHT_NOTICE);

    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Bot attempting to login to Discord...");

    let client = bot::start::init_bot(&config, db).await?;

    // Ctrl-C gets the same clean shutdown as /shutdown
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C, shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    bot::start::start_bot(client).await?;

    tracing::info!("Bot has shut down");

    Ok(())
}
