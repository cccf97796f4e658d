// ABOUTME: Server binary for the nutrition calculation HTTP API
// ABOUTME: Loads configuration, opens the food database and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutricalc Server Binary
//!
//! Starts the HTTP API over the configured SQLite food database.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use nutricalc_server::{
    config::ServerConfig, database::Database, logging, resources::ServerResources, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nutricalc-server")]
#[command(about = "Nutrition calculation API - free-text foods to derived nutrient totals")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting nutricalc server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    let food_count = database.foods().count_foods().await?;
    if food_count == 0 {
        info!("Food database is empty; run seed-foods to load demo data");
    } else {
        info!(foods = food_count, "Food reference data loaded");
    }

    let resources = Arc::new(ServerResources::new(database, config));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
