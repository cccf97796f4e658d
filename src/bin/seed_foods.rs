// ABOUTME: Demo reference data seeding utility for the nutrition service
// ABOUTME: Loads built-in pt-BR foods, aliases and cooking yields into the food database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo food seeder.
//!
//! Usage:
//! ```bash
//! # Seed the database named by DATABASE_URL
//! cargo run --bin seed-foods
//!
//! # Override database URL
//! cargo run --bin seed-foods -- --database-url sqlite:./data/nutrition.db
//! ```

use anyhow::Result;
use clap::Parser;
use nutricalc_server::config::{DatabaseUrl, ServerConfig};
use nutricalc_server::database::Database;
use nutricalc_server::logging::LoggingConfig;
use nutricalc_server::seed::seed_demo_data;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-foods",
    about = "Nutricalc demo food seeder",
    long_about = "Load the built-in pt-BR demo foods, aliases and yield factors"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let logging = LoggingConfig {
        level: if args.verbose { "debug" } else { "info" }.to_owned(),
        ..LoggingConfig::from_env()
    };
    logging.init()?;

    let url = match args.database_url {
        Some(raw) => DatabaseUrl::parse_url(&raw)?,
        None => ServerConfig::from_env()?.database.url,
    };
    info!(database = %url, "Seeding demo reference data");

    let database = Database::new(&url).await?;
    let repository = database.foods();
    let summary = seed_demo_data(&repository).await?;

    info!(
        foods = summary.foods,
        aliases = summary.aliases,
        yields = summary.yields,
        total_foods = repository.count_foods().await?,
        "Seeding complete"
    );
    database.close().await;
    Ok(())
}
