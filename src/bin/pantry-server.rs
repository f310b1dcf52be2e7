// ABOUTME: Pantry tracker HTTP server binary
// ABOUTME: Loads configuration, opens the JSON document store and serves the API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pantry Server Binary
//!
//! Starts the pantry tracker API with session authentication, the JSON
//! document store and the Gemini-backed recipe generator.

use anyhow::{Context, Result};
use clap::Parser;
use pantry_tracker::{
    config::environment::ServerConfig,
    expiration::SystemClock,
    logging,
    resources::ServerResources,
    server,
    services::recipe_generator_from_config,
    store::{Database, JsonFileStore},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Pantry Tracker API - food inventory with expiration alerts and AI recipes")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the JSON document path
    #[arg(long)]
    database_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_path) = args.database_path {
        config.database.path = database_path;
    }

    info!("Starting Pantry Tracker API");
    info!("{}", config.summary());

    let database = Database::new(Arc::new(JsonFileStore::new(config.database.path.clone())));
    database
        .initialize()
        .await
        .with_context(|| format!("Failed to open {}", config.database.path.display()))?;
    info!(
        "Document store ready: {} at {}",
        database.backend_name(),
        config.database.path.display()
    );

    let generator = recipe_generator_from_config(&config.recipes);
    let resources = Arc::new(ServerResources::new(
        Arc::new(config),
        database,
        generator,
        Arc::new(SystemClock),
    ));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
