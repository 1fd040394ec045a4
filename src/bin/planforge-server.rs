// ABOUTME: Production server binary for the planforge plan generation service
// ABOUTME: Loads configuration, initializes the store and AI provider, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Planforge Server Binary
//!
//! Starts the HTTP API with the configured AI provider and SQLite store.

use anyhow::Result;
use clap::Parser;
use planforge::{
    ai::{PlanBackend, PlanProvider},
    config::ServerConfig,
    context::ServerResources,
    logging,
    server::PlanServer,
    store::SqliteStore,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "planforge-server")]
#[command(about = "Planforge - AI-assisted workout and diet plan generation service")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Planforge");
    info!("{}", config.summary());

    let store = SqliteStore::new(&config.database.url).await?;
    if config.database.auto_migrate {
        store.migrate().await?;
        info!("Database migrations applied");
    }

    let backend = PlanProvider::from_env()?;
    info!(
        "AI provider ready: {} ({})",
        backend.display_name(),
        backend.name()
    );

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        Arc::new(store),
        Arc::new(backend),
        Arc::new(config),
    ));

    let server = PlanServer::new(resources);
    server.run(http_port).await
}
