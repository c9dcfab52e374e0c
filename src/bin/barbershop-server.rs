// ABOUTME: HTTP server binary for the barbershop booking API
// ABOUTME: Loads configuration, opens the appointment store, and serves until Ctrl+C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Barbershop Booking Server Binary

use anyhow::Result;
use barbershop_booking::{
    config::environment::{DatabaseUrl, ServerConfig},
    constants::routes,
    logging,
    server::{self, ServerResources},
};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

/// Command-line overrides applied on top of the environment configuration
#[derive(Parser)]
#[command(name = "barbershop-server")]
#[command(about = "Barbershop booking REST API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override the store location (e.g. `sqlite:./data/appointments.db`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database = DatabaseUrl::parse_url(url)?;
    }

    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);
    display_available_endpoints(&resources.config.bind_address());

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}

/// Log every available endpoint
fn display_available_endpoints(address: &str) {
    let base = format!("http://{address}");
    info!("=== Available API Endpoints ===");
    info!("  GET    {base}{}", routes::HEALTH);
    info!("  GET    {base}{}", routes::APPOINTMENTS);
    info!("  POST   {base}{}", routes::APPOINTMENTS);
    info!("  GET    {base}{}", routes::APPOINTMENT_OPTIONS);
    info!("  GET    {base}{}/{{id}}", routes::APPOINTMENTS);
    info!("  PUT    {base}{}/{{id}}", routes::APPOINTMENTS);
    info!("  DELETE {base}{}/{{id}}", routes::APPOINTMENTS);
}
