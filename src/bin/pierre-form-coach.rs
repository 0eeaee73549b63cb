// ABOUTME: Server binary for the Pierre form coach HTTP API
// ABOUTME: Loads configuration, initializes logging and resources, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Form Coach Server Binary
//!
//! Starts the form analysis and workout generation API.

use anyhow::Result;
use clap::Parser;
use pierre_form_coach::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pierre-form-coach")]
#[command(about = "Pierre Form Coach - exercise form scoring and workout generation API")]
pub struct Args {
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

    info!("Starting Pierre Form Coach");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::initialize(config).await?);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
