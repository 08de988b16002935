// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Vizfolio - engineering visualization portfolio
//!
//! A cross-platform desktop viewer for a freelancer's project portfolio:
//! a filterable project gallery with an image carousel, plus about and
//! contact sections.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use vizfolio::app::PortfolioApp;
use vizfolio::config::Config;
use vizfolio::contact::HttpRelay;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = Config::parse();
    let catalog = config.load_catalog()?;
    log::info!("Starting with {} projects", catalog.len());

    let relay = Arc::new(HttpRelay::new(config.relay_endpoint.clone())?);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Fresh Egg Engineering - Portfolio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Vizfolio",
        options,
        Box::new(move |_cc| Ok(Box::new(PortfolioApp::new(catalog, config.assets, relay)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
