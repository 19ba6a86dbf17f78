//! Stash Desktop Application
//!
//! A desktop console for managing secret store configurations.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod state;
mod styles;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    match "stash=debug".parse() {
        Ok(directive) => filter = filter.add_directive(directive),
        Err(e) => eprintln!("Invalid log directive: {e}"),
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Stash...");

    let config = Config::new()
        .with_window(WindowBuilder::new().with_title("Stash - Secret Management"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
