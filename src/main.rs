#![allow(non_snake_case)]

mod app;
mod audio;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use invitation_core::logging::LoggingBuilder;
use invitation_core::{EventData, InviteConfig};

use crate::context::LaunchContext;

/// Wedding invitation - desktop viewer
#[derive(Parser, Debug)]
#[command(name = "invitation-desktop")]
#[command(about = "Digital wedding invitation with envelope, gallery and music")]
struct Args {
    /// Event data file (JSON exchange format); the bundled sample when omitted
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Incoming link or query string carrying the guest name (e.g. "?k=Anna")
    #[arg(short, long, default_value = "")]
    query: String,

    /// Config file (JSON); defaults apply to any missing key
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show the content editor button
    #[arg(long)]
    edit: bool,

    /// Log filter directive (RUST_LOG takes precedence)
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter.clone());
    }
    logging.init();

    let config = match &args.config {
        Some(path) => InviteConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => InviteConfig::default(),
    };

    let event = match &args.event {
        Some(path) => EventData::load(path)
            .with_context(|| format!("loading event data {}", path.display()))?,
        None => EventData::sample(&config.asset_base),
    };

    let title = format!("Thiệp Cưới - {}", event.couple_title());
    tracing::info!(
        event = ?args.event,
        query = %args.query,
        editing = args.edit,
        "Starting invitation viewer"
    );

    context::set_launch_context(LaunchContext {
        event,
        config,
        query: args.query,
        editing_enabled: args.edit,
        export_dir: dirs::document_dir().or_else(dirs::home_dir),
    });

    // Phone-like proportions
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
