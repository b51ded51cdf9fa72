mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::CostDashboardApp;
use clap::Parser;
use config::{Cli, DashboardConfig};
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = DashboardConfig::from(Cli::parse());
    log::debug!("Starting with {config:?}");

    let mut state = AppState::new(config);
    state.load_initial();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "University Program Cost Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(CostDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
