use clap::Parser;
use eframe::egui;

use population_dashboard::app::PopulationDashboardApp;
use population_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::parse();
    log::debug!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Population Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(PopulationDashboardApp::new(config, &cc.egui_ctx)))),
    )
}
