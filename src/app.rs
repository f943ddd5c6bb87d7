use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::fetch::{DataSource, TextFetcher};
use crate::data::loader::load;
use crate::data::model::PopulationDataset;
use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PopulationDashboardApp {
    pub state: DashboardState,
    config: DashboardConfig,
    /// Outcome of the in-flight load. Receiving on it is the "data ready"
    /// event that triggers the first chart draw.
    pending: Option<Receiver<Result<PopulationDataset>>>,
}

impl PopulationDashboardApp {
    /// Create the app and start loading the configured source.
    pub fn new(config: DashboardConfig, ctx: &egui::Context) -> Self {
        let source = config.source.clone();
        let mut app = Self {
            state: DashboardState::new(&config),
            config,
            pending: None,
        };
        app.start_load(source, ctx);
        app
    }

    /// Start a background load; any in-flight load is abandoned.
    pub fn start_load(&mut self, source: DataSource, ctx: &egui::Context) {
        log::info!("Loading population data from {source}");
        self.state.begin_load(source.clone());
        self.pending = Some(spawn_load(source, self.config.fetch_timeout(), ctx.clone()));
    }

    /// Apply the load outcome if it has arrived.
    pub fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(dataset)) => {
                log::info!(
                    "Dataset ready: {} records, {} countries, {} years",
                    dataset.len(),
                    dataset.countries.len(),
                    dataset.years.len()
                );
                self.state.set_dataset(dataset);
                self.pending = None;
            }
            Ok(Err(e)) => {
                log::error!("Failed to load data: {e:#}");
                self.state.fail_load(format!("{e:#}"));
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Load thread exited without a result");
                self.state
                    .fail_load("load thread exited without a result".to_string());
                self.pending = None;
            }
        }
    }
}

impl eframe::App for PopulationDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        // ---- Top panel: menu bar ----
        let mut requested = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            requested = panels::top_bar(ui, &self.state);
        });
        if let Some(source) = requested {
            self.start_load(source, ctx);
        }

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered records ----
        egui::TopBottomPanel::bottom("records_panel")
            .resizable(true)
            .default_height(200.0)
            .show(ctx, |ui| {
                panels::records_table(ui, &self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::charts(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Background load
// ---------------------------------------------------------------------------

/// Run one load on its own thread and deliver the outcome over a channel,
/// waking the UI when it lands.
fn spawn_load(
    source: DataSource,
    timeout: Duration,
    ctx: egui::Context,
) -> Receiver<Result<PopulationDataset>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = run_load(&source, timeout);
        // The receiver is gone if a newer load replaced this one.
        if tx.send(result).is_err() {
            log::debug!("Discarding result of superseded load from {source}");
        }
        ctx.request_repaint();
    });
    rx
}

/// Fetch and parse `source` on a current-thread runtime.
fn run_load(source: &DataSource, timeout: Duration) -> Result<PopulationDataset> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    runtime.block_on(async {
        let fetcher = TextFetcher::new(timeout)?;
        let dataset = load(source, &fetcher)
            .await
            .with_context(|| format!("loading {source}"))?;
        Ok::<_, anyhow::Error>(dataset)
    })
}
