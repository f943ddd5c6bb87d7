use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::fetch::DataSource;
use crate::state::{DashboardState, LoadState};

// ---------------------------------------------------------------------------
// Left side panel – country / year selectors
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset() else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what we need so we can mutate state below.
    let countries = dataset.countries.clone();
    let years = dataset.years.clone();

    let current_country = state.criteria.active_country().map(str::to_string);
    let current_year = state.criteria.active_year();

    // ---- Country selector ----
    ui.strong("Country");
    let mut chosen_country = current_country.clone();
    egui::ComboBox::from_id_salt("country_filter")
        .selected_text(current_country.as_deref().unwrap_or("All countries"))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut chosen_country, None, "All countries");
            for country in &countries {
                ui.selectable_value(&mut chosen_country, Some(country.clone()), country);
            }
        });
    if chosen_country != current_country {
        state.set_country(chosen_country);
    }

    ui.add_space(8.0);

    // ---- Year selector ----
    ui.strong("Year");
    let mut chosen_year = current_year;
    let year_text = current_year.map_or_else(|| "All years".to_string(), |y| y.to_string());
    egui::ComboBox::from_id_salt("year_filter")
        .selected_text(year_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut chosen_year, None, "All years");
            for &year in &years {
                ui.selectable_value(&mut chosen_year, Some(year), year.to_string());
            }
        });
    if chosen_year != current_year {
        state.set_year(chosen_year);
    }

    ui.separator();

    // ---- Chart redraw buttons ----
    let has_country = state.criteria.active_country().is_some();
    if ui
        .add_enabled(has_country, egui::Button::new("Update line chart"))
        .on_disabled_hover_text("Select a country first")
        .clicked()
    {
        state.update_line_chart();
    }

    let has_year = state.criteria.active_year().is_some();
    if ui
        .add_enabled(has_year, egui::Button::new("Update bar chart"))
        .on_disabled_hover_text("Select a year first")
        .clicked()
    {
        state.update_bar_chart();
    }
}

// ---------------------------------------------------------------------------
// Bottom panel – filtered records
// ---------------------------------------------------------------------------

/// Render the records passing the current filters.
pub fn records_table(ui: &mut Ui, state: &DashboardState) {
    if state.dataset().is_none() {
        return;
    }

    let records = state.visible_records();
    if records.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No records match the current filters.");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("records_grid")
                .striped(true)
                .num_columns(4)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Country Name");
                    ui.strong("Country Code");
                    ui.strong("Year");
                    ui.strong("Value");
                    ui.end_row();

                    for record in records {
                        ui.label(&record.country_name);
                        ui.label(&record.country_code);
                        ui.label(record.year.to_string());
                        ui.label(record.value.to_string());
                        ui.end_row();
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar. Returns a source to (re)load when the
/// user asked for one.
pub fn top_bar(ui: &mut Ui, state: &DashboardState) -> Option<DataSource> {
    let mut requested = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open CSV…").clicked() {
                requested = open_file_dialog();
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                requested = state.source.clone();
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.load {
            LoadState::Idle => {}
            LoadState::Loading => {
                ui.spinner();
                ui.label("Loading population data…");
            }
            LoadState::Ready(ds) => {
                ui.label(format!(
                    "{} records loaded, {} visible",
                    ds.len(),
                    state.visible_indices.len()
                ));
            }
            LoadState::Failed(msg) => {
                ui.label(RichText::new(format!("Error: {msg}")).color(Color32::RED));
            }
        }
    });

    requested
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog() -> Option<DataSource> {
    rfd::FileDialog::new()
        .set_title("Open population data")
        .add_filter("CSV", &["csv"])
        .pick_file()
        .map(DataSource::File)
}
