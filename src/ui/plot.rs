use eframe::egui::{self, Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::chart::{self, LineChart};
use crate::color::BAR_COLOR;
use crate::state::{DashboardState, LoadState};

// ---------------------------------------------------------------------------
// Central panel – both charts side by side
// ---------------------------------------------------------------------------

/// Render the charts, or the reason there are none.
pub fn charts(ui: &mut Ui, state: &DashboardState) {
    match &state.load {
        LoadState::Ready(ds) if !ds.is_empty() => {}
        LoadState::Ready(_) => {
            centered_message(ui, "The dataset contains no valid records.", Color32::GRAY);
            return;
        }
        LoadState::Failed(msg) => {
            centered_message(ui, &format!("Could not load data: {msg}"), Color32::RED);
            return;
        }
        LoadState::Idle | LoadState::Loading => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.spinner();
            });
            return;
        }
    }

    ui.columns(2, |columns| {
        if let Some(line) = &state.line_chart {
            line_chart(&mut columns[0], line);
        }
        if let Some(bar) = &state.bar_chart {
            bar_chart(&mut columns[1], bar);
        }
    });
}

fn centered_message(ui: &mut Ui, text: &str, color: Color32) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(egui::RichText::new(text).color(color).heading());
    });
}

// ---------------------------------------------------------------------------
// Line chart – population over time
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, chart: &LineChart) {
    ui.heading(LineChart::TITLE);

    Plot::new("population_line_chart")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Population")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                let line = Line::new(points)
                    .name(&series.country)
                    .color(series.color)
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}

// ---------------------------------------------------------------------------
// Bar chart – top countries for one year
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, chart: &chart::BarChart) {
    ui.heading(chart.title());

    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, (country, value))| {
            Bar::new(i as f64, *value as f64)
                .name(country)
                .width(0.7)
        })
        .collect();

    Plot::new("population_bar_chart")
        .height(ui.available_height() * 0.65)
        .x_axis_label("Country (rank)")
        .y_axis_label("Population")
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(chart.series_label())
                    .color(BAR_COLOR),
            );
        });

    // Rank legend, since bar labels only show on hover.
    for (rank, (country, value)) in chart.bars.iter().enumerate() {
        ui.label(format!("{}. {country}: {value}", rank + 1));
    }
}
