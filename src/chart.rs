//! Chart handles built from query results.
//!
//! A handle is a complete, owned description of what one chart draws. The
//! dashboard keeps at most one handle per chart; redrawing builds a fresh
//! handle and replaces the old one.

use eframe::egui::Color32;

use crate::color::SeriesPalette;
use crate::data::model::PopulationRecord;
use crate::data::query::{country_series, top_n_for_year};

// ---------------------------------------------------------------------------
// Line chart: population over time, one series per country
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub country: String,
    pub color: Color32,
    /// `[year, population]`, ascending by year.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub series: Vec<LineSeries>,
}

impl LineChart {
    pub const TITLE: &'static str = "Population Over Time";

    pub fn build(records: &[PopulationRecord], countries: &[String]) -> Self {
        let palette = SeriesPalette::default();
        let series = countries
            .iter()
            .enumerate()
            .map(|(index, country)| LineSeries {
                country: country.clone(),
                color: palette.color(index),
                points: country_series(records, country)
                    .into_iter()
                    .map(|(year, value)| [year as f64, value as f64])
                    .collect(),
            })
            .collect();
        log::debug!("Built line chart for {} countries", countries.len());
        LineChart { series }
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.country.as_str())
    }
}

// ---------------------------------------------------------------------------
// Bar chart: top-N countries for one year
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub year: i32,
    /// `(country, population)`, descending by population.
    pub bars: Vec<(String, i64)>,
}

impl BarChart {
    pub fn build(records: &[PopulationRecord], year: i32, top_n: usize) -> Self {
        let bars: Vec<(String, i64)> = top_n_for_year(records, year, top_n)
            .into_iter()
            .map(|r| (r.country_name.clone(), r.value))
            .collect();
        log::debug!("Built bar chart for {year} with {} bars", bars.len());
        BarChart { year, bars }
    }

    pub fn title(&self) -> String {
        format!(
            "Top {} Countries by Population ({})",
            self.bars.len(),
            self.year
        )
    }

    pub fn series_label(&self) -> String {
        format!("Population in {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PopulationRecord> {
        vec![
            PopulationRecord::new("Alpha", "AL", 2001, 150),
            PopulationRecord::new("Alpha", "AL", 2000, 100),
            PopulationRecord::new("Beta", "BE", 2000, 300),
            PopulationRecord::new("Gamma", "GA", 2000, 200),
        ]
    }

    #[test]
    fn test_line_chart_series_sorted_by_year() {
        let chart = LineChart::build(&records(), &["Alpha".to_string(), "Beta".to_string()]);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].points, vec![[2000.0, 100.0], [2001.0, 150.0]]);
        assert_eq!(chart.series[1].points, vec![[2000.0, 300.0]]);
        assert_ne!(chart.series[0].color, chart.series[1].color);
        assert_eq!(chart.countries().collect::<Vec<_>>(), vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_line_chart_unknown_country_has_empty_series() {
        let chart = LineChart::build(&records(), &["Delta".to_string()]);
        assert!(chart.series[0].points.is_empty());
    }

    #[test]
    fn test_bar_chart_ranks_year() {
        let chart = BarChart::build(&records(), 2000, 2);
        assert_eq!(
            chart.bars,
            vec![("Beta".to_string(), 300), ("Gamma".to_string(), 200)]
        );
        assert_eq!(chart.title(), "Top 2 Countries by Population (2000)");
        assert_eq!(chart.series_label(), "Population in 2000");
    }

    #[test]
    fn test_bar_chart_missing_year_is_empty() {
        let chart = BarChart::build(&records(), 1850, 10);
        assert!(chart.bars.is_empty());
    }
}
