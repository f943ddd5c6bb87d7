//! Country population dashboard.
//!
//! Loads a CSV of `Country Name, Country Code, Year, Value` rows, answers
//! filter and ranking queries over the in-memory records, and renders a
//! line chart (population over time) and a bar chart (top countries for a
//! year) with egui.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::fetch::{DataSource, TextFetcher};
pub use data::loader::{load, parse_csv, parse_csv_with_report, ParseReport};
pub use data::model::{PopulationDataset, PopulationRecord};
pub use data::query::{
    filter, top_n_by_value, top_n_for_year, unique_countries, unique_years, FilterCriteria,
};
pub use error::DataError;
