use serde::Serialize;

use super::query::{unique_countries, unique_years};

// ---------------------------------------------------------------------------
// PopulationRecord – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single validated population data point.
///
/// Serialises with the source CSV's header names so written files can be
/// loaded back by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationRecord {
    #[serde(rename = "Country Name")]
    pub country_name: String,
    #[serde(rename = "Country Code")]
    pub country_code: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Value")]
    pub value: i64,
}

impl PopulationRecord {
    pub fn new(country_name: &str, country_code: &str, year: i32, value: i64) -> Self {
        Self {
            country_name: country_name.to_string(),
            country_code: country_code.to_string(),
            year,
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// PopulationDataset – the complete loaded working set
// ---------------------------------------------------------------------------

/// The full parsed working set with pre-computed distinct values.
///
/// Built once per load and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationDataset {
    /// All records, in source row order.
    pub records: Vec<PopulationRecord>,
    /// Distinct country names, ascending.
    pub countries: Vec<String>,
    /// Distinct years, ascending.
    pub years: Vec<i32>,
}

impl PopulationDataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<PopulationRecord>) -> Self {
        let countries = unique_countries(&records);
        let years = unique_years(&records);
        PopulationDataset {
            records,
            countries,
            years,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent year present, used as the bar chart's default.
    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }
}
