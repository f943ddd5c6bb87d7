use std::collections::BTreeSet;

use super::model::PopulationRecord;

// ---------------------------------------------------------------------------
// Filter criteria: optional country / year narrowing the working set
// ---------------------------------------------------------------------------

/// Optional (country, year) pair. An empty country or a year of `0` means
/// "no constraint" for that field, matching how the dashboard's selectors
/// report an unset choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub country: Option<String>,
    pub year: Option<i32>,
}

impl FilterCriteria {
    pub fn new(country: Option<&str>, year: Option<i32>) -> Self {
        Self {
            country: country.map(str::to_string),
            year,
        }
    }

    /// The country constraint, if one is actually set.
    pub fn active_country(&self) -> Option<&str> {
        self.country.as_deref().filter(|c| !c.is_empty())
    }

    /// The year constraint, if one is actually set.
    pub fn active_year(&self) -> Option<i32> {
        self.year.filter(|&y| y != 0)
    }

    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.active_country().is_none() && self.active_year().is_none()
    }

    /// Whether `record` passes every active constraint.
    pub fn matches(&self, record: &PopulationRecord) -> bool {
        if let Some(country) = self.active_country() {
            if record.country_name != country {
                return false;
            }
        }
        if let Some(year) = self.active_year() {
            if record.year != year {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Distinct values
// ---------------------------------------------------------------------------

/// Distinct country names, ascending.
pub fn unique_countries<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a PopulationRecord>,
{
    let set: BTreeSet<&str> = records
        .into_iter()
        .map(|r| r.country_name.as_str())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Distinct years, ascending.
pub fn unique_years<'a, I>(records: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a PopulationRecord>,
{
    let set: BTreeSet<i32> = records.into_iter().map(|r| r.year).collect();
    set.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Filtering and ranking
// ---------------------------------------------------------------------------

/// Records passing `criteria`, in input order. With no active constraint
/// every record is returned.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PopulationRecord>
where
    I: IntoIterator<Item = &'a PopulationRecord>,
{
    records
        .into_iter()
        .filter(|r| criteria.matches(r))
        .collect()
}

/// Positions of the records passing `criteria`, ascending.
pub fn filtered_indices(records: &[PopulationRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// The `n` records with the largest value, descending. Equal values keep
/// their input order.
pub fn top_n_by_value<'a, I>(records: I, n: usize) -> Vec<&'a PopulationRecord>
where
    I: IntoIterator<Item = &'a PopulationRecord>,
{
    let mut ranked: Vec<&PopulationRecord> = records.into_iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(n);
    ranked
}

/// Top `n` records for a single year: the bar chart's ranking.
pub fn top_n_for_year<'a, I>(records: I, year: i32, n: usize) -> Vec<&'a PopulationRecord>
where
    I: IntoIterator<Item = &'a PopulationRecord>,
{
    top_n_by_value(records.into_iter().filter(|r| r.year == year), n)
}

// ---------------------------------------------------------------------------
// Line chart helpers
// ---------------------------------------------------------------------------

/// `(year, value)` points for one country, ascending by year.
pub fn country_series<'a, I>(records: I, country: &str) -> Vec<(i32, i64)>
where
    I: IntoIterator<Item = &'a PopulationRecord>,
{
    let mut points: Vec<(i32, i64)> = records
        .into_iter()
        .filter(|r| r.country_name == country)
        .map(|r| (r.year, r.value))
        .collect();
    points.sort_by_key(|&(year, _)| year);
    points
}

/// The first `k` countries of an already sorted list, shown before the user
/// picks one.
pub fn default_line_countries(countries: &[String], k: usize) -> Vec<String> {
    countries.iter().take(k).cloned().collect()
}
