use crate::chart::{BarChart, LineChart};
use crate::config::DashboardConfig;
use crate::data::fetch::DataSource;
use crate::data::model::{PopulationDataset, PopulationRecord};
use crate::data::query::{default_line_countries, filtered_indices, FilterCriteria};

// ---------------------------------------------------------------------------
// Load lifecycle
// ---------------------------------------------------------------------------

/// Where the one-shot load stands. `Failed` and `Ready` with no matching
/// rows are different situations and the UI reports them differently.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready(PopulationDataset),
    Failed(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full dashboard state, independent of rendering.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub load: LoadState,

    /// Source of the most recent load; "Reload" fetches it again.
    pub source: Option<DataSource>,

    /// Current country / year selection.
    pub criteria: FilterCriteria,

    /// Indices of records passing `criteria` (cached).
    pub visible_indices: Vec<usize>,

    /// Owned chart handles, replaced on each redraw.
    pub line_chart: Option<LineChart>,
    pub bar_chart: Option<BarChart>,

    pub top_n: usize,
    pub line_countries: usize,
}

impl DashboardState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            load: LoadState::Idle,
            source: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            line_chart: None,
            bar_chart: None,
            top_n: config.top_n,
            line_countries: config.line_countries,
        }
    }

    pub fn dataset(&self) -> Option<&PopulationDataset> {
        match &self.load {
            LoadState::Ready(ds) => Some(ds),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// A load of `source` has been started; previous data and charts are
    /// discarded.
    pub fn begin_load(&mut self, source: DataSource) {
        self.load = LoadState::Loading;
        self.source = Some(source);
        self.visible_indices.clear();
        self.line_chart = None;
        self.bar_chart = None;
    }

    /// The load failed; no partial data is kept.
    pub fn fail_load(&mut self, message: String) {
        self.load = LoadState::Failed(message);
        self.visible_indices.clear();
        self.line_chart = None;
        self.bar_chart = None;
    }

    /// Ingest a newly loaded dataset: reset filters and draw the default
    /// charts (first few countries, latest year).
    pub fn set_dataset(&mut self, dataset: PopulationDataset) {
        self.criteria = FilterCriteria::default();
        self.visible_indices = (0..dataset.len()).collect();

        let countries = default_line_countries(&dataset.countries, self.line_countries);
        self.line_chart = if dataset.is_empty() {
            None
        } else {
            Some(LineChart::build(&dataset.records, &countries))
        };
        self.bar_chart = dataset
            .latest_year()
            .map(|year| BarChart::build(&dataset.records, year, self.top_n));

        self.load = LoadState::Ready(dataset);
    }

    /// Records passing the current filters, in source order.
    pub fn visible_records(&self) -> Vec<&PopulationRecord> {
        match self.dataset() {
            Some(ds) => self
                .visible_indices
                .iter()
                .map(|&i| &ds.records[i])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if self.criteria.is_empty() {
            // No constraint: every record is visible
            if let Some(len) = self.dataset().map(PopulationDataset::len) {
                self.visible_indices = (0..len).collect();
            }
            return;
        }
        if let Some(indices) = self
            .dataset()
            .map(|ds| filtered_indices(&ds.records, &self.criteria))
        {
            self.visible_indices = indices;
        }
    }

    pub fn set_country(&mut self, country: Option<String>) {
        self.criteria.country = country;
        self.refilter();
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.criteria.year = year;
        self.refilter();
    }

    /// Redraw the line chart for the selected country, if any.
    pub fn update_line_chart(&mut self) {
        let Some(country) = self.criteria.active_country().map(str::to_string) else {
            return;
        };
        if let Some(chart) = self
            .dataset()
            .map(|ds| LineChart::build(&ds.records, &[country]))
        {
            self.line_chart = Some(chart);
        }
    }

    /// Redraw the bar chart for the selected year, if any.
    pub fn update_bar_chart(&mut self) {
        let Some(year) = self.criteria.active_year() else {
            return;
        };
        if let Some(chart) = self
            .dataset()
            .map(|ds| BarChart::build(&ds.records, year, self.top_n))
        {
            self.bar_chart = Some(chart);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> PopulationDataset {
        PopulationDataset::from_records(vec![
            PopulationRecord::new("Alpha", "AL", 2000, 100),
            PopulationRecord::new("Beta", "BE", 2000, 300),
            PopulationRecord::new("Alpha", "AL", 2001, 150),
            PopulationRecord::new("Delta", "DE", 2001, 90),
        ])
    }

    fn state() -> DashboardState {
        let config = DashboardConfig {
            top_n: 2,
            line_countries: 2,
            ..DashboardConfig::default()
        };
        DashboardState::new(&config)
    }

    #[test]
    fn test_load_lifecycle() {
        let mut state = state();
        assert_eq!(state.load, LoadState::Idle);

        state.begin_load(DataSource::File("data.csv".into()));
        assert!(state.is_loading());
        assert!(state.dataset().is_none());

        state.set_dataset(dataset());
        assert!(!state.is_loading());
        assert_eq!(state.dataset().map(|ds| ds.len()), Some(4));
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_failed_load_keeps_no_data() {
        let mut state = state();
        state.set_dataset(dataset());
        state.begin_load(DataSource::File("data.csv".into()));
        state.fail_load("connection refused".to_string());

        assert_eq!(state.load, LoadState::Failed("connection refused".to_string()));
        assert!(state.dataset().is_none());
        assert!(state.visible_records().is_empty());
        assert!(state.line_chart.is_none());
        assert!(state.bar_chart.is_none());
    }

    #[test]
    fn test_reload_source_follows_latest_load() {
        let mut state = state();
        assert!(state.source.is_none());

        state.begin_load(DataSource::File("data.csv".into()));
        state.set_dataset(dataset());

        let opened = DataSource::File("/home/user/other.csv".into());
        state.begin_load(opened.clone());
        state.set_dataset(dataset());
        assert_eq!(state.source, Some(opened.clone()));

        // A failed load keeps its source so it can be retried
        let remote = DataSource::Url("https://example.org/data.csv".to_string());
        state.begin_load(remote.clone());
        state.fail_load("HTTP 503".to_string());
        assert_eq!(state.source, Some(remote));
    }

    #[test]
    fn test_data_ready_draws_default_charts() {
        let mut state = state();
        state.set_dataset(dataset());

        let line = state.line_chart.as_ref().unwrap();
        assert_eq!(line.countries().collect::<Vec<_>>(), vec!["Alpha", "Beta"]);

        let bar = state.bar_chart.as_ref().unwrap();
        assert_eq!(bar.year, 2001);
        assert_eq!(bar.bars[0], ("Alpha".to_string(), 150));
    }

    #[test]
    fn test_empty_dataset_has_no_charts() {
        let mut state = state();
        state.set_dataset(PopulationDataset::from_records(Vec::new()));
        assert!(state.dataset().is_some());
        assert!(state.line_chart.is_none());
        assert!(state.bar_chart.is_none());
    }

    #[test]
    fn test_no_matches_is_distinct_from_failure() {
        let mut state = state();
        state.set_dataset(dataset());
        state.set_country(Some("Beta".to_string()));
        state.set_year(Some(2001));

        assert!(state.visible_records().is_empty());
        assert!(matches!(state.load, LoadState::Ready(_)));
    }

    #[test]
    fn test_refilter_tracks_criteria() {
        let mut state = state();
        state.set_dataset(dataset());

        state.set_country(Some("Alpha".to_string()));
        assert_eq!(state.visible_indices, vec![0, 2]);

        state.set_year(Some(2001));
        assert_eq!(state.visible_indices, vec![2]);

        state.set_country(None);
        state.set_year(None);
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);

        // Unset selector values behave like no constraint
        state.set_country(Some(String::new()));
        state.set_year(Some(0));
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_update_charts_replace_handles() {
        let mut state = state();
        state.set_dataset(dataset());

        // Nothing selected: handles stay as they are
        let before = state.line_chart.clone();
        state.update_line_chart();
        assert_eq!(state.line_chart, before);

        state.set_country(Some("Delta".to_string()));
        state.update_line_chart();
        let line = state.line_chart.as_ref().unwrap();
        assert_eq!(line.countries().collect::<Vec<_>>(), vec!["Delta"]);

        state.set_year(Some(2000));
        state.update_bar_chart();
        let bar = state.bar_chart.as_ref().unwrap();
        assert_eq!(bar.year, 2000);
        assert_eq!(bar.bars[0], ("Beta".to_string(), 300));
    }
}
