//! Dashboard configuration from command-line flags.

use std::time::Duration;

use clap::Parser;

use crate::data::fetch::DataSource;

pub const DEFAULT_SOURCE: &str = "data.csv";
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_LINE_COUNTRIES: usize = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Country population dashboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "population-dashboard", version, about)]
pub struct DashboardConfig {
    /// CSV to load: an http(s) URL or a local path
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: DataSource,

    /// Number of countries ranked in the bar chart
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Countries drawn in the line chart before one is selected
    #[arg(long, default_value_t = DEFAULT_LINE_COUNTRIES)]
    pub line_countries: usize,

    /// HTTP fetch timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::File(DEFAULT_SOURCE.into()),
            top_n: DEFAULT_TOP_N,
            line_countries: DEFAULT_LINE_COUNTRIES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DashboardConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parsed_defaults() {
        let parsed = DashboardConfig::try_parse_from(["population-dashboard"]).unwrap();
        let default = DashboardConfig::default();
        assert_eq!(parsed.source, default.source);
        assert_eq!(parsed.top_n, 10);
        assert_eq!(parsed.line_countries, 5);
        assert_eq!(parsed.fetch_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_url_source_and_flags() {
        let parsed = DashboardConfig::try_parse_from([
            "population-dashboard",
            "https://example.org/data.csv",
            "--top-n",
            "3",
            "--timeout-secs",
            "5",
        ])
        .unwrap();
        assert_eq!(
            parsed.source,
            DataSource::Url("https://example.org/data.csv".to_string())
        );
        assert_eq!(parsed.top_n, 3);
        assert_eq!(parsed.timeout_secs, 5);
    }
}
