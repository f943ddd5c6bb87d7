use csv::StringRecord;

use super::fetch::{DataSource, TextFetcher};
use super::model::{PopulationDataset, PopulationRecord};
use crate::error::{DataError, Result};

pub const COUNTRY_NAME: &str = "Country Name";
pub const COUNTRY_CODE: &str = "Country Code";
pub const YEAR: &str = "Year";
pub const VALUE: &str = "Value";

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fetch the raw text of `source` and parse it into a dataset.
///
/// All-or-nothing at the resource level: a fetch or parse failure returns
/// an error and no records. Individual invalid rows are dropped silently.
pub async fn load(source: &DataSource, fetcher: &TextFetcher) -> Result<PopulationDataset> {
    let text = fetcher.fetch_text(source).await?;
    let report = parse_csv_with_report(&text)?;
    log::info!(
        "Loaded {} population records from {source} ({} rows skipped)",
        report.records.len(),
        report.rows_skipped
    );
    Ok(PopulationDataset::from_records(report.records))
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Outcome of a successful parse, with row accounting.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseReport {
    /// Valid records in source order.
    pub records: Vec<PopulationRecord>,
    /// Data rows read (blank lines excluded).
    pub rows_read: usize,
    /// Data rows dropped by the validity rule.
    pub rows_skipped: usize,
}

/// Parse CSV text into records. See [`parse_csv_with_report`].
pub fn parse_csv(text: &str) -> Result<Vec<PopulationRecord>> {
    parse_csv_with_report(text).map(|report| report.records)
}

/// CSV layout: header row naming `Country Name`, `Country Code`, `Year`
/// and `Value` (any order, extra columns ignored), then data rows.
///
/// A row is dropped when the country name is empty, or when year or value
/// is not a number or is zero. Zero is treated as missing; a genuine
/// zero population is therefore dropped too.
///
/// Blank lines, including whitespace-only ones, are skipped. Any other row
/// with a different field count than the header is a hard error.
pub fn parse_csv_with_report(text: &str) -> Result<ParseReport> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    // Field counts are checked below so that whitespace-only lines can be
    // told apart from ragged rows.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DataError::EmptyInput);
    }
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    let mut rows_read = 0;

    for result in reader.records() {
        let row = result?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if row.len() != headers.len() {
            return Err(DataError::RaggedRow {
                line: row.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: row.len(),
            });
        }
        rows_read += 1;
        match columns.to_record(&row) {
            Some(record) => records.push(record),
            None => log::trace!("Skipping row {rows_read}: {row:?}"),
        }
    }

    let rows_skipped = rows_read - records.len();
    log::debug!(
        "Parsed {rows_read} CSV rows: {} kept, {rows_skipped} skipped",
        records.len()
    );

    Ok(ParseReport {
        records,
        rows_read,
        rows_skipped,
    })
}

/// Positions of the required columns within the header.
struct ColumnIndex {
    country_name: usize,
    country_code: usize,
    year: usize,
    value: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(DataError::MissingColumn { column })
        };
        Ok(Self {
            country_name: find(COUNTRY_NAME)?,
            country_code: find(COUNTRY_CODE)?,
            year: find(YEAR)?,
            value: find(VALUE)?,
        })
    }

    /// Build a record from a row, or `None` if the row fails validation.
    fn to_record(&self, row: &StringRecord) -> Option<PopulationRecord> {
        let country_name = row.get(self.country_name).unwrap_or("");
        if country_name.is_empty() {
            return None;
        }
        let year = parse_integer(row.get(self.year)?)
            .and_then(|y| i32::try_from(y).ok())
            .filter(|&y| y != 0)?;
        let value = parse_integer(row.get(self.value)?).filter(|&v| v != 0)?;

        Some(PopulationRecord {
            country_name: country_name.to_string(),
            country_code: row.get(self.country_code).unwrap_or("").to_string(),
            year,
            value,
        })
    }
}

/// Integer conversion for numeric cells. Real-valued text is truncated
/// toward zero (`"1234.9"` → `1234`); non-finite or non-numeric text fails.
fn parse_integer(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.abs() < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}
