//! Dataset loading: one CSV read from a local file or a remote URL.
//!
//! The dataset is loaded once at startup. Per-row failures are skipped and
//! counted, never fatal: a symbol whose rows are all malformed simply ends
//! up with no data. The remote fetch itself has no retry and no fallback;
//! a failed fetch is fatal to startup.

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::data::table::PriceTable;
use crate::domain::PriceBar;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from the startup dataset load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("fetch {url} returned HTTP {status}")]
    HttpStatus { status: u16, url: String },

    #[error("read {path} failed: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("csv stream error: {0}")]
    CsvStream(String),
}

/// What the loader did: rows kept, rows dropped, symbols seen.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Rows that deserialized and were kept.
    pub rows_loaded: usize,
    /// Rows dropped for malformed fields (unparseable date, missing column).
    pub rows_skipped: usize,
    /// Rows kept whose OHLC ranges are internally inconsistent.
    pub suspect_rows: usize,
    /// Distinct symbols in the resulting table.
    pub symbol_count: usize,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    symbol: String,
    date: NaiveDate,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl From<CsvRow> for PriceBar {
    fn from(row: CsvRow) -> Self {
        PriceBar {
            symbol: row.symbol,
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
        }
    }
}

/// Deserialize and field failures are per-row; I/O failures abort the load.
fn is_row_error(err: &csv::Error) -> bool {
    !matches!(err.kind(), csv::ErrorKind::Io(_))
}

/// Parse the dataset CSV from any reader.
///
/// Columns are matched by header name; extra columns are ignored.
pub fn load_reader<R: Read>(reader: R) -> Result<(PriceTable, LoadReport), LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut bars = Vec::new();
    let mut report = LoadReport::default();

    for row in csv_reader.deserialize::<CsvRow>() {
        match row {
            Ok(row) => {
                let bar = PriceBar::from(row);
                if !bar.is_sane() {
                    report.suspect_rows += 1;
                }
                report.rows_loaded += 1;
                bars.push(bar);
            }
            Err(err) if is_row_error(&err) => {
                report.rows_skipped += 1;
            }
            Err(err) => return Err(LoadError::CsvStream(err.to_string())),
        }
    }

    let table = PriceTable::from_bars(bars);
    report.symbol_count = table.symbols().len();
    Ok((table, report))
}

/// Load the dataset from a local CSV file.
pub fn load_path(path: &Path) -> Result<(PriceTable, LoadReport), LoadError> {
    let file = std::fs::File::open(path).map_err(|err| LoadError::ReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    load_reader(file)
}

/// Fetch the dataset from a remote URL. This is the single startup fetch:
/// no retry, no cache, no fallback.
pub fn fetch_remote(url: &str) -> Result<(PriceTable, LoadReport), LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| LoadError::FetchFailed {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    let response = client
        .get(url)
        .send()
        .map_err(|err| LoadError::FetchFailed {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().map_err(|err| LoadError::FetchFailed {
        url: url.to_string(),
        reason: err.to_string(),
    })?;
    load_reader(body.as_bytes())
}

/// `http(s)://` sources are fetched; anything else is a local path.
pub fn load_source(source: &str) -> Result<(PriceTable, LoadReport), LoadError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source)
    } else {
        load_path(Path::new(source))
    }
}
