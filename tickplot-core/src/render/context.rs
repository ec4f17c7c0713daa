//! The startup context: everything `render` needs, built exactly once.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::calendar::{expand, us_trading_holidays, HolidaySet};
use crate::config::{AppConfig, ConfigError};
use crate::data::loader::{load_source, LoadError, LoadReport};
use crate::data::table::PriceTable;
use crate::render::theme::ChartTheme;

/// Errors from context initialization. The startup load has no fallback:
/// any failure here propagates and is fatal to the application.
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("data load error: {0}")]
    Load(#[from] LoadError),
}

/// Immutable inputs to rendering: the loaded price table, the expanded
/// holiday set, the chart theme, and the load timestamp.
///
/// Built once before the interaction layer accepts its first request and
/// read-only afterwards; request handling shares it freely. This replaces
/// the mutable module-level globals of a typical dashboard script.
#[derive(Debug, Clone)]
pub struct ChartContext {
    pub table: PriceTable,
    pub holidays: HolidaySet,
    pub theme: ChartTheme,
    /// When the dataset was loaded. Recorded for display; rendering never
    /// reads the clock.
    pub loaded_at: DateTime<Utc>,
}

impl ChartContext {
    /// Load the dataset and expand the holiday window from `config`.
    ///
    /// Returns the context plus the loader's row report for operator
    /// output.
    pub fn initialize(config: &AppConfig) -> Result<(Self, LoadReport), ContextError> {
        let (start, end) = config.calendar_window()?;
        let (table, report) = load_source(&config.data.source)?;
        let holidays = expand(&us_trading_holidays(), start, end);

        let context = Self {
            table,
            holidays,
            theme: ChartTheme::default(),
            loaded_at: Utc::now(),
        };
        Ok((context, report))
    }

    /// Assemble a context from already-built parts (tests, embedders).
    pub fn from_parts(table: PriceTable, holidays: HolidaySet) -> Self {
        Self {
            table,
            holidays,
            theme: ChartTheme::default(),
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn initialize_loads_table_and_expands_holidays() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"symbol,date,open,high,low,close,volume\n\
              AAPL,2024-01-02,187.1,188.4,183.9,185.6,82488700\n",
        )
        .unwrap();

        let config = AppConfig::for_source(file.path().display().to_string());
        let (context, report) = ChartContext::initialize(&config).unwrap();

        assert_eq!(report.rows_loaded, 1);
        assert_eq!(context.table.symbols(), vec!["AAPL"]);
        // The default window spans 2022-2025: 39 observed closures.
        assert_eq!(context.holidays.len(), 39);
    }

    #[test]
    fn initialize_fails_fast_on_a_missing_dataset() {
        let config = AppConfig::for_source("/nonexistent/prices.csv");
        let err = ChartContext::initialize(&config).unwrap_err();
        assert!(matches!(err, ContextError::Load(_)));
    }

    #[test]
    fn initialize_fails_fast_on_a_bad_window() {
        let mut config = AppConfig::for_source("unused.csv");
        config.calendar.start = "2025-01-01".into();
        config.calendar.end = "2022-01-01".into();
        let err = ChartContext::initialize(&config).unwrap_err();
        assert!(matches!(err, ContextError::Config(_)));
    }
}
