//! The in-memory price table: per-symbol series, sorted by date.

use std::collections::HashMap;

use crate::domain::{PriceBar, Symbol};

/// All loaded price rows, grouped by symbol.
///
/// Each series is ascending by date. Lookup of a symbol that is not
/// present yields an empty slice: the dashboard treats unknown symbols as
/// "no data", never as an error.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    series: HashMap<Symbol, Vec<PriceBar>>,
}

impl PriceTable {
    /// Group `bars` by symbol and sort each series ascending by date.
    ///
    /// The sort is stable, so rows sharing a date keep their input order.
    pub fn from_bars(bars: Vec<PriceBar>) -> Self {
        let mut series: HashMap<Symbol, Vec<PriceBar>> = HashMap::new();
        for bar in bars {
            series.entry(bar.symbol.clone()).or_default().push(bar);
        }
        for bars in series.values_mut() {
            bars.sort_by_key(|bar| bar.date);
        }
        Self { series }
    }

    /// The series for `symbol`, ascending by date; empty if unknown.
    pub fn series(&self, symbol: &str) -> &[PriceBar] {
        self.series.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct symbols, sorted ascending.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.series.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Total rows across all symbols.
    pub fn row_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(symbol: &str, y: i32, m: u32, d: u32, close: f64) -> PriceBar {
        PriceBar {
            symbol: symbol.into(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1_000,
        }
    }

    #[test]
    fn bars_are_grouped_by_symbol_and_sorted_by_date() {
        let table = PriceTable::from_bars(vec![
            bar("TSLA", 2024, 1, 4, 237.9),
            bar("AAPL", 2024, 1, 3, 184.2),
            bar("AAPL", 2024, 1, 2, 185.6),
            bar("TSLA", 2024, 1, 2, 248.4),
        ]);

        let aapl = table.series("AAPL");
        assert_eq!(aapl.len(), 2);
        assert!(aapl[0].date < aapl[1].date);

        assert_eq!(table.symbols(), vec!["AAPL", "TSLA"]);
        assert_eq!(table.row_count(), 4);
    }

    #[test]
    fn unknown_symbol_yields_an_empty_slice() {
        let table = PriceTable::from_bars(vec![bar("AAPL", 2024, 1, 2, 185.6)]);
        assert!(table.series("MSFT").is_empty());
    }

    #[test]
    fn empty_table_has_no_symbols() {
        let table = PriceTable::from_bars(vec![]);
        assert!(table.is_empty());
        assert!(table.symbols().is_empty());
        assert_eq!(table.row_count(), 0);
    }
}
