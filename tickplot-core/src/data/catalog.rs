//! The symbol catalog behind the selection control.

use serde::{Deserialize, Serialize};

use crate::data::table::PriceTable;
use crate::domain::Symbol;

/// The selectable symbols, sorted and deduplicated.
///
/// Fixed at startup; the selection control reads it but never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    pub fn new(mut symbols: Vec<Symbol>) -> Self {
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// The built-in dashboard watchlist.
    pub fn default_list() -> Self {
        Self::new(vec!["AAPL".into(), "TSLA".into()])
    }

    /// All distinct symbols present in a loaded table.
    pub fn from_table(table: &PriceTable) -> Self {
        Self::new(table.symbols().into_iter().map(String::from).collect())
    }

    /// Configured list if present and non-empty, else the table's symbols,
    /// else the built-in watchlist.
    pub fn resolve(configured: Option<&[String]>, table: &PriceTable) -> Self {
        match configured {
            Some(list) if !list.is_empty() => Self::new(list.to_vec()),
            _ if !table.is_empty() => Self::from_table(table),
            _ => Self::default_list(),
        }
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceBar;
    use chrono::NaiveDate;

    fn table_with(symbols: &[&str]) -> PriceTable {
        let bars = symbols
            .iter()
            .map(|s| PriceBar {
                symbol: s.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                open: 10.0,
                high: 11.0,
                low: 9.0,
                close: 10.5,
                volume: 100,
            })
            .collect();
        PriceTable::from_bars(bars)
    }

    #[test]
    fn catalog_is_sorted_and_deduplicated() {
        let catalog = SymbolCatalog::new(vec!["TSLA".into(), "AAPL".into(), "TSLA".into()]);
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["AAPL", "TSLA"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn default_watchlist_contains_the_two_shipped_symbols() {
        let catalog = SymbolCatalog::default_list();
        assert!(catalog.contains("AAPL"));
        assert!(catalog.contains("TSLA"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn resolve_prefers_the_configured_list() {
        let configured = vec!["NVDA".into(), "AMD".into()];
        let catalog = SymbolCatalog::resolve(Some(&configured), &table_with(&["AAPL"]));
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["AMD", "NVDA"]);
    }

    #[test]
    fn resolve_falls_back_to_table_symbols_then_default() {
        let catalog = SymbolCatalog::resolve(None, &table_with(&["MSFT", "GOOG"]));
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["GOOG", "MSFT"]);

        let catalog = SymbolCatalog::resolve(None, &PriceTable::default());
        assert_eq!(catalog, SymbolCatalog::default_list());

        let empty: Vec<String> = vec![];
        let catalog = SymbolCatalog::resolve(Some(&empty), &PriceTable::default());
        assert_eq!(catalog, SymbolCatalog::default_list());
    }
}
