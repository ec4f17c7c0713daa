//! Chart requests — what the user picked in the selection controls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which chart style to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Closing price over time.
    Line,
    /// OHLC candles with a volume underlay on a secondary axis.
    Candlestick,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Line => write!(f, "line"),
            ChartType::Candlestick => write!(f, "candlestick"),
        }
    }
}

/// One chart selection: a symbol plus a chart style.
///
/// Requests are immutable; every change in the controls produces a fresh
/// request rather than mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub symbol: String,
    pub chart_type: ChartType,
}

impl ChartRequest {
    pub fn new(symbol: impl Into<String>, chart_type: ChartType) -> Self {
        Self {
            symbol: symbol.into(),
            chart_type,
        }
    }
}
