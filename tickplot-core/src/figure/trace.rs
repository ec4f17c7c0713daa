//! Figure traces — the data series of a chart.

use chrono::NaiveDate;
use serde::Serialize;

/// Line styling for scatter traces.
#[derive(Debug, Clone, Serialize)]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Marker styling for bar traces.
#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Closing-price line over time.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

/// OHLC candles.
#[derive(Debug, Clone, Serialize)]
pub struct CandlestickTrace {
    pub x: Vec<NaiveDate>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

/// Vertical bars; used for the volume underlay on the secondary axis.
#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub x: Vec<NaiveDate>,
    pub y: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Axis reference, `"y2"` for the secondary value axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

/// One trace, tagged with its plotly `type`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Candlestick(CandlestickTrace),
    Bar(BarTrace),
}

impl Trace {
    /// Number of x-axis points the trace carries.
    pub fn point_count(&self) -> usize {
        match self {
            Trace::Scatter(t) => t.x.len(),
            Trace::Candlestick(t) => t.x.len(),
            Trace::Bar(t) => t.x.len(),
        }
    }
}
