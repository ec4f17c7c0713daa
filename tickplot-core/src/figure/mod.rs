//! The renderable chart description.
//!
//! A [`Figure`] is this crate's output artifact: traces plus layout,
//! serializing to plotly-compatible JSON. The crate only *describes*
//! charts; drawing them belongs to whatever surface embeds the JSON.

pub mod axis;
pub mod layout;
pub mod trace;

pub use axis::{
    Font, RangeBreak, RangeSelector, RangeSlider, SelectorButton, SelectorStep, StepMode, XAxis,
    YAxis,
};
pub use layout::{DragMode, Layout};
pub use trace::{BarTrace, CandlestickTrace, LineStyle, Marker, ScatterTrace, Trace};

use serde::Serialize;

/// A complete chart description.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Total x-axis points across all traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::point_count).sum()
    }
}

/// Interaction knobs handed to the embedding surface alongside the figure
/// (plotly's graph `config` object).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    pub scroll_zoom: bool,
    pub mode_bar_buttons_to_remove: Vec<String>,
    pub displaylogo: bool,
}

impl ViewerConfig {
    /// Pan-first interaction: wheel zoom stays enabled, the mode-bar zoom
    /// buttons are stripped, the vendor logo is hidden.
    pub fn pan_only() -> Self {
        Self {
            scroll_zoom: true,
            mode_bar_buttons_to_remove: vec![
                "autoScale".into(),
                "zoom".into(),
                "zoomIn".into(),
                "zoomOut".into(),
            ],
            displaylogo: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_figure_still_serializes_with_both_keys() {
        let figure = Figure {
            data: vec![],
            layout: Layout::default(),
        };
        let json = serde_json::to_value(&figure).unwrap();
        assert!(json["data"].as_array().unwrap().is_empty());
        assert!(json["layout"].is_object());
        assert_eq!(figure.point_count(), 0);
    }

    #[test]
    fn viewer_config_uses_plotly_camel_case_keys() {
        let json = serde_json::to_value(ViewerConfig::pan_only()).unwrap();
        assert_eq!(json["scrollZoom"], true);
        assert_eq!(json["displaylogo"], false);
        let removed: Vec<&str> = json["modeBarButtonsToRemove"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(removed, vec!["autoScale", "zoom", "zoomIn", "zoomOut"]);
    }
}
