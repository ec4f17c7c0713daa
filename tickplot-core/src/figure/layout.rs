//! Figure layout: theme template, drag mode, axes.

use serde::Serialize;

use super::axis::{XAxis, YAxis};

/// Default pointer behavior over the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragMode {
    Pan,
    Zoom,
}

/// Figure-level presentation settings.
///
/// `template` is a theme *name* (`"plotly_dark"`); resolving it to actual
/// colors is the job of whatever surface draws the figure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragmode: Option<DragMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<XAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<YAxis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<YAxis>,
}
