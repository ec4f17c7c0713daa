//! Dark/aqua theme tokens for tickplot charts
//!
//! Provides the dashboard's visual identity:
//! - **Template**: plotly's dark base layer
//! - **Line**: aqua closing-price trace
//! - **Selector**: aqua bar, red active button, black labels
//! - **Volume**: translucent white bars under the candles

/// Dark/aqua theme for chart figures.
///
/// Colors are CSS color names or plotly template names; resolving them to
/// pixels is the embedding surface's job.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    /// Layout template name (base colors, grid, paper)
    pub template: String,
    /// Closing-price line color
    pub line_color: String,
    /// Range-selector label font color
    pub selector_font_color: String,
    /// Range-selector active-button color
    pub selector_active_color: String,
    /// Range-selector background color
    pub selector_bg_color: String,
    /// Volume bar fill color
    pub volume_color: String,
    /// Volume bar opacity
    pub volume_opacity: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::dark_aqua()
    }
}

impl ChartTheme {
    /// Create the default dark/aqua theme
    pub fn dark_aqua() -> Self {
        Self {
            template: "plotly_dark".into(),
            line_color: "aqua".into(),
            selector_font_color: "black".into(),
            selector_active_color: "red".into(),
            selector_bg_color: "aqua".into(),
            volume_color: "white".into(),
            volume_opacity: 0.3,
        }
    }
}
