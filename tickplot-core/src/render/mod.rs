//! Chart rendering policy: from a selection to a figure description.
//!
//! [`render`] is a pure function of the request and the startup context.
//! Both chart variants share one x-axis policy: weekends and market
//! holidays are punched out with range-breaks so the axis shows only
//! trading days, and a range selector offers preset zoom windows.

pub mod context;
pub mod theme;

pub use context::{ChartContext, ContextError};
pub use theme::ChartTheme;

use crate::domain::{ChartRequest, ChartType, PriceBar};
use crate::figure::{
    BarTrace, CandlestickTrace, DragMode, Figure, Font, Layout, LineStyle, Marker, RangeBreak,
    RangeSelector, RangeSlider, ScatterTrace, SelectorButton, SelectorStep, Trace, XAxis, YAxis,
};

/// Volume bars occupy roughly the bottom third of the candlestick plot:
/// the secondary axis tops out at this multiple of the largest volume.
const VOLUME_AXIS_HEADROOM: f64 = 3.0;

/// Build the requested chart from the context's data.
///
/// A symbol with no rows yields a structurally valid figure with empty
/// traces; the axis policy is applied either way. Switching chart type
/// never changes which rows are rendered, only how.
pub fn render(request: &ChartRequest, context: &ChartContext) -> Figure {
    let bars = context.table.series(&request.symbol);
    match request.chart_type {
        ChartType::Line => line_figure(bars, context),
        ChartType::Candlestick => candlestick_figure(bars, context),
    }
}

/// The shared date axis: weekend and holiday range-breaks, hidden range
/// slider, preset selector windows (1m, 6m, YTD, 1y, ALL).
fn date_axis(context: &ChartContext) -> XAxis {
    let theme = &context.theme;
    XAxis {
        rangebreaks: Some(vec![
            RangeBreak::weekends(),
            RangeBreak::dates(context.holidays.to_vec()),
        ]),
        rangeslider: Some(RangeSlider { visible: false }),
        rangeselector: Some(RangeSelector {
            buttons: vec![
                SelectorButton::backward(1, SelectorStep::Month, "<b>1m</b>"),
                SelectorButton::backward(6, SelectorStep::Month, "<b>6m</b>"),
                SelectorButton::to_date(1, SelectorStep::Year, "<b>YTD</b>"),
                SelectorButton::backward(1, SelectorStep::Year, "<b>1y</b>"),
                SelectorButton::all("<b>ALL</b>"),
            ],
            font: Some(Font {
                color: Some(theme.selector_font_color.clone()),
            }),
            activecolor: Some(theme.selector_active_color.clone()),
            bgcolor: Some(theme.selector_bg_color.clone()),
        }),
    }
}

fn line_figure(bars: &[PriceBar], context: &ChartContext) -> Figure {
    let line = Trace::Scatter(ScatterTrace {
        x: bars.iter().map(|bar| bar.date).collect(),
        y: bars.iter().map(|bar| bar.close).collect(),
        mode: "lines".into(),
        line: Some(LineStyle {
            color: Some(context.theme.line_color.clone()),
        }),
    });

    Figure {
        data: vec![line],
        layout: Layout {
            template: Some(context.theme.template.clone()),
            dragmode: Some(DragMode::Pan),
            xaxis: Some(date_axis(context)),
            ..Layout::default()
        },
    }
}

fn candlestick_figure(bars: &[PriceBar], context: &ChartContext) -> Figure {
    let dates: Vec<_> = bars.iter().map(|bar| bar.date).collect();

    let candles = Trace::Candlestick(CandlestickTrace {
        x: dates.clone(),
        open: bars.iter().map(|bar| bar.open).collect(),
        high: bars.iter().map(|bar| bar.high).collect(),
        low: bars.iter().map(|bar| bar.low).collect(),
        close: bars.iter().map(|bar| bar.close).collect(),
    });

    let max_volume = bars.iter().map(|bar| bar.volume).max().unwrap_or(0);
    let volume = Trace::Bar(BarTrace {
        x: dates,
        y: bars.iter().map(|bar| bar.volume).collect(),
        opacity: Some(context.theme.volume_opacity),
        marker: Some(Marker {
            color: Some(context.theme.volume_color.clone()),
        }),
        yaxis: Some("y2".into()),
    });

    Figure {
        data: vec![candles, volume],
        layout: Layout {
            template: Some(context.theme.template.clone()),
            dragmode: Some(DragMode::Pan),
            showlegend: Some(false),
            xaxis: Some(date_axis(context)),
            yaxis2: Some(YAxis {
                overlaying: Some("y".into()),
                side: Some("right".into()),
                range: Some([0.0, max_volume as f64 * VOLUME_AXIS_HEADROOM]),
                showgrid: Some(false),
                showticklabels: Some(false),
            }),
            ..Layout::default()
        },
    }
}
