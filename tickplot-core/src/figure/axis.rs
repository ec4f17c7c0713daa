//! Axis configuration: range-breaks, the range selector, secondary axes.

use chrono::NaiveDate;
use serde::Serialize;

/// An interval removed from the rendered scale.
///
/// Either a recurring weekly bound pair (`["sat", "mon"]` hides weekends)
/// or an explicit list of dates (market holidays).
#[derive(Debug, Clone, Serialize)]
pub struct RangeBreak {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<NaiveDate>>,
}

impl RangeBreak {
    /// Hide Saturday up to Monday open.
    pub fn weekends() -> Self {
        Self {
            bounds: Some(("sat".into(), "mon".into())),
            values: None,
        }
    }

    /// Hide the given dates.
    pub fn dates(values: Vec<NaiveDate>) -> Self {
        Self {
            bounds: None,
            values: Some(values),
        }
    }
}

/// Step unit for selector buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorStep {
    Month,
    Year,
    All,
}

/// How a selector button counts its window back from the newest point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    Backward,
    Todate,
}

/// One preset zoom window on the range selector.
#[derive(Debug, Clone, Serialize)]
pub struct SelectorButton {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub step: SelectorStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepmode: Option<StepMode>,
}

impl SelectorButton {
    /// A window of `count` steps back from the newest point.
    pub fn backward(count: u32, step: SelectorStep, label: &str) -> Self {
        Self {
            count: Some(count),
            label: Some(label.to_string()),
            step,
            stepmode: Some(StepMode::Backward),
        }
    }

    /// A window from the start of the current period to the newest point
    /// (year-to-date).
    pub fn to_date(count: u32, step: SelectorStep, label: &str) -> Self {
        Self {
            count: Some(count),
            label: Some(label.to_string()),
            step,
            stepmode: Some(StepMode::Todate),
        }
    }

    /// The full extent of the data.
    pub fn all(label: &str) -> Self {
        Self {
            count: None,
            label: Some(label.to_string()),
            step: SelectorStep::All,
            stepmode: None,
        }
    }
}

/// Font overrides for selector labels.
#[derive(Debug, Clone, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The preset-window control drawn above the x axis.
#[derive(Debug, Clone, Serialize)]
pub struct RangeSelector {
    pub buttons: Vec<SelectorButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activecolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
}

/// The miniature overview slider below the x axis.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
}

/// Date (x) axis configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct XAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangebreaks: Option<Vec<RangeBreak>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeselector: Option<RangeSelector>,
}

/// Value (y) axis configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct YAxis {
    /// `"y"` lays this axis over the primary one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showticklabels: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_break_serializes_as_bound_pair() {
        let json = serde_json::to_value(RangeBreak::weekends()).unwrap();
        assert_eq!(json["bounds"][0], "sat");
        assert_eq!(json["bounds"][1], "mon");
        assert!(json.get("values").is_none());
    }

    #[test]
    fn date_break_serializes_as_value_list() {
        let dates = vec![NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()];
        let json = serde_json::to_value(RangeBreak::dates(dates)).unwrap();
        assert_eq!(json["values"][0], "2024-07-04");
        assert!(json.get("bounds").is_none());
    }

    #[test]
    fn all_button_has_no_count_or_stepmode() {
        let json = serde_json::to_value(SelectorButton::all("<b>ALL</b>")).unwrap();
        assert_eq!(json["step"], "all");
        assert_eq!(json["label"], "<b>ALL</b>");
        assert!(json.get("count").is_none());
        assert!(json.get("stepmode").is_none());
    }

    #[test]
    fn to_date_button_uses_todate_stepmode() {
        let json =
            serde_json::to_value(SelectorButton::to_date(1, SelectorStep::Year, "<b>YTD</b>"))
                .unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["step"], "year");
        assert_eq!(json["stepmode"], "todate");
    }
}
