//! Trading-calendar rules and holiday expansion.
//!
//! A fixed rule set describes when the U.S. equity market is closed:
//! - Rules resolve a nominal date per year (fixed, nth-weekday,
//!   last-weekday, Easter-relative)
//! - Observance shifts weekend-landing dates to the adjacent workday
//! - Expansion evaluates all rules over a queried range into a concrete,
//!   deduplicated [`HolidaySet`]
//!
//! The set feeds the chart axis policy: holiday dates are punched out of
//! the x axis alongside weekends so only trading days remain.

pub mod easter;
pub mod rule;
pub mod us;

pub use easter::easter_sunday;
pub use rule::{DateRule, HolidayRule, Observance};
pub use us::us_trading_holidays;

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Concrete observed-holiday dates for one queried range.
///
/// Always sorted ascending and free of duplicates; two rules observing the
/// same date collapse into one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Ascending `Vec` of the dates, ready for an axis range-break.
    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.dates.iter().copied().collect()
    }

    /// A trading day is a weekday that is not a holiday.
    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.contains(date)
    }
}

/// One named closure inside a queried range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayOccurrence {
    pub date: NaiveDate,
    pub name: String,
}

/// Expand `rules` over the inclusive range `[start, end]`.
///
/// The year loop runs one year past each end of the range: observance can
/// shift a date across a year boundary (New Year's Day on a Saturday is
/// observed the previous December), so nominal years outside the range can
/// still contribute observed dates inside it. The final filter keeps only
/// dates within `[start, end]`.
///
/// Pure: no clocks, no caches. `start > end` yields the empty set.
pub fn expand(rules: &[HolidayRule], start: NaiveDate, end: NaiveDate) -> HolidaySet {
    let mut dates = BTreeSet::new();
    if start <= end {
        for rule in rules {
            for year in (start.year() - 1)..=(end.year() + 1) {
                if let Some(observed) = rule.observed_in_year(year) {
                    if observed >= start && observed <= end {
                        dates.insert(observed);
                    }
                }
            }
        }
    }
    HolidaySet { dates }
}

/// Like [`expand`], but keeps rule names and does not collapse dates two
/// rules happen to share. Sorted by date, then name.
pub fn occurrences(
    rules: &[HolidayRule],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<HolidayOccurrence> {
    let mut out = Vec::new();
    if start <= end {
        for rule in rules {
            for year in (start.year() - 1)..=(end.year() + 1) {
                if let Some(observed) = rule.observed_in_year(year) {
                    if observed >= start && observed <= end {
                        out.push(HolidayOccurrence {
                            date: observed,
                            name: rule.name.clone(),
                        });
                    }
                }
            }
        }
    }
    out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    out
}
