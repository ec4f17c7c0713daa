//! Holiday rules: nominal date resolution plus observance adjustment.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::easter::easter_sunday;

/// How a rule produces its nominal calendar date for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// Same month and day every year (Christmas: 12/25).
    Fixed { month: u32, day: u32 },
    /// The nth occurrence of a weekday within a month (MLK: 3rd Monday of
    /// January). `nth` is 1-based.
    NthWeekday { month: u32, weekday: Weekday, nth: u8 },
    /// The final occurrence of a weekday within a month (Memorial Day:
    /// last Monday of May).
    LastWeekday { month: u32, weekday: Weekday },
    /// A fixed number of days before Easter Sunday (Good Friday: 2).
    DaysBeforeEaster { days: u32 },
}

impl DateRule {
    /// Nominal date for `year`, or `None` when the rule does not resolve
    /// (a fifth weekday that does not exist, a date outside chrono range).
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
            DateRule::NthWeekday {
                month,
                weekday,
                nth,
            } => NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth),
            DateRule::LastWeekday { month, weekday } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
                    .or_else(|| NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4))
            }
            DateRule::DaysBeforeEaster { days } => easter_sunday(year)
                .and_then(|sunday| sunday.checked_sub_signed(Duration::days(days as i64))),
        }
    }
}

/// Weekend adjustment applied to a nominal date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observance {
    /// Observe the nominal date as-is.
    Exact,
    /// Saturday observes on the preceding Friday, Sunday on the following
    /// Monday. U.S. market convention for fixed-date holidays.
    NearestWorkday,
}

impl Observance {
    pub fn apply(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Observance::Exact => date,
            Observance::NearestWorkday => match date.weekday() {
                Weekday::Sat => date - Duration::days(1),
                Weekday::Sun => date + Duration::days(1),
                _ => date,
            },
        }
    }
}

/// A named holiday rule.
///
/// `effective_from` gates on the *nominal* date: a rule whose nominal date
/// falls before the bound contributes nothing for that year, even if the
/// observed date would land inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    pub name: String,
    pub rule: DateRule,
    pub observance: Observance,
    pub effective_from: Option<NaiveDate>,
}

impl HolidayRule {
    pub fn new(name: impl Into<String>, rule: DateRule, observance: Observance) -> Self {
        Self {
            name: name.into(),
            rule,
            observance,
            effective_from: None,
        }
    }

    /// Builder-style activation bound (Juneteenth joined the calendar in 2021).
    pub fn effective_from(mut self, date: NaiveDate) -> Self {
        self.effective_from = Some(date);
        self
    }

    /// Observed date for `year`: resolve the nominal date, check the
    /// activation bound, then apply the observance shift.
    pub fn observed_in_year(&self, year: i32) -> Option<NaiveDate> {
        let nominal = self.rule.resolve(year)?;
        if let Some(bound) = self.effective_from {
            if nominal < bound {
                return None;
            }
        }
        Some(self.observance.apply(nominal))
    }
}
