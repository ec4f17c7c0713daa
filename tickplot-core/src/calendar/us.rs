//! The U.S. equity market holiday rule set.

use chrono::{NaiveDate, Weekday};

use super::rule::{DateRule, HolidayRule, Observance};

/// The ten rules behind NYSE full-day closures, in calendar order.
///
/// Fixed-date holidays (New Year's, Juneteenth, Independence Day,
/// Christmas) observe nearest-workday; the floating Monday/Thursday
/// holidays and Good Friday already land on weekdays and observe exactly.
/// MLK Day and Juneteenth contribute only from the year they entered the
/// calendar.
pub fn us_trading_holidays() -> Vec<HolidayRule> {
    vec![
        HolidayRule::new(
            "New Year's Day",
            DateRule::Fixed { month: 1, day: 1 },
            Observance::NearestWorkday,
        ),
        HolidayRule::new(
            "Martin Luther King Jr. Day",
            DateRule::NthWeekday {
                month: 1,
                weekday: Weekday::Mon,
                nth: 3,
            },
            Observance::Exact,
        )
        .effective_from(NaiveDate::from_ymd_opt(1986, 1, 1).unwrap()),
        HolidayRule::new(
            "Washington's Birthday",
            DateRule::NthWeekday {
                month: 2,
                weekday: Weekday::Mon,
                nth: 3,
            },
            Observance::Exact,
        ),
        HolidayRule::new(
            "Good Friday",
            DateRule::DaysBeforeEaster { days: 2 },
            Observance::Exact,
        ),
        HolidayRule::new(
            "Memorial Day",
            DateRule::LastWeekday {
                month: 5,
                weekday: Weekday::Mon,
            },
            Observance::Exact,
        ),
        HolidayRule::new(
            "Juneteenth National Independence Day",
            DateRule::Fixed { month: 6, day: 19 },
            Observance::NearestWorkday,
        )
        .effective_from(NaiveDate::from_ymd_opt(2021, 6, 18).unwrap()),
        HolidayRule::new(
            "Independence Day",
            DateRule::Fixed { month: 7, day: 4 },
            Observance::NearestWorkday,
        ),
        HolidayRule::new(
            "Labor Day",
            DateRule::NthWeekday {
                month: 9,
                weekday: Weekday::Mon,
                nth: 1,
            },
            Observance::Exact,
        ),
        HolidayRule::new(
            "Thanksgiving Day",
            DateRule::NthWeekday {
                month: 11,
                weekday: Weekday::Thu,
                nth: 4,
            },
            Observance::Exact,
        ),
        HolidayRule::new(
            "Christmas Day",
            DateRule::Fixed { month: 12, day: 25 },
            Observance::NearestWorkday,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn observed(year: i32) -> Vec<NaiveDate> {
        us_trading_holidays()
            .iter()
            .filter_map(|rule| rule.observed_in_year(year))
            .collect()
    }

    #[test]
    fn rule_set_has_ten_rules() {
        assert_eq!(us_trading_holidays().len(), 10);
    }

    #[test]
    fn observed_closures_2024_match_the_exchange_calendar() {
        assert_eq!(
            observed(2024),
            vec![
                date(2024, 1, 1),
                date(2024, 1, 15),
                date(2024, 2, 19),
                date(2024, 3, 29),
                date(2024, 5, 27),
                date(2024, 6, 19),
                date(2024, 7, 4),
                date(2024, 9, 2),
                date(2024, 11, 28),
                date(2024, 12, 25),
            ]
        );
    }

    #[test]
    fn observed_closures_2025_match_the_exchange_calendar() {
        assert_eq!(
            observed(2025),
            vec![
                date(2025, 1, 1),
                date(2025, 1, 20),
                date(2025, 2, 17),
                date(2025, 4, 18),
                date(2025, 5, 26),
                date(2025, 6, 19),
                date(2025, 7, 4),
                date(2025, 9, 1),
                date(2025, 11, 27),
                date(2025, 12, 25),
            ]
        );
    }

    #[test]
    fn saturday_fourth_of_july_observes_on_friday() {
        let rules = us_trading_holidays();
        let independence = rules
            .iter()
            .find(|r| r.name == "Independence Day")
            .unwrap();
        assert_eq!(independence.observed_in_year(2026), Some(date(2026, 7, 3)));
    }

    #[test]
    fn sunday_new_years_day_observes_on_monday() {
        let rules = us_trading_holidays();
        let new_years = rules.iter().find(|r| r.name == "New Year's Day").unwrap();
        assert_eq!(new_years.observed_in_year(2023), Some(date(2023, 1, 2)));
    }

    #[test]
    fn mlk_day_is_absent_before_1986() {
        let rules = us_trading_holidays();
        let mlk = rules
            .iter()
            .find(|r| r.name.starts_with("Martin Luther King"))
            .unwrap();
        assert_eq!(mlk.observed_in_year(1985), None);
        assert_eq!(mlk.observed_in_year(1986), Some(date(1986, 1, 20)));
    }

    #[test]
    fn juneteenth_is_absent_before_2021() {
        let rules = us_trading_holidays();
        let juneteenth = rules
            .iter()
            .find(|r| r.name.starts_with("Juneteenth"))
            .unwrap();
        assert_eq!(juneteenth.observed_in_year(2019), None);
        assert_eq!(juneteenth.observed_in_year(2020), None);
        assert_eq!(juneteenth.observed_in_year(2021), Some(date(2021, 6, 18)));
        assert_eq!(juneteenth.observed_in_year(2023), Some(date(2023, 6, 19)));
    }

    #[test]
    fn good_friday_tracks_easter_across_years() {
        let rules = us_trading_holidays();
        let good_friday = rules.iter().find(|r| r.name == "Good Friday").unwrap();
        assert_eq!(good_friday.observed_in_year(2022), Some(date(2022, 4, 15)));
        assert_eq!(good_friday.observed_in_year(2023), Some(date(2023, 4, 7)));
        assert_eq!(good_friday.observed_in_year(2026), Some(date(2026, 4, 3)));
    }
}
