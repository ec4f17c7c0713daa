//! Deterministic sample dataset generator.
//!
//! A seeded random walk over trading days only. Gives the CLI demo and
//! the benches a realistic dataset without touching the remote bucket:
//! like the real CSV, the output has no weekend or holiday rows.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::calendar::HolidaySet;
use crate::domain::PriceBar;

/// Generate a trading-day random walk for one symbol.
///
/// The RNG is seeded from the symbol name, so the same symbol and range
/// always produce the same bars.
pub fn sample_bars(
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
) -> Vec<PriceBar> {
    // Deterministic seed from symbol name
    let seed_bytes = blake3::hash(symbol.as_bytes());
    let seed: [u8; 32] = *seed_bytes.as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut bars = Vec::new();
    let mut price = 100.0_f64;
    let mut current = start;

    while current <= end {
        if !holidays.is_trading_day(current) {
            current += Duration::days(1);
            continue;
        }

        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        let open = price;
        let close = price * (1.0 + daily_return);
        let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
        let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
        let volume = rng.gen_range(500_000..5_000_000u64);

        bars.push(PriceBar {
            symbol: symbol.to_string(),
            date: current,
            open,
            high,
            low,
            close,
            volume,
        });

        price = close;
        current += Duration::days(1);
    }

    bars
}

/// Generate a multi-symbol dataset, rows grouped per symbol.
pub fn sample_dataset(
    symbols: &[&str],
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HolidaySet,
) -> Vec<PriceBar> {
    symbols
        .iter()
        .flat_map(|symbol| sample_bars(symbol, start, end, holidays))
        .collect()
}

/// Write bars as CSV with the loader's column layout.
pub fn write_csv<W: std::io::Write>(bars: &[PriceBar], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for bar in bars {
        csv_writer.serialize(bar)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{expand, us_trading_holidays};
    use crate::data::loader::load_reader;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn july_2024_holidays() -> HolidaySet {
        expand(&us_trading_holidays(), date(2024, 7, 1), date(2024, 7, 31))
    }

    #[test]
    fn sample_bars_are_deterministic_per_symbol() {
        let holidays = july_2024_holidays();
        let first = sample_bars("AAPL", date(2024, 7, 1), date(2024, 7, 31), &holidays);
        let second = sample_bars("AAPL", date(2024, 7, 1), date(2024, 7, 31), &holidays);
        assert_eq!(first.len(), second.len());
        assert!(first
            .iter()
            .zip(&second)
            .all(|(a, b)| a.date == b.date && a.close == b.close && a.volume == b.volume));

        let other = sample_bars("TSLA", date(2024, 7, 1), date(2024, 7, 31), &holidays);
        assert!(first.iter().zip(&other).any(|(a, b)| a.close != b.close));
    }

    #[test]
    fn sample_bars_skip_weekends_and_holidays() {
        let holidays = july_2024_holidays();
        let bars = sample_bars("AAPL", date(2024, 7, 1), date(2024, 7, 31), &holidays);
        // 23 weekdays in July 2024, minus Independence Day.
        assert_eq!(bars.len(), 22);
        assert!(bars.iter().all(|bar| {
            bar.date.weekday().num_days_from_monday() < 5 && bar.date != date(2024, 7, 4)
        }));
    }

    #[test]
    fn sample_bars_are_sane_and_ascending() {
        let holidays = july_2024_holidays();
        let bars = sample_bars("NVDA", date(2024, 7, 1), date(2024, 7, 31), &holidays);
        assert!(bars.iter().all(PriceBar::is_sane));
        assert!(bars.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn written_csv_round_trips_through_the_loader() {
        let holidays = july_2024_holidays();
        let bars = sample_dataset(
            &["AAPL", "TSLA"],
            date(2024, 7, 1),
            date(2024, 7, 31),
            &holidays,
        );

        let mut buf = Vec::new();
        write_csv(&bars, &mut buf).unwrap();

        let (table, report) = load_reader(buf.as_slice()).unwrap();
        assert_eq!(report.rows_loaded, bars.len());
        assert_eq!(report.rows_skipped, 0);
        assert_eq!(report.suspect_rows, 0);
        assert_eq!(table.symbols(), vec!["AAPL", "TSLA"]);
    }
}
