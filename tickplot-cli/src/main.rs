//! tickplot CLI — chart description, calendar, and dataset commands.
//!
//! Commands:
//! - `render` — load a dataset and write a chart description (figure JSON)
//! - `holidays` — expand the market-holiday rules over a date range
//! - `symbols` — list the selectable symbols for a dataset
//! - `sample` — write a deterministic sample dataset CSV

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tickplot_core::calendar::{expand, occurrences, us_trading_holidays};
use tickplot_core::config::AppConfig;
use tickplot_core::data::{load_source, sample_dataset, SymbolCatalog};
use tickplot_core::domain::{ChartRequest, ChartType};
use tickplot_core::figure::ViewerConfig;
use tickplot_core::render::{render, ChartContext};

#[derive(Parser)]
#[command(
    name = "tickplot",
    about = "tickplot CLI — stock chart descriptions on a trading-day axis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a dataset and write a chart description as figure JSON.
    Render {
        /// Symbol to chart (e.g., AAPL).
        #[arg(long)]
        symbol: String,

        /// Chart style: line or candlestick.
        #[arg(long, default_value = "line")]
        chart: String,

        /// Dataset CSV: an http(s) URL or a local path.
        #[arg(long)]
        data: Option<String>,

        /// Path to a TOML config file (alternative to --data).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path for the figure JSON.
        #[arg(long, default_value = "figure.json")]
        out: PathBuf,

        /// Wrap the figure in an envelope with the viewer interaction config.
        #[arg(long, default_value_t = false)]
        viewer: bool,
    },
    /// Expand the market-holiday rules over a date range.
    Holidays {
        /// Start date (YYYY-MM-DD).
        #[arg(long, default_value = "2022-01-01")]
        start: String,

        /// End date (YYYY-MM-DD).
        #[arg(long, default_value = "2025-12-31")]
        end: String,

        /// Emit the listing as JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the selectable symbols for a dataset.
    Symbols {
        /// Dataset CSV: an http(s) URL or a local path.
        #[arg(long)]
        data: Option<String>,

        /// Path to a TOML config file (alternative to --data).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a deterministic sample dataset CSV.
    Sample {
        /// Output CSV path.
        #[arg(long, default_value = "sample.csv")]
        out: PathBuf,

        /// Comma-separated symbols.
        #[arg(long, default_value = "AAPL,TSLA")]
        symbols: String,

        /// Start date (YYYY-MM-DD).
        #[arg(long, default_value = "2022-01-03")]
        start: String,

        /// End date (YYYY-MM-DD).
        #[arg(long, default_value = "2025-12-31")]
        end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            symbol,
            chart,
            data,
            config,
            out,
            viewer,
        } => run_render(symbol, &chart, data, config, &out, viewer),
        Commands::Holidays { start, end, json } => run_holidays(&start, &end, json),
        Commands::Symbols { data, config } => run_symbols(data, config),
        Commands::Sample {
            out,
            symbols,
            start,
            end,
        } => run_sample(&out, &symbols, &start, &end),
    }
}

fn parse_chart_type(value: &str) -> Result<ChartType> {
    match value {
        "line" => Ok(ChartType::Line),
        "candlestick" | "candle" => Ok(ChartType::Candlestick),
        _ => bail!("unknown chart type '{value}'. Valid: line, candlestick"),
    }
}

/// Resolve --data / --config into an application config.
fn resolve_config(data: Option<String>, config: Option<PathBuf>) -> Result<AppConfig> {
    match (data, config) {
        (Some(_), Some(_)) => bail!("--data and --config are mutually exclusive"),
        (Some(source), None) => Ok(AppConfig::for_source(source)),
        (None, Some(path)) => Ok(AppConfig::from_file(&path)?),
        (None, None) => bail!("one of --data or --config is required"),
    }
}

fn run_render(
    symbol: String,
    chart: &str,
    data: Option<String>,
    config: Option<PathBuf>,
    out: &Path,
    viewer: bool,
) -> Result<()> {
    let chart_type = parse_chart_type(chart)?;
    let app_config = resolve_config(data, config)?;

    // The one startup load; any failure here is fatal.
    let (context, report) = ChartContext::initialize(&app_config)?;

    let request = ChartRequest::new(symbol, chart_type);
    let figure = render(&request, &context);

    let json = if viewer {
        let envelope = serde_json::json!({
            "figure": figure,
            "config": ViewerConfig::pan_only(),
        });
        serde_json::to_string_pretty(&envelope)?
    } else {
        figure.to_json_pretty()?
    };
    std::fs::write(out, json)?;

    println!();
    println!("=== Chart Description ===");
    println!("Symbol:         {}", request.symbol);
    println!("Chart type:     {chart_type}");
    println!("Data points:    {}", figure.point_count());
    println!("Holidays:       {} hidden from the axis", context.holidays.len());
    println!(
        "Rows loaded:    {} across {} symbols ({} skipped)",
        report.rows_loaded, report.symbol_count, report.rows_skipped
    );
    if report.suspect_rows > 0 {
        println!("WARNING: {} rows with inconsistent OHLC ranges", report.suspect_rows);
    }
    if context.table.series(&request.symbol).is_empty() {
        println!("WARNING: no rows for '{}'; figure is empty", request.symbol);
    }
    println!(
        "Loaded at:      {}",
        context.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Figure written: {}", out.display());

    Ok(())
}

fn run_holidays(start: &str, end: &str, json: bool) -> Result<()> {
    let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
    let end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;
    if start_date > end_date {
        bail!("--start must not be after --end");
    }

    let rules = us_trading_holidays();
    let listing = occurrences(&rules, start_date, end_date);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if listing.is_empty() {
        println!("No market holidays between {start_date} and {end_date}.");
        return Ok(());
    }

    println!("{:<12} {}", "Date", "Holiday");
    println!("{}", "-".repeat(48));
    for occurrence in &listing {
        println!("{:<12} {}", occurrence.date.to_string(), occurrence.name);
    }

    let distinct = expand(&rules, start_date, end_date);
    println!();
    println!(
        "{} closures, {} distinct dates",
        listing.len(),
        distinct.len()
    );

    Ok(())
}

fn run_symbols(data: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let app_config = resolve_config(data, config)?;
    let (table, report) = load_source(&app_config.data.source)?;
    let catalog = SymbolCatalog::resolve(app_config.symbols.as_deref(), &table);

    println!("{:<8} {:>8}", "Symbol", "Rows");
    println!("{}", "-".repeat(17));
    for symbol in catalog.iter() {
        println!("{:<8} {:>8}", symbol, table.series(symbol).len());
    }

    if report.rows_skipped > 0 {
        println!();
        println!("({} malformed rows skipped)", report.rows_skipped);
    }

    Ok(())
}

fn run_sample(out: &Path, symbols: &str, start: &str, end: &str) -> Result<()> {
    let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
    let end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;
    if start_date > end_date {
        bail!("--start must not be after --end");
    }

    let list: Vec<&str> = symbols
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if list.is_empty() {
        bail!("--symbols must name at least one symbol");
    }

    // Sample data skips the same closures the axis hides.
    let holidays = expand(&us_trading_holidays(), start_date, end_date);
    let bars = sample_dataset(&list, start_date, end_date, &holidays);

    let file = std::fs::File::create(out)?;
    tickplot_core::data::sample::write_csv(&bars, file)?;

    println!(
        "Wrote {} rows for {} symbol(s) to {}",
        bars.len(),
        list.len(),
        out.display()
    );

    Ok(())
}
