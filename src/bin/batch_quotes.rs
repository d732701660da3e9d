//! Evaluate a CSV of quotes in one pass
//!
//! Input columns: `mode` plus any form field name (name, age, premium1..3,
//! payout1..3, pay_count, lifelong_basis, or the form aliases such as `payCount`).
//! Writes one result row per quote, in input order.

use anyhow::{Context, Result};
use breakeven_system::calculator::{parse_reference_date, BreakEven};
use breakeven_system::input::{load_quotes, QuoteRecord};
use breakeven_system::{BreakEvenEngine, Quote};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "batch_quotes", about = "Run break-even calculations for a CSV of quotes")]
struct Cli {
    /// Input CSV file
    input: PathBuf,

    /// Output CSV file
    #[arg(short, long, default_value = "quote_results.csv")]
    output: PathBuf,

    /// Reference date for remaining-lifetime estimates (YYYY-MM-DD, default: today)
    #[arg(long)]
    today: Option<String>,
}

/// Output row
#[derive(Debug, Serialize)]
struct ResultRow {
    row: usize,
    mode: String,
    name: String,
    monthly_premium: i64,
    pay_count: i64,
    total_premium: i64,
    payout: i64,
    break_even_days: Option<i64>,
    break_even_months: Option<String>,
    remaining_days: Option<i64>,
    target_date: Option<String>,
    calc_ready: bool,
    errors: String,
}

impl ResultRow {
    fn from_quote(row: usize, quote: &Quote) -> Self {
        let result = &quote.result;
        let errors = quote
            .errors
            .messages()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");

        Self {
            row,
            mode: result.mode.to_string(),
            name: quote.name.clone(),
            monthly_premium: result.monthly_premium,
            pay_count: result.pay_count,
            total_premium: result.total_premium,
            payout: result.payout,
            break_even_days: result.break_even_days(),
            break_even_months: result.break_even.as_ref().map(BreakEven::months_label),
            remaining_days: result.remaining.as_ref().map(|r| r.remaining_days),
            target_date: result.remaining.as_ref().map(|r| r.target_date_label.clone()),
            calc_ready: quote.is_calc_ready(),
            errors,
        }
    }
}

/// Run every quote in parallel, keeping input order
fn evaluate(quotes: &[QuoteRecord], today: NaiveDate) -> Vec<ResultRow> {
    quotes
        .par_iter()
        .map(|record| {
            let quote = BreakEvenEngine::new(record.mode).quote(&record.form, today);
            ResultRow::from_quote(record.row, &quote)
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let today: NaiveDate = match &cli.today {
        Some(date) => parse_reference_date(date).context("Failed to read --today")?,
        None => Local::now().date_naive(),
    };

    let start = Instant::now();
    let quotes = load_quotes(&cli.input)
        .with_context(|| format!("Failed to load quotes from {}", cli.input.display()))?;
    log::info!("Loaded {} quotes in {:?}", quotes.len(), start.elapsed());

    let results = evaluate(&quotes, today);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    for row in &results {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let ready = results.iter().filter(|r| r.calc_ready).count();
    println!(
        "Wrote {} quotes ({} ready, {} incomplete) to {} in {:?}",
        results.len(),
        ready,
        results.len() - ready,
        cli.output.display(),
        start.elapsed()
    );

    Ok(())
}
