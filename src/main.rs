//! Break-even System CLI
//!
//! Command-line front end for the caregiver and long-term-care calculators

use anyhow::{bail, Context, Result};
use breakeven_system::calculator::{parse_reference_date, BreakEven};
use breakeven_system::format::{format_count, format_months, to_currency_label};
use breakeven_system::input::MAX_COMPONENTS;
use breakeven_system::summary::{copy_text, one_line_summary, remaining_note};
use breakeven_system::{BreakEvenEngine, CalculatorMode, FormField, Quote, RawForm};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use log::warn;

#[derive(Debug, Parser)]
#[command(name = "breakeven", version, about = "Insurance break-even calculators")]
struct Cli {
    /// Reference date for the remaining-lifetime estimate (YYYY-MM-DD, default: today)
    #[arg(long, global = true)]
    today: Option<String>,

    /// Print the full quote as JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Caregiver insurance: monthly premium × payment count vs. daily payout
    Caregiver(FormArgs),

    /// Long-term-care / dementia insurance: summed premiums vs. summed monthly pension
    #[command(name = "ltc-dementia")]
    LtcDementia(FormArgs),
}

#[derive(Debug, Args)]
struct FormArgs {
    /// Name shown in the summary
    #[arg(long, default_value = "")]
    name: String,

    /// Current age
    #[arg(long, default_value = "")]
    age: String,

    /// Premium component (repeat up to three times)
    #[arg(long = "premium", alias = "monthly-premium")]
    premiums: Vec<String>,

    /// Payout component: daily payout for caregiver, monthly pension for ltc-dementia
    #[arg(long = "payout", alias = "daily-pay")]
    payouts: Vec<String>,

    /// Number of premium payments
    #[arg(long, default_value = "")]
    pay_count: String,

    /// Lifelong basis age (90 or 100)
    #[arg(long, default_value = "90")]
    lifelong_basis: String,

    /// Keep values as typed instead of stripping non-digit characters
    #[arg(long)]
    raw: bool,
}

impl FormArgs {
    fn to_form(&self) -> RawForm {
        let mut form = RawForm::default();
        let mut put = |field: FormField, value: &str| {
            if self.raw {
                form.set(field, value);
            } else {
                form.input(field, value);
            }
        };

        put(FormField::Name, &self.name);
        put(FormField::Age, &self.age);
        put(FormField::PayCount, &self.pay_count);
        put(FormField::LifelongBasis, &self.lifelong_basis);

        for (i, value) in self.premiums.iter().enumerate().take(MAX_COMPONENTS) {
            put(FormField::Premium(i), value);
        }
        for (i, value) in self.payouts.iter().enumerate().take(MAX_COMPONENTS) {
            put(FormField::Payout(i), value);
        }

        if self.premiums.len() > MAX_COMPONENTS || self.payouts.len() > MAX_COMPONENTS {
            warn!(
                "only the first {} premium and payout values are used",
                MAX_COMPONENTS
            );
        }

        form
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let today: NaiveDate = match &cli.today {
        Some(date) => parse_reference_date(date).context("Failed to read --today")?,
        None => Local::now().date_naive(),
    };

    let (mode, args) = match &cli.command {
        Command::Caregiver(args) => (CalculatorMode::CountBased, args),
        Command::LtcDementia(args) => (CalculatorMode::PensionStyle, args),
    };

    let form = args.to_form();
    let quote = BreakEvenEngine::new(mode).quote(&form, today);

    if cli.json {
        let json = serde_json::to_string_pretty(&quote).context("Failed to serialize quote")?;
        println!("{}", json);
    } else {
        print_report(&quote);
    }

    ensure_valid(&quote)
}

/// Fail with a non-zero exit when any field is invalid
fn ensure_valid(quote: &Quote) -> Result<()> {
    if quote.errors.is_empty() {
        return Ok(());
    }
    for (field, message) in quote.errors.messages() {
        eprintln!("  {}: {}", field, message);
    }
    bail!("{} invalid field(s)", quote.errors.len())
}

fn print_report(quote: &Quote) {
    let result = &quote.result;

    println!("{}", result.mode.title());
    println!("{}", "=".repeat(40));

    let (total_label, payout_label) = match result.mode {
        CalculatorMode::CountBased => ("총보험료", "일 지급 금액"),
        CalculatorMode::PensionStyle => ("총 납부 예정 금액", "월 연금 수령액"),
    };

    println!("  {:<16} {:>20}", "월 보험료", to_currency_label(result.monthly_premium));
    println!("  {:<16} {:>20}", "납입 횟수", format!("{}회", result.pay_count));
    println!("  {:<16} {:>20}", total_label, to_currency_label(result.total_premium));
    println!("  {:<16} {:>20}", payout_label, to_currency_label(result.payout));

    let break_even = match result.break_even {
        Some(BreakEven::CountBased { days, months }) => format!("{}일 ({}달)", format_count(days), months),
        Some(BreakEven::PensionStyle { months_rounded, days, .. }) => {
            format!("{}달 ({}일)", format_months(months_rounded), format_count(days))
        }
        None => match result.mode {
            CalculatorMode::CountBased => "일 지급 금액을 1 이상으로 입력해주세요.".to_string(),
            CalculatorMode::PensionStyle => "월 연금 수령액을 입력해주세요.".to_string(),
        },
    };
    println!("  {:<16} {:>20}", "손익분기", break_even);

    if let Some(sentence) = one_line_summary(quote) {
        println!();
        println!("한 줄 요약: {}", sentence);
    }
    println!("{}", remaining_note(quote));

    println!();
    println!("--- 결과 복사 ---");
    print!("{}", copy_text(quote));
}
