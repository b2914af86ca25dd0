//! Energy ledger and gauge commands.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use clap::Subcommand;
use spoonweek_core::{AccrualPolicy, Config, EnergyGauge, EnergyLedger, EnergyReading, LedgerResult};

use super::{load_compilation, resolve_schedule_path, CliResult};

const BAR_WIDTH: usize = 24;

#[derive(Subcommand)]
pub enum EnergyAction {
    /// Show end-of-day balances for the week
    Week {
        #[arg(long)]
        file: Option<PathBuf>,
        /// Daily allowance (overrides config)
        #[arg(long)]
        max: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the energy left at a moment of the current day
    Now {
        #[arg(long)]
        file: Option<PathBuf>,
        /// Moment to read at, "YYYY-MM-DD HH:MM" (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Accrual policy: on_start or on_end (overrides config)
        #[arg(long)]
        policy: Option<AccrualPolicy>,
        /// Daily allowance (overrides config)
        #[arg(long)]
        max: Option<i32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EnergyAction) -> CliResult {
    let config = Config::load()?;
    match action {
        EnergyAction::Week { file, max, json } => {
            let max = resolve_max(max, &config)?;
            let path = resolve_schedule_path(file, &config)?;
            let compilation = load_compilation(&path)?;
            let ledger = EnergyLedger::new(max).compute(&compilation.schedule);

            if json {
                println!("{}", serde_json::to_string_pretty(&ledger)?);
            } else {
                print_ledger(&ledger);
            }
        }
        EnergyAction::Now {
            file,
            at,
            policy,
            max,
            json,
        } => {
            let max = resolve_max(max, &config)?;
            let policy = policy.unwrap_or(config.energy.accrual);
            let at = match at {
                Some(text) => NaiveDateTime::parse_from_str(&text, "%Y-%m-%d %H:%M")
                    .map_err(|e| format!("Invalid --at '{text}': {e} (expected YYYY-MM-DD HH:MM)"))?,
                None => Local::now().naive_local(),
            };

            let path = resolve_schedule_path(file, &config)?;
            let compilation = load_compilation(&path)?;
            let reading = EnergyGauge::new(max)
                .with_policy(policy)
                .reading_at(&compilation.schedule, &at);

            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print_reading(&reading);
            }
        }
    }
    Ok(())
}

fn resolve_max(max: Option<i32>, config: &Config) -> CliResult<i32> {
    match max {
        Some(m) if m <= 0 => Err(format!("--max must be positive, got {m}").into()),
        Some(m) => Ok(m),
        None => Ok(config.energy.max_daily_energy),
    }
}

fn balance_label(balance: i32, max: i32) -> String {
    if balance > max {
        format!("OVER ({balance})")
    } else {
        format!("{balance}/{max}")
    }
}

fn print_ledger(ledger: &LedgerResult) {
    let max = ledger.max_daily_energy;
    println!(
        "{:<10} {:>6} {:>6} {:>6}  {}",
        "Day", "Start", "Carry", "Net", "End"
    );
    println!("{}", "-".repeat(44));
    for row in &ledger.days {
        println!(
            "{:<10} {:>6} {:>+6} {:>+6}  {}",
            row.day.name(),
            row.starting_balance,
            row.carry_over,
            row.net_delta,
            balance_label(row.end_of_day_balance, max)
        );
    }
    println!("{}", "-".repeat(44));
    println!(
        "Weekly Energy: {}/{}",
        ledger.weekly_total,
        ledger.max_weekly_energy()
    );
}

fn print_reading(reading: &EnergyReading) {
    let filled = ((reading.fraction().min(1.0)) * BAR_WIDTH as f64).round() as usize;
    println!(
        "{} {:02}:{:02} ({})",
        reading.day,
        reading.minute / 60,
        reading.minute % 60,
        reading.policy
    );
    println!(
        "Daily Energy: [{}{}] {}/{}",
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        reading.display,
        reading.max_daily_energy
    );
    if reading.raw != reading.display {
        println!("  (raw balance {})", reading.raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_label_marks_surplus_as_over() {
        assert_eq!(balance_label(15, 12), "OVER (15)");
        assert_eq!(balance_label(12, 12), "12/12");
        assert_eq!(balance_label(-3, 12), "-3/12");
    }

    #[test]
    fn resolve_max_prefers_flag() {
        let config = Config::default();
        assert_eq!(resolve_max(Some(9), &config).unwrap(), 9);
        assert_eq!(resolve_max(None, &config).unwrap(), 12);
        assert!(resolve_max(Some(0), &config).is_err());
    }
}
