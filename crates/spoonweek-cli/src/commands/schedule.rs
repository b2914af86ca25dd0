use std::path::PathBuf;

use chrono::{Datelike, Local, Timelike};
use clap::Subcommand;
use spoonweek_core::schedule::presets;
use spoonweek_core::storage::schedule_file;
use spoonweek_core::{CompiledSchedule, Config, Day, Event};

use super::{load_compilation, parse_day, resolve_schedule_path, CliResult};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Write the built-in sample week as a schedule source
    Init {
        /// Schedule source path (defaults to the configured path)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Compile the schedule and print the whole week
    Compile {
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the schedule and report consistency warnings
    Check {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show one day of the compiled schedule
    Day {
        /// Day of week (0-6 or sun/mon/tue/wed/thu/fri/sat)
        day: String,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ScheduleAction) -> CliResult {
    let config = Config::load()?;
    match action {
        ScheduleAction::Init { file, force } => {
            let path = resolve_schedule_path(file, &config)?;
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            schedule_file::save_rules(&path, &presets::sample_week())?;
            println!("Sample schedule written to {}", path.display());
        }
        ScheduleAction::Compile { file, json } => {
            let path = resolve_schedule_path(file, &config)?;
            let compilation = load_compilation(&path)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&compilation.schedule)?);
            } else {
                print_week(&compilation.schedule);
            }
        }
        ScheduleAction::Check { file } => {
            let path = resolve_schedule_path(file, &config)?;
            let compilation = load_compilation(&path)?;
            println!(
                "ok: {} events across 7 days",
                compilation.schedule.total_events()
            );
            for warning in &compilation.warnings {
                println!("warning: {warning}");
            }
        }
        ScheduleAction::Day { day, file, json } => {
            let day = parse_day(&day)?;
            let path = resolve_schedule_path(file, &config)?;
            let compilation = load_compilation(&path)?;
            let events = compilation.schedule.day(day);

            if json {
                println!("{}", serde_json::to_string_pretty(events)?);
            } else {
                let now = Local::now();
                let active_minute = (Day::from(now.weekday()) == day)
                    .then(|| (now.hour() * 60 + now.minute()) as u16);
                print_day(day, events, active_minute);
            }
        }
    }
    Ok(())
}

fn format_event(event: &Event) -> String {
    format!(
        "{} - {}  {:<45} {:+}",
        event.start_label(),
        event.end_label(),
        event.title,
        event.energy
    )
}

fn print_day(day: Day, events: &[Event], active_minute: Option<u16>) {
    println!("{day}");
    if events.is_empty() {
        println!("  No events scheduled.");
        return;
    }
    for event in events {
        let marker = match active_minute {
            Some(minute) if event.is_active_at(minute) => ">",
            _ => " ",
        };
        println!("{marker} {}", format_event(event));
    }
}

fn print_week(schedule: &CompiledSchedule) {
    for (day, events) in schedule.iter() {
        print_day(day, events, None);
        println!();
    }
}
