//! Config commands over `config.toml` in the data dir.

use clap::Subcommand;
use spoonweek_core::Config;

use super::CliResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one value
    Get {
        /// Dotted key (e.g. "energy.max_daily_energy", "energy.accrual", "schedule.path")
        key: String,
    },
    /// Change one value and save
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Show the energy and schedule settings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Restore the default allowance, accrual policy and schedule path
    Reset,
}

pub fn run(action: ConfigAction) -> CliResult {
    let mut config = Config::load()?;
    match action {
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown config key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            tracing::debug!(%key, %value, "config updated");
            println!("{key} = {value}");
        }
        ConfigAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print_config(&config)?;
            }
        }
        ConfigAction::Reset => {
            config = Config::default();
            config.save()?;
            println!("config reset to defaults");
            print_config(&config)?;
        }
    }
    Ok(())
}

fn print_config(config: &Config) -> CliResult {
    println!("[energy]");
    println!("max_daily_energy = {}", config.energy.max_daily_energy);
    println!("accrual          = {}", config.energy.accrual);
    println!("[schedule]");
    if config.schedule.path.is_empty() {
        println!("path             = {} (default)", config.schedule_path()?.display());
    } else {
        println!("path             = {}", config.schedule.path);
    }
    Ok(())
}
