//! # Spoonweek Core Library
//!
//! This library turns a compact weekly schedule definition into a concrete,
//! conflict-free week and computes a spoon-theory energy budget over it.
//! Everything here is available through the standalone `spoonweek` CLI; any
//! display layer is a thin view over the same core.
//!
//! ## Architecture
//!
//! - **Schedule Compiler**: expands daily / weekday / weekend / specific-day
//!   rules with fixed precedence and overlap eviction
//! - **Energy Ledger**: end-of-day balances with carry-over across the week
//! - **Energy Gauge**: "energy left right now" under a swappable accrual policy
//! - **Storage**: TOML configuration and JSON schedule sources
//!
//! Data flows one way: rules -> [`CompiledSchedule`] -> [`LedgerResult`].
//! The `schedule` and `energy` modules are pure; only `storage` does I/O.
//!
//! ## Key Components
//!
//! - [`ScheduleCompiler`]: rule set to compiled week
//! - [`EnergyLedger`]: compiled week to per-day balances
//! - [`EnergyGauge`]: point-in-time reading for one day
//! - [`Config`]: application configuration management

pub mod energy;
pub mod error;
pub mod schedule;
pub mod storage;

pub use energy::{
    compute_balances, AccrualPolicy, DayBalance, EnergyGauge, EnergyLedger, EnergyReading,
    LedgerResult,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use schedule::{
    compile, Compilation, CompiledSchedule, ConsistencyWarning, Day, Event, Rule, ScheduleCompiler,
};
pub use storage::Config;
