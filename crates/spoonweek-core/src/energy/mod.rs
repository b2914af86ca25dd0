//! Energy (spoon) accounting over a compiled schedule.
//!
//! Two aggregations are provided: the end-of-day ledger with carry-over
//! across the week, and a point-in-time gauge for the current day.

mod gauge;
mod ledger;

pub use gauge::{AccrualPolicy, EnergyGauge, EnergyReading};
pub use ledger::{compute_balances, DayBalance, EnergyLedger, LedgerResult, DEFAULT_MAX_DAILY_ENERGY};
