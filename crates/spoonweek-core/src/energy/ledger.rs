//! End-of-day energy balances with day-to-day carry-over.
//!
//! Each day starts from the daily allowance adjusted by the previous day's
//! surplus or deficit, then applies the flat energy delta of every event on
//! that day. Days are folded strictly Sunday to Saturday. Nothing is clamped:
//! a balance above the allowance or below zero carries forward unchanged.

use serde::{Deserialize, Serialize};

use crate::schedule::{CompiledSchedule, Day};

/// Allowance used when the caller has no configuration.
pub const DEFAULT_MAX_DAILY_ENERGY: i32 = 12;

/// One day's row in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBalance {
    pub day: Day,
    /// Previous day's end balance minus the allowance (0 on Sunday)
    pub carry_over: i32,
    /// Allowance plus carry-over, before this day's events
    pub starting_balance: i32,
    /// Sum of every event's energy on this day
    pub net_delta: i32,
    pub end_of_day_balance: i32,
}

impl DayBalance {
    /// Whether the end balance is above the allowance.
    pub fn is_over(&self, max_daily_energy: i32) -> bool {
        self.end_of_day_balance > max_daily_energy
    }
}

/// Balances for a full week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerResult {
    pub max_daily_energy: i32,
    /// Seven rows, Sunday first
    pub days: Vec<DayBalance>,
    /// End balance of Saturday
    pub weekly_total: i32,
}

impl LedgerResult {
    pub fn day(&self, day: Day) -> &DayBalance {
        &self.days[day.index()]
    }

    /// End-of-day balance for `day`.
    pub fn balance(&self, day: Day) -> i32 {
        self.day(day).end_of_day_balance
    }

    /// Allowance over the whole week.
    pub fn max_weekly_energy(&self) -> i32 {
        self.max_daily_energy * Day::ALL.len() as i32
    }
}

/// Computes [`LedgerResult`]s for a fixed daily allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyLedger {
    max_daily_energy: i32,
}

impl EnergyLedger {
    pub fn new(max_daily_energy: i32) -> Self {
        Self { max_daily_energy }
    }

    pub fn max_daily_energy(&self) -> i32 {
        self.max_daily_energy
    }

    /// Fold the week Sunday to Saturday, threading the previous end balance.
    pub fn compute(&self, schedule: &CompiledSchedule) -> LedgerResult {
        let max = self.max_daily_energy;

        let days: Vec<DayBalance> = Day::ALL
            .iter()
            .scan(None::<i32>, |previous_end, &day| {
                let carry_over = previous_end.map_or(0, |end| end - max);
                let starting_balance = max + carry_over;
                let net_delta = schedule.net_energy(day);
                let end_of_day_balance = starting_balance + net_delta;
                *previous_end = Some(end_of_day_balance);

                Some(DayBalance {
                    day,
                    carry_over,
                    starting_balance,
                    net_delta,
                    end_of_day_balance,
                })
            })
            .collect();

        let weekly_total = days.last().map_or(max, |d| d.end_of_day_balance);
        tracing::debug!(max, weekly_total, "energy ledger computed");

        LedgerResult {
            max_daily_energy: max,
            days,
            weekly_total,
        }
    }
}

impl Default for EnergyLedger {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DAILY_ENERGY)
    }
}

/// Compute the week's balances for `max_daily_energy`.
pub fn compute_balances(schedule: &CompiledSchedule, max_daily_energy: i32) -> LedgerResult {
    EnergyLedger::new(max_daily_energy).compute(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Event;

    fn schedule_with(sunday: Vec<Event>, monday: Vec<Event>) -> CompiledSchedule {
        let mut days: [Vec<Event>; 7] = Default::default();
        days[0] = sunday;
        days[1] = monday;
        CompiledSchedule::from_days(days)
    }

    #[test]
    fn empty_week_stays_at_allowance() {
        let result = compute_balances(&CompiledSchedule::empty(), 12);
        assert_eq!(result.days.len(), 7);
        for day in Day::ALL {
            assert_eq!(result.balance(day), 12);
            assert_eq!(result.day(day).carry_over, 0);
        }
        assert_eq!(result.weekly_total, 12);
    }

    #[test]
    fn surplus_carries_forward() {
        let schedule = schedule_with(
            vec![
                Event::new("Hobby", (15, 0), (18, 0), 3),
                Event::new("Dinner", (19, 0), (20, 0), 0),
            ],
            vec![
                Event::new("Work", (9, 0), (10, 0), -2),
                Event::new("Break", (10, 0), (11, 0), 2),
            ],
        );

        let result = compute_balances(&schedule, 12);
        assert_eq!(result.balance(Day::Sunday), 15);
        assert_eq!(result.day(Day::Monday).carry_over, 3);
        assert_eq!(result.day(Day::Monday).starting_balance, 15);
        assert_eq!(result.balance(Day::Monday), 15);
        assert_eq!(result.weekly_total, 15);
        assert!(result.day(Day::Sunday).is_over(12));
    }

    #[test]
    fn deficit_carries_forward() {
        let schedule = schedule_with(
            vec![Event::new("Errands", (9, 0), (12, 0), -5)],
            vec![Event::new("Meetings", (13, 0), (15, 0), -2)],
        );

        let result = compute_balances(&schedule, 12);
        assert_eq!(result.balance(Day::Sunday), 7);
        assert_eq!(result.day(Day::Monday).starting_balance, 7);
        assert_eq!(result.day(Day::Monday).carry_over, -5);
        assert_eq!(result.balance(Day::Monday), 5);
    }

    #[test]
    fn balance_may_go_negative() {
        let schedule = schedule_with(
            vec![Event::new("Marathon", (6, 0), (18, 0), -20)],
            vec![],
        );

        let result = compute_balances(&schedule, 12);
        assert_eq!(result.balance(Day::Sunday), -8);
        assert_eq!(result.day(Day::Monday).starting_balance, -8);
        assert_eq!(result.weekly_total, -8);
    }

    #[test]
    fn allowance_is_a_parameter() {
        let result = EnergyLedger::new(20).compute(&CompiledSchedule::empty());
        assert_eq!(result.weekly_total, 20);
        assert_eq!(result.max_weekly_energy(), 140);
        assert_eq!(EnergyLedger::default().max_daily_energy(), 12);
    }

    #[test]
    fn sample_week_totals() {
        let compiled = crate::schedule::compile(&crate::schedule::presets::sample_week()).unwrap();
        let result = compute_balances(&compiled.schedule, 12);

        let sunday_net: i32 = compiled.schedule.day(Day::Sunday).iter().map(|e| e.energy).sum();
        assert_eq!(result.day(Day::Sunday).net_delta, sunday_net);

        let expected: i32 = 12 + Day::ALL
            .iter()
            .map(|d| compiled.schedule.net_energy(*d))
            .sum::<i32>();
        assert_eq!(result.weekly_total, expected);
    }
}
