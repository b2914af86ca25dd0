//! Point-in-time "energy left right now" for a single day.
//!
//! Unlike the ledger, this starts from the bare allowance (no carry-over) and
//! only counts events that have been reached by the given moment. Which
//! events count is an [`AccrualPolicy`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::schedule::{CompiledSchedule, Day, Event};

/// When an event's energy starts counting toward the current reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualPolicy {
    /// Counted once its start time is at or before now
    #[default]
    OnStart,
    /// Counted once its end time is strictly before now
    OnEnd,
}

impl AccrualPolicy {
    /// Whether `event` counts at `minute` (minutes since midnight).
    pub fn counts(self, event: &Event, minute: u16) -> bool {
        match self {
            AccrualPolicy::OnStart => event.start_minutes() <= minute,
            AccrualPolicy::OnEnd => event.end_minutes() < minute,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccrualPolicy::OnStart => "on_start",
            AccrualPolicy::OnEnd => "on_end",
        }
    }
}

impl fmt::Display for AccrualPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccrualPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "on_start" | "start" => Ok(AccrualPolicy::OnStart),
            "on_end" | "end" => Ok(AccrualPolicy::OnEnd),
            other => Err(format!("unknown accrual policy: {other} (expected on_start or on_end)")),
        }
    }
}

/// A reading of the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyReading {
    pub day: Day,
    /// Minutes since midnight
    pub minute: u16,
    pub policy: AccrualPolicy,
    pub max_daily_energy: i32,
    /// Allowance plus every counted event, unclamped
    pub raw: i32,
    /// `raw` floored at zero for display
    pub display: i32,
    pub counted_events: usize,
}

impl EnergyReading {
    /// Display value as a fraction of the allowance (may exceed 1.0).
    pub fn fraction(&self) -> f64 {
        if self.max_daily_energy <= 0 {
            return 0.0;
        }
        f64::from(self.display) / f64::from(self.max_daily_energy)
    }
}

/// Reads the remaining energy for a day at a given minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyGauge {
    max_daily_energy: i32,
    policy: AccrualPolicy,
}

impl EnergyGauge {
    /// Create a gauge with the default [`AccrualPolicy::OnStart`].
    pub fn new(max_daily_energy: i32) -> Self {
        Self {
            max_daily_energy,
            policy: AccrualPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AccrualPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AccrualPolicy {
        self.policy
    }

    pub fn reading(&self, schedule: &CompiledSchedule, day: Day, minute: u16) -> EnergyReading {
        let counted: Vec<&Event> = schedule
            .day(day)
            .iter()
            .filter(|e| self.policy.counts(e, minute))
            .collect();

        let raw = self.max_daily_energy + counted.iter().map(|e| e.energy).sum::<i32>();

        EnergyReading {
            day,
            minute,
            policy: self.policy,
            max_daily_energy: self.max_daily_energy,
            raw,
            display: raw.max(0),
            counted_events: counted.len(),
        }
    }

    /// Reading for the day and wall-clock minute of `at`.
    pub fn reading_at<T: Datelike + Timelike>(
        &self,
        schedule: &CompiledSchedule,
        at: &T,
    ) -> EnergyReading {
        let day = Day::from(at.weekday());
        let minute = (at.hour() * 60 + at.minute()) as u16;
        self.reading(schedule, day, minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn monday(events: Vec<Event>) -> CompiledSchedule {
        let mut days: [Vec<Event>; 7] = Default::default();
        days[Day::Monday.index()] = events;
        CompiledSchedule::from_days(days)
    }

    fn workday() -> CompiledSchedule {
        monday(vec![
            Event::new("Morning Routine", (7, 10), (8, 0), -2),
            Event::new("Work", (9, 0), (10, 30), -3),
            Event::new("Break", (10, 30), (11, 0), 2),
        ])
    }

    #[test]
    fn started_event_counts_under_on_start() {
        let gauge = EnergyGauge::new(12);
        // 09:15, inside "Work"
        let reading = gauge.reading(&workday(), Day::Monday, 9 * 60 + 15);
        assert_eq!(reading.raw, 12 - 2 - 3);
        assert_eq!(reading.counted_events, 2);
    }

    #[test]
    fn running_event_does_not_count_under_on_end() {
        let gauge = EnergyGauge::new(12).with_policy(AccrualPolicy::OnEnd);
        let reading = gauge.reading(&workday(), Day::Monday, 9 * 60 + 15);
        assert_eq!(reading.raw, 12 - 2);
        assert_eq!(reading.counted_events, 1);
    }

    #[test]
    fn future_event_never_counts() {
        let schedule = workday();
        for policy in [AccrualPolicy::OnStart, AccrualPolicy::OnEnd] {
            let reading = EnergyGauge::new(12)
                .with_policy(policy)
                .reading(&schedule, Day::Monday, 7 * 60);
            assert_eq!(reading.raw, 12, "policy {policy}");
        }
    }

    #[test]
    fn boundaries_of_each_policy() {
        let schedule = monday(vec![Event::new("Work", (9, 0), (10, 0), -3)]);

        let on_start = EnergyGauge::new(12);
        assert_eq!(on_start.reading(&schedule, Day::Monday, 9 * 60).raw, 9);
        assert_eq!(on_start.reading(&schedule, Day::Monday, 9 * 60 - 1).raw, 12);

        let on_end = EnergyGauge::new(12).with_policy(AccrualPolicy::OnEnd);
        assert_eq!(on_end.reading(&schedule, Day::Monday, 10 * 60).raw, 12);
        assert_eq!(on_end.reading(&schedule, Day::Monday, 10 * 60 + 1).raw, 9);
    }

    #[test]
    fn display_is_floored_but_not_capped() {
        let drained = monday(vec![Event::new("Overload", (8, 0), (18, 0), -20)]);
        let reading = EnergyGauge::new(12).reading(&drained, Day::Monday, 12 * 60);
        assert_eq!(reading.raw, -8);
        assert_eq!(reading.display, 0);

        let restored = monday(vec![Event::new("Nap", (13, 0), (14, 0), 5)]);
        let reading = EnergyGauge::new(12).reading(&restored, Day::Monday, 14 * 60);
        assert_eq!(reading.display, 17);
        assert!(reading.fraction() > 1.0);
    }

    #[test]
    fn only_the_requested_day_counts() {
        let reading = EnergyGauge::new(12).reading(&workday(), Day::Tuesday, 23 * 60);
        assert_eq!(reading.raw, 12);
        assert_eq!(reading.counted_events, 0);
    }

    #[test]
    fn reading_at_uses_weekday_and_clock() {
        // 2026-10-12 is a Monday.
        let at = NaiveDate::from_ymd_opt(2026, 10, 12)
            .unwrap()
            .and_hms_opt(10, 45, 0)
            .unwrap();
        let reading = EnergyGauge::new(12).reading_at(&workday(), &at);
        assert_eq!(reading.day, Day::Monday);
        assert_eq!(reading.minute, 10 * 60 + 45);
        assert_eq!(reading.raw, 12 - 2 - 3 + 2);
    }

    #[test]
    fn policy_parses_from_str() {
        assert_eq!("on_start".parse::<AccrualPolicy>(), Ok(AccrualPolicy::OnStart));
        assert_eq!("on-end".parse::<AccrualPolicy>(), Ok(AccrualPolicy::OnEnd));
        assert!("sometime".parse::<AccrualPolicy>().is_err());
    }
}
