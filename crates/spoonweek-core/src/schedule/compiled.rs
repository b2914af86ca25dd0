//! The compiled weekly schedule and its consistency check.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::event::{Day, Event};

/// Per-day, start-ordered event lists for a Sunday-first week.
///
/// Built by the compiler, where no two events on a day intersect. A schedule
/// assembled with [`CompiledSchedule::from_days`] is only sorted, so
/// [`CompiledSchedule::check_consistency`] may find overlaps in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledSchedule {
    days: [Vec<Event>; 7],
}

/// Two adjacent events on the same day that intersect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyWarning {
    pub day: Day,
    pub earlier: Event,
    pub later: Event,
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' ends at {} after '{}' starts at {}",
            self.day,
            self.earlier.title,
            self.earlier.end_label(),
            self.later.title,
            self.later.start_label()
        )
    }
}

impl CompiledSchedule {
    /// A week with no events.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble a schedule from per-day lists, sorting each day by start time.
    ///
    /// The sort is stable, so events sharing a start time keep their order.
    pub fn from_days(mut days: [Vec<Event>; 7]) -> Self {
        for events in days.iter_mut() {
            events.sort_by_key(|e| (e.start_hour, e.start_minute));
        }
        Self { days }
    }

    pub fn day(&self, day: Day) -> &[Event] {
        &self.days[day.index()]
    }

    /// `(day, events)` pairs from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[Event])> {
        Day::ALL.iter().map(move |&d| (d, self.day(d)))
    }

    pub fn total_events(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_events() == 0
    }

    /// Sum of every event's energy on `day`.
    pub fn net_energy(&self, day: Day) -> i32 {
        self.day(day).iter().map(|e| e.energy).sum()
    }

    /// The event running at `minute` (minutes since midnight), if any.
    pub fn active_event(&self, day: Day, minute: u16) -> Option<&Event> {
        self.day(day).iter().find(|e| e.is_active_at(minute))
    }

    /// Scan each day for adjacent events where the earlier one runs past the
    /// start of the next.
    pub fn check_consistency(&self) -> Vec<ConsistencyWarning> {
        let mut warnings = Vec::new();
        for (day, events) in self.iter() {
            for pair in events.windows(2) {
                let (earlier, later) = (&pair[0], &pair[1]);
                if earlier.end_minutes() > later.start_minutes() {
                    let warning = ConsistencyWarning {
                        day,
                        earlier: earlier.clone(),
                        later: later.clone(),
                    };
                    tracing::warn!("schedule overlap on {warning}");
                    warnings.push(warning);
                }
            }
        }
        warnings
    }
}
