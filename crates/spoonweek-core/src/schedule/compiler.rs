//! Rule compilation: expansion, precedence passes and overlap eviction.
//!
//! Rules are applied in four passes (weekday, weekend, daily, specific day).
//! Within a pass, rules are applied in the order given. Each placement evicts
//! every event already on that day whose interval intersects the new one, so
//! a later placement always wins a conflict.
//!
//! # Usage
//! ```rust,ignore
//! use spoonweek_core::schedule::{compile, Rule, Event, Day};
//!
//! let rules = vec![
//!     Rule::weekday(Event::new("Work", (9, 0), (10, 30), -3)),
//!     Rule::specific_day(Event::new("Appointments", (9, 0), (11, 0), -3), Day::Wednesday),
//! ];
//! let compiled = compile(&rules)?;
//! ```

use super::compiled::{CompiledSchedule, ConsistencyWarning};
use super::event::{Day, Event};
use super::rule::{Precedence, Rule};
use crate::error::ValidationError;

/// Output of a successful compile.
#[derive(Debug, Clone)]
pub struct Compilation {
    pub schedule: CompiledSchedule,
    /// Overlaps left behind despite eviction. Empty unless eviction is broken.
    pub warnings: Vec<ConsistencyWarning>,
}

/// A validated rule with its days resolved.
struct Placement<'a> {
    precedence: Precedence,
    event: &'a Event,
    days: Vec<Day>,
}

/// Compiles rule sets into a [`CompiledSchedule`].
#[derive(Debug, Clone)]
pub struct ScheduleCompiler {
    check_consistency: bool,
}

impl ScheduleCompiler {
    /// Create a compiler that runs the post-compile consistency check.
    pub fn new() -> Self {
        Self {
            check_consistency: true,
        }
    }

    /// Skip the post-compile consistency check.
    pub fn without_consistency_check(mut self) -> Self {
        self.check_consistency = false;
        self
    }

    /// Compile `rules` into a week.
    ///
    /// Every rule is validated before any event is placed, so an error never
    /// comes with a partial schedule.
    pub fn compile(&self, rules: &[Rule]) -> Result<Compilation, ValidationError> {
        let placements = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.target_days(index).map(|days| Placement {
                    precedence: rule.precedence(),
                    event: rule.event(),
                    days,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        let mut working: [Vec<Event>; 7] = Default::default();

        for pass in Precedence::ORDER {
            let mut placed = 0usize;
            for placement in placements.iter().filter(|p| p.precedence == pass) {
                for day in &placement.days {
                    place(&mut working[day.index()], *day, placement.event);
                    placed += 1;
                }
            }
            tracing::debug!(?pass, placed, "compile pass finished");
        }

        let schedule = CompiledSchedule::from_days(working);
        let warnings = if self.check_consistency {
            schedule.check_consistency()
        } else {
            Vec::new()
        };

        Ok(Compilation { schedule, warnings })
    }
}

impl Default for ScheduleCompiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Compile `rules` with the default compiler.
pub fn compile(rules: &[Rule]) -> Result<Compilation, ValidationError> {
    ScheduleCompiler::new().compile(rules)
}

/// Evict everything `event` intersects, then add it.
fn place(events: &mut Vec<Event>, day: Day, event: &Event) {
    events.retain(|existing| {
        let evicted = existing.is_evicted_by(event);
        if evicted {
            tracing::debug!(
                %day,
                evicted = %existing,
                by = %event,
                "evicting overlapping event"
            );
        }
        !evicted
    });
    events.push(event.clone());
}
