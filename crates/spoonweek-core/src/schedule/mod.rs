//! Schedule types and the rule compiler.
//!
//! A rule set (daily / weekday / weekend / specific-day) compiles into a
//! [`CompiledSchedule`]: seven start-ordered, non-overlapping event lists.

mod compiled;
mod compiler;
mod event;
pub mod presets;
mod rule;
pub mod source;

pub use compiled::{CompiledSchedule, ConsistencyWarning};
pub use compiler::{compile, Compilation, ScheduleCompiler};
pub use event::{Day, Event, InvalidDay, MINUTES_PER_DAY};
pub use rule::{Precedence, Rule};
pub use source::{parse_rules, RepeatType, RuleDefinition, ScheduleEntry};
