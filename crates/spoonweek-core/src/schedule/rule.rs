//! Schedule-definition rules and their precedence.

use serde::{Deserialize, Serialize};

use super::event::{Day, Event};
use crate::error::ValidationError;

/// A schedule-definition entry.
///
/// `SpecificDay` keeps the raw day index so that an out-of-range day can be
/// reported by the compiler instead of being rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Applies to all seven days
    Daily { event: Event },
    /// Applies Monday through Friday
    Weekday { event: Event },
    /// Applies Saturday and Sunday
    Weekend { event: Event },
    /// Applies to one day (0 = Sunday ... 6 = Saturday)
    SpecificDay { event: Event, day: u8 },
}

/// Compilation pass a rule belongs to, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Weekday,
    Weekend,
    Daily,
    SpecificDay,
}

impl Precedence {
    /// Passes in application order.
    pub const ORDER: [Precedence; 4] = [
        Precedence::Weekday,
        Precedence::Weekend,
        Precedence::Daily,
        Precedence::SpecificDay,
    ];
}

impl Rule {
    pub fn daily(event: Event) -> Self {
        Rule::Daily { event }
    }

    pub fn weekday(event: Event) -> Self {
        Rule::Weekday { event }
    }

    pub fn weekend(event: Event) -> Self {
        Rule::Weekend { event }
    }

    pub fn specific_day(event: Event, day: Day) -> Self {
        Rule::SpecificDay {
            event,
            day: day.into(),
        }
    }

    pub fn event(&self) -> &Event {
        match self {
            Rule::Daily { event }
            | Rule::Weekday { event }
            | Rule::Weekend { event }
            | Rule::SpecificDay { event, .. } => event,
        }
    }

    pub fn precedence(&self) -> Precedence {
        match self {
            Rule::Weekday { .. } => Precedence::Weekday,
            Rule::Weekend { .. } => Precedence::Weekend,
            Rule::Daily { .. } => Precedence::Daily,
            Rule::SpecificDay { .. } => Precedence::SpecificDay,
        }
    }

    /// Validate the rule and resolve the days it expands to.
    pub fn target_days(&self, index: usize) -> Result<Vec<Day>, ValidationError> {
        self.event().validate(index)?;

        let days = match self {
            Rule::Daily { .. } => Day::ALL.to_vec(),
            Rule::Weekday { .. } => Day::WEEKDAYS.to_vec(),
            Rule::Weekend { .. } => Day::WEEKEND.to_vec(),
            Rule::SpecificDay { day, .. } => {
                let day = Day::try_from(*day).map_err(|e| ValidationError::DayOutOfRange {
                    index,
                    day: e.0,
                })?;
                vec![day]
            }
        };
        Ok(days)
    }
}
