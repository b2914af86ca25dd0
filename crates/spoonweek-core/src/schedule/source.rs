//! Normalization of serialized schedule sources into rules.
//!
//! Two item shapes are accepted, and may be mixed in one array:
//!
//! - rule definitions: `{"event": {...}, "repeatType": "daily"}` or
//!   `{"event": {...}, "day": 3}`
//! - pre-expanded entries: `{"title": ..., "day": 3}` or
//!   `{"title": ..., "repeat-weekday": true}`
//!
//! Both are turned into [`Rule`]s in file order before anything is compiled.
//! Pre-expanded files list a daily rule as one `day` entry per day, so an
//! event with `day` entries on all seven days is read back as a daily rule.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::event::{Day, Event};
use super::rule::Rule;
use crate::error::{Result, ValidationError};

const EVENT_FIELDS: [&str; 6] = [
    "title",
    "startHour",
    "startMinute",
    "endHour",
    "endMinute",
    "energy",
];

/// Repeat kind of a rule definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    Daily,
    Weekday,
    Weekend,
}

/// `{ "event": {...}, "repeatType" | "day" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDefinition {
    pub event: Event,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<RepeatType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
}

/// A flat event carrying either a `day` or a repeat marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub event: Event,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(rename = "repeat-weekday", default, skip_serializing_if = "is_false")]
    pub repeat_weekday: bool,
    #[serde(rename = "repeat-weekend", default, skip_serializing_if = "is_false")]
    pub repeat_weekend: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

fn specific_day(event: Event, index: usize, day: i64) -> std::result::Result<Rule, ValidationError> {
    let day = Day::from_index(day).ok_or(ValidationError::DayOutOfRange { index, day })?;
    Ok(Rule::specific_day(event, day))
}

impl RuleDefinition {
    /// `repeatType` wins over `day` when both are present.
    pub fn into_rule(self, index: usize) -> std::result::Result<Rule, ValidationError> {
        match (self.repeat_type, self.day) {
            (Some(RepeatType::Daily), _) => Ok(Rule::daily(self.event)),
            (Some(RepeatType::Weekday), _) => Ok(Rule::weekday(self.event)),
            (Some(RepeatType::Weekend), _) => Ok(Rule::weekend(self.event)),
            (None, Some(day)) => specific_day(self.event, index, day),
            (None, None) => Err(ValidationError::MissingField {
                index,
                field: "day",
            }),
        }
    }
}

impl From<Rule> for RuleDefinition {
    fn from(rule: Rule) -> Self {
        let (event, repeat_type, day) = match rule {
            Rule::Daily { event } => (event, Some(RepeatType::Daily), None),
            Rule::Weekday { event } => (event, Some(RepeatType::Weekday), None),
            Rule::Weekend { event } => (event, Some(RepeatType::Weekend), None),
            Rule::SpecificDay { event, day } => (event, None, Some(i64::from(day))),
        };
        Self {
            event,
            repeat_type,
            day,
        }
    }
}

impl ScheduleEntry {
    /// A concrete `day` takes priority over repeat markers.
    pub fn into_rule(self, index: usize) -> std::result::Result<Rule, ValidationError> {
        if let Some(day) = self.day {
            return specific_day(self.event, index, day);
        }
        match (self.repeat_weekday, self.repeat_weekend) {
            (true, true) => Err(ValidationError::AmbiguousRepeat { index }),
            (true, false) => Ok(Rule::weekday(self.event)),
            (false, true) => Ok(Rule::weekend(self.event)),
            (false, false) => Err(ValidationError::MissingField {
                index,
                field: "day",
            }),
        }
    }
}

fn require_event_fields(
    object: &serde_json::Map<String, Value>,
    index: usize,
) -> std::result::Result<(), ValidationError> {
    match EVENT_FIELDS.iter().find(|f| !object.contains_key(**f)) {
        Some(field) => Err(ValidationError::MissingField {
            index,
            field: *field,
        }),
        None => Ok(()),
    }
}

fn malformed(index: usize, err: serde_json::Error) -> ValidationError {
    ValidationError::Malformed {
        index,
        message: err.to_string(),
    }
}

const EVERY_DAY: u8 = 0b111_1111;

/// One normalized item, before daily rules are recovered.
enum Normalized {
    Rule(Rule),
    DayEntry { event: Event, day: Day },
}

fn normalize_item(index: usize, item: Value) -> std::result::Result<Normalized, ValidationError> {
    let object = item.as_object().ok_or_else(|| ValidationError::Malformed {
        index,
        message: "expected a JSON object".to_string(),
    })?;

    if let Some(event) = object.get("event") {
        let event_object = event.as_object().ok_or_else(|| ValidationError::Malformed {
            index,
            message: "'event' must be a JSON object".to_string(),
        })?;
        require_event_fields(event_object, index)?;
        let definition: RuleDefinition =
            serde_json::from_value(item).map_err(|e| malformed(index, e))?;
        definition.into_rule(index).map(Normalized::Rule)
    } else {
        require_event_fields(object, index)?;
        let entry: ScheduleEntry = serde_json::from_value(item).map_err(|e| malformed(index, e))?;
        match entry.day {
            Some(day) => {
                let day = Day::from_index(day).ok_or(ValidationError::DayOutOfRange { index, day })?;
                Ok(Normalized::DayEntry {
                    event: entry.event,
                    day,
                })
            }
            None => entry.into_rule(index).map(Normalized::Rule),
        }
    }
}

/// Collapse `day` entries that repeat one event on every day into a single
/// daily rule, placed where its first entry was.
fn recover_daily_rules(items: Vec<Normalized>) -> Vec<Rule> {
    let mut coverage: HashMap<Event, u8> = HashMap::new();
    for item in &items {
        if let Normalized::DayEntry { event, day } = item {
            *coverage.entry(event.clone()).or_default() |= 1u8 << day.index();
        }
    }

    let mut recovered = HashSet::new();
    let mut rules = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Normalized::Rule(rule) => rules.push(rule),
            Normalized::DayEntry { event, day } => {
                if coverage.get(&event) != Some(&EVERY_DAY) {
                    rules.push(Rule::specific_day(event, day));
                } else if recovered.insert(event.clone()) {
                    tracing::debug!(title = %event.title, "recovered daily rule from day entries");
                    rules.push(Rule::daily(event));
                }
            }
        }
    }
    rules
}

/// Normalize an already-parsed JSON array.
pub fn rules_from_value(value: Value) -> std::result::Result<Vec<Rule>, ValidationError> {
    let Value::Array(items) = value else {
        return Err(ValidationError::Malformed {
            index: 0,
            message: "schedule source must be a JSON array".to_string(),
        });
    };

    let normalized = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| normalize_item(index, item))
        .collect::<std::result::Result<Vec<_>, ValidationError>>()?;

    Ok(recover_daily_rules(normalized))
}

/// Parse schedule source text into rules.
///
/// # Errors
///
/// Returns `CoreError::Json` for text that is not JSON and
/// `CoreError::Validation` for a malformed item.
pub fn parse_rules(json: &str) -> Result<Vec<Rule>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(rules_from_value(value)?)
}

/// Serialize rules as rule definitions, pretty-printed.
pub fn to_definitions_json(rules: &[Rule]) -> Result<String> {
    let definitions: Vec<RuleDefinition> = rules.iter().cloned().map(RuleDefinition::from).collect();
    Ok(serde_json::to_string_pretty(&definitions)?)
}
