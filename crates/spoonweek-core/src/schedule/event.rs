//! Days of the week and concrete events.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;

/// Minutes in a day. An event may end exactly at midnight (24:00).
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Day index outside 0-6.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("day {0} is out of range (expected 0-6)")]
pub struct InvalidDay(pub i64);

/// Day of the week, indexed Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Day {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Day {
    /// The fixed week, Sunday first.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Monday through Friday.
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Saturday and Sunday.
    pub const WEEKEND: [Day; 2] = [Day::Saturday, Day::Sunday];

    /// Zero-based index (Sunday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a day by index, `None` outside 0-6.
    pub fn from_index(index: i64) -> Option<Day> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Parse `0`-`6`, a three-letter abbreviation or a full day name.
    pub fn parse(s: &str) -> Option<Day> {
        match s.trim().to_lowercase().as_str() {
            "0" | "sun" | "sunday" => Some(Day::Sunday),
            "1" | "mon" | "monday" => Some(Day::Monday),
            "2" | "tue" | "tuesday" => Some(Day::Tuesday),
            "3" | "wed" | "wednesday" => Some(Day::Wednesday),
            "4" | "thu" | "thursday" => Some(Day::Thursday),
            "5" | "fri" | "friday" => Some(Day::Friday),
            "6" | "sat" | "saturday" => Some(Day::Saturday),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> u8 {
        day as u8
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDay;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Day::from_index(i64::from(value)).ok_or(InvalidDay(i64::from(value)))
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        Self::ALL[weekday.num_days_from_sunday() as usize]
    }
}

/// A scheduled activity with a flat energy delta.
///
/// Times are wall-clock hour/minute pairs within a single day. Restorative
/// activities carry a positive `energy`, draining ones a negative value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub start_hour: u8,
    pub start_minute: u8,
    pub end_hour: u8,
    pub end_minute: u8,
    pub energy: i32,
}

impl Event {
    /// Build an event from `(hour, minute)` pairs.
    pub fn new(title: impl Into<String>, start: (u8, u8), end: (u8, u8), energy: i32) -> Self {
        Self {
            title: title.into(),
            start_hour: start.0,
            start_minute: start.1,
            end_hour: end.0,
            end_minute: end.1,
            energy,
        }
    }

    /// Start as minutes since midnight.
    pub fn start_minutes(&self) -> u16 {
        u16::from(self.start_hour) * 60 + u16::from(self.start_minute)
    }

    /// End as minutes since midnight.
    pub fn end_minutes(&self) -> u16 {
        u16::from(self.end_hour) * 60 + u16::from(self.end_minute)
    }

    /// Half-open `[start, end)` intersection.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_minutes() < other.end_minutes() && other.start_minutes() < self.end_minutes()
    }

    /// Whether placing `incoming` on the same day removes `self`.
    ///
    /// `self` goes if its start falls in `[in.start, in.end)`, its end falls
    /// in `(in.start, in.end]`, or it fully contains `incoming`.
    pub fn is_evicted_by(&self, incoming: &Event) -> bool {
        let (start, end) = (self.start_minutes(), self.end_minutes());
        let (in_start, in_end) = (incoming.start_minutes(), incoming.end_minutes());

        let starts_inside = start >= in_start && start < in_end;
        let ends_inside = end > in_start && end <= in_end;
        let contains = start <= in_start && end >= in_end;

        starts_inside || ends_inside || contains
    }

    /// Whether `minute` lies within `[start, end)`.
    pub fn is_active_at(&self, minute: u16) -> bool {
        minute >= self.start_minutes() && minute < self.end_minutes()
    }

    /// `HH:MM` start label.
    pub fn start_label(&self) -> String {
        format!("{:02}:{:02}", self.start_hour, self.start_minute)
    }

    /// `HH:MM` end label.
    pub fn end_label(&self) -> String {
        format!("{:02}:{:02}", self.end_hour, self.end_minute)
    }

    /// Check field ranges and that the end is strictly after the start.
    ///
    /// `index` identifies the owning rule in error messages.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let out_of_range = |field: &'static str, value: u8| ValidationError::TimeOutOfRange {
            index,
            title: self.title.clone(),
            field,
            value,
        };

        if self.start_hour > 23 {
            return Err(out_of_range("startHour", self.start_hour));
        }
        if self.start_minute > 59 {
            return Err(out_of_range("startMinute", self.start_minute));
        }
        if self.end_minute > 59 {
            return Err(out_of_range("endMinute", self.end_minute));
        }
        if self.end_minutes() > MINUTES_PER_DAY {
            return Err(out_of_range("endHour", self.end_hour));
        }
        if self.end_minutes() <= self.start_minutes() {
            return Err(ValidationError::InvalidTimeRange {
                index,
                title: self.title.clone(),
                start: self.start_label(),
                end: self.end_label(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {})",
            self.title,
            self.start_label(),
            self.end_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_index_round_trip() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
            assert_eq!(Day::from_index(i as i64), Some(*day));
        }
        assert_eq!(Day::from_index(7), None);
        assert_eq!(Day::from_index(-1), None);
    }

    #[test]
    fn day_parse_accepts_names_and_numbers() {
        assert_eq!(Day::parse("wed"), Some(Day::Wednesday));
        assert_eq!(Day::parse("Saturday"), Some(Day::Saturday));
        assert_eq!(Day::parse("0"), Some(Day::Sunday));
        assert_eq!(Day::parse("7"), None);
        assert_eq!(Day::parse("someday"), None);
    }

    #[test]
    fn day_from_chrono_weekday() {
        assert_eq!(Day::from(chrono::Weekday::Sun), Day::Sunday);
        assert_eq!(Day::from(chrono::Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(chrono::Weekday::Sat), Day::Saturday);
    }

    #[test]
    fn day_serializes_as_index() {
        assert_eq!(serde_json::to_string(&Day::Thursday).unwrap(), "4");
        let day: Day = serde_json::from_str("6").unwrap();
        assert_eq!(day, Day::Saturday);
        assert!(serde_json::from_str::<Day>("7").is_err());
    }

    #[test]
    fn event_uses_camel_case_fields() {
        let json = r#"{"title":"Lunch","startHour":12,"startMinute":30,"endHour":13,"endMinute":30,"energy":1}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event, Event::new("Lunch", (12, 30), (13, 30), 1));
    }

    #[test]
    fn adjacent_events_do_not_overlap() {
        let a = Event::new("A", (9, 0), (10, 30), -3);
        let b = Event::new("B", (10, 30), (11, 0), 2);
        assert!(!a.overlaps(&b));
        assert!(!a.is_evicted_by(&b));
        assert!(!b.is_evicted_by(&a));
    }

    #[test]
    fn eviction_covers_all_intersection_shapes() {
        let incoming = Event::new("In", (10, 0), (12, 0), 0);

        let starts_inside = Event::new("X", (11, 0), (13, 0), 0);
        let ends_inside = Event::new("X", (9, 0), (10, 30), 0);
        let contains = Event::new("X", (9, 0), (13, 0), 0);
        let inside = Event::new("X", (10, 15), (10, 45), 0);
        let before = Event::new("X", (8, 0), (10, 0), 0);
        let after = Event::new("X", (12, 0), (13, 0), 0);

        assert!(starts_inside.is_evicted_by(&incoming));
        assert!(ends_inside.is_evicted_by(&incoming));
        assert!(contains.is_evicted_by(&incoming));
        assert!(inside.is_evicted_by(&incoming));
        assert!(!before.is_evicted_by(&incoming));
        assert!(!after.is_evicted_by(&incoming));
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let event = Event::new("Backwards", (10, 0), (9, 0), 0);
        assert!(matches!(
            event.validate(3),
            Err(ValidationError::InvalidTimeRange { index: 3, .. })
        ));

        let empty = Event::new("Empty", (10, 0), (10, 0), 0);
        assert!(empty.validate(0).is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_fields() {
        let bad_hour = Event::new("Late", (24, 0), (24, 0), 0);
        assert!(matches!(
            bad_hour.validate(0),
            Err(ValidationError::TimeOutOfRange { field: "startHour", .. })
        ));

        let bad_minute = Event::new("Odd", (9, 60), (10, 0), 0);
        assert!(matches!(
            bad_minute.validate(0),
            Err(ValidationError::TimeOutOfRange { field: "startMinute", .. })
        ));

        let past_midnight = Event::new("Night", (23, 0), (24, 30), 0);
        assert!(matches!(
            past_midnight.validate(0),
            Err(ValidationError::TimeOutOfRange { field: "endMinute", .. })
                | Err(ValidationError::TimeOutOfRange { field: "endHour", .. })
        ));
    }

    #[test]
    fn validate_allows_ending_at_midnight() {
        let event = Event::new("Late shift", (22, 0), (24, 0), -2);
        assert!(event.validate(0).is_ok());
    }

    #[test]
    fn active_window_is_half_open() {
        let event = Event::new("Dinner", (19, 0), (20, 0), 0);
        assert!(!event.is_active_at(18 * 60 + 59));
        assert!(event.is_active_at(19 * 60));
        assert!(event.is_active_at(19 * 60 + 59));
        assert!(!event.is_active_at(20 * 60));
    }
}
