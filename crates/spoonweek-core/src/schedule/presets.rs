//! Built-in sample week used to bootstrap a schedule file.

use super::event::{Day, Event};
use super::rule::Rule;

/// A full sample week: daily anchors, a weekday work pattern, a weekend
/// pattern and several day-specific overrides.
pub fn sample_week() -> Vec<Rule> {
    vec![
        // Daily
        Rule::daily(Event::new("Wind-down (Reading as a couple)", (21, 0), (22, 0), 2)),
        Rule::daily(Event::new("Brush Teeth", (7, 0), (7, 10), 0)),
        Rule::daily(Event::new("Dinner", (19, 0), (20, 0), 0)),
        // Weekdays
        Rule::weekday(Event::new("Morning Routine (Wake, Dress, Breakfast)", (7, 10), (8, 0), -2)),
        Rule::weekday(Event::new("Focused Work Block 1", (9, 0), (10, 30), -3)),
        Rule::weekday(Event::new("Short Break / Sensory Reset", (10, 30), (11, 0), 2)),
        Rule::weekday(Event::new("Focused Work Block 2", (11, 0), (12, 30), -3)),
        Rule::weekday(Event::new("Lunch Break (Quiet)", (12, 30), (13, 30), 1)),
        Rule::weekday(Event::new("Meetings / Collaborative Work", (13, 30), (15, 0), -4)),
        Rule::weekday(Event::new("Snack & Hydrate", (15, 0), (15, 30), 1)),
        Rule::weekday(Event::new("Wrap-up tasks", (15, 30), (17, 0), -2)),
        Rule::weekday(Event::new("Decompression Time (Music, Low light)", (18, 0), (19, 0), 3)),
        // Weekend
        Rule::weekend(Event::new("Relaxed Morning (Wake, Breakfast)", (8, 0), (9, 30), 0)),
        Rule::weekend(Event::new("Household Chores / Errands", (9, 30), (12, 0), -4)),
        Rule::weekend(Event::new("Lunch", (12, 0), (13, 0), 1)),
        Rule::weekend(Event::new("Free Time / Personal Projects", (13, 0), (18, 0), 3)),
        Rule::weekend(Event::new("Evening Relaxation", (20, 0), (21, 0), 2)),
        // Wednesday
        Rule::specific_day(Event::new("Appointments / Errands", (9, 0), (11, 0), -3), Day::Wednesday),
        Rule::specific_day(Event::new("Rest & Recover", (11, 0), (12, 0), 2), Day::Wednesday),
        Rule::specific_day(Event::new("Deep Work", (13, 0), (17, 0), -4), Day::Wednesday),
        Rule::specific_day(Event::new("Evening Free Time", (17, 0), (22, 0), 3), Day::Wednesday),
        // Thursday
        Rule::specific_day(Event::new("Social Outing / Event", (8, 0), (12, 0), -5), Day::Thursday),
        Rule::specific_day(Event::new("Recovery / Quiet Time", (13, 0), (16, 0), 4), Day::Thursday),
        Rule::specific_day(Event::new("Hobby / Special Interest", (16, 0), (18, 0), 3), Day::Thursday),
        Rule::specific_day(Event::new("Evening Relaxation", (18, 0), (22, 0), 2), Day::Thursday),
        // Friday
        Rule::specific_day(Event::new("Work", (13, 0), (17, 0), -3), Day::Friday),
        Rule::specific_day(Event::new("Decompression", (17, 0), (19, 0), 3), Day::Friday),
        Rule::specific_day(
            Event::new("Socializing with friends (optional)", (19, 0), (22, 0), -4),
            Day::Friday,
        ),
        // Sunday
        Rule::specific_day(Event::new("Prepare for the week ahead", (13, 0), (15, 0), -2), Day::Sunday),
        Rule::specific_day(Event::new("Quiet Hobby", (15, 0), (18, 0), 3), Day::Sunday),
    ]
}
