//! Compiling a pre-expanded schedule file produced by the web app's
//! generator script must match compiling the rules it was generated from.

use spoonweek_core::schedule::presets::sample_week;
use spoonweek_core::schedule::source::parse_rules;
use spoonweek_core::{compile, compute_balances, Day, Rule};

const GENERATED: &str = include_str!("fixtures/generated_schedule.json");

#[test]
fn generated_file_compiles_like_sample_rules() {
    let from_file = compile(&parse_rules(GENERATED).unwrap()).unwrap();
    let from_rules = compile(&sample_week()).unwrap();

    assert!(from_file.warnings.is_empty());
    assert_eq!(from_file.schedule, from_rules.schedule);
}

#[test]
fn generated_file_recovers_three_daily_rules() {
    let rules = parse_rules(GENERATED).unwrap();
    let daily: Vec<&str> = rules
        .iter()
        .filter(|r| matches!(r, Rule::Daily { .. }))
        .map(|r| r.event().title.as_str())
        .collect();

    assert_eq!(daily.len(), 3);
    assert!(daily.contains(&"Dinner"));
    assert!(daily.contains(&"Brush Teeth"));
    assert!(daily.contains(&"Wind-down (Reading as a couple)"));
}

#[test]
fn overrides_survive_later_daily_entries() {
    let compiled = compile(&parse_rules(GENERATED).unwrap()).unwrap().schedule;
    let titles = |day: Day| -> Vec<String> {
        compiled.day(day).iter().map(|e| e.title.clone()).collect()
    };

    let wednesday = titles(Day::Wednesday);
    assert_eq!(wednesday.last().map(String::as_str), Some("Evening Free Time"));
    assert!(!wednesday.contains(&"Dinner".to_string()));

    let friday = titles(Day::Friday);
    assert_eq!(
        friday.last().map(String::as_str),
        Some("Socializing with friends (optional)")
    );
}

#[test]
fn generated_file_has_the_same_weekly_total() {
    let from_file = compile(&parse_rules(GENERATED).unwrap()).unwrap().schedule;
    let from_rules = compile(&sample_week()).unwrap().schedule;

    assert_eq!(
        compute_balances(&from_file, 12).weekly_total,
        compute_balances(&from_rules, 12).weekly_total
    );
}
