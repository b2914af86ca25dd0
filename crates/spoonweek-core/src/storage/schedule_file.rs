//! Reading and writing schedule source files.

use std::path::Path;

use crate::error::Result;
use crate::schedule::{compile, source, Compilation, Rule};

/// Read and normalize the rules in `path`.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read, a JSON error if it is not
/// JSON, and a validation error for any malformed item.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let content = std::fs::read_to_string(path)?;
    let rules = source::parse_rules(&content)?;
    tracing::debug!(path = %path.display(), rules = rules.len(), "loaded schedule source");
    Ok(rules)
}

/// Load `path` and compile it.
pub fn load_compiled(path: &Path) -> Result<Compilation> {
    let rules = load_rules(path)?;
    Ok(compile(&rules)?)
}

/// Write `rules` to `path` as rule definitions.
pub fn save_rules(path: &Path, rules: &[Rule]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, source::to_definitions_json(rules)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::schedule::{presets, Day};

    #[test]
    fn sample_week_survives_a_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("schedule.json");

        save_rules(&path, &presets::sample_week()).unwrap();
        let loaded = load_rules(&path).unwrap();
        assert_eq!(loaded, presets::sample_week());

        let compiled = load_compiled(&path).unwrap();
        assert!(!compiled.schedule.day(Day::Thursday).is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_rules(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(CoreError::Io(_))));
    }

    #[test]
    fn invalid_rule_in_file_fails_compile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.json");
        std::fs::write(
            &path,
            r#"[{"event": {"title": "X", "startHour": 9, "startMinute": 0, "endHour": 8, "endMinute": 0, "energy": 0}, "repeatType": "daily"}]"#,
        )
        .unwrap();

        assert!(matches!(
            load_compiled(&path),
            Err(CoreError::Validation(_))
        ));
    }
}
