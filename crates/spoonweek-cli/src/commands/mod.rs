pub mod config;
pub mod energy;
pub mod schedule;

use std::path::{Path, PathBuf};

use spoonweek_core::storage::schedule_file;
use spoonweek_core::{Compilation, Config, CoreError, Day};

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// `--file` if given, otherwise the configured schedule path.
pub fn resolve_schedule_path(file: Option<PathBuf>, config: &Config) -> CliResult<PathBuf> {
    match file {
        Some(path) => Ok(path),
        None => Ok(config.schedule_path()?),
    }
}

/// Load and compile a schedule source.
///
/// Consistency warnings are logged by the compiler and kept on the result.
pub fn load_compilation(path: &Path) -> CliResult<Compilation> {
    tracing::debug!(path = %path.display(), "loading schedule source");
    let compilation = match schedule_file::load_compiled(path) {
        Err(CoreError::Io(e)) => {
            return Err(format!(
                "cannot read schedule at {}: {e} (run `spoonweek schedule init` to create one)",
                path.display()
            )
            .into())
        }
        other => other?,
    };

    Ok(compilation)
}

pub fn parse_day(day_str: &str) -> CliResult<Day> {
    Day::parse(day_str).ok_or_else(|| {
        format!("Invalid day: '{day_str}'. Use 0-6 or sun/mon/tue/wed/thu/fri/sat").into()
    })
}
