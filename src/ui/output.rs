//! ui::output
//!
//! Verbosity-aware diagnostics.
//!
//! # Streams
//!
//! Command results (values, trees, JSON) are printed by the command itself
//! on stdout and are never suppressed. Everything else goes through this
//! module:
//!
//! | Level     | Stream | Prefix     | Shown when          |
//! |-----------|--------|------------|---------------------|
//! | `Debug`   | stderr | `[debug] ` | `--debug`           |
//! | `Warning` | stderr | `warning: `| not `--quiet`       |
//! | `Error`   | stderr | `error: `  | always              |
//! | `Status`  | stdout | none       | not `--quiet`       |

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Results and errors only
    Quiet,
    /// Results, status lines, warnings and errors
    #[default]
    Normal,
    /// Everything, including `[debug]` lines
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. `--quiet` wins over `--debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        match (quiet, debug) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Debug,
            (false, false) => Verbosity::Normal,
        }
    }
}

/// Kind of diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warning,
    Error,
    Status,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Debug => "[debug] ",
            Level::Warning => "warning: ",
            Level::Error => "error: ",
            Level::Status => "",
        }
    }

    fn enabled(self, verbosity: Verbosity) -> bool {
        match self {
            Level::Debug => verbosity == Verbosity::Debug,
            Level::Warning | Level::Status => verbosity != Verbosity::Quiet,
            Level::Error => true,
        }
    }
}

/// The line `level` would print at `verbosity`, or `None` if suppressed.
pub fn format_line(level: Level, message: impl Display, verbosity: Verbosity) -> Option<String> {
    level
        .enabled(verbosity)
        .then(|| format!("{}{}", level.prefix(), message))
}

fn emit(level: Level, message: impl Display, verbosity: Verbosity) {
    if let Some(line) = format_line(level, message, verbosity) {
        match level {
            Level::Status => println!("{}", line),
            _ => eprintln!("{}", line),
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    emit(Level::Debug, message, verbosity);
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    emit(Level::Error, message, Verbosity::Quiet);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    emit(Level::Warning, message, verbosity);
}

/// Print a status line on stdout (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    emit(Level::Status, message, verbosity);
}

/// Join the display forms of `items` with `separator`.
pub fn format_list<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
