//! ui::output
//!
//! Diagnostic output and display formatting.
//!
//! # Design
//!
//! Diagnostics go to stderr and respect the configured verbosity. Lists are
//! silent at `Normal`; `Debug` traces kind changes and rejected inserts.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - no diagnostics at all
    Quiet,
    /// Normal mode - warnings only
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format items as a bracketed, comma-separated sequence.
///
/// ```
/// use sorted_linked_list::ui::output::format_sequence;
///
/// assert_eq!(format_sequence([1, 2, 3]), "[1, 2, 3]");
/// assert_eq!(format_sequence(Vec::<i32>::new()), "[]");
/// ```
pub fn format_sequence<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn format_sequence_strings() {
        assert_eq!(format_sequence(["apple", "banana"]), "[apple, banana]");
        assert_eq!(format_sequence(["only"]), "[only]");
    }
}
