//! ui::output
//!
//! Terminal reporting and display formatting.
//!
//! # Design
//!
//! Command handlers construct one [`Reporter`] from the global flags and
//! route every status line through it. Warnings and debug traces go to
//! stderr so that stdout stays clean for machine-readable output such as
//! `show`'s JSON.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
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

/// Terminal reporter bound to a verbosity level.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Whether debug traces are enabled.
    pub fn is_debug(&self) -> bool {
        self.verbosity == Verbosity::Debug
    }

    /// Print a status line (respects quiet mode).
    pub fn info(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            println!("{}", message);
        }
    }

    /// Print a debug trace (only in debug mode).
    pub fn debug(&self, message: impl Display) {
        if self.verbosity == Verbosity::Debug {
            eprintln!("[debug] {}", message);
        }
    }

    /// Print a warning (respects quiet mode).
    pub fn warn(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("warning: {}", message);
        }
    }

    /// Print an error (always shown).
    pub fn error(&self, message: impl Display) {
        eprintln!("error: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn debug_flag_is_exposed() {
        assert!(Reporter::new(Verbosity::Debug).is_debug());
        assert!(!Reporter::new(Verbosity::Normal).is_debug());
        assert!(!Reporter::new(Verbosity::Quiet).is_debug());
    }
}
