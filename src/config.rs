use clap::ValueEnum;

/// Selects how literals are read and how arithmetic behaves.
///
/// - `Integer`: literals are `i64`, division truncates toward zero, dividing by
///   zero and overflowing are errors, and function names are rejected.
/// - `Floating`: literals are `f64`, arithmetic follows IEEE-754 (so `1/0` is
///   `inf`), and `sin`, `cos`, `tan` and `sqrt` are available.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NumericMode {
    /// Whole-number arithmetic without functions.
    Integer,
    /// Real-number arithmetic with functions.
    #[default]
    Floating,
}

impl NumericMode {
    /// Returns `true` if function names are accepted in this mode.
    #[must_use]
    pub const fn functions_enabled(self) -> bool {
        matches!(self, Self::Floating)
    }
}

/// Settings shared by every stage of the pipeline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Numeric mode for literal parsing and arithmetic.
    pub mode: NumericMode,
}

impl Config {
    /// Creates a configuration for the given numeric mode.
    #[must_use]
    pub const fn new(mode: NumericMode) -> Self {
        Self { mode }
    }

    /// Returns `true` if function names are accepted.
    ///
    /// Floating mode always enables functions; integer mode never does.
    #[must_use]
    pub const fn functions_enabled(&self) -> bool {
        self.mode.functions_enabled()
    }
}
