//! crates/core/src/levels.rs
//! The ordered severity level table used for filtering and name lookup.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Severity of a log message, ordered from most urgent to most verbose.
///
/// The ordinal (see [`Level::ordinal`]) ascends as urgency decreases, so the
/// derived `Ord` places [`Level::Crit`] before [`Level::Debug5`].
/// [`Level::Print`] is special: it carries ordinal `-1`, is never filtered by
/// the coordinator, and never receives a source-location prefix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum Level {
    /// Unconditional output, bypasses the filter and the location prefix.
    Print = -1,
    /// Critical failure.
    Crit = 0,
    /// Error.
    Err = 1,
    /// Warning.
    Warn = 2,
    /// Notable event.
    Note = 3,
    /// Informational message.
    Info = 4,
    /// Debugging message.
    Debug = 5,
    /// Verbose debugging, tier 1.
    Debug1 = 6,
    /// Verbose debugging, tier 2.
    Debug2 = 7,
    /// Verbose debugging, tier 3.
    Debug3 = 8,
    /// Verbose debugging, tier 4.
    Debug4 = 9,
    /// Verbose debugging, tier 5.
    Debug5 = 10,
}

/// Error returned when a level name does not match the canonical table.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognized log level name: {0:?}")]
pub struct ParseLevelError(String);

impl Level {
    /// Every level, ordinal ascending.
    pub const ALL: [Self; 12] = [
        Self::Print,
        Self::Crit,
        Self::Err,
        Self::Warn,
        Self::Note,
        Self::Info,
        Self::Debug,
        Self::Debug1,
        Self::Debug2,
        Self::Debug3,
        Self::Debug4,
        Self::Debug5,
    ];

    /// Integer position of the level in the canonical ordered table.
    #[must_use]
    pub const fn ordinal(self) -> i8 {
        self as i8
    }

    /// Canonical upper-case name of the level.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "PRINT",
            Self::Crit => "CRIT",
            Self::Err => "ERR",
            Self::Warn => "WARN",
            Self::Note => "NOTE",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Debug1 => "DEBUG1",
            Self::Debug2 => "DEBUG2",
            Self::Debug3 => "DEBUG3",
            Self::Debug4 => "DEBUG4",
            Self::Debug5 => "DEBUG5",
        }
    }

    /// Looks up a level by ordinal. Returns `None` outside `-1..=10`.
    #[must_use]
    pub const fn from_ordinal(ordinal: i8) -> Option<Self> {
        match ordinal {
            -1 => Some(Self::Print),
            0 => Some(Self::Crit),
            1 => Some(Self::Err),
            2 => Some(Self::Warn),
            3 => Some(Self::Note),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Debug1),
            7 => Some(Self::Debug2),
            8 => Some(Self::Debug3),
            9 => Some(Self::Debug4),
            10 => Some(Self::Debug5),
            _ => None,
        }
    }

    /// Looks up a level by its canonical name. Comparison is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.name() == name)
    }

    /// Default filter threshold: [`Level::Info`] in optimized builds,
    /// [`Level::Debug`] when debug assertions are enabled.
    #[must_use]
    pub const fn default_filter() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, ParseLevelError> {
        Self::from_name(s).ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}
