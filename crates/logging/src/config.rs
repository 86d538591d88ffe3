//! crates/logging/src/config.rs
//! Startup configuration for a coordinator instance.

use logfan_core::Level;

/// Configuration consumed by [`Logger::with_config`](crate::Logger::with_config).
///
/// The application assembly that constructs the coordinator decides the
/// initial threshold; everything else about a logger starts empty. With the
/// `serde` feature enabled the type derives `Serialize`/`Deserialize` so the
/// threshold can come straight from a config file.
///
/// # Examples
///
/// ```
/// use logfan::{Level, LogConfig, Logger};
///
/// let config = LogConfig::from_filter_name("NOTE").expect("known level");
/// let logger = Logger::with_config(config);
/// assert_eq!(logger.filter_level(), Some(Level::Note));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Initial filter threshold.
    pub filter: Level,
}

impl LogConfig {
    /// Creates a configuration with the given threshold.
    #[must_use]
    pub const fn new(filter: Level) -> Self {
        Self { filter }
    }

    /// Creates a configuration from a canonical level name.
    /// Returns `None` for unknown names; comparison is case-sensitive.
    #[must_use]
    pub fn from_filter_name(name: &str) -> Option<Self> {
        Level::from_name(name).map(Self::new)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Level::default_filter())
    }
}
