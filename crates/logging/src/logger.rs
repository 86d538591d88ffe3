//! crates/logging/src/logger.rs
//! The coordinator: filtering, rendering, and the synchronized chain walk.

use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use logfan_core::{token, Level, SourceLocation};

use crate::chain::OutputterChain;
use crate::config::LogConfig;
use crate::outputter::{Outputter, OutputterId};

struct LoggerState {
    chain: OutputterChain,
    filter: i8,
}

/// Process-wide log coordinator.
///
/// A `Logger` owns a chain of destinations and a filter threshold, both
/// guarded by a single shared lock so any thread may call any operation
/// concurrently. Construct instances explicitly and pass them to the
/// components that log, or use [`Logger::global`] for the lazily created
/// process-wide instance.
///
/// Dispatch holds the lock across every destination invocation, so a slow
/// [`Outputter::write`] serializes all logging process-wide. That is the
/// intended trade-off: the chain can never be mutated mid-walk.
///
/// # Examples
///
/// ```
/// use logfan::{Level, Logger};
///
/// let logger = Logger::new();
/// assert!(logger.set_filter_name("WARN"));
/// assert_eq!(logger.filter_level(), Some(Level::Warn));
///
/// // NOTE is less urgent than WARN; the call is a no-op.
/// logger.print(None, Level::Note, format_args!("suppressed"));
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Logger {
    /// Creates a coordinator with an empty chain and the build-profile
    /// default filter ([`Level::Info`] optimized, [`Level::Debug`] with debug
    /// assertions).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LogConfig::default())
    }

    /// Creates a coordinator from an explicit configuration.
    #[must_use]
    pub fn with_config(config: LogConfig) -> Self {
        Self {
            state: Mutex::new(LoggerState {
                chain: OutputterChain::new(),
                filter: config.filter.ordinal(),
            }),
        }
    }

    /// The process-wide coordinator, created on first access and alive for
    /// the remainder of the process.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Logger> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Logging must keep working even if a destination panicked while the
    /// lock was held, so poisoning is stripped rather than propagated.
    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Renders and dispatches a message.
    ///
    /// The filter is consulted before any rendering work: a message whose
    /// level ordinal exceeds the threshold is discarded outright.
    /// [`Level::Print`] bypasses the filter entirely. When a `location` is
    /// supplied and the level is not `Print`, the rendered message is
    /// prefixed with `"<file>:<line>: "`. Rendering happens outside the lock;
    /// the lock is held only for the chain walk.
    pub fn print(&self, location: Option<SourceLocation>, level: Level, args: fmt::Arguments<'_>) {
        if level != Level::Print && level.ordinal() > self.filter() {
            return;
        }
        let message = match location {
            Some(location) if level != Level::Print => format!("{location}: {args}"),
            _ => args.to_string(),
        };
        self.lock().chain.dispatch(level, &message);
    }

    /// Dispatches a pre-rendered string from a legacy tagged call site.
    ///
    /// A leading `@z` level marker selects the level and is stripped from the
    /// message; a string without a marker is logged at [`Level::Info`]. See
    /// [`token`] for the marker layout.
    pub fn print_tagged(&self, location: Option<SourceLocation>, text: &str) {
        let (level, message) = token::strip(text).unwrap_or((Level::Info, text));
        self.print(location, level, format_args!("{message}"));
    }

    /// Prepends an outputter to the designated sequence of the chain.
    ///
    /// Head-sequence destinations receive every passed-filter message before
    /// all normal-sequence destinations, and their return values are ignored.
    /// The coordinator takes ownership; the returned handle releases it again
    /// through [`Logger::remove`].
    pub fn insert(&self, outputter: Box<dyn Outputter>, at_head: bool) -> OutputterId {
        self.lock().chain.insert(outputter, at_head)
    }

    /// Removes an outputter from the chain without destroying it.
    ///
    /// Returns the boxed destination to the caller, or `None` when the handle
    /// matches nothing (a silent no-op).
    pub fn remove(&self, id: OutputterId) -> Option<Box<dyn Outputter>> {
        self.lock().chain.remove(id)
    }

    /// Erases and destroys the front entry of the designated sequence.
    /// A no-op when that sequence is empty.
    pub fn pop_front(&self, at_head: bool) -> bool {
        self.lock().chain.pop_front(at_head)
    }

    /// Sets the filter threshold to a level from the table.
    pub fn set_filter(&self, level: Level) {
        self.set_filter_ordinal(level.ordinal());
    }

    /// Sets the filter threshold to a raw ordinal, without validation.
    /// Numeric ordinals are trusted; out-of-table values simply widen or
    /// narrow the filter.
    pub fn set_filter_ordinal(&self, ordinal: i8) {
        self.lock().filter = ordinal;
    }

    /// Sets the filter threshold by canonical level name.
    ///
    /// Returns `true` on success. An empty name is defined as a successful
    /// no-op; an unknown name returns `false` and leaves the threshold
    /// unchanged. Comparison is case-sensitive.
    pub fn set_filter_name(&self, name: &str) -> bool {
        if name.is_empty() {
            return true;
        }
        match Level::from_name(name) {
            Some(level) => {
                self.set_filter(level);
                true
            }
            None => false,
        }
    }

    /// The current filter threshold as an ordinal.
    #[must_use]
    pub fn filter(&self) -> i8 {
        self.lock().filter
    }

    /// The current filter threshold as a table level, when it names one.
    #[must_use]
    pub fn filter_level(&self) -> Option<Level> {
        Level::from_ordinal(self.filter())
    }

    /// The canonical name of the current filter threshold, when the ordinal
    /// names a table level.
    #[must_use]
    pub fn filter_name(&self) -> Option<&'static str> {
        self.filter_level().map(Level::name)
    }

    /// The canonical name of an arbitrary ordinal, via the level table.
    #[must_use]
    pub fn level_name(ordinal: i8) -> Option<&'static str> {
        Level::from_ordinal(ordinal).map(Level::name)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("filter", &state.filter)
            .field("chain", &state.chain)
            .finish()
    }
}
