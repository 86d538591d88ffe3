//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the coordinator's outputter chain.
//!
//! This module provides a tracing-subscriber layer that forwards tracing
//! events into a [`Logger`], so components instrumented with the standard
//! tracing macros (error!, warn!, info!, debug!, trace!) feed the same
//! destinations as direct coordinator calls.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logfan::{init_tracing, Logger};
//!
//! init_tracing(Logger::global());
//!
//! tracing::warn!("low disk space");
//! tracing::debug!("cache miss");
//! ```

use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use logfan_core::Level;

use crate::logger::Logger;

/// A tracing layer that routes events through a coordinator's chain.
///
/// Events are mapped onto the level table (`ERROR` → [`Level::Err`], `WARN` →
/// [`Level::Warn`], `INFO` → [`Level::Info`], `DEBUG` → [`Level::Debug`],
/// `TRACE` → [`Level::Debug2`]) and then filtered and dispatched exactly like
/// a [`Logger::print`] call. The layer holds a `'static` logger reference so
/// it can be installed as part of a global subscriber.
pub struct LoggerLayer {
    logger: &'static Logger,
}

impl LoggerLayer {
    /// Creates a layer that forwards into the given coordinator.
    #[must_use]
    pub const fn new(logger: &'static Logger) -> Self {
        Self { logger }
    }

    /// Creates a layer that forwards into [`Logger::global`].
    #[must_use]
    pub fn global() -> Self {
        Self::new(Logger::global())
    }

    /// Map a tracing level onto the coordinator's level table.
    const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Err,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Debug2,
        }
    }
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());

        // Consult the filter before collecting the message.
        if level.ordinal() > self.logger.filter() {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Some(message) = visitor.message {
            self.logger.print(None, level, format_args!("{message}"));
        }
    }
}

/// Visitor to extract the message field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a global tracing subscriber that forwards events into `logger`.
///
/// Later calls are no-ops if a global subscriber is already installed; the
/// coordinator keeps working either way.
pub fn init_tracing(logger: &'static Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(LoggerLayer::new(logger))
        .try_init();
}
