#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logfan` is a process-wide logging coordinator for applications built from
//! many components that need synchronized, priority-filtered, multi-destination
//! log output. A [`Logger`] owns an ordered chain of [`Outputter`] destinations
//! and a severity filter threshold; every public operation is serialized by a
//! single shared lock so arbitrary threads can log, install, or remove
//! destinations without tearing the chain.
//!
//! # Design
//!
//! The chain holds two independent sequences. Destinations inserted with
//! `at_head = true` receive every passed-filter message first and
//! unconditionally; the return value of their [`Outputter::write`] is ignored.
//! Normal destinations are consulted most-recently-installed first, and any of
//! them can stop propagation to the rest of the sequence by returning `false`.
//! Messages are rendered with type-safe `format_args!` formatting before the
//! lock is taken, so a slow destination delays other loggers but never the
//! rendering work of the calling thread.
//!
//! A logger is an ordinary value: construct one with [`Logger::new`] (or
//! [`Logger::with_config`]) and hand references to the components that need
//! it. [`Logger::global`] provides the lazily created process-wide instance
//! for applications that want exactly one coordinator without threading a
//! handle everywhere.
//!
//! # Invariants
//!
//! - Head entries are always invoked, front to back, regardless of their
//!   individual return values.
//! - Normal entries are invoked front to back only while the filter check
//!   passed and only until one returns `false`.
//! - [`Level::Print`] bypasses the filter and never carries a
//!   `"<file>:<line>: "` prefix.
//! - Removing an absent outputter and popping an empty sequence are no-ops.
//! - Messages from a single thread reach the chain in call order; threads are
//!   serialized by the lock with unspecified relative interleaving.
//!
//! # Errors
//!
//! Logging never fails from the coordinator's perspective. Destinations must
//! absorb their own I/O errors — [`Outputter::write`] has no error channel —
//! and [`Logger::set_filter_name`] signals an unknown name with `false`
//! rather than an error type.
//!
//! # Examples
//!
//! ```
//! use logfan::{log, Level, Logger, Outputter};
//!
//! struct Collect(Vec<String>);
//!
//! impl Outputter for Collect {
//!     fn write(&mut self, _level: Level, message: &str) -> bool {
//!         self.0.push(message.to_owned());
//!         true
//!     }
//! }
//!
//! let logger = Logger::new();
//! let id = logger.insert(Box::new(Collect(Vec::new())), false);
//!
//! logger.set_filter(Level::Info);
//! log!(logger, Level::Warn, "disk {}% full", 93);
//! log!(logger, Level::Debug, "not dispatched");
//!
//! let collected = logger.remove(id).expect("outputter still installed");
//! # let _ = collected;
//! ```
//!
//! # See also
//!
//! - [`logfan_core`] for the level table and the legacy level-token codec.
//! - `logfan-sink` for writer-backed destinations (stderr, stdout, files).

mod chain;
mod config;
mod logger;
mod macros;
mod outputter;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use chain::OutputterChain;
pub use config::LogConfig;
pub use logfan_core::{token, Level, ParseLevelError, SourceLocation};
pub use logger::Logger;
pub use outputter::{Outputter, OutputterId};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, LoggerLayer};
