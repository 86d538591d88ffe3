#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logfan-sink` provides writer-backed destinations for the logfan
//! coordinator. The coordinator itself only knows the
//! [`Outputter`](logfan::Outputter) capability; this crate supplies the usual
//! concrete implementors — stderr, stdout, plain append-mode files, and any
//! other [`std::io::Write`] target — as a single generic [`WriteOutputter`].
//!
//! # Design
//!
//! A [`WriteOutputter`] wraps a writer together with a [`LineMode`] newline
//! policy and an optional maximum level. The capability contract has no error
//! channel, so every I/O failure is absorbed: a sink that cannot write simply
//! drops the message and keeps propagation alive by returning `true`.
//!
//! # Invariants
//!
//! - `write` never fails and never stops chain propagation.
//! - The level cap skips rendering for messages less urgent than the cap but
//!   still lets them propagate to later destinations.
//! - `LineMode::WithNewline` (the default) terminates each message with `\n`.
//!
//! # Examples
//!
//! ```
//! use logfan::{Level, Logger, Outputter};
//! use logfan_sink::WriteOutputter;
//!
//! let logger = Logger::new();
//! logger.insert(Box::new(WriteOutputter::stderr()), false);
//! logger.print(None, Level::Print, format_args!("ready"));
//! ```

mod line_mode;
mod write;

pub use line_mode::LineMode;
pub use write::WriteOutputter;
