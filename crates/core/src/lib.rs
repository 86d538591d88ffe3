#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logfan-core` holds the leaf types shared across the logfan workspace: the
//! ordered severity [`Level`] table, the legacy call-site level-token codec in
//! [`token`], and [`SourceLocation`] values attached to diagnostics in debug
//! builds. The coordinator crate (`logfan`) builds on these; output
//! destinations live in `logfan-sink`.
//!
//! # Design
//!
//! Levels are a fixed, totally ordered enumeration. Ordinals ascend as urgency
//! decreases: [`Level::Crit`] is ordinal `0`, [`Level::Debug5`] is ordinal
//! `10`. [`Level::Print`] sits outside the filterable range at ordinal `-1`;
//! the coordinator always emits it and never prefixes it with a source
//! location. Name lookup is a case-sensitive exact match against the canonical
//! upper-case names, so `"INFO"` resolves while `"info"` does not.
//!
//! # Invariants
//!
//! - Ordinals are stable: the token codec and every filter comparison depend
//!   on the `Print = -1 ..= Debug5 = 10` assignment.
//! - `Level::from_ordinal(level.ordinal())` round-trips for every variant, as
//!   does `Level::from_name(level.name())`.
//! - The token marker is exactly three bytes and is preserved bit-exactly for
//!   compatibility with existing tagged call sites.
//!
//! # Errors
//!
//! Only name parsing can fail; [`ParseLevelError`] reports the rejected input.
//! Ordinal and token lookups return `Option` because absence is an expected
//! outcome, not a fault.
//!
//! # Examples
//!
//! ```
//! use logfan_core::Level;
//!
//! assert_eq!(Level::Warn.name(), "WARN");
//! assert_eq!(Level::from_name("DEBUG2"), Some(Level::Debug2));
//! assert!(Level::Crit < Level::Info);
//! ```

mod levels;
mod location;
pub mod token;

pub use levels::{Level, ParseLevelError};
pub use location::SourceLocation;
