//! crates/logging/src/outputter.rs
//! The capability contract satisfied by every log destination.

use std::num::NonZeroU64;

use logfan_core::Level;

/// A log destination.
///
/// The coordinator hands each destination the fully rendered message — the
/// source-location prefix and caller arguments are already merged — together
/// with the level it was logged at. Implementations may perform I/O but must
/// absorb any failure internally: the contract has no error channel, and the
/// logging system must never itself fail while logging.
///
/// The return value controls propagation. Returning `false` stops the chain
/// walker from invoking subsequent normal-sequence destinations for this
/// message; it has no effect on always-at-head destinations, which all receive
/// every passed-filter message.
pub trait Outputter: Send {
    /// Accepts a rendered message at the given level. Returns whether
    /// downstream normal-sequence destinations should still receive it.
    fn write(&mut self, level: Level, message: &str) -> bool;
}

/// Opaque handle identifying an installed outputter.
///
/// Returned by insert operations and consumed by remove operations, which hand
/// ownership of the boxed destination back to the caller. Handles are unique
/// for the lifetime of the chain that issued them; a handle whose outputter
/// has been removed or popped no longer matches anything.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct OutputterId(NonZeroU64);

impl OutputterId {
    pub(crate) const fn new(raw: NonZeroU64) -> Self {
        Self(raw)
    }
}
