//! crates/core/src/token.rs
//! Legacy call-site level-token codec.
//!
//! Older call sites tag each log call by embedding a three-byte marker at the
//! start of the format string instead of passing a typed level: the bytes
//! `@z` followed by a single byte equal to `0o60` plus the level ordinal.
//! Ordinals past either end of the digit range borrow the adjacent ASCII
//! characters, so `PRINT` (`-1`) encodes as `'/'`, `CRIT`..`DEBUG4` as
//! `'0'`..`'9'`, and `DEBUG5` (`10`) as `':'`.
//!
//! The typed [`Level`] parameter is the primary interface; this codec exists
//! only so pre-rendered strings from legacy call sites keep working. The
//! marker layout must stay bit-exact.

use crate::Level;

/// Length in bytes of an encoded level marker.
pub const MARKER_LEN: usize = 3;

/// Leading bytes of every level marker.
const MARKER_PREFIX: &[u8; 2] = b"@z";

/// ASCII `'0'`; added to the ordinal to form the marker's third byte.
const ORDINAL_BASE: i8 = 0o60;

/// Encodes a level into its three-byte marker.
///
/// # Examples
///
/// ```
/// use logfan_core::{token, Level};
///
/// assert_eq!(token::encode(Level::Crit), *b"@z0");
/// assert_eq!(token::encode(Level::Print), *b"@z/");
/// assert_eq!(token::encode(Level::Debug5), *b"@z:");
/// ```
#[must_use]
pub const fn encode(level: Level) -> [u8; MARKER_LEN] {
    [
        MARKER_PREFIX[0],
        MARKER_PREFIX[1],
        (ORDINAL_BASE + level.ordinal()) as u8,
    ]
}

/// Splits a leading level marker off a tagged string.
///
/// Returns the decoded level and the remainder of the string, or `None` when
/// the string does not begin with a valid marker.
///
/// # Examples
///
/// ```
/// use logfan_core::{token, Level};
///
/// assert_eq!(token::strip("@z2low disk"), Some((Level::Warn, "low disk")));
/// assert_eq!(token::strip("plain text"), None);
/// ```
#[must_use]
pub fn strip(text: &str) -> Option<(Level, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < MARKER_LEN || &bytes[..2] != MARKER_PREFIX {
        return None;
    }
    let ordinal = (bytes[2] as i8).wrapping_sub(ORDINAL_BASE);
    let level = Level::from_ordinal(ordinal)?;
    // The marker is pure ASCII, so the split lands on a char boundary.
    Some((level, &text[MARKER_LEN..]))
}
