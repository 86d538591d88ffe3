//! crates/core/src/location.rs
//! Source locations attached to diagnostics in debug builds.

use std::fmt;

/// File and line of a logging call site.
///
/// The logging macros capture a location via `file!()`/`line!()` when debug
/// assertions are enabled; optimized builds pass `None` instead. The
/// coordinator renders the location as a `"<file>:<line>: "` prefix on every
/// dispatched message except `PRINT`-level output.
///
/// # Examples
///
/// ```
/// use logfan_core::SourceLocation;
///
/// let location = SourceLocation::new("src/server.rs", 42);
/// assert_eq!(location.to_string(), "src/server.rs:42");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Creates a location from a static file path and line number.
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The file path of the call site.
    #[must_use]
    pub const fn file(self) -> &'static str {
        self.file
    }

    /// The line number of the call site.
    #[must_use]
    pub const fn line(self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
