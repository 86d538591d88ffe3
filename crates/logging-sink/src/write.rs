//! crates/logging-sink/src/write.rs
//! A generic writer-backed outputter.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use logfan::{Level, Outputter};

use crate::line_mode::LineMode;

/// Streams rendered messages into an [`io::Write`] target.
///
/// The sink owns the underlying writer together with a [`LineMode`] newline
/// policy and an optional level cap. Each [`Outputter::write`] renders the
/// message bytes, appends a newline per the configured mode, and flushes.
/// I/O failures are swallowed — the capability contract has no failure
/// channel — and the sink always returns `true` so later chain entries still
/// receive the message.
///
/// # Examples
///
/// Collect dispatched messages into a byte buffer:
///
/// ```
/// use logfan::{Level, Outputter};
/// use logfan_sink::WriteOutputter;
///
/// let mut sink = WriteOutputter::new(Vec::new());
/// assert!(sink.write(Level::Info, "ready"));
/// assert_eq!(sink.into_inner(), b"ready\n".to_vec());
/// ```
///
/// Cap a console destination at the conventional maximum:
///
/// ```
/// use logfan::{Level, Outputter};
/// use logfan_sink::WriteOutputter;
///
/// let mut console = WriteOutputter::new(Vec::new())
///     .with_max_level(WriteOutputter::<Vec<u8>>::CONSOLE_MAX_LEVEL);
/// assert!(console.write(Level::Debug3, "too verbose for a console"));
/// assert!(console.into_inner().is_empty());
/// ```
#[derive(Debug)]
pub struct WriteOutputter<W> {
    writer: W,
    line_mode: LineMode,
    max_level: Option<Level>,
}

impl<W> WriteOutputter<W> {
    /// Most verbose level a console destination conventionally displays.
    pub const CONSOLE_MAX_LEVEL: Level = Level::Debug2;

    /// Creates a sink that appends a newline after each message.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self {
            writer,
            line_mode,
            max_level: None,
        }
    }

    /// Caps the sink at `max`: messages less urgent than the cap are skipped
    /// by this sink (they still propagate along the chain).
    #[must_use]
    pub fn with_max_level(mut self, max: Level) -> Self {
        self.max_level = Some(max);
        self
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub const fn line_mode(&self) -> LineMode {
        self.line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&mut self, line_mode: LineMode) {
        self.line_mode = line_mode;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriteOutputter<io::Stderr> {
    /// A sink writing to the process standard error stream.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl WriteOutputter<io::Stdout> {
    /// A sink writing to the process standard output stream.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl WriteOutputter<File> {
    /// A sink appending to the file at `path`, creating it if absent.
    /// No rotation or buffering policy is applied.
    pub fn file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W> Outputter for WriteOutputter<W>
where
    W: Write + Send,
{
    fn write(&mut self, level: Level, message: &str) -> bool {
        if let Some(max) = self.max_level {
            if level.ordinal() > max.ordinal() {
                return true;
            }
        }
        // Best effort: a destination that cannot write drops the message.
        let _ = self.writer.write_all(message.as_bytes());
        if self.line_mode.append_newline() {
            let _ = self.writer.write_all(b"\n");
        }
        let _ = self.writer.flush();
        true
    }
}
