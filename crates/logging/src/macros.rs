//! crates/logging/src/macros.rs
//! Call-site macros that capture source locations in debug builds.

/// Writes to a coordinator with type-safe formatting.
///
/// Invoke as `log!(logger, level, format, args..)`. In builds with debug
/// assertions the call site's `file!()`/`line!()` are captured and rendered
/// as a `"<file>:<line>: "` prefix on every level except
/// [`Level::Print`](crate::Level::Print); optimized builds omit the location
/// entirely.
///
/// # Examples
///
/// ```
/// use logfan::{log, Level, Logger};
///
/// let logger = Logger::new();
/// log!(logger, Level::Info, "{} peers connected", 3);
/// log!(Logger::global(), Level::Print, "banner");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let location = if cfg!(debug_assertions) {
            ::core::option::Option::Some($crate::SourceLocation::new(
                ::core::file!(),
                ::core::line!(),
            ))
        } else {
            ::core::option::Option::None
        };
        $logger.print(location, $level, ::core::format_args!($($arg)+));
    }};
}

/// Writes to a coordinator if and only if a condition holds.
///
/// Invoke as `logc!(logger, condition, level, format, args..)`. The condition
/// is evaluated exactly once; the format arguments are only evaluated when it
/// is true.
///
/// # Examples
///
/// ```
/// use logfan::{logc, Level, Logger};
///
/// let logger = Logger::new();
/// let attempts = 4;
/// logc!(logger, attempts > 3, Level::Warn, "{attempts} connection attempts");
/// ```
#[macro_export]
macro_rules! logc {
    ($logger:expr, $cond:expr, $level:expr, $($arg:tt)+) => {
        if $cond {
            $crate::log!($logger, $level, $($arg)+);
        }
    };
}
