use std::{fmt, io};

use colored::Colorize;

use super::frames::{capture_frames, keep_frame, Frames, DEFAULT_SKIP};

/// Joins the segments of a message chain, newest first.
pub const CHAIN_SEPARATOR: &str = " -> ";

/// An error that remembers where it was first created or observed.
///
/// The frames are captured exactly once and never touched again. Later wraps only grow the message chain,
/// so the trace always points at where things originally went wrong.
///
/// Formatting:
/// - `{}`: just the message chain.
/// - `{:#}`: the message, then one `\tat <function> (<file>:<line>)` line per frame.
/// - `{:?}`: like `{:#}` with the locations highlighted, this is what `unwrap()` shows.
///
/// Intentionally doesn't implement [`std::error::Error`], meaning any real error can be turned into one
/// (see [`IntoStacked`](super::IntoStacked)) without the two conversions overlapping.
#[derive(Clone)]
pub struct StackedError {
    message: String,
    frames: Frames,
}

impl StackedError {
    // All public constructors sit exactly one level above this, which DEFAULT_SKIP accounts for.
    #[inline(never)]
    pub(crate) fn capture(message: String, skip: usize) -> Self {
        Self::from_parts(message, keep_frame(capture_frames(Some(skip))))
    }

    pub(crate) fn from_parts(message: String, frames: Frames) -> Self {
        Self { message, frames }
    }

    /// The full message chain, e.g. `query failed -> db timeout`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The frames captured when this error was first created, innermost first.
    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    /// Drop the frames, keeping only the message chain.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Put `prefix` in front of the existing message chain, the frames stay as they are.
    pub(crate) fn prepend(&mut self, prefix: &str) {
        self.message = format!("{}{}{}", prefix, CHAIN_SEPARATOR, self.message);
    }

    /// The extended form (message + frames) as a string, identical to `format!("{:#}", err)`.
    pub fn render(&self) -> String {
        format!("{:#}", self)
    }

    /// Write the extended form (message + frames) to an arbitrary sink.
    /// Symbols are resolved on every call, the error itself is never modified.
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }

    /// Record this error as an exception on the current span, with its frames as the stacktrace.
    #[track_caller]
    pub fn record(&self) {
        self.record_at(std::panic::Location::caller())
    }

    pub(crate) fn record_at(&self, caller: &std::panic::Location) {
        crate::log::record_exception_with_type(
            caller,
            self.message.clone(),
            self.frame_lines(false).join("\n"),
            "StackedError",
        );
    }

    fn frame_lines(&self, highlight: bool) -> Vec<String> {
        self.frames
            .iter()
            .map(|frame| {
                let info = frame.resolve();
                if highlight {
                    format!(
                        "\tat {} ({})",
                        info.function_or_unknown(),
                        info.location().yellow()
                    )
                } else {
                    format!("\t{}", info)
                }
            })
            .collect()
    }
}

/// Create a new error from a plain message.
/// `skip` overrides how many innermost frames are hidden, see [`capture_frames`].
#[inline(never)]
pub fn new_error(message: impl Into<String>, skip: Option<usize>) -> StackedError {
    keep_frame(StackedError::capture(message.into(), skip.unwrap_or(DEFAULT_SKIP)))
}

/// Create a new error from pre-formatted arguments, usually via [`stack_err!`](crate::stack_err).
#[inline(never)]
pub fn new_errorf(args: fmt::Arguments<'_>) -> StackedError {
    keep_frame(StackedError::capture(format_message(args), DEFAULT_SKIP))
}

/// Like [`new_errorf`], but for helpers that wrap it and need the trace to start further out.
#[inline(never)]
pub fn new_errorf_skip(skip: usize, args: fmt::Arguments<'_>) -> StackedError {
    keep_frame(StackedError::capture(format_message(args), skip))
}

/// Literal-only arguments are taken as is, skipping the formatting machinery.
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => literal.to_string(),
        None => args.to_string(),
    }
}

impl fmt::Display for StackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "{}", self.message)?;
            for line in self.frame_lines(false) {
                writeln!(f, "{}", line)?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl fmt::Debug for StackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // This will usually be shown with unwrap():
        writeln!(f, "\n{}", self.message)?;
        for line in self.frame_lines(true) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl error_stack::Context for StackedError {}
