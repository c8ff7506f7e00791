use std::panic::Location;

/// Log an error as an OpenTelemetry style exception event at `ERROR` level.
/// The call site of this function is appended to `stacktrace`.
///
/// Field names follow <https://opentelemetry.io/docs/specs/semconv/exceptions/exceptions-spans/>
/// so collectors pick the event up as an exception on the current span.
#[track_caller]
pub fn record_exception(message: impl Into<String>, stacktrace: impl Into<String>) {
    record_exception_with_caller(Location::caller(), message, stacktrace)
}

/// [`record_exception`] for callers that already hold the location to append, e.g. from their own `#[track_caller]`.
pub fn record_exception_with_caller(
    caller: &Location,
    message: impl Into<String>,
    stacktrace: impl Into<String>,
) {
    record_exception_with_type(caller, message, stacktrace, "Err")
}

pub(crate) fn record_exception_with_type(
    caller: &Location,
    message: impl Into<String>,
    stacktrace: impl Into<String>,
    typ: &str,
) {
    let frames = stacktrace.into();
    let stacktrace = match frames.trim() {
        "" => format!("╰╴at {}", caller),
        _ => format!("{}\n╰╴at {}", frames, caller),
    };
    // Observers key off the event name, it has to stay "exception":
    tracing::event!(
        tracing::Level::ERROR,
        name = "exception",
        exception.message = message.into(),
        exception.stacktrace = stacktrace,
        "exception.type" = typ
    );
}
