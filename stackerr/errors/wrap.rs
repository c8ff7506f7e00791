use std::fmt;

use super::{
    frames::{capture_frames, keep_frame, DEFAULT_SKIP},
    stacked_error::{format_message, StackedError, CHAIN_SEPARATOR},
};

/// What an error turns into when it meets one of the wrapping functions.
pub enum Annotation {
    /// Already carries frames, these are kept untouched.
    Stacked(StackedError),
    /// A plain error, only its rendered message survives.
    Bare(String),
}

/// The "already annotated?" check the wrapping functions branch on.
///
/// Implemented for [`StackedError`] itself and for every [`std::error::Error`].
/// Other stack carrying types can opt in by returning [`Annotation::Stacked`].
pub trait IntoStacked {
    /// Split into an existing annotation, or the text a fresh one should start from.
    fn into_annotation(self) -> Annotation;
}

impl IntoStacked for StackedError {
    fn into_annotation(self) -> Annotation {
        Annotation::Stacked(self)
    }
}

impl<E: std::error::Error> IntoStacked for E {
    fn into_annotation(self) -> Annotation {
        Annotation::Bare(self.to_string())
    }
}

/// Add `message` in front of an error's message chain.
///
/// - `None` stays `None`, nothing is ever fabricated.
/// - A [`StackedError`] is reused: message becomes `"<message> -> <old message>"`, frames untouched.
/// - Anything else becomes a new [`StackedError`] with frames captured here.
#[inline(never)]
pub fn wrap<E: IntoStacked>(err: Option<E>, message: impl Into<String>) -> Option<StackedError> {
    keep_frame(wrap_generic(err, message, Some(DEFAULT_SKIP + 1)))
}

/// [`wrap`] with a formatted message, usually via [`wrap_err!`](crate::wrap_err).
#[inline(never)]
pub fn wrapf<E: IntoStacked>(err: Option<E>, args: fmt::Arguments<'_>) -> Option<StackedError> {
    keep_frame(wrap_generic(
        err,
        format_message(args),
        Some(DEFAULT_SKIP + 1),
    ))
}

/// [`wrapf`] where the caller chooses how many frames to hide if a fresh capture is needed.
/// `skip` is counted as if [`wrap_generic`] had been called from the caller's position.
#[inline(never)]
pub fn wrapf_skip<E: IntoStacked>(
    err: Option<E>,
    skip: usize,
    args: fmt::Arguments<'_>,
) -> Option<StackedError> {
    keep_frame(wrap_generic(err, format_message(args), Some(skip + 1)))
}

/// The shared rule behind all the wrap functions, `skip` defaults to [`DEFAULT_SKIP`].
#[inline(never)]
pub fn wrap_generic<E: IntoStacked>(
    err: Option<E>,
    message: impl Into<String>,
    skip: Option<usize>,
) -> Option<StackedError> {
    let err = err?;
    Some(keep_frame(annotate(
        err,
        Some(message.into()),
        skip.unwrap_or(DEFAULT_SKIP),
    )))
}

/// Adopt an existing [`StackedError`] as is, or capture frames for any other error (using its text as the message).
#[inline(never)]
pub fn adopt_or_capture<E: IntoStacked>(err: Option<E>, skip: Option<usize>) -> Option<StackedError> {
    let err = err?;
    Some(keep_frame(annotate(err, None, skip.unwrap_or(DEFAULT_SKIP))))
}

/// Sits at the same depth as [`StackedError::capture`], every public caller is exactly one level above.
#[inline(never)]
pub(crate) fn annotate<E: IntoStacked>(
    err: E,
    prefix: Option<String>,
    skip: usize,
) -> StackedError {
    match err.into_annotation() {
        Annotation::Stacked(mut stacked) => {
            if let Some(prefix) = prefix {
                stacked.prepend(&prefix);
            }
            stacked
        }
        Annotation::Bare(text) => {
            let message = match prefix {
                Some(prefix) => format!("{}{}{}", prefix, CHAIN_SEPARATOR, text),
                None => text,
            };
            StackedError::from_parts(message, keep_frame(capture_frames(Some(skip))))
        }
    }
}
