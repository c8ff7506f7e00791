use super::{
    frames::{keep_frame, DEFAULT_SKIP},
    stacked_error::StackedError,
    wrap::{annotate, IntoStacked},
};

/// Wrapping helpers directly on a [`Result`], the `Ok` side always passes through untouched.
pub trait StackResultExt {
    /// Type of the [`Ok`] value in the [`Result`]
    type Ok;

    /// Put `message` in front of the error's message chain, see [`wrap`](super::wrap).
    fn wrap_err(self, message: impl Into<String>) -> Result<Self::Ok, StackedError>;

    /// Lazy [`StackResultExt::wrap_err`], the message is only built on the error path.
    fn wrap_err_with<S: Into<String>, F: FnOnce() -> S>(
        self,
        message: F,
    ) -> Result<Self::Ok, StackedError>;

    /// Keep an existing [`StackedError`], or capture frames here for any other error.
    fn stacked(self) -> Result<Self::Ok, StackedError>;
}

impl<T, E: IntoStacked> StackResultExt for Result<T, E> {
    type Ok = T;

    #[inline(never)]
    fn wrap_err(self, message: impl Into<String>) -> Result<T, StackedError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(keep_frame(annotate(
                err,
                Some(message.into()),
                DEFAULT_SKIP,
            ))),
        }
    }

    #[inline(never)]
    fn wrap_err_with<S: Into<String>, F: FnOnce() -> S>(
        self,
        message: F,
    ) -> Result<T, StackedError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(keep_frame(annotate(
                err,
                Some(message().into()),
                DEFAULT_SKIP,
            ))),
        }
    }

    #[inline(never)]
    fn stacked(self) -> Result<T, StackedError> {
        match self {
            Ok(ok) => Ok(ok),
            Err(err) => Err(keep_frame(annotate(err, None, DEFAULT_SKIP))),
        }
    }
}

/// Drop a [`Result`] whose value nobody needs, logging the error side (if any) through [`StackedError::record`].
pub trait RecordAndConsumeResult {
    /// Log the error with its frames, then forget it.
    /// Errors without frames of their own get them captured here.
    fn record_and_consume(self);
}

impl<T, E: IntoStacked> RecordAndConsumeResult for Result<T, E> {
    #[track_caller]
    #[inline(never)]
    fn record_and_consume(self) {
        if let Err(err) = self {
            let stacked = keep_frame(annotate(err, None, DEFAULT_SKIP));
            stacked.record_at(std::panic::Location::caller());
        }
    }
}
