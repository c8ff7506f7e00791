mod frames;
#[cfg(test)]
mod generic_err;
mod macros;
mod result_ext;
mod stacked_error;
#[cfg(test)]
mod test_errs;
mod wrap;

/// Publicly exporting the error stack crate, to prevent every dependent depending on it too.
pub use error_stack;

pub use frames::{capture_frames, Frame, FrameInfo, Frames, DEFAULT_SKIP, MAX_DEPTH};
pub use result_ext::*;
pub use stacked_error::{new_error, new_errorf, new_errorf_skip, StackedError, CHAIN_SEPARATOR};
pub use wrap::{
    adopt_or_capture, wrap, wrap_generic, wrapf, wrapf_skip, Annotation, IntoStacked,
};

/// Shorthand for a [`Result`] with a [`error_stack::Report`] as the error variant
pub type RResult<T, C> = Result<T, error_stack::Report<C>>;

/// Easily import all useful error items. Useful to put inside a crate prelude.
pub mod prelude {
    #[allow(unused_imports)]
    pub use error_stack::{Report, ResultExt};

    #[allow(unused_imports)]
    pub use super::{
        IntoStacked, RResult, RecordAndConsumeResult, StackResultExt, StackedError,
    };

    #[allow(unused_imports)]
    pub use crate::{panic_on_err, stack_err, wrap_err};
}
