use std::hint::black_box;

use super::{
    adopt_or_capture, frames::DEFAULT_SKIP, generic_err::GenericErr, new_error, new_errorf,
    new_errorf_skip, wrap, wrap_generic, wrapf, wrapf_skip, StackResultExt, StackedError,
};

/// Function name of the innermost captured frame, test builds always carry symbols.
pub fn first_function(err: &StackedError) -> String {
    err.frames()
        .first()
        .expect("error has no frames")
        .resolve()
        .function
        .expect("frame didn't resolve to a function")
}

#[inline(never)]
pub fn create_err_from_str(msg: &str) -> StackedError {
    new_error(msg, None)
}

#[inline(never)]
pub fn create_errf() -> StackedError {
    new_errorf(format_args!("code {}", 42))
}

// One level deeper than a direct call, so the trace starts at whoever called this.
#[inline(never)]
pub fn create_errf_skipped() -> StackedError {
    new_errorf_skip(DEFAULT_SKIP + 1, format_args!("code {}", 42))
}

#[inline(never)]
pub fn wrap_from_helper(err: GenericErr) -> StackedError {
    match wrap(Some(err), "helper") {
        Some(stacked) => stacked,
        None => panic!("Some(err) should always wrap."),
    }
}

#[inline(never)]
pub fn wrapf_skip_from_helper(err: GenericErr) -> StackedError {
    match wrapf_skip(Some(err), DEFAULT_SKIP + 1, format_args!("helper {}", 1)) {
        Some(stacked) => stacked,
        None => panic!("Some(err) should always wrap."),
    }
}

fn boom() -> Option<GenericErr> {
    Some(GenericErr::new("boom"))
}

// One fixed call site per entry point. The black_box keeps each site's own frame alive under optimization.
macro_rules! call_site {
    ($name:ident, $op:expr) => {
        #[inline(never)]
        pub fn $name() -> StackedError {
            let err: StackedError = $op;
            black_box(&err);
            err
        }
    };
}

call_site!(site_new_error, new_error("x", None));
call_site!(site_new_errorf, new_errorf(format_args!("x {}", 1)));
call_site!(
    site_new_errorf_skip,
    new_errorf_skip(DEFAULT_SKIP, format_args!("x {}", 1))
);
call_site!(site_wrap, wrap(boom(), "x").expect("wrapped"));
call_site!(
    site_wrapf,
    wrapf(boom(), format_args!("x {}", 1)).expect("wrapped")
);
call_site!(
    site_wrapf_skip,
    wrapf_skip(boom(), DEFAULT_SKIP, format_args!("x {}", 1)).expect("wrapped")
);
call_site!(
    site_wrap_generic,
    wrap_generic(boom(), "x", None).expect("wrapped")
);
call_site!(
    site_adopt_or_capture,
    adopt_or_capture(boom(), None).expect("captured")
);
call_site!(
    site_wrap_err,
    Err::<(), _>(GenericErr::new("boom"))
        .wrap_err("x")
        .expect_err("wrapped")
);
call_site!(
    site_wrap_err_macro,
    crate::wrap_err!(boom(), "x {}", 1).expect("wrapped")
);
call_site!(site_stack_err_macro, crate::stack_err!("x {}", 1));
