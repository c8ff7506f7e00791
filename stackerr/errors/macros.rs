/// Create a [`StackedError`](crate::errors::StackedError) at the call site.
///
/// - `stack_err!(msg)`: any `Into<String>`, used verbatim (braces aren't interpreted).
/// - `stack_err!("fmt {}", args..)`: formatted like [`format!`].
#[macro_export]
macro_rules! stack_err {
    ($msg:expr $(,)?) => {{
        $crate::errors::new_error($msg, None)
    }};

    ($str:expr, $($arg:expr),+ $(,)?) => {{
        $crate::errors::new_errorf(format_args!($str, $($arg),+))
    }};
}

/// Wrap an `Option<impl IntoStacked>` with extra context, see [`wrap`](crate::errors::wrap).
///
/// - `wrap_err!(err, msg)`: `msg` used verbatim.
/// - `wrap_err!(err, "fmt {}", args..)`: formatted like [`format!`].
#[macro_export]
macro_rules! wrap_err {
    ($err:expr, $msg:expr $(,)?) => {{
        $crate::errors::wrap($err, $msg)
    }};

    ($err:expr, $str:expr, $($arg:expr),+ $(,)?) => {{
        $crate::errors::wrapf($err, format_args!($str, $($arg),+))
    }};
}

/// When working in a function that cannot return a result, wrap a block in this macro to panic with the rendered error (message + frames) if it errors.
#[macro_export]
macro_rules! panic_on_err {
    ($closure:block) => {{
        use $crate::errors::StackedError;

        match (|| -> Result<_, StackedError> { $closure })() {
            Ok(s) => s,
            Err(e) => {
                panic!("{:#}", e);
            }
        }
    }};
}
