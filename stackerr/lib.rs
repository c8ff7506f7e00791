#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! stackerr - Errors that remember the call stack they were created on.
//!
//! ```
//! use stackerr::prelude::*;
//!
//! fn load() -> Result<u32, std::num::ParseIntError> {
//!     "nope".parse()
//! }
//!
//! let err = load().wrap_err("loading config").unwrap_err();
//! assert_eq!(err.to_string(), "loading config -> invalid digit found in string");
//!
//! // Rewrapping keeps the frames captured above, only the message grows:
//! let err = wrap_err!(Some(err), "startup").unwrap();
//! assert!(format!("{:#}", err).starts_with("startup -> loading config -> "));
//! ```

/// Everything needed day to day, `use stackerr::prelude::*;`.
pub mod prelude;

/// Stack capturing errors.
pub mod errors;
/// Logging utilities
pub mod log;

#[cfg(test)]
mod testing;
