#[allow(unused_imports)]
pub use error_stack::{Report, ResultExt};

#[allow(unused_imports)]
pub use crate::errors::prelude::*;
