use std::{error::Error, fmt};

/// A plain error with no frames of its own, stands in for errors from other crates.
#[derive(Debug)]
pub struct GenericErr {
    msg: String,
}

impl GenericErr {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self { msg: msg.into() }
    }
}

impl Error for GenericErr {}

impl fmt::Display for GenericErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
