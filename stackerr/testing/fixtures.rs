use std::{io, sync::Arc};

use parking_lot::Mutex;
use tracing::Level;

use crate::testing::prelude::*;

/// Include this in a test to turn on logging globally.
#[fixture]
#[once]
pub fn logging(#[default(Level::TRACE)] level: Level) {
    // Another test binary thread may have won the race, that's fine:
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(level)
        .try_init();
}

#[derive(Clone, Default)]
struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber, returning everything it logged as plain text.
pub fn captured_logs(f: impl FnOnce()) -> String {
    let writer = CapturedWriter::default();
    let logs = writer.0.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let out = String::from_utf8_lossy(&logs.lock()).to_string();
    out
}
