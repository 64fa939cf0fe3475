//! Log capture for tests.
//!
//! The firmware builds log through defmt, but under test we just want the
//! `log` macros to land on stdout, where `cargo test -- --nocapture` can show
//! them.

use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static INIT: Once = Once::new();
static LOGGER: TestLogger = TestLogger;

/// Install the test logger.  Safe to call from every test.
pub fn setup() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger already installed");
        log::set_max_level(LevelFilter::Debug);
    });
}
