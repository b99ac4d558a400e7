// In-memory `log` sink so tests can assert on what the client emits.
// Installed once per test binary; tests filter records by a marker unique
// to themselves since other tests log concurrently.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static INSTALL: Once = Once::new();
static LOGGER: CaptureLogger = CaptureLogger;

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

pub fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in the unit test binary");
        log::set_max_level(LevelFilter::Trace);
    });
}

pub fn records_containing(marker: &str) -> Vec<(Level, String)> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, message)| message.contains(marker))
        .cloned()
        .collect()
}
