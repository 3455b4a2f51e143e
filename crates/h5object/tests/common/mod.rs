//! Shared test support: a logger that captures diagnostics so tests
//! can assert on them.

use std::sync::{Mutex, Once, OnceLock};

use log::{Level, LevelFilter, Metadata, Record};

struct CaptureLogger;

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();
static MESSAGES: OnceLock<Mutex<Vec<String>>> = OnceLock::new();

fn messages() -> &'static Mutex<Vec<String>> {
    MESSAGES.get_or_init(|| Mutex::new(Vec::new()))
}

impl log::Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            messages()
                .lock()
                .expect("capture lock poisoned")
                .push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Installs the capturing logger; safe to call from every test.
pub fn init_capture() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("another logger is installed");
        log::set_max_level(LevelFilter::Warn);
    });
}

/// Whether any captured diagnostic contains `needle`.
///
/// Tests run in parallel and share the sink, so assertions should use
/// needles unique to the test (an attribute or dataset name).
pub fn captured_contains(needle: &str) -> bool {
    messages()
        .lock()
        .expect("capture lock poisoned")
        .iter()
        .any(|m| m.contains(needle))
}
