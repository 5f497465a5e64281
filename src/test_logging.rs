// Test-only env_logger setup that captures log records in memory

use std::io::{self, Write};
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut buf) => buf.extend_from_slice(data),
            Err(poisoned) => poisoned.into_inner().extend_from_slice(data),
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

static CAPTURE: OnceLock<Capture> = OnceLock::new();

/// Installs the capturing logger once per test binary
pub(crate) fn init() {
    CAPTURE.get_or_init(|| {
        let capture = Capture::default();
        let _ = env_logger::Builder::new()
            .is_test(true)
            .filter_level(log::LevelFilter::Debug)
            .format(|buf, record| {
                writeln!(buf, "{} {}: {}", record.level(), record.target(), record.args())
            })
            .target(env_logger::Target::Pipe(Box::new(capture.clone())))
            .try_init();
        capture
    });
}

/// Everything logged so far, one record per line
pub(crate) fn captured() -> String {
    init();
    match CAPTURE.get() {
        Some(capture) => match capture.0.lock() {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        },
        None => String::new(),
    }
}
