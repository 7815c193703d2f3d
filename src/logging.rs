//! Console Logging
//!
//! `tracing` output routed to the browser devtools console, one call per
//! event at the matching console level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

struct ConsoleMakeWriter;

struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let msg = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::log_1(&msg),
        }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Install the global subscriber. Timestamps are left to the console.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_max_level(max_level)
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&"[LOG] subscriber already installed".into());
    }
}
