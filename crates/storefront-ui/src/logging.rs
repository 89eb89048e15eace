//! Tracing setup for the browser
//!
//! A `tracing-subscriber` fmt layer formats each event into a buffer that is
//! flushed to the browser console as one line, at the console level matching
//! the event level. Timestamps are disabled because `SystemTime` is not
//! available on `wasm32-unknown-unknown`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, UiError};

/// Installs the global subscriber with the given filter directive
///
/// # Errors
///
/// Returns `UiError::InvalidConfig` for an unparsable directive and
/// `UiError::Logging` if a global subscriber is already installed.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| UiError::InvalidConfig(format!("log filter '{filter}': {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_writer(ConsoleMakeWriter),
        )
        .try_init()
        .map_err(|e| UiError::Logging(e.to_string()))
}

/// Produces one [`ConsoleWriter`] per event
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub const fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Takes the buffered text without its trailing newline
    pub fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buf);
        let line = String::from_utf8_lossy(&bytes);
        Some(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    use std::io::Write as _;

    let _ = writeln!(io::stderr(), "{line}");
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_take_line_trims_newline() -> io::Result<()> {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "WARN storefront_ui: ")?;
        writeln!(writer, "Image failed to load")?;
        assert_eq!(
            writer.take_line().as_deref(),
            Some("WARN storefront_ui: Image failed to load")
        );
        assert_eq!(writer.take_line(), None);
        Ok(())
    }

    #[test]
    fn test_empty_writer_has_no_line() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_invalid_filter_is_config_error() {
        assert!(matches!(
            init("storefront_ui=notalevel"),
            Err(UiError::InvalidConfig(_))
        ));
    }
}
