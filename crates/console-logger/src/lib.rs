//! Console Logger
//!
//! Installs a `tracing-subscriber` fmt layer whose writer forwards each
//! formatted event to the browser console, picking `console.error`,
//! `console.warn`, `console.info` or `console.debug` from the event level.
//! Off wasm32 the lines go to stderr instead.
//!
//! Initialization is idempotent for the same level; switching level after
//! the first call is rejected.

use std::io;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

static ACTIVE_LEVEL: OnceLock<Level> = OnceLock::new();

#[derive(Error, Debug, PartialEq)]
pub enum LoggerError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLevel(String),

    #[error("logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    LevelConflict { active: Level, requested: Level },

    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Parse a level name, case-insensitively.
pub fn parse_level(level: &str) -> Result<Level, LoggerError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LoggerError::InvalidLevel(level.trim().to_string())),
    }
}

/// `debug` for debug builds, `info` for release.
pub fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber.
pub fn init(level: &str) -> Result<(), LoggerError> {
    let requested = parse_level(level)?;

    if let Some(active) = ACTIVE_LEVEL.get() {
        return check_same(*active, requested);
    }

    // No timestamps: SystemTime::now panics on wasm32-unknown-unknown.
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(requested)
        .with_ansi(false)
        .with_target(true)
        .without_time()
        .try_init()
        .map_err(|e| LoggerError::Install(e.to_string()))?;

    let active = *ACTIVE_LEVEL.get_or_init(|| requested);
    check_same(active, requested)
}

fn check_same(active: Level, requested: Level) -> Result<(), LoggerError> {
    if active == requested {
        Ok(())
    } else {
        Err(LoggerError::LevelConflict { active, requested })
    }
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Clone, Copy, Debug, Default)]
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

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
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
        if self.buf.is_empty() {
            return;
        }
        emit(self.level, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let msg = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&msg),
        Level::WARN => console::warn_1(&msg),
        Level::INFO => console::info_1(&msg),
        _ => console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}
