//! Capture of warnings logged by the PDF parser
//!
//! lopdf reports the objects it has to skip while loading a document through the
//! `log` facade. `LogCapture` is the buffer those warnings land in; the
//! analyzer clears it before each file and inspects it after the load.
//! `CaptureLogger` is the process logger that feeds it, echoing warnings
//! to stderr through `env_logger` as well.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Result;

/// Phrase lopdf logs when a cross-reference entry points at bytes that are
/// not the start of an object; the entry is dropped and loading continues
pub const POINTER_REPAIR_MARKER: &str = "Object load error at offset";

/// Log target prefix of the PDF parser
const PARSER_LOG_TARGET: &str = "lopdf";

/// Least severe level that is captured
const CAPTURE_LEVEL: Level = Level::Warn;

/// Did the parser skip an object because its cross-reference entry
/// pointed somewhere wrong?
pub fn is_pointer_repair(line: &str) -> bool {
    line.contains(POINTER_REPAIR_MARKER)
}

fn is_parser_target(target: &str) -> bool {
    target == PARSER_LOG_TARGET
        || target
            .strip_prefix(PARSER_LOG_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Resettable buffer of warning lines emitted by the parser
///
/// Cloning yields another handle to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogCapture {
    /// Create an empty capture that is not attached to any logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a `CaptureLogger` as the process logger and return its buffer
    ///
    /// The `log` facade accepts a single logger per process, so a second
    /// call fails with `Error::Logger`.
    pub fn install() -> Result<Self> {
        let capture = Self::new();
        let logger = CaptureLogger::new(capture.clone(), LevelFilter::Warn);
        let max_level = logger.max_level();

        log::set_boxed_logger(Box::new(logger))?;
        log::set_max_level(max_level);

        Ok(capture)
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop everything captured so far
    pub fn clear(&self) {
        self.buffer().clear();
    }

    /// Append a message, one entry per line of text
    pub fn record(&self, message: &str) {
        self.buffer().extend(message.lines().map(str::to_string));
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// True when any captured line is a pointer-repair warning
    pub fn reports_pointer_repair(&self) -> bool {
        self.buffer().iter().any(|line| is_pointer_repair(line))
    }
}

/// Process logger that routes parser warnings into a `LogCapture`
pub struct CaptureLogger {
    capture: LogCapture,
    echo: env_logger::Logger,
}

impl CaptureLogger {
    /// Create a logger feeding `capture`, echoing records at or above
    /// `echo_level` to stderr
    pub fn new(capture: LogCapture, echo_level: LevelFilter) -> Self {
        let echo = env_logger::Builder::new()
            .filter_level(echo_level)
            .target(env_logger::Target::Stderr)
            .build();

        Self { capture, echo }
    }

    /// Level the `log` facade must let through for this logger to see
    /// everything it needs
    pub fn max_level(&self) -> LevelFilter {
        self.echo.filter().max(CAPTURE_LEVEL.to_level_filter())
    }

    fn captures(&self, metadata: &Metadata) -> bool {
        metadata.level() <= CAPTURE_LEVEL && is_parser_target(metadata.target())
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.captures(metadata) || self.echo.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.captures(record.metadata()) {
            self.capture.record(&record.args().to_string());
        }
        if self.echo.matches(record) {
            self.echo.log(record);
        }
    }

    fn flush(&self) {
        self.echo.flush();
    }
}
