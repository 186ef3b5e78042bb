//! Analysis of individual PDF files

pub mod analyzer;
pub mod log_capture;
pub mod structure;

pub use analyzer::{analyze_directory, analyze_document, analyze_file, FileReport, PdfKind};
pub use log_capture::{is_pointer_repair, CaptureLogger, LogCapture};
pub use structure::write_structure;
