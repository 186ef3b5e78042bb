//! PDF Triage Library
//!
//! Classifies the PDF files in a directory as normal, corrupted or
//! encrypted and dumps the page structure of each one.

pub mod core;
pub mod error;
pub mod reporting;
pub mod scanner;

pub use crate::core::analyzer;
pub use error::{Error, Result};
pub use crate::reporting::report_writer;
pub use crate::scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::analyzer::{
        analyze_directory, analyze_document, analyze_file, is_encrypted, FileReport, PdfKind,
        NOT_DECRYPTED_NOTICE,
    };
    pub use crate::core::log_capture::{
        is_pointer_repair, CaptureLogger, LogCapture, POINTER_REPAIR_MARKER,
    };
    pub use crate::core::structure::write_structure;
    pub use crate::error::{Error, Result};
    pub use crate::reporting::report_writer::{write_file_header, write_summary};
    pub use crate::scanner::file_scanner::list_pdf_files;
}
