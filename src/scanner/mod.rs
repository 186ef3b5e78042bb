//! Directory scanning functionality

pub mod file_scanner;

pub use file_scanner::{list_pdf_files, PDF_SUFFIX};
