//! Output formatting

pub mod report_writer;

pub use report_writer::{write_file_header, write_summary};
