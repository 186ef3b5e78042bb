//! PDF file scanning and collection

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Suffix a directory entry name must end with to be analyzed (case-sensitive)
pub const PDF_SUFFIX: &str = ".pdf";

/// List the PDF files directly inside a directory
///
/// # Arguments
/// * `dir` - Directory to scan (not recursed into)
///
/// # Returns
/// Entry names ending in `.pdf`, in the order the platform lists them.
/// Errors from reading the directory are propagated unchanged.
pub fn list_pdf_files(dir: &Path) -> Result<Vec<String>> {
    let mut pdf_files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // Names that are not valid UTF-8 cannot carry the suffix as text
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(PDF_SUFFIX) {
                pdf_files.push(name.to_string());
            }
        }
    }

    Ok(pdf_files)
}
