//! Per-file PDF analysis

use std::fmt;
use std::io::Write;
use std::path::Path;

use log::debug;
use lopdf::Document;

use super::log_capture::LogCapture;
use super::structure::write_structure;
use crate::error::{Error, Result};
use crate::reporting::report_writer::{write_file_header, write_summary};
use crate::scanner::file_scanner::list_pdf_files;

/// Notice printed in place of the structure dump for a locked document
pub const NOT_DECRYPTED_NOTICE: &str = "The file is encrypted and cannot be analyzed.";

/// Classification of a single PDF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfKind {
    Normal,
    Corrupted,
    Encrypted,
    /// Both corrupted and encrypted
    Unknown,
}

impl PdfKind {
    pub fn classify(corrupted: bool, encrypted: bool) -> Self {
        match (corrupted, encrypted) {
            (true, false) => PdfKind::Corrupted,
            (false, true) => PdfKind::Encrypted,
            (false, false) => PdfKind::Normal,
            (true, true) => PdfKind::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PdfKind::Normal => "Normal PDF",
            PdfKind::Corrupted => "Corrupted PDF",
            PdfKind::Encrypted => "Encrypted PDF",
            PdfKind::Unknown => "Unknown PDF Type",
        }
    }
}

impl fmt::Display for PdfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of analyzing a single PDF file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub corrupted: bool,
    pub encrypted: bool,
    pub kind: PdfKind,
}

/// Whether the document was stored encrypted
///
/// `/Encrypt` stays in the trailer after loading; `encryption_state` still
/// marks documents that went through `Document::decrypt`, which removes it.
pub fn is_encrypted(doc: &Document) -> bool {
    doc.is_encrypted() || doc.encryption_state.is_some()
}

/// Load and analyze one file from `dir`
///
/// The capture is cleared before loading so only warnings raised by this
/// file's load are considered. Load failures are returned as errors.
pub fn analyze_file<W: Write>(
    dir: &Path,
    file_name: &str,
    capture: &LogCapture,
    out: &mut W,
) -> Result<FileReport> {
    capture.clear();

    let path = dir.join(file_name);
    debug!("Loading {}", path.display());
    let doc = Document::load(&path)?;

    analyze_document(file_name, &doc, capture, out)
}

/// Classify an already loaded document and dump its structure
///
/// Reads whatever the capture holds, so callers clear it before loading.
pub fn analyze_document<W: Write>(
    file_name: &str,
    doc: &Document,
    capture: &LogCapture,
    out: &mut W,
) -> Result<FileReport> {
    let corrupted = capture.reports_pointer_repair();
    let encrypted = is_encrypted(doc);
    let report = FileReport {
        file_name: file_name.to_string(),
        corrupted,
        encrypted,
        kind: PdfKind::classify(corrupted, encrypted),
    };
    debug!("{} classified as {}", file_name, report.kind);

    write_file_header(out, &report)?;

    match write_structure(doc, out) {
        Ok(()) => {}
        Err(Error::NotDecrypted(reason)) => {
            debug!("Skipping structure of {}: {}", file_name, reason);
            writeln!(out, "{}", NOT_DECRYPTED_NOTICE)?;
            writeln!(out)?;
        }
        Err(e) => return Err(e),
    }

    Ok(report)
}

/// Analyze every PDF directly inside `dir`, then write the summary
///
/// The first error other than a locked document stops the run; no summary
/// is written in that case.
pub fn analyze_directory<W: Write>(
    dir: &Path,
    capture: &LogCapture,
    out: &mut W,
) -> Result<Vec<FileReport>> {
    let pdf_files = list_pdf_files(dir)?;
    debug!("Found {} PDF file(s) in {}", pdf_files.len(), dir.display());

    let mut reports = Vec::with_capacity(pdf_files.len());
    for file_name in &pdf_files {
        reports.push(analyze_file(dir, file_name, capture, out)?);
    }

    write_summary(out, &reports)?;
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object};

    fn one_page_document() -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn lock(doc: &mut Document) {
        let encrypt_id = doc.add_object(dictionary! { "Filter" => "Standard" });
        doc.trailer.set("Encrypt", encrypt_id);
    }

    #[test]
    fn test_classify_all_cases() {
        assert_eq!(PdfKind::classify(true, false), PdfKind::Corrupted);
        assert_eq!(PdfKind::classify(false, true), PdfKind::Encrypted);
        assert_eq!(PdfKind::classify(false, false), PdfKind::Normal);
        assert_eq!(PdfKind::classify(true, true), PdfKind::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PdfKind::Corrupted.to_string(), "Corrupted PDF");
        assert_eq!(PdfKind::Encrypted.to_string(), "Encrypted PDF");
        assert_eq!(PdfKind::Normal.to_string(), "Normal PDF");
        assert_eq!(PdfKind::Unknown.to_string(), "Unknown PDF Type");
    }

    #[test]
    fn test_analyze_normal_document() {
        let doc = one_page_document();
        let capture = LogCapture::new();
        let mut out = Vec::new();

        let report = analyze_document("plain.pdf", &doc, &capture, &mut out).unwrap();

        assert_eq!(report.kind, PdfKind::Normal);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("File: plain.pdf\n"));
        assert!(text.contains("Total number of pages: 1"));
    }

    #[test]
    fn test_analyze_document_with_repair_warning() {
        let doc = one_page_document();
        let capture = LogCapture::new();
        capture.record("Object load error at offset 412: IndirectObject { offset: 412 }");
        let mut out = Vec::new();

        let report = analyze_document("broken.pdf", &doc, &capture, &mut out).unwrap();

        assert!(report.corrupted);
        assert!(!report.encrypted);
        assert_eq!(report.kind, PdfKind::Corrupted);
    }

    #[test]
    fn test_analyze_locked_document_prints_notice() {
        let mut doc = one_page_document();
        lock(&mut doc);
        let capture = LogCapture::new();
        let mut out = Vec::new();

        let report = analyze_document("locked.pdf", &doc, &capture, &mut out).unwrap();

        assert_eq!(report.kind, PdfKind::Encrypted);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(NOT_DECRYPTED_NOTICE));
        assert!(!text.contains("Total number of pages"));
    }

    #[test]
    fn test_analyze_locked_and_repaired_document() {
        let mut doc = one_page_document();
        lock(&mut doc);
        let capture = LogCapture::new();
        capture.record("Object load error at offset 90: InvalidOffset(90)");
        let mut out = Vec::new();

        let report = analyze_document("both.pdf", &doc, &capture, &mut out).unwrap();

        assert_eq!(report.kind, PdfKind::Unknown);
    }

    #[test]
    fn test_other_warnings_do_not_mark_corrupted() {
        let doc = one_page_document();
        let capture = LogCapture::new();
        capture.record("Object 12 0 not found");
        let mut out = Vec::new();

        let report = analyze_document("noisy.pdf", &doc, &capture, &mut out).unwrap();

        assert!(!report.corrupted);
    }
}
