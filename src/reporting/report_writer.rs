//! Report writing functionality

use std::io::Write;

use crate::core::analyzer::FileReport;
use crate::error::Result;

/// Write the per-file diagnostic lines
///
/// # Arguments
/// * `out` - Destination for the text
/// * `report` - Classification of the file just analyzed
pub fn write_file_header<W: Write>(out: &mut W, report: &FileReport) -> Result<()> {
    writeln!(out, "File: {}", report.file_name)?;
    writeln!(out, "  - Corrupted: {}", report.corrupted)?;
    writeln!(out, "  - Encrypted: {}", report.encrypted)?;
    Ok(())
}

/// Write the summary table
///
/// One line per record, in the order the records were analyzed.
///
/// # Arguments
/// * `out` - Destination for the text
/// * `reports` - All records collected during the run
pub fn write_summary<W: Write>(out: &mut W, reports: &[FileReport]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Summary Results ---")?;

    for report in reports {
        writeln!(
            out,
            "File: {}, Corrupted: {}, Encrypted: {}, Type: {}",
            report.file_name, report.corrupted, report.encrypted, report.kind
        )?;
    }

    Ok(())
}
