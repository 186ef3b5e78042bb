//! Per-page structure dump

use std::io::Write;

use lopdf::Document;

use crate::error::{Error, Result};

/// Write every page's dictionary to `out`
///
/// Pages are listed in page-number order; entries within a page follow
/// lopdf's dictionary iteration order. A document lopdf could not decrypt
/// yields `Error::NotDecrypted` before any page is read.
pub fn write_structure<W: Write>(doc: &Document, out: &mut W) -> Result<()> {
    if doc.is_encrypted() {
        return Err(Error::NotDecrypted(
            "pages cannot be read without the document password".to_string(),
        ));
    }

    let pages = doc.get_pages();
    writeln!(out, "Total number of pages: {}", pages.len())?;
    writeln!(out)?;

    for (page_number, page_id) in pages {
        let page = doc.get_dictionary(page_id)?;

        writeln!(out, "Page {} Structure:", page_number)?;
        writeln!(out, "{} {} R {:?}", page_id.0, page_id.1, page)?;
        for (key, value) in page.iter() {
            writeln!(
                out,
                "Key: /{}, Value: {:?}",
                String::from_utf8_lossy(key),
                value
            )?;
        }
        writeln!(out, "\n--\n")?;
    }

    Ok(())
}
