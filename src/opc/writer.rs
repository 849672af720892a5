//! Package writing: stream parts into a ZIP archive

use std::io::{Seek, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::Part;
use crate::error::Result;

/// Write the given parts, in order, into a ZIP archive
///
/// Part order is preserved exactly as given; some consumers are sensitive to
/// the physical order of entries, so the caller's manifest order is the
/// contract. Returns the writer after finishing the archive.
pub fn write_package<W: Write + Seek>(writer: W, parts: &[Part]) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default();

    for part in parts {
        log::debug!("writing part {} ({} bytes)", part.path, part.content.len());
        zip.start_file(&part.path, options)?;
        zip.write_all(&part.content)?;
    }

    let writer = zip.finish()?;
    Ok(writer)
}
