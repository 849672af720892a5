//! # slidekit
//!
//! Generates the Agent Wargame design-kit deck as a PresentationML (`.pptx`)
//! package: a ZIP archive following the Open Packaging Conventions (OPC)
//! standard, containing XML parts for the slides, master, layout, theme, and
//! document properties.
//!
//! The deck content is fixed: six slides of brand documentation built from
//! literal values in [`kit`]. The surrounding machinery - the deck model, the
//! DrawingML serializer, and the OPC package assembler - is content-agnostic.
//!
//! ## Example
//!
//! ```no_run
//! use slidekit::kit;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let deck = kit::deck();
//! deck.write_to_file("agent_wargame_slide_kit.pptx")?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod kit;
pub mod model;
pub mod opc;
pub mod theme;
pub mod units;
mod package;
mod validator;
mod writer;

pub use validator::validate_deck;

pub use error::{Error, Result};
pub use model::{
    Align, Anchor, Deck, DocProps, Fill, Frame, Geometry, Insets, Paragraph, Run, Shadow, Shape,
    Slide, Stroke, TextBody,
};
pub use units::Emu;

use std::io::{Seek, Write};
use std::path::Path;

impl Deck {
    /// Write the deck as a complete `.pptx` package
    ///
    /// Validates the deck, assembles every package part in order, and streams
    /// them into a ZIP archive on `writer`. Returns the writer after the
    /// archive is finished.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use slidekit::kit;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let cursor = kit::deck().to_writer(Cursor::new(Vec::new()))?;
    /// let _bytes = cursor.into_inner();
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_writer<W: Write + Seek>(&self, writer: W) -> Result<W> {
        validator::validate_deck(self)?;
        let parts = package::assemble(self)?;
        let writer = opc::write_package(writer, &parts)?;
        log::info!("wrote package with {} slide(s)", self.slides.len());
        Ok(writer)
    }

    /// Write the deck to a file path, atomically
    ///
    /// The archive is written to a temporary file in the destination
    /// directory and renamed over `path` only after it is fully flushed, so
    /// an interrupted run leaves no partial output at the destination.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tmp = tempfile::NamedTempFile::new_in(dir)?;
        let tmp = self.to_writer(tmp)?;
        tmp.persist(path).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }
}
