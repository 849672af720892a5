//! Relationship parts (`.rels` files)
//!
//! Relationship identifiers are assigned sequentially (`rId1`, `rId2`, ...)
//! in registration order. Callers that depend on a specific id, such as the
//! presentation manifest's slide references, register entries in that order.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::{Error, Result};

const NS_RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Main document relationship type
pub const OFFICE_DOCUMENT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// Core properties relationship type
pub const CORE_PROPS_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

/// Extended properties relationship type
pub const APP_PROPS_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

/// Slide master relationship type
pub const SLIDE_MASTER_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

/// Slide layout relationship type
pub const SLIDE_LAYOUT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

/// Slide relationship type
pub const SLIDE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

/// Theme relationship type
pub const THEME_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// One relationship entry
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Identifier (`rId1`, `rId2`, ...)
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the source part
    pub target: String,
}

/// Builder for one `.rels` part
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationships part
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relationship, assigning the next sequential id
    ///
    /// Returns the assigned id.
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the part has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the part
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = Writer::new(Vec::new());

        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(|e| Error::xml_write(format!("Failed to write XML declaration: {}", e)))?;

        let mut root = BytesStart::new("Relationships");
        root.push_attribute(("xmlns", NS_RELATIONSHIPS));
        xml.write_event(Event::Start(root)).map_err(|e| {
            Error::xml_write(format!("Failed to write Relationships element: {}", e))
        })?;

        for entry in &self.entries {
            let mut elem = BytesStart::new("Relationship");
            elem.push_attribute(("Id", entry.id.as_str()));
            elem.push_attribute(("Type", entry.rel_type.as_str()));
            elem.push_attribute(("Target", entry.target.as_str()));
            xml.write_event(Event::Empty(elem))
                .map_err(|e| Error::xml_write(format!("Failed to write Relationship: {}", e)))?;
        }

        xml.write_event(Event::End(BytesEnd::new("Relationships")))
            .map_err(|e| {
                Error::xml_write(format!("Failed to close Relationships element: {}", e))
            })?;

        Ok(xml.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(SLIDE_MASTER_REL_TYPE, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(SLIDE_REL_TYPE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.add(SLIDE_REL_TYPE, "slides/slide2.xml"), "rId3");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_serialization() {
        let mut rels = Relationships::new();
        rels.add(OFFICE_DOCUMENT_REL_TYPE, "ppt/presentation.xml");
        let xml = String::from_utf8(rels.to_xml().unwrap()).unwrap();
        assert!(xml.contains(
            "<Relationship Id=\"rId1\" \
             Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" \
             Target=\"ppt/presentation.xml\"/>"
        ));
    }

    #[test]
    fn test_empty_part_is_valid() {
        let rels = Relationships::new();
        assert!(rels.is_empty());
        let xml = String::from_utf8(rels.to_xml().unwrap()).unwrap();
        assert!(xml.contains("<Relationships"));
        assert!(xml.contains("</Relationships>"));
    }
}
