//! Content-type manifest (`[Content_Types].xml`)

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, Event};

use crate::error::{Error, Result};

const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Relationship parts content type
pub const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Generic XML content type
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// Presentation manifest content type
pub const PRESENTATION_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

/// Slide master content type
pub const SLIDE_MASTER_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";

/// Slide layout content type
pub const SLIDE_LAYOUT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";

/// Theme content type
pub const THEME_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

/// Core document properties content type
pub const CORE_PROPS_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-package.core-properties+xml";

/// Extended document properties content type
pub const APP_PROPS_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.extended-properties+xml";

/// Slide content type
pub const SLIDE_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";

/// Builder for the content-type manifest
///
/// Starts with the two extension defaults every package in this crate needs
/// (`rels`, `xml`); overrides are appended in registration order.
#[derive(Debug, Clone)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Create a manifest with the standard `rels` and `xml` defaults
    pub fn new() -> Self {
        Self {
            defaults: vec![
                ("rels".to_string(), RELS_CONTENT_TYPE.to_string()),
                ("xml".to_string(), XML_CONTENT_TYPE.to_string()),
            ],
            overrides: Vec::new(),
        }
    }

    /// Register an override for one part
    ///
    /// `part_path` is the archive path without a leading slash; the manifest
    /// entry gets the slash prepended as OPC requires.
    pub fn add_override(&mut self, part_path: &str, content_type: &str) {
        self.overrides
            .push((format!("/{}", part_path), content_type.to_string()));
    }

    /// Number of registered overrides
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Serialize the manifest
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        let mut xml = Writer::new(Vec::new());

        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(|e| Error::xml_write(format!("Failed to write XML declaration: {}", e)))?;

        let mut root = BytesStart::new("Types");
        root.push_attribute(("xmlns", NS_CONTENT_TYPES));
        xml.write_event(Event::Start(root))
            .map_err(|e| Error::xml_write(format!("Failed to write Types element: {}", e)))?;

        for (extension, content_type) in &self.defaults {
            let mut elem = BytesStart::new("Default");
            elem.push_attribute(("Extension", extension.as_str()));
            elem.push_attribute(("ContentType", content_type.as_str()));
            xml.write_event(Event::Empty(elem))
                .map_err(|e| Error::xml_write(format!("Failed to write Default: {}", e)))?;
        }

        for (part_name, content_type) in &self.overrides {
            let mut elem = BytesStart::new("Override");
            elem.push_attribute(("PartName", part_name.as_str()));
            elem.push_attribute(("ContentType", content_type.as_str()));
            xml.write_event(Event::Empty(elem))
                .map_err(|e| Error::xml_write(format!("Failed to write Override: {}", e)))?;
        }

        xml.write_event(Event::End(quick_xml::events::BytesEnd::new("Types")))
            .map_err(|e| Error::xml_write(format!("Failed to close Types element: {}", e)))?;

        Ok(xml.into_inner())
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_always_present() {
        let xml = String::from_utf8(ContentTypes::new().to_xml().unwrap()).unwrap();
        assert!(xml.contains(
            "<Default Extension=\"rels\" \
             ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>"
        ));
        assert!(xml.contains("<Default Extension=\"xml\" ContentType=\"application/xml\"/>"));
    }

    #[test]
    fn test_override_gets_leading_slash() {
        let mut types = ContentTypes::new();
        types.add_override("ppt/slides/slide1.xml", SLIDE_CONTENT_TYPE);
        let xml = String::from_utf8(types.to_xml().unwrap()).unwrap();
        assert!(xml.contains("PartName=\"/ppt/slides/slide1.xml\""));
        assert_eq!(types.override_count(), 1);
    }

    #[test]
    fn test_overrides_preserve_order() {
        let mut types = ContentTypes::new();
        types.add_override("ppt/presentation.xml", PRESENTATION_CONTENT_TYPE);
        types.add_override("ppt/slides/slide1.xml", SLIDE_CONTENT_TYPE);
        let xml = String::from_utf8(types.to_xml().unwrap()).unwrap();
        let first = xml.find("presentation.main+xml").unwrap();
        let second = xml.find("presentationml.slide+xml").unwrap();
        assert!(first < second);
    }
}
