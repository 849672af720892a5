//! OPC (Open Packaging Conventions) layer
//!
//! A `.pptx` file is a ZIP archive following the OPC standard: XML parts at
//! contractual paths, a content-type manifest, and relationship files wiring
//! the parts together.

mod content_types;
mod relationships;
mod writer;

pub use content_types::ContentTypes;
pub use relationships::{Relationship, Relationships};
pub use writer::write_package;

pub use content_types::{
    APP_PROPS_CONTENT_TYPE, CORE_PROPS_CONTENT_TYPE, PRESENTATION_CONTENT_TYPE,
    RELS_CONTENT_TYPE, SLIDE_CONTENT_TYPE, SLIDE_LAYOUT_CONTENT_TYPE, SLIDE_MASTER_CONTENT_TYPE,
    THEME_CONTENT_TYPE, XML_CONTENT_TYPE,
};
pub use relationships::{
    APP_PROPS_REL_TYPE, CORE_PROPS_REL_TYPE, OFFICE_DOCUMENT_REL_TYPE, SLIDE_LAYOUT_REL_TYPE,
    SLIDE_MASTER_REL_TYPE, SLIDE_REL_TYPE, THEME_REL_TYPE,
};

/// Content types manifest path
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";

/// Package-root relationships path
pub const ROOT_RELS_PATH: &str = "_rels/.rels";

/// Core document properties path
pub const CORE_PROPS_PATH: &str = "docProps/core.xml";

/// Extended document properties path
pub const APP_PROPS_PATH: &str = "docProps/app.xml";

/// Presentation manifest path
pub const PRESENTATION_PATH: &str = "ppt/presentation.xml";

/// Presentation relationships path
pub const PRESENTATION_RELS_PATH: &str = "ppt/_rels/presentation.xml.rels";

/// Slide master path
pub const SLIDE_MASTER_PATH: &str = "ppt/slideMasters/slideMaster1.xml";

/// Slide master relationships path
pub const SLIDE_MASTER_RELS_PATH: &str = "ppt/slideMasters/_rels/slideMaster1.xml.rels";

/// Slide layout path
pub const SLIDE_LAYOUT_PATH: &str = "ppt/slideLayouts/slideLayout1.xml";

/// Slide layout relationships path
pub const SLIDE_LAYOUT_RELS_PATH: &str = "ppt/slideLayouts/_rels/slideLayout1.xml.rels";

/// Theme path
pub const THEME_PATH: &str = "ppt/theme/theme1.xml";

/// Path of slide part `number` (1-based, matching the presentation manifest)
pub fn slide_path(number: usize) -> String {
    format!("ppt/slides/slide{}.xml", number)
}

/// Path of the relationships part for slide `number` (1-based)
pub fn slide_rels_path(number: usize) -> String {
    format!("ppt/slides/_rels/slide{}.xml.rels", number)
}

/// One package part: an archive path and its serialized content
#[derive(Debug, Clone)]
pub struct Part {
    /// Path within the archive (no leading slash)
    pub path: String,
    /// Serialized bytes
    pub content: Vec<u8>,
}

impl Part {
    /// Create a part
    pub fn new(path: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_constants() {
        assert_eq!(CONTENT_TYPES_PATH, "[Content_Types].xml");
        assert_eq!(ROOT_RELS_PATH, "_rels/.rels");
        assert_eq!(PRESENTATION_PATH, "ppt/presentation.xml");
    }

    #[test]
    fn test_slide_paths_are_one_based() {
        assert_eq!(slide_path(1), "ppt/slides/slide1.xml");
        assert_eq!(slide_path(6), "ppt/slides/slide6.xml");
        assert_eq!(slide_rels_path(2), "ppt/slides/_rels/slide2.xml.rels");
    }
}
