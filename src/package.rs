//! Package assembly: one deck in, one ordered part list out
//!
//! The whole required-part rule set lives in this module. The slide loop is
//! the only place slide-indexed names, relationship ids, and content-type
//! overrides are generated, so the 1-based index correspondence between them
//! cannot drift.

use crate::error::Result;
use crate::model::Deck;
use crate::opc::{
    APP_PROPS_CONTENT_TYPE, APP_PROPS_PATH, APP_PROPS_REL_TYPE, CONTENT_TYPES_PATH, ContentTypes,
    CORE_PROPS_CONTENT_TYPE, CORE_PROPS_PATH, CORE_PROPS_REL_TYPE, OFFICE_DOCUMENT_REL_TYPE, Part,
    PRESENTATION_CONTENT_TYPE, PRESENTATION_PATH, PRESENTATION_RELS_PATH, Relationships,
    ROOT_RELS_PATH, SLIDE_CONTENT_TYPE, SLIDE_LAYOUT_CONTENT_TYPE, SLIDE_LAYOUT_PATH,
    SLIDE_LAYOUT_RELS_PATH, SLIDE_LAYOUT_REL_TYPE, SLIDE_MASTER_CONTENT_TYPE, SLIDE_MASTER_PATH,
    SLIDE_MASTER_RELS_PATH, SLIDE_MASTER_REL_TYPE, SLIDE_REL_TYPE, THEME_CONTENT_TYPE, THEME_PATH,
    THEME_REL_TYPE, slide_path, slide_rels_path,
};
use crate::writer;

/// Layout target as seen from a slide or master part
const LAYOUT_TARGET_FROM_SIBLING: &str = "../slideLayouts/slideLayout1.xml";

/// Assemble the complete, ordered part list for a deck
pub(crate) fn assemble(deck: &Deck) -> Result<Vec<Part>> {
    let slide_count = deck.slides.len();

    let mut content_types = ContentTypes::new();
    content_types.add_override(PRESENTATION_PATH, PRESENTATION_CONTENT_TYPE);
    content_types.add_override(SLIDE_MASTER_PATH, SLIDE_MASTER_CONTENT_TYPE);
    content_types.add_override(SLIDE_LAYOUT_PATH, SLIDE_LAYOUT_CONTENT_TYPE);
    content_types.add_override(THEME_PATH, THEME_CONTENT_TYPE);
    content_types.add_override(CORE_PROPS_PATH, CORE_PROPS_CONTENT_TYPE);
    content_types.add_override(APP_PROPS_PATH, APP_PROPS_CONTENT_TYPE);
    for number in 1..=slide_count {
        content_types.add_override(&slide_path(number), SLIDE_CONTENT_TYPE);
    }

    let mut root_rels = Relationships::new();
    root_rels.add(OFFICE_DOCUMENT_REL_TYPE, PRESENTATION_PATH);
    root_rels.add(CORE_PROPS_REL_TYPE, CORE_PROPS_PATH);
    root_rels.add(APP_PROPS_REL_TYPE, APP_PROPS_PATH);

    // rId1 is the master; slide N takes rId(N+1), matching the sldIdLst
    // references written by the presentation part
    let mut presentation_rels = Relationships::new();
    presentation_rels.add(SLIDE_MASTER_REL_TYPE, "slideMasters/slideMaster1.xml");
    for number in 1..=slide_count {
        presentation_rels.add(SLIDE_REL_TYPE, &format!("slides/slide{}.xml", number));
    }

    let mut master_rels = Relationships::new();
    master_rels.add(SLIDE_LAYOUT_REL_TYPE, LAYOUT_TARGET_FROM_SIBLING);
    master_rels.add(THEME_REL_TYPE, "../theme/theme1.xml");

    let mut layout_rels = Relationships::new();
    layout_rels.add(SLIDE_MASTER_REL_TYPE, "../slideMasters/slideMaster1.xml");

    let mut parts = Vec::with_capacity(11 + 2 * slide_count);
    parts.push(Part::new(CONTENT_TYPES_PATH, content_types.to_xml()?));
    parts.push(Part::new(ROOT_RELS_PATH, root_rels.to_xml()?));
    parts.push(Part::new(
        CORE_PROPS_PATH,
        render(|b| writer::write_core_props_xml(&deck.props, b))?,
    ));
    parts.push(Part::new(
        APP_PROPS_PATH,
        render(|b| writer::write_app_props_xml(slide_count, b))?,
    ));
    parts.push(Part::new(
        PRESENTATION_PATH,
        render(|b| writer::write_presentation_xml(deck, b))?,
    ));
    parts.push(Part::new(PRESENTATION_RELS_PATH, presentation_rels.to_xml()?));
    parts.push(Part::new(
        SLIDE_MASTER_PATH,
        render(|b| writer::write_slide_master_xml(b))?,
    ));
    parts.push(Part::new(SLIDE_MASTER_RELS_PATH, master_rels.to_xml()?));
    parts.push(Part::new(
        SLIDE_LAYOUT_PATH,
        render(|b| writer::write_slide_layout_xml(b))?,
    ));
    parts.push(Part::new(SLIDE_LAYOUT_RELS_PATH, layout_rels.to_xml()?));
    parts.push(Part::new(THEME_PATH, render(|b| writer::write_theme_xml(b))?));

    for (index, slide) in deck.slides.iter().enumerate() {
        let number = index + 1;
        parts.push(Part::new(
            slide_path(number),
            render(|b| writer::write_slide_xml(slide, b))?,
        ));

        let mut slide_rels = Relationships::new();
        slide_rels.add(SLIDE_LAYOUT_REL_TYPE, LAYOUT_TARGET_FROM_SIBLING);
        parts.push(Part::new(slide_rels_path(number), slide_rels.to_xml()?));
    }

    log::debug!(
        "assembled {} parts for {} slide(s)",
        parts.len(),
        slide_count
    );

    Ok(parts)
}

fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(write: F) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Deck, Slide};

    fn deck_with_slides(count: usize) -> Deck {
        let mut deck = Deck::new("Test Deck", "tests");
        for _ in 0..count {
            deck.slides.push(Slide::new());
        }
        deck
    }

    #[test]
    fn test_part_count_and_leading_parts() {
        let parts = assemble(&deck_with_slides(6)).unwrap();
        assert_eq!(parts.len(), 11 + 12);
        assert_eq!(parts[0].path, CONTENT_TYPES_PATH);
        assert_eq!(parts[1].path, ROOT_RELS_PATH);
    }

    #[test]
    fn test_slide_parts_are_sequential_and_paired() {
        let parts = assemble(&deck_with_slides(3)).unwrap();
        let paths: Vec<&str> = parts.iter().map(|p| p.path.as_str()).collect();

        for number in 1..=3 {
            let slide_at = paths
                .iter()
                .position(|p| *p == slide_path(number))
                .unwrap();
            assert_eq!(paths[slide_at + 1], slide_rels_path(number));
        }
        assert!(!paths.iter().any(|p| p.contains("slide4")));
    }

    #[test]
    fn test_consistency_counts_align() {
        let slide_count = 4;
        let parts = assemble(&deck_with_slides(slide_count)).unwrap();

        let content_types = String::from_utf8(parts[0].content.clone()).unwrap();
        let slide_overrides = content_types
            .matches("presentationml.slide+xml")
            .count();

        let presentation = parts
            .iter()
            .find(|p| p.path == PRESENTATION_PATH)
            .unwrap();
        let presentation_xml = String::from_utf8(presentation.content.clone()).unwrap();
        let slide_ids = presentation_xml.matches("<p:sldId ").count();

        let presentation_rels = parts
            .iter()
            .find(|p| p.path == PRESENTATION_RELS_PATH)
            .unwrap();
        let rels_xml = String::from_utf8(presentation_rels.content.clone()).unwrap();
        let slide_rels = rels_xml.matches("relationships/slide\"").count();

        let slide_parts = parts
            .iter()
            .filter(|p| p.path.starts_with("ppt/slides/slide") && !p.path.contains("_rels"))
            .count();

        assert_eq!(slide_overrides, slide_count);
        assert_eq!(slide_ids, slide_count);
        assert_eq!(slide_rels, slide_count);
        assert_eq!(slide_parts, slide_count);
    }

    #[test]
    fn test_empty_deck_still_produces_fixed_parts() {
        let parts = assemble(&deck_with_slides(0)).unwrap();
        assert_eq!(parts.len(), 11);
        assert!(parts.iter().any(|p| p.path == THEME_PATH));
    }
}
