//! Fixed package parts: presentation manifest, slide master, slide layout,
//! theme, and document properties
//!
//! These parts carry no per-slide content beyond the ordered slide-ID list in
//! the presentation manifest; everything else is boilerplate the consuming
//! application requires to resolve the deck.

use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write as IoWrite;

use super::{NS_DRAWINGML, NS_PRESENTATION, NS_RELATIONSHIPS, emit, write_decl, write_group_header};
use crate::error::Result;
use crate::model::{Deck, DocProps};
use crate::theme::{THEME_NAME, fonts, palette};

const NS_CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const NS_DC: &str = "http://purl.org/dc/elements/1.1/";
const NS_DCTERMS: &str = "http://purl.org/dc/terms/";
const NS_DCMITYPE: &str = "http://purl.org/dc/dcmitype/";
const NS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const NS_EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
const NS_VTYPES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";

/// Application name recorded in the extended document properties
pub(crate) const APPLICATION_NAME: &str = "slidekit";

/// Notes page size shared by 16:9 decks (portrait letter-ish, in EMU)
const NOTES_WIDTH: i64 = 6_858_000;
const NOTES_HEIGHT: i64 = 9_144_000;

/// Slide master identifiers live in a reserved range starting at 2^31
const SLIDE_MASTER_ID: u32 = 2_147_483_648;
const SLIDE_LAYOUT_ID: u32 = 2_147_483_649;

/// First slide identifier in the `sldIdLst`; slide N gets `SLIDE_ID_BASE + N`
const SLIDE_ID_BASE: u32 = 256;

/// Serialize `ppt/presentation.xml`
pub(crate) fn write_presentation_xml<W: IoWrite>(deck: &Deck, writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);
    write_decl(&mut xml)?;

    let mut root = BytesStart::new("p:presentation");
    root.push_attribute(("xmlns:a", NS_DRAWINGML));
    root.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    root.push_attribute(("xmlns:p", NS_PRESENTATION));
    emit(&mut xml, Event::Start(root), "presentation")?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("p:sldMasterIdLst")),
        "master id list",
    )?;
    let mut master_id = BytesStart::new("p:sldMasterId");
    master_id.push_attribute(("id", SLIDE_MASTER_ID.to_string().as_str()));
    master_id.push_attribute(("r:id", "rId1"));
    emit(&mut xml, Event::Empty(master_id), "master id")?;
    emit(
        &mut xml,
        Event::End(BytesEnd::new("p:sldMasterIdLst")),
        "master id list",
    )?;

    // Slide N is referenced by rId(N+1); rId1 belongs to the master. This
    // numbering must stay aligned with the presentation relationships part.
    emit(
        &mut xml,
        Event::Start(BytesStart::new("p:sldIdLst")),
        "slide id list",
    )?;
    for number in 1..=deck.slides.len() {
        let mut sld_id = BytesStart::new("p:sldId");
        sld_id.push_attribute(("id", (SLIDE_ID_BASE + number as u32).to_string().as_str()));
        sld_id.push_attribute(("r:id", format!("rId{}", number + 1).as_str()));
        emit(&mut xml, Event::Empty(sld_id), "slide id")?;
    }
    emit(
        &mut xml,
        Event::End(BytesEnd::new("p:sldIdLst")),
        "slide id list",
    )?;

    let mut size = BytesStart::new("p:sldSz");
    size.push_attribute(("cx", deck.width.to_string().as_str()));
    size.push_attribute(("cy", deck.height.to_string().as_str()));
    size.push_attribute(("type", "screen16x9"));
    emit(&mut xml, Event::Empty(size), "slide size")?;

    let mut notes = BytesStart::new("p:notesSz");
    notes.push_attribute(("cx", NOTES_WIDTH.to_string().as_str()));
    notes.push_attribute(("cy", NOTES_HEIGHT.to_string().as_str()));
    emit(&mut xml, Event::Empty(notes), "notes size")?;

    emit(
        &mut xml,
        Event::End(BytesEnd::new("p:presentation")),
        "presentation",
    )?;
    Ok(())
}

/// Serialize `ppt/slideMasters/slideMaster1.xml`
pub(crate) fn write_slide_master_xml<W: IoWrite>(writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);
    write_decl(&mut xml)?;

    let mut root = BytesStart::new("p:sldMaster");
    root.push_attribute(("xmlns:a", NS_DRAWINGML));
    root.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    root.push_attribute(("xmlns:p", NS_PRESENTATION));
    emit(&mut xml, Event::Start(root), "slide master")?;

    write_empty_shape_tree(&mut xml)?;

    let mut clr_map = BytesStart::new("p:clrMap");
    for (role, value) in [
        ("bg1", "lt1"),
        ("tx1", "dk1"),
        ("bg2", "lt2"),
        ("tx2", "dk2"),
        ("accent1", "accent1"),
        ("accent2", "accent2"),
        ("accent3", "accent3"),
        ("accent4", "accent4"),
        ("accent5", "accent5"),
        ("accent6", "accent6"),
        ("hlink", "hlink"),
        ("folHlink", "folHlink"),
    ] {
        clr_map.push_attribute((role, value));
    }
    emit(&mut xml, Event::Empty(clr_map), "color map")?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("p:sldLayoutIdLst")),
        "layout id list",
    )?;
    let mut layout_id = BytesStart::new("p:sldLayoutId");
    layout_id.push_attribute(("id", SLIDE_LAYOUT_ID.to_string().as_str()));
    layout_id.push_attribute(("r:id", "rId1"));
    emit(&mut xml, Event::Empty(layout_id), "layout id")?;
    emit(
        &mut xml,
        Event::End(BytesEnd::new("p:sldLayoutIdLst")),
        "layout id list",
    )?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("p:txStyles")),
        "text styles",
    )?;
    write_text_style(&mut xml, "p:titleStyle", 4400)?;
    write_text_style(&mut xml, "p:bodyStyle", 2000)?;
    write_other_style(&mut xml, 1600)?;
    emit(
        &mut xml,
        Event::End(BytesEnd::new("p:txStyles")),
        "text styles",
    )?;

    emit(&mut xml, Event::End(BytesEnd::new("p:sldMaster")), "slide master")?;
    Ok(())
}

/// Serialize `ppt/slideLayouts/slideLayout1.xml` (the single blank layout)
pub(crate) fn write_slide_layout_xml<W: IoWrite>(writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);
    write_decl(&mut xml)?;

    let mut root = BytesStart::new("p:sldLayout");
    root.push_attribute(("xmlns:a", NS_DRAWINGML));
    root.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    root.push_attribute(("xmlns:p", NS_PRESENTATION));
    root.push_attribute(("type", "blank"));
    root.push_attribute(("preserve", "1"));
    emit(&mut xml, Event::Start(root), "slide layout")?;

    write_empty_shape_tree_named(&mut xml, Some("Blank"))?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("p:clrMapOvr")),
        "color map override",
    )?;
    emit(
        &mut xml,
        Event::Empty(BytesStart::new("a:masterClrMapping")),
        "master color mapping",
    )?;
    emit(
        &mut xml,
        Event::End(BytesEnd::new("p:clrMapOvr")),
        "color map override",
    )?;

    emit(&mut xml, Event::End(BytesEnd::new("p:sldLayout")), "slide layout")?;
    Ok(())
}

/// Serialize `ppt/theme/theme1.xml` from the brand tokens
pub(crate) fn write_theme_xml<W: IoWrite>(writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);
    write_decl(&mut xml)?;

    let mut root = BytesStart::new("a:theme");
    root.push_attribute(("xmlns:a", NS_DRAWINGML));
    root.push_attribute(("name", THEME_NAME));
    emit(&mut xml, Event::Start(root), "theme")?;
    emit(
        &mut xml,
        Event::Start(BytesStart::new("a:themeElements")),
        "theme elements",
    )?;

    // Color scheme: map the kit palette onto the theme color roles
    let mut scheme = BytesStart::new("a:clrScheme");
    scheme.push_attribute(("name", THEME_NAME));
    emit(&mut xml, Event::Start(scheme), "color scheme")?;
    for (role, color) in [
        ("a:dk1", palette::INK),
        ("a:lt1", palette::SURFACE),
        ("a:dk2", palette::INK2),
        ("a:lt2", palette::BG),
        ("a:accent1", palette::ACCENT),
        ("a:accent2", palette::ACCENT2),
        ("a:accent3", palette::ACCENT3),
        ("a:accent4", palette::MUTED),
        ("a:accent5", palette::MUTED2),
        ("a:accent6", palette::STONE500),
        ("a:hlink", palette::ACCENT),
        ("a:folHlink", palette::ACCENT),
    ] {
        emit(&mut xml, Event::Start(BytesStart::new(role)), "color role")?;
        let mut clr = BytesStart::new("a:srgbClr");
        clr.push_attribute(("val", color));
        emit(&mut xml, Event::Empty(clr), "color role value")?;
        emit(&mut xml, Event::End(BytesEnd::new(role)), "color role")?;
    }
    emit(&mut xml, Event::End(BytesEnd::new("a:clrScheme")), "color scheme")?;

    // Font scheme: display face for headings, body face for everything else
    let mut font_scheme = BytesStart::new("a:fontScheme");
    font_scheme.push_attribute(("name", THEME_NAME));
    emit(&mut xml, Event::Start(font_scheme), "font scheme")?;
    for (slot, face) in [("a:majorFont", fonts::DISPLAY), ("a:minorFont", fonts::BODY)] {
        emit(&mut xml, Event::Start(BytesStart::new(slot)), "font slot")?;
        let mut latin = BytesStart::new("a:latin");
        latin.push_attribute(("typeface", face));
        emit(&mut xml, Event::Empty(latin), "latin font")?;
        for fallback in ["a:ea", "a:cs"] {
            let mut elem = BytesStart::new(fallback);
            elem.push_attribute(("typeface", ""));
            emit(&mut xml, Event::Empty(elem), "fallback font")?;
        }
        emit(&mut xml, Event::End(BytesEnd::new(slot)), "font slot")?;
    }
    emit(&mut xml, Event::End(BytesEnd::new("a:fontScheme")), "font scheme")?;

    // Format scheme: the schema requires exactly three entries per list
    let mut fmt_scheme = BytesStart::new("a:fmtScheme");
    fmt_scheme.push_attribute(("name", THEME_NAME));
    emit(&mut xml, Event::Start(fmt_scheme), "format scheme")?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("a:fillStyleLst")),
        "fill style list",
    )?;
    for color in [palette::SURFACE, palette::SURFACE2, palette::SURFACE3] {
        write_plain_solid_fill(&mut xml, color)?;
    }
    emit(
        &mut xml,
        Event::End(BytesEnd::new("a:fillStyleLst")),
        "fill style list",
    )?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("a:lnStyleLst")),
        "line style list",
    )?;
    for width in ["12700", "25400", "38100"] {
        let mut ln = BytesStart::new("a:ln");
        ln.push_attribute(("w", width));
        emit(&mut xml, Event::Start(ln), "theme line")?;
        emit(
            &mut xml,
            Event::Start(BytesStart::new("a:solidFill")),
            "theme line fill",
        )?;
        let mut clr = BytesStart::new("a:srgbClr");
        clr.push_attribute(("val", palette::INK));
        emit(&mut xml, Event::Start(clr), "theme line color")?;
        let mut alpha = BytesStart::new("a:alpha");
        alpha.push_attribute(("val", "12000"));
        emit(&mut xml, Event::Empty(alpha), "theme line alpha")?;
        emit(
            &mut xml,
            Event::End(BytesEnd::new("a:srgbClr")),
            "theme line color",
        )?;
        emit(
            &mut xml,
            Event::End(BytesEnd::new("a:solidFill")),
            "theme line fill",
        )?;
        emit(&mut xml, Event::End(BytesEnd::new("a:ln")), "theme line")?;
    }
    emit(
        &mut xml,
        Event::End(BytesEnd::new("a:lnStyleLst")),
        "line style list",
    )?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("a:effectStyleLst")),
        "effect style list",
    )?;
    for _ in 0..3 {
        emit(
            &mut xml,
            Event::Start(BytesStart::new("a:effectStyle")),
            "effect style",
        )?;
        emit(
            &mut xml,
            Event::Empty(BytesStart::new("a:effectLst")),
            "effect list",
        )?;
        emit(
            &mut xml,
            Event::End(BytesEnd::new("a:effectStyle")),
            "effect style",
        )?;
    }
    emit(
        &mut xml,
        Event::End(BytesEnd::new("a:effectStyleLst")),
        "effect style list",
    )?;

    emit(
        &mut xml,
        Event::Start(BytesStart::new("a:bgFillStyleLst")),
        "background fill list",
    )?;
    for color in [palette::BG, palette::SURFACE, palette::SURFACE2] {
        write_plain_solid_fill(&mut xml, color)?;
    }
    emit(
        &mut xml,
        Event::End(BytesEnd::new("a:bgFillStyleLst")),
        "background fill list",
    )?;

    emit(&mut xml, Event::End(BytesEnd::new("a:fmtScheme")), "format scheme")?;
    emit(
        &mut xml,
        Event::End(BytesEnd::new("a:themeElements")),
        "theme elements",
    )?;
    emit(&mut xml, Event::End(BytesEnd::new("a:theme")), "theme")?;
    Ok(())
}

/// Serialize `docProps/core.xml`
pub(crate) fn write_core_props_xml<W: IoWrite>(props: &DocProps, writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);
    write_decl(&mut xml)?;

    let mut root = BytesStart::new("cp:coreProperties");
    root.push_attribute(("xmlns:cp", NS_CORE_PROPS));
    root.push_attribute(("xmlns:dc", NS_DC));
    root.push_attribute(("xmlns:dcterms", NS_DCTERMS));
    root.push_attribute(("xmlns:dcmitype", NS_DCMITYPE));
    root.push_attribute(("xmlns:xsi", NS_XSI));
    emit(&mut xml, Event::Start(root), "core properties")?;

    write_text_element(&mut xml, "dc:title", &props.title)?;
    write_text_element(&mut xml, "dc:creator", &props.creator)?;

    for (name, stamp) in [
        ("dcterms:created", &props.created),
        ("dcterms:modified", &props.modified),
    ] {
        let mut elem = BytesStart::new(name);
        elem.push_attribute(("xsi:type", "dcterms:W3CDTF"));
        emit(&mut xml, Event::Start(elem), "timestamp")?;
        emit(
            &mut xml,
            Event::Text(BytesText::new(&w3cdtf(stamp))),
            "timestamp value",
        )?;
        emit(&mut xml, Event::End(BytesEnd::new(name)), "timestamp")?;
    }

    emit(
        &mut xml,
        Event::End(BytesEnd::new("cp:coreProperties")),
        "core properties",
    )?;
    Ok(())
}

/// Serialize `docProps/app.xml`
pub(crate) fn write_app_props_xml<W: IoWrite>(slide_count: usize, writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);
    write_decl(&mut xml)?;

    let mut root = BytesStart::new("Properties");
    root.push_attribute(("xmlns", NS_EXTENDED_PROPS));
    root.push_attribute(("xmlns:vt", NS_VTYPES));
    emit(&mut xml, Event::Start(root), "extended properties")?;

    write_text_element(&mut xml, "Application", APPLICATION_NAME)?;
    write_text_element(&mut xml, "Slides", &slide_count.to_string())?;

    emit(
        &mut xml,
        Event::End(BytesEnd::new("Properties")),
        "extended properties",
    )?;
    Ok(())
}

/// Format a timestamp as W3CDTF with second precision (`2024-01-31T12:00:00Z`)
fn w3cdtf(stamp: &DateTime<Utc>) -> String {
    stamp.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn write_text_element<W: IoWrite>(xml: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    emit(xml, Event::Start(BytesStart::new(name)), name)?;
    emit(xml, Event::Text(BytesText::new(text)), name)?;
    emit(xml, Event::End(BytesEnd::new(name)), name)?;
    Ok(())
}

fn write_plain_solid_fill<W: IoWrite>(xml: &mut Writer<W>, color: &str) -> Result<()> {
    emit(
        xml,
        Event::Start(BytesStart::new("a:solidFill")),
        "theme fill",
    )?;
    let mut clr = BytesStart::new("a:srgbClr");
    clr.push_attribute(("val", color));
    emit(xml, Event::Empty(clr), "theme fill color")?;
    emit(xml, Event::End(BytesEnd::new("a:solidFill")), "theme fill")?;
    Ok(())
}

/// Title/body default styles: one level-1 paragraph property with a default
/// run size
fn write_text_style<W: IoWrite>(xml: &mut Writer<W>, name: &str, size: u32) -> Result<()> {
    emit(xml, Event::Start(BytesStart::new(name)), "text style")?;
    let mut lvl = BytesStart::new("a:lvl1pPr");
    lvl.push_attribute(("algn", "l"));
    emit(xml, Event::Start(lvl), "level properties")?;
    let mut rpr = BytesStart::new("a:defRPr");
    rpr.push_attribute(("sz", size.to_string().as_str()));
    emit(xml, Event::Empty(rpr), "default run properties")?;
    emit(xml, Event::End(BytesEnd::new("a:lvl1pPr")), "level properties")?;
    emit(xml, Event::End(BytesEnd::new(name)), "text style")?;
    Ok(())
}

fn write_other_style<W: IoWrite>(xml: &mut Writer<W>, size: u32) -> Result<()> {
    emit(
        xml,
        Event::Start(BytesStart::new("p:otherStyle")),
        "other style",
    )?;
    emit(
        xml,
        Event::Start(BytesStart::new("a:defPPr")),
        "default paragraph properties",
    )?;
    let mut rpr = BytesStart::new("a:defRPr");
    rpr.push_attribute(("sz", size.to_string().as_str()));
    emit(xml, Event::Empty(rpr), "default run properties")?;
    emit(
        xml,
        Event::End(BytesEnd::new("a:defPPr")),
        "default paragraph properties",
    )?;
    emit(xml, Event::End(BytesEnd::new("p:otherStyle")), "other style")?;
    Ok(())
}

/// `p:cSld` wrapping an empty shape tree (master and layout)
fn write_empty_shape_tree<W: IoWrite>(xml: &mut Writer<W>) -> Result<()> {
    write_empty_shape_tree_named(xml, None)
}

fn write_empty_shape_tree_named<W: IoWrite>(xml: &mut Writer<W>, name: Option<&str>) -> Result<()> {
    let mut csld = BytesStart::new("p:cSld");
    if let Some(name) = name {
        csld.push_attribute(("name", name));
    }
    emit(xml, Event::Start(csld), "slide content")?;
    emit(xml, Event::Start(BytesStart::new("p:spTree")), "shape tree")?;
    write_group_header(xml)?;
    emit(xml, Event::End(BytesEnd::new("p:spTree")), "shape tree")?;
    emit(xml, Event::End(BytesEnd::new("p:cSld")), "slide content")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Deck;
    use chrono::TimeZone;

    fn render<F: FnOnce(&mut Vec<u8>)>(build: F) -> String {
        let mut buffer = Vec::new();
        build(&mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    fn deck_with_slides(count: usize) -> Deck {
        let mut deck = Deck::new("Test Deck", "tests");
        for _ in 0..count {
            deck.slides.push(crate::model::Slide::new());
        }
        deck
    }

    #[test]
    fn test_presentation_declares_size_and_slide_ids() {
        let deck = deck_with_slides(6);
        let xml = render(|b| write_presentation_xml(&deck, b).unwrap());
        assert!(xml.contains("<p:sldSz cx=\"12191695\" cy=\"6858000\" type=\"screen16x9\"/>"));
        assert!(xml.contains("<p:sldId id=\"257\" r:id=\"rId2\"/>"));
        assert!(xml.contains("<p:sldId id=\"262\" r:id=\"rId7\"/>"));
        assert!(!xml.contains("rId8"));
        assert!(xml.contains("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>"));
    }

    #[test]
    fn test_master_has_color_map_and_styles() {
        let xml = render(|b| write_slide_master_xml(b).unwrap());
        assert!(xml.contains("bg1=\"lt1\""));
        assert!(xml.contains("folHlink=\"folHlink\""));
        assert!(xml.contains("<p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/>"));
        assert!(xml.contains("<a:defRPr sz=\"4400\"/>"));
        assert!(xml.contains("<a:defRPr sz=\"1600\"/>"));
    }

    #[test]
    fn test_layout_is_blank_and_preserved() {
        let xml = render(|b| write_slide_layout_xml(b).unwrap());
        assert!(xml.contains("type=\"blank\""));
        assert!(xml.contains("preserve=\"1\""));
        assert!(xml.contains("name=\"Blank\""));
        assert!(xml.contains("<a:masterClrMapping/>"));
    }

    #[test]
    fn test_theme_carries_brand_tokens() {
        let xml = render(|b| write_theme_xml(b).unwrap());
        assert!(xml.contains(&format!("name=\"{}\"", THEME_NAME)));
        assert!(xml.contains("val=\"7B1E2B\""));
        assert!(xml.contains("typeface=\"Fraunces\""));
        assert!(xml.contains("typeface=\"Space Grotesk\""));
        // Exactly three entries in each style list
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }

    #[test]
    fn test_core_props_use_w3cdtf() {
        let mut props = DocProps::new("Kit", "slidekit");
        props.created = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        props.modified = props.created;
        let xml = render(|b| write_core_props_xml(&props, b).unwrap());
        assert!(xml.contains("<dc:title>Kit</dc:title>"));
        assert!(xml.contains(
            "<dcterms:created xsi:type=\"dcterms:W3CDTF\">2024-01-31T12:00:00Z</dcterms:created>"
        ));
    }

    #[test]
    fn test_app_props_slide_count() {
        let xml = render(|b| write_app_props_xml(6, b).unwrap());
        assert!(xml.contains("<Application>slidekit</Application>"));
        assert!(xml.contains("<Slides>6</Slides>"));
    }
}
