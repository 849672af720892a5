//! XML serialization for slides and fixed package parts
//!
//! All markup is produced through `quick_xml::Writer` events, so escaping of
//! text and attribute values happens at this boundary and nowhere else.

mod parts;
mod shape;
mod slide;
mod text;

pub(crate) use parts::{
    write_app_props_xml, write_core_props_xml, write_presentation_xml, write_slide_layout_xml,
    write_slide_master_xml, write_theme_xml,
};
pub(crate) use slide::write_slide_xml;

use crate::error::{Error, Result};
use crate::model::ROOT_GROUP_ID;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesStart, Event};
use std::io::Write as IoWrite;

/// DrawingML namespace (`xmlns:a`)
pub(crate) const NS_DRAWINGML: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// PresentationML namespace (`xmlns:p`)
pub(crate) const NS_PRESENTATION: &str =
    "http://schemas.openxmlformats.org/presentationml/2006/main";

/// Office relationships namespace (`xmlns:r`)
pub(crate) const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Write one event, mapping the failure into an [`Error::XmlWrite`] with
/// element context
pub(super) fn emit<W: IoWrite>(
    writer: &mut Writer<W>,
    event: Event<'_>,
    context: &str,
) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::xml_write(format!("Failed to write {}: {}", context, e)))
}

/// Write the standard XML declaration (`standalone="yes"`)
pub(super) fn write_decl<W: IoWrite>(writer: &mut Writer<W>) -> Result<()> {
    emit(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
        "XML declaration",
    )
}

/// Write the non-visual/group boilerplate that opens every shape tree
///
/// Emits the `p:nvGrpSpPr` and `p:grpSpPr` children shared by slides, the
/// slide master, and the slide layout. The group node carries the reserved
/// identifier 1 and an empty name.
pub(super) fn write_group_header<W: IoWrite>(writer: &mut Writer<W>) -> Result<()> {
    use quick_xml::events::BytesEnd;

    emit(
        writer,
        Event::Start(BytesStart::new("p:nvGrpSpPr")),
        "group properties",
    )?;
    let mut cnvpr = BytesStart::new("p:cNvPr");
    cnvpr.push_attribute(("id", ROOT_GROUP_ID.to_string().as_str()));
    cnvpr.push_attribute(("name", ""));
    emit(writer, Event::Empty(cnvpr), "group cNvPr")?;
    emit(
        writer,
        Event::Empty(BytesStart::new("p:cNvGrpSpPr")),
        "group cNvGrpSpPr",
    )?;
    emit(writer, Event::Empty(BytesStart::new("p:nvPr")), "group nvPr")?;
    emit(
        writer,
        Event::End(BytesEnd::new("p:nvGrpSpPr")),
        "group properties",
    )?;

    emit(
        writer,
        Event::Start(BytesStart::new("p:grpSpPr")),
        "group shape properties",
    )?;
    emit(writer, Event::Start(BytesStart::new("a:xfrm")), "group xfrm")?;
    for (name, x_attr, y_attr) in [
        ("a:off", "x", "y"),
        ("a:ext", "cx", "cy"),
        ("a:chOff", "x", "y"),
        ("a:chExt", "cx", "cy"),
    ] {
        let mut elem = BytesStart::new(name);
        elem.push_attribute((x_attr, "0"));
        elem.push_attribute((y_attr, "0"));
        emit(writer, Event::Empty(elem), "group transform")?;
    }
    emit(writer, Event::End(BytesEnd::new("a:xfrm")), "group xfrm")?;
    emit(
        writer,
        Event::End(BytesEnd::new("p:grpSpPr")),
        "group shape properties",
    )?;

    Ok(())
}
