//! Slide document serialization
//!
//! Each slide becomes one `ppt/slides/slideN.xml` part: the fixed root and
//! group boilerplate wrapping the slide's shapes in z-order.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::Write as IoWrite;

use super::{
    NS_DRAWINGML, NS_PRESENTATION, NS_RELATIONSHIPS, emit, shape, write_decl, write_group_header,
};
use crate::error::Result;
use crate::model::Slide;

/// Serialize one slide to a `<p:sld>` document
pub(crate) fn write_slide_xml<W: IoWrite>(slide: &Slide, writer: W) -> Result<()> {
    let mut xml = Writer::new(writer);

    write_decl(&mut xml)?;

    let mut sld = BytesStart::new("p:sld");
    sld.push_attribute(("xmlns:a", NS_DRAWINGML));
    sld.push_attribute(("xmlns:r", NS_RELATIONSHIPS));
    sld.push_attribute(("xmlns:p", NS_PRESENTATION));
    emit(&mut xml, Event::Start(sld), "slide")?;

    emit(&mut xml, Event::Start(BytesStart::new("p:cSld")), "slide content")?;
    emit(&mut xml, Event::Start(BytesStart::new("p:spTree")), "shape tree")?;

    write_group_header(&mut xml)?;

    for sp in &slide.shapes {
        shape::write_shape(&mut xml, sp)?;
    }

    emit(&mut xml, Event::End(BytesEnd::new("p:spTree")), "shape tree")?;
    emit(&mut xml, Event::End(BytesEnd::new("p:cSld")), "slide content")?;

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

    emit(&mut xml, Event::End(BytesEnd::new("p:sld")), "slide")?;

    Ok(())
}
