//! Shape, fill, line, and effect serialization

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::io::Write as IoWrite;

use super::{emit, text};
use crate::error::Result;
use crate::model::{Shadow, Shape, Stroke};
use crate::units::{degrees_to_angle_units, opacity_to_alpha};

/// Opacities at or above this threshold are emitted without an alpha child,
/// matching how fully opaque fills are conventionally written
const OPAQUE_THRESHOLD: f64 = 0.999;

/// Write one `<p:sp>` element
pub(super) fn write_shape<W: IoWrite>(writer: &mut Writer<W>, shape: &Shape) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("p:sp")), "shape")?;

    // Non-visual properties: id and display name
    emit(
        writer,
        Event::Start(BytesStart::new("p:nvSpPr")),
        "shape non-visual properties",
    )?;
    let mut cnvpr = BytesStart::new("p:cNvPr");
    cnvpr.push_attribute(("id", shape.id.to_string().as_str()));
    cnvpr.push_attribute(("name", shape.name.as_str()));
    emit(writer, Event::Empty(cnvpr), "shape cNvPr")?;
    emit(
        writer,
        Event::Empty(BytesStart::new("p:cNvSpPr")),
        "shape cNvSpPr",
    )?;
    emit(writer, Event::Empty(BytesStart::new("p:nvPr")), "shape nvPr")?;
    emit(
        writer,
        Event::End(BytesEnd::new("p:nvSpPr")),
        "shape non-visual properties",
    )?;

    // Visual properties: transform, geometry, fill, line, effects
    emit(
        writer,
        Event::Start(BytesStart::new("p:spPr")),
        "shape properties",
    )?;

    emit(writer, Event::Start(BytesStart::new("a:xfrm")), "shape xfrm")?;
    let mut off = BytesStart::new("a:off");
    off.push_attribute(("x", shape.frame.x.to_string().as_str()));
    off.push_attribute(("y", shape.frame.y.to_string().as_str()));
    emit(writer, Event::Empty(off), "shape offset")?;
    let mut ext = BytesStart::new("a:ext");
    ext.push_attribute(("cx", shape.frame.cx.to_string().as_str()));
    ext.push_attribute(("cy", shape.frame.cy.to_string().as_str()));
    emit(writer, Event::Empty(ext), "shape extent")?;
    emit(writer, Event::End(BytesEnd::new("a:xfrm")), "shape xfrm")?;

    let mut geom = BytesStart::new("a:prstGeom");
    geom.push_attribute(("prst", shape.geometry.preset()));
    emit(writer, Event::Start(geom), "shape geometry")?;
    emit(
        writer,
        Event::Empty(BytesStart::new("a:avLst")),
        "shape adjust values",
    )?;
    emit(
        writer,
        Event::End(BytesEnd::new("a:prstGeom")),
        "shape geometry",
    )?;

    match shape.fill {
        Some(ref fill) => write_solid_fill(writer, &fill.color, fill.opacity)?,
        None => emit(writer, Event::Empty(BytesStart::new("a:noFill")), "no fill")?,
    }

    write_line(writer, shape.stroke.as_ref())?;

    if let Some(ref shadow) = shape.shadow {
        write_shadow(writer, shadow)?;
    }

    emit(
        writer,
        Event::End(BytesEnd::new("p:spPr")),
        "shape properties",
    )?;

    if let Some(ref body) = shape.text {
        text::write_text_body(writer, body)?;
    }

    emit(writer, Event::End(BytesEnd::new("p:sp")), "shape")?;

    Ok(())
}

/// Write `<a:solidFill>` with the opacity normalization rule: near-opaque
/// drops the alpha child entirely
pub(super) fn write_solid_fill<W: IoWrite>(
    writer: &mut Writer<W>,
    color: &str,
    opacity: f64,
) -> Result<()> {
    emit(
        writer,
        Event::Start(BytesStart::new("a:solidFill")),
        "solid fill",
    )?;
    write_srgb_color(writer, color, opacity)?;
    emit(
        writer,
        Event::End(BytesEnd::new("a:solidFill")),
        "solid fill",
    )?;
    Ok(())
}

/// Write `<a:srgbClr>`, with an `<a:alpha>` child when translucent
fn write_srgb_color<W: IoWrite>(writer: &mut Writer<W>, color: &str, opacity: f64) -> Result<()> {
    let mut clr = BytesStart::new("a:srgbClr");
    clr.push_attribute(("val", color));

    if opacity >= OPAQUE_THRESHOLD {
        emit(writer, Event::Empty(clr), "color")?;
    } else {
        emit(writer, Event::Start(clr), "color")?;
        let mut alpha = BytesStart::new("a:alpha");
        alpha.push_attribute(("val", opacity_to_alpha(opacity).to_string().as_str()));
        emit(writer, Event::Empty(alpha), "color alpha")?;
        emit(writer, Event::End(BytesEnd::new("a:srgbClr")), "color")?;
    }
    Ok(())
}

/// Write `<a:ln>`; an absent stroke emits the explicit no-line marker
pub(super) fn write_line<W: IoWrite>(
    writer: &mut Writer<W>,
    stroke: Option<&Stroke>,
) -> Result<()> {
    match stroke {
        None => {
            emit(writer, Event::Start(BytesStart::new("a:ln")), "line")?;
            emit(
                writer,
                Event::Empty(BytesStart::new("a:noFill")),
                "line no fill",
            )?;
            emit(writer, Event::End(BytesEnd::new("a:ln")), "line")?;
        }
        Some(stroke) => {
            let mut ln = BytesStart::new("a:ln");
            ln.push_attribute(("w", stroke.width.to_string().as_str()));
            emit(writer, Event::Start(ln), "line")?;
            write_solid_fill(writer, &stroke.color, stroke.opacity)?;
            emit(writer, Event::End(BytesEnd::new("a:ln")), "line")?;
        }
    }
    Ok(())
}

/// Write `<a:effectLst>` with one outer shadow
pub(super) fn write_shadow<W: IoWrite>(writer: &mut Writer<W>, shadow: &Shadow) -> Result<()> {
    emit(
        writer,
        Event::Start(BytesStart::new("a:effectLst")),
        "effect list",
    )?;

    let mut shdw = BytesStart::new("a:outerShdw");
    shdw.push_attribute(("dist", shadow.distance.to_string().as_str()));
    shdw.push_attribute((
        "dir",
        degrees_to_angle_units(shadow.direction_deg).to_string().as_str(),
    ));
    shdw.push_attribute(("blurRad", shadow.blur.to_string().as_str()));
    shdw.push_attribute(("algn", "ctr"));
    shdw.push_attribute(("rotWithShape", "0"));
    emit(writer, Event::Start(shdw), "outer shadow")?;
    write_srgb_color(writer, &shadow.color, shadow.opacity)?;
    emit(
        writer,
        Event::End(BytesEnd::new("a:outerShdw")),
        "outer shadow",
    )?;

    emit(
        writer,
        Event::End(BytesEnd::new("a:effectLst")),
        "effect list",
    )?;
    Ok(())
}
