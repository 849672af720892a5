//! Text body, paragraph, and run serialization

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write as IoWrite;

use super::emit;
use crate::error::Result;
use crate::model::{Paragraph, Run, TextBody};
use crate::units::Emu;

/// Left margin applied to bulleted paragraphs, in inches
const BULLET_MARGIN_IN: f64 = 0.25;

/// First-line outdent applied to bulleted paragraphs, in inches
const BULLET_INDENT_IN: f64 = 0.12;

/// Bullet glyph
const BULLET_CHAR: &str = "\u{2022}";

/// Write one `<p:txBody>` element
pub(super) fn write_text_body<W: IoWrite>(writer: &mut Writer<W>, body: &TextBody) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("p:txBody")), "text body")?;

    let mut body_pr = BytesStart::new("a:bodyPr");
    body_pr.push_attribute(("wrap", "square"));
    body_pr.push_attribute(("anchor", body.anchor.attr()));
    body_pr.push_attribute(("lIns", body.insets.left.to_string().as_str()));
    body_pr.push_attribute(("rIns", body.insets.right.to_string().as_str()));
    body_pr.push_attribute(("tIns", body.insets.top.to_string().as_str()));
    body_pr.push_attribute(("bIns", body.insets.bottom.to_string().as_str()));
    emit(writer, Event::Empty(body_pr), "body properties")?;

    emit(
        writer,
        Event::Empty(BytesStart::new("a:lstStyle")),
        "list style",
    )?;

    for paragraph in &body.paragraphs {
        write_paragraph(writer, paragraph)?;
    }

    emit(writer, Event::End(BytesEnd::new("p:txBody")), "text body")?;
    Ok(())
}

/// Write one `<a:p>` element
pub(super) fn write_paragraph<W: IoWrite>(
    writer: &mut Writer<W>,
    paragraph: &Paragraph,
) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("a:p")), "paragraph")?;

    let mut ppr = BytesStart::new("a:pPr");
    ppr.push_attribute(("algn", paragraph.align.attr()));
    if paragraph.bullet {
        ppr.push_attribute((
            "marL",
            Emu::from_inches(BULLET_MARGIN_IN).to_string().as_str(),
        ));
        ppr.push_attribute((
            "indent",
            (-Emu::from_inches(BULLET_INDENT_IN).0).to_string().as_str(),
        ));
        emit(writer, Event::Start(ppr), "paragraph properties")?;
        let mut bu = BytesStart::new("a:buChar");
        bu.push_attribute(("char", BULLET_CHAR));
        emit(writer, Event::Empty(bu), "bullet")?;
        emit(
            writer,
            Event::End(BytesEnd::new("a:pPr")),
            "paragraph properties",
        )?;
    } else {
        emit(writer, Event::Empty(ppr), "paragraph properties")?;
    }

    for run in &paragraph.runs {
        write_run(writer, run)?;
    }

    let mut end_rpr = BytesStart::new("a:endParaRPr");
    end_rpr.push_attribute(("lang", "en-US"));
    emit(writer, Event::Empty(end_rpr), "paragraph end properties")?;

    emit(writer, Event::End(BytesEnd::new("a:p")), "paragraph")?;
    Ok(())
}

/// Write one `<a:r>` element
pub(super) fn write_run<W: IoWrite>(writer: &mut Writer<W>, run: &Run) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("a:r")), "run")?;

    let mut rpr = BytesStart::new("a:rPr");
    rpr.push_attribute(("sz", run.size.to_string().as_str()));
    rpr.push_attribute(("lang", "en-US"));
    if run.bold {
        rpr.push_attribute(("b", "1"));
    }
    if run.italic {
        rpr.push_attribute(("i", "1"));
    }
    emit(writer, Event::Start(rpr), "run properties")?;

    // Character color precedes the font per the rPr content model
    super::shape::write_solid_fill(writer, &run.color, 1.0)?;
    let mut latin = BytesStart::new("a:latin");
    latin.push_attribute(("typeface", run.font.as_str()));
    emit(writer, Event::Empty(latin), "run font")?;

    emit(writer, Event::End(BytesEnd::new("a:rPr")), "run properties")?;

    emit(writer, Event::Start(BytesStart::new("a:t")), "run text")?;
    emit(
        writer,
        Event::Text(BytesText::new(&run.text)),
        "run text content",
    )?;
    emit(writer, Event::End(BytesEnd::new("a:t")), "run text")?;

    emit(writer, Event::End(BytesEnd::new("a:r")), "run")?;
    Ok(())
}
