//! Pre-write validation of deck invariants
//!
//! Serialization never clamps or repairs: a deck that violates an invariant
//! is rejected here, before any XML is produced, so a package can never be
//! written that "looks" valid but renders incorrectly.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::{Deck, Paragraph, RESERVED_SHAPE_IDS, Shape, Slide};

/// Validate a whole deck
///
/// Checks, per slide, shape-identifier uniqueness and the reserved-id floor,
/// and per shape, geometry and style ranges.
pub fn validate_deck(deck: &Deck) -> Result<()> {
    if deck.width.0 <= 0 || deck.height.0 <= 0 {
        return Err(Error::InvalidDeck(format!(
            "Slide size must be positive, got {} x {} EMU",
            deck.width, deck.height
        )));
    }

    for (index, slide) in deck.slides.iter().enumerate() {
        validate_slide(index + 1, slide)?;
    }

    Ok(())
}

fn validate_slide(number: usize, slide: &Slide) -> Result<()> {
    let mut seen_ids = HashSet::new();

    for shape in &slide.shapes {
        if shape.id <= RESERVED_SHAPE_IDS {
            return Err(Error::invalid_slide(
                number,
                &format!(
                    "shape '{}' has id {}, but ids 1..={} are reserved for the \
                     slide's root group nodes. Add shapes through Slide::push \
                     so ids are allocated automatically.",
                    shape.name, shape.id, RESERVED_SHAPE_IDS
                ),
            ));
        }

        if !seen_ids.insert(shape.id) {
            return Err(Error::invalid_slide(
                number,
                &format!(
                    "duplicate shape id {} (shape '{}'). Each shape in a slide \
                     must have a unique id; a collision silently corrupts the \
                     document model in consuming software.",
                    shape.id, shape.name
                ),
            ));
        }

        validate_shape(number, shape)?;
    }

    Ok(())
}

fn validate_shape(number: usize, shape: &Shape) -> Result<()> {
    if shape.frame.cx.0 < 0 || shape.frame.cy.0 < 0 {
        return Err(Error::invalid_slide(
            number,
            &format!(
                "shape '{}' has a negative extent ({} x {} EMU)",
                shape.name, shape.frame.cx, shape.frame.cy
            ),
        ));
    }

    if let Some(ref fill) = shape.fill {
        check_opacity(number, &shape.name, "fill", fill.opacity)?;
        check_color(number, &shape.name, "fill", &fill.color)?;
    }

    if let Some(ref stroke) = shape.stroke {
        check_opacity(number, &shape.name, "stroke", stroke.opacity)?;
        check_color(number, &shape.name, "stroke", &stroke.color)?;
        if stroke.width.0 < 0 {
            return Err(Error::invalid_slide(
                number,
                &format!(
                    "shape '{}' has a negative stroke width ({} EMU)",
                    shape.name, stroke.width
                ),
            ));
        }
    }

    if let Some(ref shadow) = shape.shadow {
        check_opacity(number, &shape.name, "shadow", shadow.opacity)?;
        check_color(number, &shape.name, "shadow", &shadow.color)?;
    }

    if let Some(ref text) = shape.text {
        for paragraph in &text.paragraphs {
            validate_paragraph(number, &shape.name, paragraph)?;
        }
    }

    Ok(())
}

fn validate_paragraph(number: usize, shape_name: &str, paragraph: &Paragraph) -> Result<()> {
    for run in &paragraph.runs {
        check_color(number, shape_name, "run", &run.color)?;
        if run.font.is_empty() {
            return Err(Error::invalid_slide(
                number,
                &format!("shape '{}' has a run with an empty font name", shape_name),
            ));
        }
        if run.size == 0 {
            return Err(Error::invalid_slide(
                number,
                &format!(
                    "shape '{}' has a run with size 0; sizes are hundredths \
                     of a point and must be positive",
                    shape_name
                ),
            ));
        }
    }
    Ok(())
}

fn check_opacity(number: usize, shape_name: &str, what: &str, opacity: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(Error::invalid_slide(
            number,
            &format!(
                "shape '{}' has {} opacity {}, outside [0, 1]. Opacities are \
                 rejected rather than clamped.",
                shape_name, what, opacity
            ),
        ));
    }
    Ok(())
}

fn check_color(number: usize, shape_name: &str, what: &str, color: &str) -> Result<()> {
    let valid = color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(Error::invalid_slide(
            number,
            &format!(
                "shape '{}' has {} color '{}'; expected exactly 6 hex digits \
                 (sRGB, no leading '#')",
                shape_name, what, color
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fill, Frame, Run, Stroke, TextBody};
    use crate::theme::{fonts, palette};
    use crate::units::Emu;

    fn deck_with_slide(slide: Slide) -> Deck {
        let mut deck = Deck::new("Test", "tests");
        deck.slides.push(slide);
        deck
    }

    fn plain_shape(name: &str) -> Shape {
        Shape::rect(name, Frame::inches(0.0, 0.0, 1.0, 1.0))
    }

    #[test]
    fn test_valid_slide_passes() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Background");
        shape.fill = Some(Fill::opaque(palette::BG));
        slide.push(shape);
        assert!(validate_deck(&deck_with_slide(slide)).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut slide = Slide::new();
        slide.push(plain_shape("A"));
        // Bypass the allocator to force a collision
        let mut rogue = plain_shape("B");
        rogue.id = slide.shapes[0].id;
        slide.shapes.push(rogue);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("duplicate shape id"));
        assert!(err.to_string().contains("Slide 1"));
    }

    #[test]
    fn test_reserved_id_rejected() {
        let mut slide = Slide::new();
        let mut rogue = plain_shape("Rogue");
        rogue.id = 2;
        slide.shapes.push(rogue);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("reserved"));
    }

    #[test]
    fn test_opacity_out_of_range_rejected() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Overlay");
        shape.fill = Some(Fill::new(palette::ACCENT, 1.5));
        slide.push(shape);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn test_negative_extent_rejected() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Bad");
        shape.frame.cx = Emu(-1);
        slide.push(shape);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("negative extent"));
    }

    #[test]
    fn test_negative_stroke_width_rejected() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Outlined");
        shape.stroke = Some(Stroke::new(palette::INK, Emu(-100), 1.0));
        slide.push(shape);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("negative stroke width"));
    }

    #[test]
    fn test_malformed_color_rejected() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Tinted");
        shape.fill = Some(Fill::opaque("#F3EFE7"));
        slide.push(shape);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("6 hex digits"));
    }

    #[test]
    fn test_run_with_empty_font_rejected() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Text");
        shape.text = Some(TextBody::new(vec![Paragraph::new(vec![Run::new(
            "hello",
            "",
            1200,
            palette::INK,
        )])]));
        slide.push(shape);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("empty font name"));
    }

    #[test]
    fn test_zero_size_run_rejected() {
        let mut slide = Slide::new();
        let mut shape = plain_shape("Text");
        shape.text = Some(TextBody::new(vec![Paragraph::new(vec![Run::new(
            "hello",
            fonts::BODY,
            0,
            palette::INK,
        )])]));
        slide.push(shape);

        let err = validate_deck(&deck_with_slide(slide)).unwrap_err();
        assert!(err.to_string().contains("size 0"));
    }
}
