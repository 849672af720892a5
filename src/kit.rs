//! The Agent Wargame design-kit deck
//!
//! Six slides documenting the brand system: cover, color palette, typography
//! scale, UI components, a layout example, and data/modal patterns. Every
//! coordinate and string is a literal authored value; this module is content,
//! not machinery.

use crate::model::{
    Align, Anchor, Deck, Fill, Frame, Paragraph, Run, SLIDE_HEIGHT_IN, SLIDE_WIDTH_IN, Shadow,
    Shape, Slide, Stroke, TextBody,
};
use crate::theme::{fonts, palette};
use crate::units::Emu;

/// Title recorded in the core document properties
pub const DECK_TITLE: &str = "Power & AI Simulator Slide Kit";

/// Creator recorded in the core document properties
pub const DECK_CREATOR: &str = "slidekit";

// One-off colors that are not palette tokens
const TEXT_ON_DARK: &str = "FFFFFF";
const BUTTON_BORDER: &str = "5F121D";
const INPUT_FILL: &str = "FAF7F2";
const TRACK_FILL: &str = "EEF2F7";

/// Build the complete six-slide deck
pub fn deck() -> Deck {
    let mut deck = Deck::new(DECK_TITLE, DECK_CREATOR);
    deck.slides.push(cover());
    deck.slides.push(color_palette());
    deck.slides.push(typography());
    deck.slides.push(components());
    deck.slides.push(layout_example());
    deck.slides.push(data_and_modal());
    deck
}

fn cover() -> Slide {
    let mut slide = Slide::new();
    slide.push(background());

    // Orb glows, approximated with semi-transparent rounded squares:
    // (center x, center y, radius, color, opacity)
    let glows = [
        (11.5, 0.8, 2.3, palette::ACCENT, 0.10),
        (11.5, 0.8, 1.6, palette::ACCENT, 0.14),
        (1.2, 6.6, 2.6, palette::ACCENT2, 0.08),
        (1.2, 6.6, 1.9, palette::ACCENT2, 0.12),
    ];
    for (index, (cx, cy, r, color, opacity)) in glows.into_iter().enumerate() {
        let mut glow = Shape::round_rect(
            format!("Glow {}", index + 1),
            Frame::inches(cx - r, cy - r, r * 2.0, r * 2.0),
        );
        glow.fill = Some(Fill::new(color, opacity));
        slide.push(glow);
    }

    let mut eyebrow = Shape::round_rect("Eyebrow", Frame::inches(0.8, 0.7, 3.2, 0.45));
    eyebrow.fill = Some(Fill::opaque(palette::SURFACE));
    eyebrow.stroke = Some(hairline(0.08));
    eyebrow.text = Some(
        TextBody::new(vec![Paragraph::new(vec![label_run("AGENT WARGAME", 1100)])])
            .anchor(Anchor::Center)
            .margin(0.15),
    );
    slide.push(eyebrow);

    let mut dot = Shape::round_rect("Eyebrow Dot", Frame::inches(0.95, 0.865, 0.12, 0.12));
    dot.fill = Some(Fill::opaque(palette::ACCENT));
    slide.push(dot);

    let mut badge = Shape::round_rect("Hero Icon", Frame::inches(0.8, 1.45, 0.7, 0.7));
    badge.fill = Some(Fill::opaque(palette::STONE900));
    badge.text = Some(
        TextBody::new(vec![
            Paragraph::new(vec![
                Run::new("A", fonts::DISPLAY, 2200, TEXT_ON_DARK).bold(),
            ])
            .align(Align::Center),
        ])
        .anchor(Anchor::Center)
        .margin(0.0),
    );
    slide.push(badge);

    slide.push(text_shape(
        "Title",
        Frame::inches(0.8, 2.1, 8.5, 0.9),
        vec![Paragraph::new(vec![display_run("Agent Wargame", 5200)])],
    ));

    slide.push(text_shape(
        "Subtitle",
        Frame::inches(0.8, 3.0, 7.5, 0.7),
        vec![Paragraph::new(vec![Run::new(
            "A multi\u{2011}agent simulation of power, incentives, and emergent outcomes.",
            fonts::BODY,
            2000,
            palette::MUTED,
        )])],
    ));

    slide.push(feature_card(
        "Feature Card 1",
        Frame::inches(0.8, 4.2, 3.0, 0.9),
        "BRANCHING TIMELINE",
        "Fork critical turns and compare futures.",
    ));
    slide.push(feature_card(
        "Feature Card 2",
        Frame::inches(4.0, 4.2, 3.0, 0.9),
        "MANY AGENTS",
        "Motives, constraints, leverage evolve each turn.",
    ));

    slide
}

fn color_palette() -> Slide {
    let mut slide = Slide::new();
    slide.push(background());
    slide.push(section_title("Palette Title", "Color Palette"));

    let swatches = [
        ("Background", palette::BG),
        ("Surface", palette::SURFACE),
        ("Surface 2", palette::SURFACE2),
        ("Surface 3", palette::SURFACE3),
        ("Ink", palette::INK),
        ("Muted", palette::MUTED),
        ("Accent", palette::ACCENT),
        ("Accent 2", palette::ACCENT2),
        ("Accent 3", palette::ACCENT3),
        ("Border", palette::INK),
    ];

    // Three-column grid of swatches with labels below each chip
    let (swatch_w, swatch_h) = (2.0, 0.9);
    let (gap_x, gap_y) = (0.3, 0.3);
    for (index, (name, color)) in swatches.into_iter().enumerate() {
        let column = (index % 3) as f64;
        let row = (index / 3) as f64;
        let x = 0.8 + column * (swatch_w + gap_x);
        let y = 1.4 + row * (swatch_h + gap_y);

        let mut swatch = Shape::round_rect(
            format!("Swatch {}", name),
            Frame::inches(x, y, swatch_w, swatch_h),
        );
        swatch.fill = Some(Fill::opaque(color));
        swatch.stroke = Some(hairline(0.08));
        slide.push(swatch);

        let mut label = text_shape(
            format!("Swatch Label {}", name),
            Frame::inches(x, y + 0.95, swatch_w, 0.35),
            vec![Paragraph::new(vec![label_run(&name.to_uppercase(), 900)])],
        );
        label.text = label.text.map(|body| body.margin(0.0));
        slide.push(label);
    }

    slide.push(text_shape(
        "Palette Notes",
        Frame::inches(7.2, 1.4, 5.6, 4.6),
        vec![
            Paragraph::new(vec![display_run("Usage Notes", 2200)]),
            note_bullet("Use warm neutrals for canvas and cards"),
            note_bullet("Burgundy drives primary actions and accents"),
            note_bullet("Gold + teal are sparing secondary accents"),
            note_bullet("Borders are soft and low-contrast"),
        ],
    ));

    slide
}

fn typography() -> Slide {
    let mut slide = Slide::new();
    slide.push(background());
    slide.push(section_title("Type Title", "Typography & Scale"));

    slide.push(text_shape(
        "Display Label",
        Frame::inches(0.8, 1.3, 5.5, 0.4),
        vec![Paragraph::new(vec![label_run("DISPLAY / FRAUNCES", 900)])],
    ));

    let display_samples = [(4800, "Hero Title"), (3200, "Section Title"), (2400, "Card Title")];
    for (index, (size, text)) in display_samples.into_iter().enumerate() {
        slide.push(text_shape(
            format!("Display {}", index),
            Frame::inches(0.8, 1.8 + index as f64 * 0.9, 6.0, 0.7),
            vec![Paragraph::new(vec![display_run(text, size)])],
        ));
    }

    slide.push(text_shape(
        "Body Label",
        Frame::inches(7.2, 1.3, 5.5, 0.4),
        vec![Paragraph::new(vec![label_run("BODY / SPACE GROTESK", 900)])],
    ));

    let body_samples = [(2000, "Body 18pt"), (1600, "Body 14pt"), (1200, "Micro 12pt")];
    for (index, (size, text)) in body_samples.into_iter().enumerate() {
        slide.push(text_shape(
            format!("Body {}", index),
            Frame::inches(7.2, 1.8 + index as f64 * 0.8, 5.5, 0.6),
            vec![Paragraph::new(vec![Run::new(
                format!(
                    "{} \u{2014} The quick brown fox jumps over the lazy dog.",
                    text
                ),
                fonts::BODY,
                size,
                palette::MUTED,
            )])],
        ));
    }

    slide.push(text_shape(
        "Eyebrow Example",
        Frame::inches(0.8, 4.7, 6.0, 0.5),
        vec![Paragraph::new(vec![label_run(
            "UPPERCASE LABEL \u{00b7} 0.25em TRACKING",
            900,
        )])],
    ));

    slide.push(text_shape(
        "Mono Example",
        Frame::inches(7.2, 4.7, 5.5, 0.6),
        vec![Paragraph::new(vec![Run::new(
            "SCORE 82",
            fonts::MONO,
            2400,
            palette::EMERALD600,
        )])],
    ));

    slide
}

fn components() -> Slide {
    let mut slide = Slide::new();
    slide.push(background());
    slide.push(section_title("Components Title", "UI Components"));

    let mut primary = button(
        "Primary Button",
        Frame::inches(0.8, 1.5, 2.6, 0.6),
        "Primary",
        TEXT_ON_DARK,
        1400,
    );
    primary.fill = Some(Fill::opaque(palette::ACCENT));
    primary.stroke = Some(Stroke::new(BUTTON_BORDER, Emu::from_points(1.0), 0.6));
    slide.push(primary);

    let mut ghost = button(
        "Ghost Button",
        Frame::inches(3.6, 1.5, 2.6, 0.6),
        "Ghost",
        palette::MUTED,
        1400,
    );
    ghost.fill = Some(Fill::opaque(palette::SURFACE));
    ghost.stroke = Some(hairline(0.10));
    slide.push(ghost);

    let mut chip_active = button(
        "Chip Active",
        Frame::inches(0.8, 2.4, 2.1, 0.45),
        "ACTIVE",
        TEXT_ON_DARK,
        1100,
    );
    chip_active.fill = Some(Fill::opaque(palette::ACCENT));
    slide.push(chip_active);

    let mut chip_idle = button(
        "Chip Idle",
        Frame::inches(3.2, 2.4, 2.1, 0.45),
        "IDLE",
        palette::MUTED,
        1100,
    );
    chip_idle.fill = Some(Fill::opaque(palette::SURFACE2));
    chip_idle.stroke = Some(hairline(0.08));
    slide.push(chip_idle);

    let mut input = Shape::round_rect("Input", Frame::inches(0.8, 3.2, 4.8, 0.65));
    input.fill = Some(Fill::opaque(INPUT_FILL));
    input.stroke = Some(hairline(0.10));
    input.text = Some(
        TextBody::new(vec![Paragraph::new(vec![Run::new(
            "Input field",
            fonts::BODY,
            1200,
            palette::MUTED2,
        )])])
        .anchor(Anchor::Center)
        .margin(0.12),
    );
    slide.push(input);

    let mut textarea = Shape::round_rect("Textarea", Frame::inches(0.8, 4.0, 4.8, 1.1));
    textarea.fill = Some(Fill::opaque(INPUT_FILL));
    textarea.stroke = Some(hairline(0.10));
    textarea.text = Some(
        TextBody::new(vec![Paragraph::new(vec![Run::new(
            "Textarea with longer content\u{2026}",
            fonts::BODY,
            1200,
            palette::MUTED2,
        )])])
        .margin(0.12),
    );
    slide.push(textarea);

    let track = Frame::inches(6.2, 1.6, 4.8, 0.18);
    push_progress_bar(&mut slide, "Track", "Fill", track, 0.65);

    let mut panel = Shape::round_rect("Glass Panel", Frame::inches(6.2, 2.2, 5.8, 2.2));
    panel.fill = Some(Fill::new(palette::SURFACE, 0.98));
    panel.stroke = Some(hairline(0.08));
    panel.text = Some(
        TextBody::new(vec![
            Paragraph::new(vec![display_run("Glass Panel", 2000)]),
            Paragraph::new(vec![Run::new(
                "Use soft borders, warm gradients, and generous padding.",
                fonts::BODY,
                1300,
                palette::MUTED,
            )]),
        ])
        .margin(0.16),
    );
    slide.push(panel);

    slide
}

fn layout_example() -> Slide {
    let mut slide = Slide::new();
    slide.push(background());
    slide.push(section_title("Layout Title", "Layout Example"));

    slide.push(text_shape(
        "Layout Headline",
        Frame::inches(0.8, 1.4, 5.6, 0.9),
        vec![Paragraph::new(vec![display_run(
            "Simulating Power Dynamics",
            3200,
        )])],
    ));

    slide.push(text_shape(
        "Layout Body",
        Frame::inches(0.8, 2.3, 5.6, 1.1),
        vec![Paragraph::new(vec![Run::new(
            "Use strong hierarchy: serif headline, muted body, and small caps labels.",
            fonts::BODY,
            1500,
            palette::MUTED,
        )])],
    ));

    let mut image = Shape::round_rect("Image", Frame::inches(7.0, 1.4, 5.5, 3.1));
    image.fill = Some(Fill::opaque(palette::SURFACE));
    image.stroke = Some(hairline(0.08));
    image.shadow = Some(Shadow::soft());
    slide.push(image);

    let mut image_label = text_shape(
        "Image Label",
        Frame::inches(7.0, 2.7, 5.5, 0.5),
        vec![
            Paragraph::new(vec![Run::new(
                "16:9 Scene Image",
                fonts::BODY,
                1400,
                palette::MUTED2,
            )])
            .align(Align::Center),
        ],
    );
    image_label.text = image_label.text.map(|body| body.anchor(Anchor::Center));
    slide.push(image_label);

    slide.push(feature_card(
        "Card A",
        Frame::inches(0.8, 3.9, 2.6, 0.9),
        "BRANCHING",
        "Fork critical turns.",
    ));
    slide.push(feature_card(
        "Card B",
        Frame::inches(3.7, 3.9, 2.6, 0.9),
        "AGENTS",
        "Each with evolving motives.",
    ));

    slide
}

fn data_and_modal() -> Slide {
    let mut slide = Slide::new();
    slide.push(background());
    slide.push(section_title("Data Title", "Data & Modal Patterns"));

    let mut score = Shape::round_rect("Score Card", Frame::inches(0.8, 1.4, 4.4, 1.6));
    score.fill = Some(Fill::opaque(palette::SURFACE2));
    score.stroke = Some(hairline(0.08));
    score.text = Some(
        TextBody::new(vec![
            Paragraph::new(vec![label_run("YOUR GOAL", 900)]),
            Paragraph::new(vec![Run::new("82", fonts::MONO, 3600, palette::EMERALD600)]),
        ])
        .margin(0.14),
    );
    slide.push(score);

    let track = Frame::inches(0.8, 3.05, 4.4, 0.18);
    push_progress_bar(&mut slide, "Track2", "Fill2", track, 0.82);

    let mut pill = Shape::round_rect("Timeline Pill", Frame::inches(5.6, 1.45, 6.8, 0.55));
    pill.fill = Some(Fill::opaque(palette::STONE900));
    pill.text = Some(
        TextBody::new(vec![Paragraph::new(vec![
            Run::new(
                "T12  \u{2022}  AI Lab announces new model",
                fonts::BODY,
                1200,
                TEXT_ON_DARK,
            )
            .bold(),
        ])])
        .anchor(Anchor::Center)
        .margin(0.16),
    );
    slide.push(pill);

    // Modal mock, positioned relative to its top-left corner
    let (modal_x, modal_y) = (5.6, 2.2);
    let (modal_w, modal_h) = (6.6, 4.6);

    let mut modal = Shape::round_rect("Modal", Frame::inches(modal_x, modal_y, modal_w, modal_h));
    modal.fill = Some(Fill::new(palette::SURFACE, 0.98));
    modal.stroke = Some(hairline(0.08));
    modal.shadow = Some(Shadow::soft());
    slide.push(modal);

    let mut header = Shape::rect(
        "Modal Header",
        Frame::inches(modal_x, modal_y, modal_w, 0.7),
    );
    header.fill = Some(Fill::opaque(palette::SURFACE));
    header.text = Some(
        TextBody::new(vec![Paragraph::new(vec![display_run("Game Analysis", 2000)])])
            .anchor(Anchor::Center)
            .margin(0.16),
    );
    slide.push(header);

    let mut body = text_shape(
        "Modal Body",
        Frame::inches(modal_x, modal_y + 0.8, modal_w, 2.4),
        vec![
            Paragraph::new(vec![
                Run::new("Key Turning Points", fonts::BODY, 1200, palette::STONE500).bold(),
            ]),
            note_bullet_sized("T05: Lab secures new compute", 1200),
            note_bullet_sized("T09: Rival coalition fractures", 1200),
            note_bullet_sized("T12: Alignment crisis contained", 1200),
        ],
    );
    body.text = body.text.map(|text| text.margin(0.16));
    slide.push(body);

    let mut ghost = button(
        "Modal Ghost",
        Frame::inches(modal_x + 0.4, modal_y + 3.6, 2.6, 0.55),
        "Continue",
        palette::MUTED,
        1200,
    );
    ghost.fill = Some(Fill::opaque(palette::SURFACE));
    ghost.stroke = Some(hairline(0.10));
    slide.push(ghost);

    let mut primary = button(
        "Modal Primary",
        Frame::inches(modal_x + 3.2, modal_y + 3.6, 2.6, 0.55),
        "Play Again",
        TEXT_ON_DARK,
        1200,
    );
    primary.fill = Some(Fill::opaque(palette::ACCENT));
    primary.stroke = Some(Stroke::new(BUTTON_BORDER, Emu::from_points(1.0), 0.6));
    slide.push(primary);

    slide
}

/// Full-bleed canvas background
fn background() -> Shape {
    let mut shape = Shape::rect(
        "Background",
        Frame::inches(0.0, 0.0, SLIDE_WIDTH_IN, SLIDE_HEIGHT_IN),
    );
    shape.fill = Some(Fill::opaque(palette::BG));
    shape
}

/// Section heading shared by the non-cover slides
fn section_title(name: &str, text: &str) -> Shape {
    text_shape(
        name,
        Frame::inches(0.8, 0.5, 6.5, 0.6),
        vec![Paragraph::new(vec![display_run(text, 3600)])],
    )
}

/// Plain text box: no fill, no line, default insets
fn text_shape(name: impl Into<String>, frame: Frame, paragraphs: Vec<Paragraph>) -> Shape {
    let mut shape = Shape::rect(name, frame);
    shape.text = Some(TextBody::new(paragraphs));
    shape
}

/// Small card with an uppercase label line and a body line
fn feature_card(name: &str, frame: Frame, label: &str, body: &str) -> Shape {
    let mut card = Shape::round_rect(name, frame);
    card.fill = Some(Fill::opaque(palette::SURFACE2));
    card.stroke = Some(hairline(0.08));
    card.text = Some(
        TextBody::new(vec![
            Paragraph::new(vec![label_run(label, 900)]),
            Paragraph::new(vec![Run::new(body, fonts::BODY, 1200, palette::STONE700)]),
        ])
        .margin(0.12),
    );
    card
}

/// Rounded button or chip shell with centered bold text; fill and stroke are
/// set by the caller
fn button(name: &str, frame: Frame, text: &str, color: &str, size: u32) -> Shape {
    let mut shape = Shape::round_rect(name, frame);
    shape.text = Some(
        TextBody::new(vec![
            Paragraph::new(vec![Run::new(text, fonts::BODY, size, color).bold()])
                .align(Align::Center),
        ])
        .anchor(Anchor::Center)
        .margin(0.05),
    );
    shape
}

/// Track plus proportional fill bar
fn push_progress_bar(slide: &mut Slide, track_name: &str, fill_name: &str, frame: Frame, ratio: f64) {
    let mut track = Shape::round_rect(track_name, frame);
    track.fill = Some(Fill::opaque(TRACK_FILL));
    slide.push(track);

    let mut bar = Shape::round_rect(
        fill_name,
        Frame::new(frame.x, frame.y, frame.cx.scale(ratio), frame.cy),
    );
    bar.fill = Some(Fill::opaque(palette::ACCENT));
    slide.push(bar);
}

/// Muted bulleted note line at 14pt
fn note_bullet(text: &str) -> Paragraph {
    note_bullet_sized(text, 1400)
}

fn note_bullet_sized(text: &str, size: u32) -> Paragraph {
    Paragraph::new(vec![Run::new(text, fonts::BODY, size, palette::MUTED)]).bulleted()
}

/// Uppercase eyebrow label run
fn label_run(text: &str, size: u32) -> Run {
    Run::new(text, fonts::BODY, size, palette::STONE500).bold()
}

/// Display-face run in ink
fn display_run(text: &str, size: u32) -> Run {
    Run::new(text, fonts::DISPLAY, size, palette::INK)
}

/// Hairline ink outline at the given opacity
fn hairline(opacity: f64) -> Stroke {
    Stroke::new(palette::INK, Emu::from_points(1.0), opacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FIRST_SHAPE_ID;
    use crate::validator::validate_deck;
    use std::collections::HashSet;

    #[test]
    fn test_deck_has_six_slides() {
        let deck = deck();
        assert_eq!(deck.slides.len(), 6);
    }

    #[test]
    fn test_deck_passes_validation() {
        assert!(validate_deck(&deck()).is_ok());
    }

    #[test]
    fn test_every_slide_starts_with_background() {
        for slide in &deck().slides {
            assert_eq!(slide.shapes[0].name, "Background");
            assert_eq!(
                slide.shapes[0].fill.as_ref().unwrap().color,
                palette::BG
            );
        }
    }

    #[test]
    fn test_shape_ids_unique_and_past_reserved_range() {
        for slide in &deck().slides {
            let mut seen = HashSet::new();
            for shape in &slide.shapes {
                assert!(shape.id >= FIRST_SHAPE_ID, "shape {} too low", shape.name);
                assert!(seen.insert(shape.id), "duplicate id {}", shape.id);
            }
        }
    }

    #[test]
    fn test_cover_title_text() {
        let deck = deck();
        let title = deck.slides[0]
            .shapes
            .iter()
            .find(|s| s.name == "Title")
            .unwrap();
        let body = title.text.as_ref().unwrap();
        assert_eq!(body.paragraphs[0].runs[0].text, "Agent Wargame");
        assert_eq!(body.paragraphs[0].runs[0].size, 5200);
        assert_eq!(body.paragraphs[0].runs[0].font, fonts::DISPLAY);
    }

    #[test]
    fn test_palette_slide_has_ten_swatches() {
        let deck = deck();
        let swatches = deck.slides[1]
            .shapes
            .iter()
            .filter(|s| s.name.starts_with("Swatch ") && !s.name.starts_with("Swatch Label"))
            .count();
        assert_eq!(swatches, 10);
    }

    #[test]
    fn test_progress_fills_are_proportional() {
        let deck = deck();
        let components = &deck.slides[3];
        let track = components
            .shapes
            .iter()
            .find(|s| s.name == "Track")
            .unwrap();
        let fill = components.shapes.iter().find(|s| s.name == "Fill").unwrap();
        assert_eq!(fill.frame.cx, track.frame.cx.scale(0.65));
        assert_eq!(fill.frame.x, track.frame.x);

        let data = &deck.slides[5];
        let fill2 = data.shapes.iter().find(|s| s.name == "Fill2").unwrap();
        let track2 = data.shapes.iter().find(|s| s.name == "Track2").unwrap();
        assert_eq!(fill2.frame.cx, track2.frame.cx.scale(0.82));
    }

    #[test]
    fn test_shadowed_shapes() {
        let deck = deck();
        let image = deck.slides[4]
            .shapes
            .iter()
            .find(|s| s.name == "Image")
            .unwrap();
        assert!(image.shadow.is_some());

        let modal = deck.slides[5]
            .shapes
            .iter()
            .find(|s| s.name == "Modal")
            .unwrap();
        assert_eq!(modal.shadow.as_ref().unwrap().direction_deg, 270.0);
        assert_eq!(modal.fill.as_ref().unwrap().opacity, 0.98);
    }
}
