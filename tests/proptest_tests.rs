//! Property-based tests for unit conversion and text escaping
//!
//! These verify the conversion invariants across a range of inputs rather
//! than pinned fixtures, and that arbitrary printable text survives the full
//! write-then-parse pipeline.

use proptest::prelude::*;
use quick_xml::Reader;
use quick_xml::events::Event;
use slidekit::theme::{fonts, palette};
use slidekit::units::{Emu, opacity_to_alpha};
use slidekit::{Deck, Frame, Paragraph, Run, Shape, Slide, TextBody};
use std::io::{Cursor, Read};

proptest! {
    /// Conversion is monotonic: a larger physical length never yields a
    /// smaller EMU value
    #[test]
    fn emu_conversion_monotonic(a in 0.0f64..100.0, b in 0.0f64..100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Emu::from_inches(lo) <= Emu::from_inches(hi));
    }

    /// Conversion is additive within one unit of rounding error
    #[test]
    fn emu_conversion_near_additive(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let separate = Emu::from_inches(a).0 + Emu::from_inches(b).0;
        let combined = Emu::from_inches(a + b).0;
        prop_assert!((separate - combined).abs() <= 1);
    }

    /// Alpha values stay in the format's [0, 100000] range for valid opacity
    #[test]
    fn alpha_in_range(opacity in 0.0f64..=1.0) {
        let alpha = opacity_to_alpha(opacity);
        prop_assert!((0i64..=100_000).contains(&alpha));
    }

    /// Scaling never overshoots the original length for ratios in [0, 1]
    #[test]
    fn scale_bounded(length in 0i64..10_000_000, ratio in 0.0f64..=1.0) {
        let scaled = Emu(length).scale(ratio);
        prop_assert!(scaled.0 <= length);
        prop_assert!(scaled.0 >= 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Arbitrary printable text placed in a run is reproduced exactly when
    /// the written slide part is parsed back
    #[test]
    fn run_text_round_trips(text in "[ -~]{1,64}") {
        let mut deck = Deck::new("Roundtrip", "proptest");
        let mut slide = Slide::new();
        let mut shape = Shape::rect("Sample", Frame::inches(1.0, 1.0, 5.0, 1.0));
        shape.text = Some(TextBody::new(vec![Paragraph::new(vec![Run::new(
            text.clone(),
            fonts::BODY,
            1200,
            palette::INK,
        )])]));
        slide.push(shape);
        deck.slides.push(slide);

        let cursor = deck.to_writer(Cursor::new(Vec::new())).unwrap();
        let mut archive = zip::ZipArchive::new(cursor).unwrap();
        let mut xml = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();

        prop_assert_eq!(first_run_text(&xml), text);
    }
}

fn first_run_text(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut in_text = false;
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"a:t" => in_text = true,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"a:t" => return current,
            Ok(Event::Text(ref t)) if in_text => current.push_str(&t.xml_content().unwrap()),
            Ok(Event::GeneralRef(ref e)) if in_text => {
                current.push(resolve_entity(e).expect("unexpected entity reference"));
            }
            Ok(Event::Eof) => panic!("no a:t element found"),
            Err(e) => panic!("XML parse error: {}", e),
            _ => {}
        }
        buf.clear();
    }
}

fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        _ => None,
    }
}
