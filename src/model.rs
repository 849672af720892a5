//! Data structures representing a slide deck
//!
//! The model is descriptive only: a [`Deck`] is built once, serialized once,
//! and discarded. Nothing here touches XML; serialization lives in the
//! writer module so escaping and markup concerns stay at one boundary.

use chrono::{DateTime, Utc};

use crate::units::Emu;

/// Shape identifiers 1 and 2 are reserved for the slide's root group nodes
pub const RESERVED_SHAPE_IDS: u32 = 2;

/// First identifier handed out by a slide's [`IdAllocator`]
pub const FIRST_SHAPE_ID: u32 = RESERVED_SHAPE_IDS + 1;

/// Identifier of the implicit group node in every slide's shape tree
pub const ROOT_GROUP_ID: u32 = 1;

/// Default slide width of the 16:9 deck, in inches
pub const SLIDE_WIDTH_IN: f64 = 13.333;

/// Default slide height of the 16:9 deck, in inches
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Default text inset on all four sides of a text box, in inches
pub const DEFAULT_TEXT_MARGIN_IN: f64 = 0.08;

/// A complete presentation: document properties, slide geometry, slides
#[derive(Debug, Clone)]
pub struct Deck {
    /// Document properties written to the docProps parts
    pub props: DocProps,
    /// Slide width
    pub width: Emu,
    /// Slide height
    pub height: Emu,
    /// Slides in presentation order
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty 16:9 deck with the given title and creator
    pub fn new(title: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            props: DocProps::new(title, creator),
            width: Emu::from_inches(SLIDE_WIDTH_IN),
            height: Emu::from_inches(SLIDE_HEIGHT_IN),
            slides: Vec::new(),
        }
    }
}

/// Document metadata for `docProps/core.xml` and `docProps/app.xml`
#[derive(Debug, Clone)]
pub struct DocProps {
    /// Document title (`dc:title`)
    pub title: String,
    /// Document creator (`dc:creator`)
    pub creator: String,
    /// Creation timestamp, serialized as W3CDTF
    pub created: DateTime<Utc>,
    /// Last-modified timestamp, serialized as W3CDTF
    pub modified: DateTime<Utc>,
}

impl DocProps {
    /// Create properties stamped with the current UTC time
    pub fn new(title: impl Into<String>, creator: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            creator: creator.into(),
            created: now,
            modified: now,
        }
    }
}

/// One slide: an ordered sequence of shapes
///
/// Shape identifiers are assigned by [`Slide::push`] from a slide-scoped
/// allocator, so two shapes added through `push` can never collide. The
/// validator still re-checks uniqueness before any XML is produced.
#[derive(Debug, Clone, Default)]
pub struct Slide {
    /// Shapes in z-order (first is drawn bottom-most)
    pub shapes: Vec<Shape>,
    ids: IdAllocator,
}

impl Slide {
    /// Create an empty slide
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape, assigning it the next free identifier
    ///
    /// Returns the assigned id.
    pub fn push(&mut self, mut shape: Shape) -> u32 {
        shape.id = self.ids.next_id();
        let id = shape.id;
        self.shapes.push(shape);
        id
    }
}

/// Sequential shape-id allocator, scoped to one slide
///
/// Starts past the reserved root-group identifiers and only counts up, which
/// makes the uniqueness invariant structural rather than hand-maintained.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Create an allocator positioned at [`FIRST_SHAPE_ID`]
    pub fn new() -> Self {
        Self {
            next: FIRST_SHAPE_ID,
        }
    }

    /// Hand out the next identifier
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Position and extent of a shape on the slide canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Left edge offset
    pub x: Emu,
    /// Top edge offset
    pub y: Emu,
    /// Width
    pub cx: Emu,
    /// Height
    pub cy: Emu,
}

impl Frame {
    /// Create a frame from EMU values
    pub fn new(x: Emu, y: Emu, cx: Emu, cy: Emu) -> Self {
        Self { x, y, cx, cy }
    }

    /// Create a frame from inch literals
    pub fn inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x: Emu::from_inches(x),
            y: Emu::from_inches(y),
            cx: Emu::from_inches(w),
            cy: Emu::from_inches(h),
        }
    }
}

/// Preset geometry of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Geometry {
    /// Sharp-cornered rectangle (`prst="rect"`)
    #[default]
    Rect,
    /// Rounded rectangle (`prst="roundRect"`)
    RoundRect,
}

impl Geometry {
    /// The `prst` attribute value for this geometry
    pub fn preset(&self) -> &'static str {
        match self {
            Geometry::Rect => "rect",
            Geometry::RoundRect => "roundRect",
        }
    }
}

/// Solid fill with opacity
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    /// 6-hex-digit sRGB value
    pub color: String,
    /// Opacity in [0, 1]; values at or above 0.999 are emitted as fully opaque
    pub opacity: f64,
}

impl Fill {
    /// Create a solid fill
    pub fn new(color: impl Into<String>, opacity: f64) -> Self {
        Self {
            color: color.into(),
            opacity,
        }
    }

    /// Fully opaque fill
    pub fn opaque(color: impl Into<String>) -> Self {
        Self::new(color, 1.0)
    }
}

/// Outline stroke
///
/// A shape with no stroke gets an explicit no-line marker in the markup, not
/// a zero-width line.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// 6-hex-digit sRGB value
    pub color: String,
    /// Line width
    pub width: Emu,
    /// Opacity in [0, 1]
    pub opacity: f64,
}

impl Stroke {
    /// Create a stroke
    pub fn new(color: impl Into<String>, width: Emu, opacity: f64) -> Self {
        Self {
            color: color.into(),
            width,
            opacity,
        }
    }
}

/// Outer drop shadow
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    /// 6-hex-digit sRGB value
    pub color: String,
    /// Opacity in [0, 1]
    pub opacity: f64,
    /// Offset distance in EMU
    pub distance: Emu,
    /// Blur radius in EMU
    pub blur: Emu,
    /// Direction in degrees, converted to 60000ths at serialization
    pub direction_deg: f64,
}

impl Shadow {
    /// Create a shadow
    pub fn new(
        color: impl Into<String>,
        opacity: f64,
        distance: Emu,
        blur: Emu,
        direction_deg: f64,
    ) -> Self {
        Self {
            color: color.into(),
            opacity,
            distance,
            blur,
            direction_deg,
        }
    }

    /// The kit's soft card shadow: low-opacity ink, straight down
    pub fn soft() -> Self {
        Self::new(
            crate::theme::palette::INK,
            0.12,
            Emu(90_000),
            Emu(240_000),
            270.0,
        )
    }
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Left-aligned (`algn="l"`)
    #[default]
    Left,
    /// Centered (`algn="ctr"`)
    Center,
    /// Right-aligned (`algn="r"`)
    Right,
}

impl Align {
    /// The `algn` attribute value
    pub fn attr(&self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
            Align::Right => "r",
        }
    }
}

/// Vertical anchor of a text body within its shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Top-anchored (`anchor="t"`)
    #[default]
    Top,
    /// Vertically centered (`anchor="ctr"`)
    Center,
    /// Bottom-anchored (`anchor="b"`)
    Bottom,
}

impl Anchor {
    /// The `anchor` attribute value
    pub fn attr(&self) -> &'static str {
        match self {
            Anchor::Top => "t",
            Anchor::Center => "ctr",
            Anchor::Bottom => "b",
        }
    }
}

/// Text insets on the four sides of a text body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insets {
    /// Left inset
    pub left: Emu,
    /// Top inset
    pub top: Emu,
    /// Right inset
    pub right: Emu,
    /// Bottom inset
    pub bottom: Emu,
}

impl Insets {
    /// Same inset on all four sides
    pub fn uniform(value: Emu) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Same inset on all four sides, given in inches
    pub fn uniform_inches(inches: f64) -> Self {
        Self::uniform(Emu::from_inches(inches))
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform_inches(DEFAULT_TEXT_MARGIN_IN)
    }
}

/// One styled run of text
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// Literal text content; escaped at the XML boundary
    pub text: String,
    /// Font family name
    pub font: String,
    /// Size in hundredths of a point (1100 = 11 pt)
    pub size: u32,
    /// 6-hex-digit sRGB value
    pub color: String,
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
}

impl Run {
    /// Create a regular-weight run
    pub fn new(
        text: impl Into<String>,
        font: impl Into<String>,
        size: u32,
        color: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            size,
            color: color.into(),
            bold: false,
            italic: false,
        }
    }

    /// Mark the run bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Mark the run italic
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// One paragraph: runs plus alignment and an optional bullet marker
///
/// Bullet mode indents the paragraph (0.25 in left margin, -0.12 in
/// first-line indent) and injects a `•` glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    /// Runs in order
    pub runs: Vec<Run>,
    /// Horizontal alignment
    pub align: Align,
    /// Bullet marker flag
    pub bullet: bool,
}

impl Paragraph {
    /// Create a left-aligned paragraph
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            align: Align::Left,
            bullet: false,
        }
    }

    /// Set the alignment
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Turn on the bullet marker
    pub fn bulleted(mut self) -> Self {
        self.bullet = true;
        self
    }
}

/// Text body of a shape
///
/// Horizontal alignment lives on each paragraph; the body carries only the
/// vertical anchor and insets.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    /// Paragraphs in order
    pub paragraphs: Vec<Paragraph>,
    /// Vertical anchor
    pub anchor: Anchor,
    /// Insets on all four sides
    pub insets: Insets,
}

impl TextBody {
    /// Create a top-anchored body with default insets
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            anchor: Anchor::Top,
            insets: Insets::default(),
        }
    }

    /// Set the vertical anchor
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set uniform insets in inches
    pub fn margin(mut self, inches: f64) -> Self {
        self.insets = Insets::uniform_inches(inches);
        self
    }
}

/// One shape on a slide
#[derive(Debug, Clone)]
pub struct Shape {
    /// Unique identifier within the slide; assigned by [`Slide::push`]
    pub id: u32,
    /// Display name, escaped at the XML boundary
    pub name: String,
    /// Position and extent
    pub frame: Frame,
    /// Preset geometry
    pub geometry: Geometry,
    /// Optional solid fill; `None` emits an explicit no-fill
    pub fill: Option<Fill>,
    /// Optional stroke; `None` emits an explicit no-line
    pub stroke: Option<Stroke>,
    /// Optional outer shadow
    pub shadow: Option<Shadow>,
    /// Optional text body
    pub text: Option<TextBody>,
}

impl Shape {
    /// Create a sharp-cornered rectangle with no fill, line, or text
    pub fn rect(name: impl Into<String>, frame: Frame) -> Self {
        Self {
            id: 0,
            name: name.into(),
            frame,
            geometry: Geometry::Rect,
            fill: None,
            stroke: None,
            shadow: None,
            text: None,
        }
    }

    /// Create a rounded rectangle with no fill, line, or text
    pub fn round_rect(name: impl Into<String>, frame: Frame) -> Self {
        Self {
            geometry: Geometry::RoundRect,
            ..Self::rect(name, frame)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_starts_past_reserved_ids() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), 3);
        assert_eq!(ids.next_id(), 4);
        assert_eq!(ids.next_id(), 5);
    }

    #[test]
    fn test_push_assigns_sequential_ids() {
        let mut slide = Slide::new();
        let a = slide.push(Shape::rect("A", Frame::inches(0.0, 0.0, 1.0, 1.0)));
        let b = slide.push(Shape::rect("B", Frame::inches(1.0, 0.0, 1.0, 1.0)));
        assert_eq!(a, FIRST_SHAPE_ID);
        assert_eq!(b, FIRST_SHAPE_ID + 1);
        assert_eq!(slide.shapes[0].id, a);
        assert_eq!(slide.shapes[1].id, b);
    }

    #[test]
    fn test_deck_defaults_to_16x9() {
        let deck = Deck::new("Title", "Author");
        assert_eq!(deck.width, Emu(12_191_695));
        assert_eq!(deck.height, Emu(6_858_000));
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_default_insets_match_default_margin() {
        let body = TextBody::new(vec![]);
        assert_eq!(body.insets.left, Emu::from_inches(DEFAULT_TEXT_MARGIN_IN));
        assert_eq!(body.insets.left, body.insets.bottom);
    }

    #[test]
    fn test_geometry_presets() {
        assert_eq!(Geometry::Rect.preset(), "rect");
        assert_eq!(Geometry::RoundRect.preset(), "roundRect");
    }

    #[test]
    fn test_run_style_flags() {
        let run = Run::new("x", "Fraunces", 1200, "12151A").bold().italic();
        assert!(run.bold);
        assert!(run.italic);
    }
}
