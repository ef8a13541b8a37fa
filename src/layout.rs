//! Page geometry and the low-level layout composer.
//!
//! A layout is a flat list of draw operations with absolute positions on a
//! single portrait letter page (210x297 layout units, millimetres). The
//! composer threads an explicit y-cursor through its append methods: each
//! call places its operations, returns the new cursor, and keeps no hidden
//! positioning state, so every block is independently testable.
//!
//! Coordinates are top-down: y grows towards the bottom edge. The PDF
//! backend converts to the page-space origin when painting.

use crate::text;

/// Page width in layout units.
pub const PAGE_WIDTH: f64 = 210.0;
/// Page height in layout units.
pub const PAGE_HEIGHT: f64 = 297.0;
/// Left edge of the printable band.
pub const MARGIN_LEFT: f64 = 20.0;
/// Right edge of the printable band.
pub const MARGIN_RIGHT: f64 = 190.0;
/// Width of the printable band.
pub const PRINTABLE_WIDTH: f64 = MARGIN_RIGHT - MARGIN_LEFT;

/// Left column where bold field labels start.
pub const LABEL_X: f64 = MARGIN_LEFT;
/// Second column where field values start; labels are pre-sized to fit.
pub const VALUE_X: f64 = 75.0;

/// Vertical advance of one label/value row.
pub const ROW_HEIGHT: f64 = 8.0;
/// Vertical advance of one wrapped text line at body size.
pub const LINE_HEIGHT: f64 = 5.0;
/// Body font size in points.
pub const BODY_SIZE: f64 = 10.0;

/// Lowest y the body may reach before colliding with the signature block.
pub const BODY_LIMIT: f64 = 240.0;

/// Font face selector within the Helvetica family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// Grayscale intensity for text, 0.0 black to 1.0 white.
pub type Shade = f64;

/// A single positioned draw operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    /// Text anchored at its left edge, `(x, y)` being the baseline start.
    Text {
        x: f64,
        y: f64,
        size: f64,
        style: FontStyle,
        shade: Shade,
        text: String,
    },
    /// A horizontal rule from `(x1, y)` to `(x2, y)`.
    Rule { x1: f64, x2: f64, y: f64 },
}

/// The finished single-page layout handed to the PDF backend.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentLayout {
    /// Document title stored in the PDF metadata.
    pub title: String,
    pub ops: Vec<Op>,
}

/// Accumulates draw operations while the caller threads the y-cursor.
#[derive(Debug, Default)]
pub struct Composer {
    ops: Vec<Op>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finishes the layout with the given document title.
    pub fn finish(self, title: impl Into<String>) -> DocumentLayout {
        DocumentLayout {
            title: title.into(),
            ops: self.ops,
        }
    }

    /// Places left-anchored text without moving any cursor.
    pub fn text_at(&mut self, x: f64, y: f64, size: f64, style: FontStyle, text: impl Into<String>) {
        self.ops.push(Op::Text {
            x,
            y,
            size,
            style,
            shade: 0.0,
            text: text.into(),
        });
    }

    /// Places text centered around `center_x`.
    pub fn centered_text(
        &mut self,
        center_x: f64,
        y: f64,
        size: f64,
        style: FontStyle,
        text: impl Into<String>,
    ) {
        let text = text.into();
        let x = center_x - text::width_mm(&text, size) / 2.0;
        self.text_at(x, y, size, style, text);
    }

    /// Places muted (gray) text centered around `center_x`.
    pub fn muted_centered_text(
        &mut self,
        center_x: f64,
        y: f64,
        size: f64,
        text: impl Into<String>,
    ) {
        let text = text.into();
        let x = center_x - text::width_mm(&text, size) / 2.0;
        self.ops.push(Op::Text {
            x,
            y,
            size,
            style: FontStyle::Regular,
            shade: 0.45,
            text,
        });
    }

    /// Draws a horizontal rule.
    pub fn rule(&mut self, x1: f64, x2: f64, y: f64) {
        self.ops.push(Op::Rule { x1, x2, y });
    }

    /// Appends one bold-label/value row and returns the advanced cursor.
    pub fn label_value(&mut self, cursor: f64, label: &str, value: &str) -> f64 {
        self.text_at(LABEL_X, cursor, BODY_SIZE, FontStyle::Bold, label);
        self.text_at(VALUE_X, cursor, BODY_SIZE, FontStyle::Regular, value);
        cursor + ROW_HEIGHT
    }

    /// Appends a bold label followed by word-wrapped body text underneath
    /// spanning the printable band; returns the advanced cursor.
    pub fn label_wrapped(&mut self, cursor: f64, label: &str, body: &str) -> f64 {
        self.text_at(LABEL_X, cursor, BODY_SIZE, FontStyle::Bold, label);
        let mut y = cursor + ROW_HEIGHT * 0.75;
        for line in text::wrap(body, BODY_SIZE, PRINTABLE_WIDTH) {
            self.text_at(LABEL_X, y, BODY_SIZE, FontStyle::Regular, line);
            y += LINE_HEIGHT;
        }
        y + (ROW_HEIGHT - LINE_HEIGHT)
    }

    /// Number of operations appended so far.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }
}
