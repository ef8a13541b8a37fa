//! Paints a [`DocumentLayout`] into PDF bytes.
//!
//! Uses the Base-14 Helvetica family built into every PDF viewer, so renders
//! are self-contained: no font files are read at runtime and the same layout
//! always produces the same page content. Layout coordinates are top-down
//! millimetres; PDF page space grows upward from the bottom-left corner, so
//! each operation is flipped on the way in.

use log::debug;
use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point, Rgb};

use crate::error::DocError;
use crate::layout::{DocumentLayout, FontStyle, Op, PAGE_HEIGHT, PAGE_WIDTH};

const RULE_THICKNESS: f64 = 0.4;

/// An in-memory rendered document, ready for preview or persistence.
///
/// Ownership of the bytes passes to the caller; the renderer keeps nothing.
#[derive(Clone, Debug)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Size of the finished PDF in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Renders the layout into a single-page PDF.
pub fn paint(layout: &DocumentLayout) -> Result<RenderedDocument, DocError> {
    let (doc, page, layer) = PdfDocument::new(
        layout.title.as_str(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Contenido",
    );
    let regular = builtin(&doc, BuiltinFont::Helvetica)?;
    let bold = builtin(&doc, BuiltinFont::HelveticaBold)?;
    let italic = builtin(&doc, BuiltinFont::HelveticaOblique)?;
    let layer = doc.get_page(page).get_layer(layer);

    for op in &layout.ops {
        match op {
            Op::Text {
                x,
                y,
                size,
                style,
                shade,
                text,
            } => {
                let font = match style {
                    FontStyle::Regular => &regular,
                    FontStyle::Bold => &bold,
                    FontStyle::Italic => &italic,
                };
                let gray = *shade;
                layer.set_fill_color(Color::Rgb(Rgb::new(gray, gray, gray, None)));
                layer.use_text(text.clone(), *size, Mm(*x), Mm(PAGE_HEIGHT - y), font);
            }
            Op::Rule { x1, x2, y } => {
                layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
                layer.set_outline_thickness(RULE_THICKNESS);
                layer.add_shape(Line {
                    points: vec![
                        (Point::new(Mm(*x1), Mm(PAGE_HEIGHT - y)), false),
                        (Point::new(Mm(*x2), Mm(PAGE_HEIGHT - y)), false),
                    ],
                    is_closed: false,
                    has_fill: false,
                    has_stroke: true,
                    is_clipping_path: false,
                });
            }
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut std::io::BufWriter::new(&mut bytes))
        .map_err(|err| DocError::Render(err.to_string()))?;
    debug!(
        "painted `{}`: {} ops, {} bytes",
        layout.title,
        layout.ops.len(),
        bytes.len()
    );
    Ok(RenderedDocument { bytes })
}

fn builtin(
    doc: &printpdf::PdfDocumentReference,
    font: BuiltinFont,
) -> Result<printpdf::IndirectFontRef, DocError> {
    doc.add_builtin_font(font)
        .map_err(|err| DocError::Render(err.to_string()))
}
