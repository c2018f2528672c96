//! Lays out a `DocumentDefinition` on A4 pages with printpdf.
//!
//! Layout is deliberately simple: blocks flow top to bottom inside the page
//! margins, lines wrap on word boundaries using an average glyph width, and
//! a new page starts when a line would cross the bottom margin or a block
//! asks for a page break.
//!
//! printpdf documents are not `Send`; call these functions from
//! `tokio::task::spawn_blocking`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

use super::document_definition::{DocumentDefinition, PageBreak};
use crate::ports::PdfGenerationError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LAYER_NAME: &str = "Layer 1";

/// Line box height as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Average Helvetica advance width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

fn mm_to_pt(mm: f32) -> f32 {
    mm * 72.0 / 25.4
}

/// Render `definition` and return the PDF as base64.
pub fn render_base64(definition: &DocumentDefinition, title: &str) -> Result<String, PdfGenerationError> {
    let bytes = render_pdf(definition, title)?;
    Ok(STANDARD.encode(bytes))
}

/// Render `definition` to PDF bytes.
pub fn render_pdf(definition: &DocumentDefinition, title: &str) -> Result<Vec<u8>, PdfGenerationError> {
    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| PdfGenerationError::render_failed(format!("{e:?}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| PdfGenerationError::render_failed(format!("{e:?}")))?;

    let mut cursor = PageCursor::new(definition.page_margins, doc.get_page(page).get_layer(layer));

    for block in &definition.content {
        let style = definition.style_for(block);

        if block.page_break == Some(PageBreak::Before) && cursor.has_content {
            cursor.new_page(&doc);
        }

        let (r, g, b) = style.rgb();
        let font: &IndirectFontRef = if style.bold { &bold } else { &regular };
        let line_height = style.font_size * LINE_HEIGHT;
        let max_chars = cursor.max_chars(style.font_size);

        for line in wrap_lines(&block.text, max_chars) {
            if !cursor.fits(line_height) {
                cursor.new_page(&doc);
            }
            cursor.advance(line_height);
            if !line.is_empty() {
                cursor
                    .layer
                    .set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
                cursor.layer.use_text(
                    line,
                    style.font_size,
                    pt_to_mm(cursor.left),
                    pt_to_mm(cursor.y),
                    font,
                );
            }
        }
        cursor.has_content = true;
    }

    doc.save_to_bytes()
        .map_err(|e| PdfGenerationError::render_failed(format!("{e:?}")))
}

/// Current page and vertical position, in points from the page bottom.
struct PageCursor {
    layer: PdfLayerReference,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    y: f32,
    has_content: bool,
}

impl PageCursor {
    fn new(margins: [f32; 4], layer: PdfLayerReference) -> Self {
        let [left, top, right, bottom] = margins;
        Self {
            layer,
            left,
            top,
            right,
            bottom,
            y: mm_to_pt(PAGE_HEIGHT_MM) - top,
            has_content: false,
        }
    }

    fn new_page(&mut self, doc: &PdfDocumentReference) {
        let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
        self.layer = doc.get_page(page).get_layer(layer);
        self.y = mm_to_pt(PAGE_HEIGHT_MM) - self.top;
        self.has_content = false;
    }

    fn fits(&self, line_height: f32) -> bool {
        self.y - line_height >= self.bottom
    }

    fn advance(&mut self, line_height: f32) {
        self.y -= line_height;
    }

    fn max_chars(&self, font_size: f32) -> usize {
        let width = mm_to_pt(PAGE_WIDTH_MM) - self.left - self.right;
        ((width / (font_size * AVG_GLYPH_WIDTH)).floor() as usize).max(1)
    }
}

/// Split on `\n`, then wrap each line at word boundaries to `max_chars`.
///
/// Words longer than `max_chars` are broken mid-word.
fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in raw.split_whitespace() {
            let mut chars: Vec<char> = word.chars().collect();

            while chars.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = chars.split_off(max_chars);
                lines.push(chars.into_iter().collect());
                chars = rest;
            }

            let needed = if current_len == 0 { chars.len() } else { current_len + 1 + chars.len() };
            if needed > max_chars && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += chars.len();
            current.extend(chars);
        }

        lines.push(current);
    }

    lines
}
