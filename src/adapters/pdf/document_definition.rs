//! Declarative description of a PDF for the document-model backend.
//!
//! A definition is a flat list of text blocks plus named styles. The
//! renderer lays it out top to bottom; nothing here knows about PDF.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::form::FormDataEntity;

/// Style name used for section headers.
pub const HEADER_STYLE: &str = "header";

/// Page margins in points: left, top, right, bottom.
pub const FORM_PAGE_MARGINS: [f32; 4] = [40.0, 60.0, 40.0, 60.0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDefinition {
    pub page_margins: [f32; 4],
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub styles: BTreeMap<String, TextStyle>,
}

impl DocumentDefinition {
    /// Resolved style for a block; unknown names fall back to the default.
    pub fn style_for(&self, block: &ContentBlock) -> TextStyle {
        block
            .style
            .as_ref()
            .and_then(|name| self.styles.get(name))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of pages the definition produces.
    pub fn page_count(&self) -> usize {
        1 + self
            .content
            .iter()
            .enumerate()
            .filter(|(i, b)| *i > 0 && b.page_break == Some(PageBreak::Before))
            .count()
    }
}

/// One paragraph. `\n` inside `text` starts a new line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBlock {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_break: Option<PageBreak>,
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            page_break: None,
        }
    }

    pub fn styled(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn break_before(mut self) -> Self {
        self.page_break = Some(PageBreak::Before);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBreak {
    Before,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: f32,
    #[serde(default)]
    pub bold: bool,
    /// `#RRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            bold: false,
            color: None,
        }
    }
}

impl TextStyle {
    /// Color as 0..=1 RGB components. Malformed colors read as black.
    pub fn rgb(&self) -> (f32, f32, f32) {
        self.color
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or((0.0, 0.0, 0.0))
    }
}

fn parse_hex_color(hex: &str) -> Option<(f32, f32, f32)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .map(|v| f32::from(v) / 255.0)
    };
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// The two-page form document.
pub fn form_document(input: &FormDataEntity) -> DocumentDefinition {
    let mut styles = BTreeMap::new();
    styles.insert(
        HEADER_STYLE.to_string(),
        TextStyle {
            font_size: 18.0,
            bold: true,
            color: Some("#0F4471".to_string()),
        },
    );

    DocumentDefinition {
        page_margins: FORM_PAGE_MARGINS,
        content: vec![
            ContentBlock::text("Desaway - Datos").styled(HEADER_STYLE),
            ContentBlock::text(format!("Texto: {}", input.text_value)),
            ContentBlock::text(format!("Número: {}", input.numeric_value)),
            ContentBlock::text("\n\n"),
            ContentBlock::text("Página 2")
                .break_before()
                .styled(HEADER_STYLE),
            ContentBlock::text(format!("Opción: {}", input.option_value)),
        ],
        styles,
    }
}
