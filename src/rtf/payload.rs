//! Rich-text payloads for slide text.

use super::writer::RtfWriter;
use crate::common::{Result, Rgba};
use crate::options::PresentationOptions;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Character styling baked into a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    /// Size in points
    pub font_size: f64,
    pub bold: bool,
    pub color: Rgba,
    /// Declared as colour 2 when the outline is on
    pub stroke_color: Option<Rgba>,
}

impl TextStyle {
    /// Style for a content or title slide under `options`.
    ///
    /// Title slides are bold and 8/7 of the content size.
    pub fn for_slide(options: &PresentationOptions, is_title: bool) -> Self {
        Self {
            font_family: options.font_family.clone(),
            font_size: options.font_size_for(is_title),
            bold: is_title,
            color: options.text_color,
            stroke_color: options.include_outline.then_some(options.outline_color),
        }
    }

    /// Font size in RTF half-points.
    pub fn half_points(&self) -> i32 {
        (self.font_size * 2.0).round() as i32
    }

    fn colors(&self) -> Vec<Rgba> {
        let mut colors = vec![self.color];
        colors.extend(self.stroke_color);
        colors
    }
}

/// One slide's text in RTF form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    bytes: Vec<u8>,
}

impl RichText {
    /// Render `text` with `style`.
    pub fn new(text: &str, style: &TextStyle) -> Result<Self> {
        let mut writer = RtfWriter::new(Vec::with_capacity(256 + text.len()));
        writer.write_document_header()?;
        writer.write_font_table(&style.font_family)?;
        writer.write_color_table(&style.colors())?;
        writer.write_paragraph_properties()?;
        writer.write_character_properties(style.half_points(), style.bold, 1)?;
        writer.write_text(text)?;
        writer.write_document_end()?;
        Ok(Self {
            bytes: writer.into_inner(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Standard base64 of the payload, as embedded in XML documents.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}
