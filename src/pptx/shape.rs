/// Text box shape for PPTX slides.
use crate::common::xml::escape_xml;
use crate::common::{Result, Rgba};
use std::fmt::Write as FmtWrite;

/// Run formatting applied to every paragraph of a text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFormat {
    pub font: String,
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub color: Rgba,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            size: 18.0,
            bold: false,
            color: Rgba::BLACK,
        }
    }
}

/// A centred text box on a slide.
///
/// Each line becomes its own centred paragraph; the body is anchored to the
/// middle of the box.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within its slide
    pub(crate) shape_id: u32,
    pub(crate) name: String,
    pub(crate) lines: Vec<String>,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    pub(crate) format: TextFormat,
}

impl MutableShape {
    pub(crate) fn new_text_box(
        shape_id: u32,
        name: &str,
        lines: Vec<String>,
        (x, y, width, height): (i64, i64, i64, i64),
    ) -> Self {
        Self {
            shape_id,
            name: name.to_string(),
            lines,
            x,
            y,
            width,
            height,
            format: TextFormat::default(),
        }
    }

    /// Builder method: set font.
    pub fn font(&mut self, font: &str) -> &mut Self {
        self.format.font = font.to_string();
        self
    }

    /// Builder method: set font size in points.
    pub fn font_size(&mut self, size: f64) -> &mut Self {
        self.format.size = size;
        self
    }

    /// Builder method: set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.format.bold = bold;
        self
    }

    /// Builder method: set the text colour.
    pub fn color(&mut self, color: Rgba) -> &mut Self {
        self.format.color = color;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(x, y, width, height)` in EMUs.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Append the `<p:sp>` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name)
        )?;
        xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        xml.push_str("<a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.x, self.y)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, self.width, self.height)?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
        xml.push_str("<a:noFill/>");
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr">"#);
        xml.push_str("<a:normAutofit/>");
        xml.push_str("</a:bodyPr>");
        xml.push_str("<a:lstStyle/>");
        for line in &self.lines {
            xml.push_str("<a:p>");
            xml.push_str(r#"<a:pPr algn="ctr"/>"#);
            xml.push_str("<a:r>");
            self.write_run_properties(xml)?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
            xml.push_str("</a:p>");
        }
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }

    /// `<a:rPr>` children must appear fill first, then the latin font.
    fn write_run_properties(&self, xml: &mut String) -> Result<()> {
        let format = &self.format;
        write!(
            xml,
            r#"<a:rPr lang="en-US" sz="{}""#,
            (format.size * 100.0).round() as u32
        )?;
        if format.bold {
            xml.push_str(" b=\"1\"");
        }
        xml.push_str(" dirty=\"0\">");
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            format.color.to_hex_rgb()
        )?;
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(&format.font))?;
        xml.push_str("</a:rPr>");
        Ok(())
    }
}
