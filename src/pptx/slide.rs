/// Slide type for PPTX presentations.
use super::shape::MutableShape;
use crate::common::{Result, Rgba};
use std::fmt::Write as FmtWrite;

/// A slide with an optional flat background and its text boxes.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique within the presentation, starting at 256)
    pub(crate) slide_id: u32,
    pub(crate) background: Option<Rgba>,
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Fill the whole slide with one colour.
    pub fn set_background(&mut self, color: Rgba) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<Rgba> {
        self.background
    }

    /// Add a text box; bounds are `(x, y, width, height)` in EMUs.
    ///
    /// Shape IDs start at 2, since 1 is the slide's group shape.
    pub fn add_text_box(
        &mut self,
        name: &str,
        lines: Vec<String>,
        bounds: (i64, i64, i64, i64),
    ) -> &mut MutableShape {
        let shape_id = self.shapes.len() as u32 + 2;
        let index = self.shapes.len();
        self.shapes
            .push(MutableShape::new_text_box(shape_id, name, lines, bounds));
        &mut self.shapes[index]
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate the slide part (`ppt/slides/slideN.xml`).
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // background comes before spTree
        if let Some(color) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex_rgb()
            )?;
            xml.push_str("<a:effectLst/>");
            xml.push_str("</p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(Rgba::rgb(0.0, 0.0, 1.0));
        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="0000FF"/>"#));
    }

    #[test]
    fn test_no_background_by_default() {
        let xml = MutableSlide::new(256).to_xml().unwrap();
        assert!(!xml.contains("<p:bg>"));
    }

    #[test]
    fn test_shape_ids_follow_group() {
        let mut slide = MutableSlide::new(256);
        slide.add_text_box("a", vec!["x".to_string()], (0, 0, 1, 1));
        slide.add_text_box("b", vec!["y".to_string()], (0, 0, 1, 1));
        assert_eq!(slide.shape_count(), 2);
        assert_eq!(slide.shapes()[0].shape_id, 2);
        assert_eq!(slide.shapes()[1].shape_id, 3);
        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="3" name="b"/>"#));
    }
}
