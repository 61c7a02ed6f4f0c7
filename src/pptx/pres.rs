/// Presentation writer for PPTX.
use super::slide::MutableSlide;
use crate::common::{Error, Result};
use std::fmt::Write as FmtWrite;

/// EMUs per inch (English Metric Units).
const EMU_PER_INCH: i64 = 914_400;

/// A PowerPoint presentation under construction.
#[derive(Debug)]
pub struct MutablePresentation {
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl MutablePresentation {
    /// Create an empty widescreen (13.333" x 7.5", 16:9) presentation.
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: EMU_PER_INCH * 40 / 3,
            slide_height: EMU_PER_INCH * 15 / 2,
        }
    }

    /// Add a new slide at the end of the presentation.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let index = self.slides.len();
        self.slides.push(MutableSlide::new(index as u32 + 256));
        &mut self.slides[index]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// A box of the given fractions of the slide size, centred on the slide.
    pub fn centered_box(&self, width_fraction: f64, height_fraction: f64) -> (i64, i64, i64, i64) {
        let width = (self.slide_width as f64 * width_fraction).round() as i64;
        let height = (self.slide_height as f64 * height_fraction).round() as i64;
        (
            (self.slide_width - width) / 2,
            (self.slide_height - height) / 2,
            width,
            height,
        )
    }

    /// Generate `ppt/presentation.xml`.
    ///
    /// `slide_rel_ids` holds one relationship ID per slide, in slide order.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(Error::Encode(format!(
                "{} slides but {} slide relationships",
                self.slides.len(),
                slide_rel_ids.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str("<p:notesSz cx=\"6858000\" cy=\"9144000\"/>");
        xml.push_str("</p:presentation>");

        Ok(xml)
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 12_192_000);
        assert_eq!(pres.slide_height(), 6_858_000);
        assert_eq!(pres.slide_height(), 7 * EMU_PER_INCH + EMU_PER_INCH / 2);
    }

    #[test]
    fn test_slide_ids_start_at_256() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        let second = pres.add_slide().slide_id();
        assert_eq!(pres.slides()[0].slide_id(), 256);
        assert_eq!(second, 257);
    }

    #[test]
    fn test_centered_box() {
        let pres = MutablePresentation::new();
        let (x, y, width, height) = pres.centered_box(0.9, 0.4);
        assert_eq!((width, height), (10_972_800, 2_743_200));
        assert_eq!((x, y), (609_600, 2_057_400));
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();
        let rels = vec!["rId3".to_string(), "rId4".to_string()];
        let xml = pres.generate_presentation_xml(&rels).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId4"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_relationship_count_mismatch_is_rejected() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        assert!(matches!(
            pres.generate_presentation_xml(&[]),
            Err(Error::Encode(_))
        ));
    }
}
