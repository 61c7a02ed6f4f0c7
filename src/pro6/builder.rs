//! Element-tree construction for ProPresenter 6 documents.

use super::xml::XmlElement;
use crate::common::id::{Identity, format_uuid};
use crate::common::{Result, Rgba};
use crate::options::PresentationOptions;
use crate::rtf::{RichText, TextStyle};
use crate::slides::layout::{
    CANVAS_HEIGHT, CANVAS_WIDTH, Rect, STROKE_WIDTH, TEXT_BOX_FILL, TEXT_SHADOW,
};
use crate::slides::{Deck, DeckSlide};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::SecondsFormat;

/// Document version understood by ProPresenter 6.
pub const VERSION_NUMBER: u32 = 600;

/// Build number stamped into the document.
const BUILD_NUMBER: u32 = 6016;

/// Pro6 `verticalAlignment` value for centred text.
const VERTICAL_ALIGNMENT_MIDDLE: u32 = 1;

/// Builds one ProPresenter 6 document from a deck.
///
/// Slides are nested inside groupings, and the viewer plays groupings in
/// document order. Each contiguous run of a section gets its own grouping,
/// so a repeated chorus appears once per visit under the same name and
/// colour. No arrangement is written.
pub struct Pro6Builder<'a, I: Identity> {
    options: &'a PresentationOptions,
    identity: &'a mut I,
}

impl<'a, I: Identity> Pro6Builder<'a, I> {
    pub fn new(options: &'a PresentationOptions, identity: &'a mut I) -> Self {
        Self { options, identity }
    }

    /// Build the document tree.
    pub fn build(&mut self, deck: &Deck) -> Result<XmlElement> {
        let options = self.options;
        let last_used = self
            .identity
            .now()
            .to_rfc3339_opts(SecondsFormat::Secs, false);

        let grouping = deck.grouping();
        let mut groups = XmlElement::array("groups");
        for run in &grouping.runs {
            let section = &grouping.groups[run.group];
            let mut slides = XmlElement::array("slides");
            for &index in &run.slides {
                slides.push(self.build_slide(&deck.slides[index])?);
            }
            groups.push(
                XmlElement::new("RVSlideGrouping")
                    .attr("name", &section.name)
                    .attr("uuid", self.uuid())
                    .attr("color", section.color.to_channel_list())
                    .child(slides),
            );
        }

        let document = XmlElement::new("RVPresentationDocument")
            .attr("height", CANVAS_HEIGHT)
            .attr("width", CANVAS_WIDTH)
            .attr("docType", 0)
            .attr("versionNumber", VERSION_NUMBER)
            .attr("usedCount", 0)
            .attr("backgroundColor", options.background_color.to_channel_list())
            .attr("drawingBackgroundColor", true)
            .attr("CCLIDisplay", options.ccli_number.is_some())
            .attr("lastDateUsed", last_used)
            .attr("selectedArrangementID", "")
            .attr("category", "Hymn")
            .attr("resourcesDirectory", "")
            .attr("notes", "")
            .attr("CCLIAuthor", options.author.as_deref().unwrap_or_default())
            .attr("CCLIArtistCredits", "")
            .attr("CCLISongTitle", &deck.title)
            .attr("CCLIPublisher", options.publisher.as_deref().unwrap_or_default())
            .attr("CCLICopyrightYear", optional_number(options.copyright_year))
            .attr("CCLISongNumber", optional_number(options.ccli_number))
            .attr("chordChartPath", "")
            .attr("os", 1)
            .attr("buildNumber", BUILD_NUMBER)
            .child(timeline())
            .child(groups)
            .child(XmlElement::array("arrangements"));

        log::debug!(
            "built pro6 document: {} slides in {} groupings",
            deck.len(),
            grouping.runs.len()
        );
        Ok(document)
    }

    fn uuid(&mut self) -> String {
        format_uuid(&self.identity.uuid())
    }

    fn build_slide(&mut self, slide: &DeckSlide) -> Result<XmlElement> {
        let slide_id = self.uuid();
        let element = self.build_text_element(slide)?;
        Ok(XmlElement::new("RVDisplaySlide")
            .attr("backgroundColor", self.options.background_color.to_channel_list())
            .attr("highlightColor", "")
            .attr("drawingBackgroundColor", true)
            .attr("enabled", true)
            .attr("hotKey", "")
            .attr("label", "")
            .attr("notes", "")
            .attr("UUID", slide_id)
            .attr("chordChartPath", "")
            .child(XmlElement::array("cues"))
            .child(XmlElement::array("displayElements").child(element)))
    }

    /// The slide's single text box.
    ///
    /// Shadow and stroke are always written; the `drawing*` flags switch
    /// them on or off.
    fn build_text_element(&mut self, slide: &DeckSlide) -> Result<XmlElement> {
        let options = self.options;
        let style = TextStyle::for_slide(options, slide.is_title());
        let rich_text = RichText::new(&slide.text(), &style)?;

        Ok(XmlElement::new("RVTextElement")
            .attr("displayName", if slide.is_title() { "Title" } else { "Lyrics" })
            .attr("UUID", self.uuid())
            .attr("typeID", 0)
            .attr("displayDelay", 0)
            .attr("locked", false)
            .attr("persistent", 0)
            .attr("fromTemplate", false)
            .attr("opacity", 1)
            .attr("source", "")
            .attr("bezelRadius", 0)
            .attr("rotation", 0)
            .attr("drawingFill", false)
            .attr("drawingShadow", options.include_shadow)
            .attr("drawingStroke", options.include_outline)
            .attr("fillColor", TEXT_BOX_FILL.to_channel_list())
            .attr("adjustsHeightToFitText", false)
            .attr("verticalAlignment", VERTICAL_ALIGNMENT_MIDDLE)
            .attr("revealType", 0)
            .child(
                XmlElement::new("RVRect3D")
                    .attr("rvXMLIvarName", "position")
                    .text(position(Rect::text_box())),
            )
            .child(
                XmlElement::new("shadow")
                    .attr("rvXMLIvarName", "shadow")
                    .text(shadow()),
            )
            .child(stroke(options.outline_color))
            .child(
                XmlElement::new("NSString")
                    .attr("rvXMLIvarName", "PlainText")
                    .text(STANDARD.encode(slide.text())),
            )
            .child(
                XmlElement::new("NSString")
                    .attr("rvXMLIvarName", "RTFData")
                    .text(rich_text.to_base64()),
            ))
    }
}

fn timeline() -> XmlElement {
    XmlElement::new("RVTimeline")
        .attr("timeOffset", 0)
        .attr("duration", 0)
        .attr("selectedMediaTrackIndex", 0)
        .attr("loop", false)
        .attr("rvXMLIvarName", "timeline")
        .child(XmlElement::array("timeCues"))
        .child(XmlElement::array("mediaTracks"))
}

/// `{x y z width height}`, the RVRect3D text form.
fn position(r: Rect) -> String {
    format!("{{{} {} 0 {} {}}}", r.x, r.y, r.width, r.height)
}

/// `radius|r g b a|{x, y}` with the opacity folded into the colour alpha.
///
/// The offset uses y-up coordinates, so the down-right shadow has a
/// negative y.
fn shadow() -> String {
    let (x, y) = TEXT_SHADOW.offset_xy();
    let color = TEXT_SHADOW.color.with_alpha(TEXT_SHADOW.opacity);
    format!(
        "{}|{}|{{{}, {}}}",
        TEXT_SHADOW.radius,
        color.to_channel_list(),
        x,
        y
    )
}

fn stroke(color: Rgba) -> XmlElement {
    XmlElement::new("dictionary")
        .attr("rvXMLIvarName", "stroke")
        .child(
            XmlElement::new("NSColor")
                .attr("rvXMLDictionaryKey", "RVShapeElementStrokeColorKey")
                .text(color.to_channel_list()),
        )
        .child(
            XmlElement::new("NSNumber")
                .attr("rvXMLDictionaryKey", "RVShapeElementStrokeWidthKey")
                .attr("hint", "float")
                .text(STROKE_WIDTH.to_string()),
        )
}

fn optional_number(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
