//! Object-graph construction for ProPresenter 7 documents.

use super::schema::{
    self, Action, ApplicationInfo, Cue, Font, Group, Presentation, PresentationSlide, Version,
    action, application_info, cue, graphics, presentation, slide,
};
use super::validate::validate_presentation;
use crate::common::id::{Identity, format_uuid};
use crate::common::{Result, Rgba};
use crate::options::PresentationOptions;
use crate::rtf::{RichText, TextStyle};
use crate::slides::layout::{
    self, Rect, STROKE_WIDTH, TAB_INTERVAL_TWIPS, TEXT_BOX_FILL, TEXT_SHADOW,
};
use crate::slides::{Deck, DeckSlide, Grouping};
use chrono::{DateTime, Utc};
use prost::Message;

/// Application version stamped into the document header.
const APPLICATION_VERSION: (u32, u32, u32) = (7, 16, 2);

/// Builds one ProPresenter 7 presentation from a deck.
///
/// The build order is fixed: the document identifier and timestamps come
/// first, then one cue per deck slide, then the groups that refer to those
/// cues, then the CCLI metadata.
///
/// No arrangement is selected, so playback follows the cue list.
pub struct Pro7Builder<'a, I: Identity> {
    options: &'a PresentationOptions,
    identity: &'a mut I,
}

impl<'a, I: Identity> Pro7Builder<'a, I> {
    pub fn new(options: &'a PresentationOptions, identity: &'a mut I) -> Self {
        Self { options, identity }
    }

    /// Build and validate the object graph.
    pub fn build(&mut self, deck: &Deck) -> Result<Presentation> {
        let uuid = self.uuid();
        let now = timestamp(self.identity.now());

        let mut cue_ids = Vec::with_capacity(deck.len());
        let mut cues = Vec::with_capacity(deck.len());
        let mut lyric_number = 0;
        for slide in &deck.slides {
            let name = if slide.is_title() {
                "Title".to_string()
            } else {
                lyric_number += 1;
                format!("Slide {}", lyric_number)
            };
            let cue = self.build_cue(name, slide)?;
            cue_ids.push(cue.uuid.clone().unwrap_or_default());
            cues.push(cue);
        }

        let grouping = deck.grouping();
        let cue_groups = self.build_cue_groups(&grouping, &cue_ids);

        let presentation = Presentation {
            application_info: Some(application_header()),
            uuid: Some(uuid),
            name: deck.title.clone(),
            last_date_used: Some(now),
            last_modified_date: Some(now),
            category: String::new(),
            notes: String::new(),
            selected_arrangement: None,
            arrangements: Vec::new(),
            cue_groups,
            cues,
            ccli: Some(self.build_ccli(&deck.title)),
        };

        validate_presentation(&presentation)?;
        log::debug!(
            "built pro7 presentation: {} cues, {} groups",
            presentation.cues.len(),
            presentation.cue_groups.len()
        );
        Ok(presentation)
    }

    /// Build, validate and serialize.
    pub fn encode(&mut self, deck: &Deck) -> Result<Vec<u8>> {
        let presentation = self.build(deck)?;
        let mut buf = Vec::with_capacity(presentation.encoded_len());
        presentation.encode(&mut buf)?;
        log::debug!("encoded pro7 presentation: {} bytes", buf.len());
        Ok(buf)
    }

    fn uuid(&mut self) -> schema::Uuid {
        schema::Uuid {
            string: format_uuid(&self.identity.uuid()),
        }
    }

    /// One cue holding one slide action; lyric cues are numbered from 1.
    fn build_cue(&mut self, name: String, slide: &DeckSlide) -> Result<Cue> {
        let cue_id = self.uuid();
        let action_id = self.uuid();
        let base_slide = self.build_base_slide(slide)?;

        Ok(Cue {
            uuid: Some(cue_id),
            name: name.clone(),
            completion_target_type: cue::CompletionTargetType::None as i32,
            completion_target_uuid: None,
            completion_action_type: cue::CompletionActionType::First as i32,
            completion_action_uuid: None,
            trigger_time: Some(cue::TimecodeTime { time: 0.0 }),
            actions: vec![Action {
                uuid: Some(action_id),
                name,
                delay_time: 0.0,
                is_enabled: true,
                duration: 0.0,
                r#type: action::ActionType::PresentationSlide as i32,
                action_type_data: Some(action::ActionTypeData::Slide(action::SlideType {
                    slide: Some(action::slide_type::Slide::Presentation(PresentationSlide {
                        base_slide: Some(base_slide),
                    })),
                })),
            }],
            is_enabled: true,
            completion_time: 0.0,
        })
    }

    fn build_base_slide(&mut self, slide: &DeckSlide) -> Result<schema::Slide> {
        let slide_id = self.uuid();
        let element = self.build_text_element(slide)?;
        let element_id = element.uuid.clone();

        Ok(schema::Slide {
            elements: vec![slide::Element {
                element: Some(element),
                info: 0,
            }],
            element_build_order: element_id.into_iter().collect(),
            draws_background_color: true,
            background_color: Some(color(self.options.background_color)),
            size: Some(graphics::Size {
                width: layout::CANVAS_WIDTH,
                height: layout::CANVAS_HEIGHT,
            }),
            uuid: Some(slide_id),
        })
    }

    /// The single text box of a slide.
    ///
    /// Fill, stroke, shadow and feather are always present; disabled ones
    /// keep their geometry and carry `enable = false`.
    fn build_text_element(&mut self, slide: &DeckSlide) -> Result<graphics::Element> {
        let options = self.options;
        let style = TextStyle::for_slide(options, slide.is_title());
        let rich_text = RichText::new(&slide.text(), &style)?;
        let shadow = shadow(options.include_shadow);

        Ok(graphics::Element {
            uuid: Some(self.uuid()),
            name: if slide.is_title() { "Title" } else { "Lyrics" }.to_string(),
            bounds: Some(rect(Rect::text_box())),
            rotation: 0.0,
            opacity: 1.0,
            locked: false,
            aspect_ratio_locked: false,
            path: Some(rectangle_path()),
            fill: Some(graphics::Fill {
                enable: false,
                color: Some(color(TEXT_BOX_FILL)),
            }),
            stroke: Some(graphics::Stroke {
                style: graphics::stroke::Style::SolidLine as i32,
                width: STROKE_WIDTH,
                color: Some(color(options.outline_color)),
                pattern: Vec::new(),
                enable: options.include_outline,
            }),
            shadow: Some(shadow),
            feather: Some(graphics::Feather {
                style: graphics::feather::Style::Inside as i32,
                radius: 0.0,
                enable: false,
            }),
            text: Some(graphics::Text {
                attributes: Some(text_attributes(&style)),
                shadow: Some(shadow),
                rtf_data: rich_text.into_bytes(),
                vertical_alignment: graphics::text::VerticalAlignment::Middle as i32,
                scale_behavior: graphics::text::ScaleBehavior::None as i32,
                margins: Some(graphics::EdgeInsets::default()),
                is_superscript_standardized: true,
            }),
        })
    }

    /// One cue group per section group, plus the group identifiers by index.
    fn build_cue_groups(
        &mut self,
        grouping: &Grouping,
        cue_ids: &[schema::Uuid],
    ) -> Vec<presentation::CueGroup> {
        let mut cue_groups = Vec::with_capacity(grouping.groups.len());
        for section in &grouping.groups {
            let group_id = self.uuid();
            let application_group_id = self.uuid();
            cue_groups.push(presentation::CueGroup {
                group: Some(Group {
                    uuid: Some(group_id),
                    name: section.name.clone(),
                    color: Some(color(section.color)),
                    application_group_identifier: Some(application_group_id),
                    application_group_name: String::new(),
                }),
                cue_identifiers: section.slides.iter().map(|&i| cue_ids[i].clone()).collect(),
            });
        }
        cue_groups
    }

    fn build_ccli(&self, title: &str) -> presentation::Ccli {
        let options = self.options;
        presentation::Ccli {
            author: options.author.clone().unwrap_or_default(),
            artist_credits: String::new(),
            song_title: title.to_string(),
            publisher: options.publisher.clone().unwrap_or_default(),
            copyright_year: options.copyright_year.unwrap_or_default(),
            song_number: options.ccli_number.unwrap_or_default(),
            display: options.ccli_number.is_some(),
            album: String::new(),
        }
    }
}

fn application_header() -> ApplicationInfo {
    let (major, minor, patch) = APPLICATION_VERSION;
    ApplicationInfo {
        platform: application_info::Platform::Macos as i32,
        platform_version: Some(Version {
            major_version: 14,
            minor_version: 0,
            patch_version: 0,
            build: String::new(),
        }),
        application: application_info::Application::Propresenter as i32,
        application_version: Some(Version {
            major_version: major,
            minor_version: minor,
            patch_version: patch,
            build: String::new(),
        }),
    }
}

fn timestamp(at: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: at.timestamp(),
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

/// Convert to the schema's `f32` colour; channels are already in `[0, 1]`.
pub(crate) fn color(rgba: Rgba) -> schema::Color {
    schema::Color {
        red: rgba.red as f32,
        green: rgba.green as f32,
        blue: rgba.blue as f32,
        alpha: rgba.alpha as f32,
    }
}

fn rect(r: Rect) -> graphics::Rect {
    graphics::Rect {
        origin: Some(graphics::Point { x: r.x, y: r.y }),
        size: Some(graphics::Size {
            width: r.width,
            height: r.height,
        }),
    }
}

/// Unit-square rectangle path; the viewer scales it to the element bounds.
fn rectangle_path() -> graphics::Path {
    let corner = |x: f64, y: f64| {
        let point = Some(graphics::Point { x, y });
        graphics::path::BezierPoint {
            point,
            q0: point,
            q1: point,
            curved: false,
        }
    };
    graphics::Path {
        closed: true,
        points: vec![
            corner(0.0, 0.0),
            corner(1.0, 0.0),
            corner(1.0, 1.0),
            corner(0.0, 1.0),
        ],
        shape: Some(graphics::path::Shape {
            r#type: graphics::path::shape::Type::Rectangle as i32,
        }),
    }
}

/// The schema stores the shadow in polar form: angle in degrees plus distance.
fn shadow(enable: bool) -> graphics::Shadow {
    graphics::Shadow {
        style: graphics::shadow::Style::Drop as i32,
        angle: TEXT_SHADOW.angle,
        offset: TEXT_SHADOW.distance,
        radius: TEXT_SHADOW.radius,
        color: Some(color(TEXT_SHADOW.color)),
        opacity: TEXT_SHADOW.opacity,
        enable,
    }
}

fn text_attributes(style: &TextStyle) -> graphics::text::Attributes {
    use graphics::text::attributes::{self, Alignment, paragraph::TabStop};

    graphics::text::Attributes {
        font: Some(Font {
            name: style.font_family.clone(),
            size: style.font_size,
            italic: false,
            bold: style.bold,
            family: style.font_family.clone(),
            face: if style.bold { "Bold" } else { "Regular" }.to_string(),
        }),
        capitalization: attributes::Capitalization::None as i32,
        paragraph_style: Some(attributes::Paragraph {
            alignment: Alignment::Center as i32,
            tab_stops: layout::tab_stops_points()
                .map(|location| TabStop {
                    location,
                    alignment: Alignment::Left as i32,
                })
                .collect(),
            default_tab_interval: f64::from(TAB_INTERVAL_TWIPS) / 20.0,
        }),
        kerning: 0.0,
        fill: Some(attributes::Fill::TextSolidFill(color(style.color))),
    }
}
