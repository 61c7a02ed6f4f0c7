//! Structural validation of a populated [`Presentation`].
//!
//! prost encodes whatever it is given, so an incomplete object graph would
//! serialize into a file the viewer rejects or misrenders. This walker checks
//! the fields ProPresenter needs before anything is written and reports the
//! first failure with its field path, e.g.
//! `cues[3].actions[0].slide.base_slide.elements[0].element.text.rtf_data`.

use super::schema::{
    Color, Cue, Presentation, Uuid, action, graphics, presentation::CueGroup, slide,
};
use crate::common::{Error, Result};
use std::collections::HashSet;
use std::fmt::Display;

/// Dotted, indexed path to a message field.
#[derive(Debug, Clone)]
struct FieldPath(String);

impl FieldPath {
    fn root() -> Self {
        Self(String::new())
    }

    fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    fn index(&self, name: &str, index: usize) -> Self {
        self.field(&format!("{}[{}]", name, index))
    }

    fn error(&self, reason: impl Display) -> Error {
        Error::schema(self.0.clone(), reason.to_string())
    }
}

/// Validate a presentation before serialization.
pub fn validate_presentation(presentation: &Presentation) -> Result<()> {
    let root = FieldPath::root();

    required_uuid(presentation.uuid.as_ref(), &root.field("uuid"))?;
    if presentation.application_info.is_none() {
        return Err(root.field("application_info").error("missing"));
    }

    let mut cue_ids = HashSet::new();
    for (i, cue) in presentation.cues.iter().enumerate() {
        let path = root.index("cues", i);
        let id = validate_cue(cue, &path)?;
        if !cue_ids.insert(id) {
            return Err(path.field("uuid").error("duplicate cue identifier"));
        }
    }

    let mut group_ids = HashSet::new();
    for (i, cue_group) in presentation.cue_groups.iter().enumerate() {
        let path = root.index("cue_groups", i);
        group_ids.insert(validate_cue_group(cue_group, &cue_ids, &path)?);
    }

    let mut arrangement_ids = HashSet::new();
    for (i, arrangement) in presentation.arrangements.iter().enumerate() {
        let path = root.index("arrangements", i);
        arrangement_ids.insert(required_uuid(arrangement.uuid.as_ref(), &path.field("uuid"))?);
        for (j, group_id) in arrangement.group_identifiers.iter().enumerate() {
            let id_path = path.index("group_identifiers", j);
            let id = parse_uuid(group_id, &id_path)?;
            if !group_ids.contains(&id) {
                return Err(id_path.error(format!("unknown group {}", group_id.string)));
            }
        }
    }

    if let Some(selected) = &presentation.selected_arrangement {
        let path = root.field("selected_arrangement");
        if !arrangement_ids.contains(&parse_uuid(selected, &path)?) {
            return Err(path.error(format!("unknown arrangement {}", selected.string)));
        }
    }

    Ok(())
}

fn validate_cue(cue: &Cue, path: &FieldPath) -> Result<uuid::Uuid> {
    let id = required_uuid(cue.uuid.as_ref(), &path.field("uuid"))?;
    if cue.actions.is_empty() {
        return Err(path.field("actions").error("cue has no actions"));
    }
    for (i, cue_action) in cue.actions.iter().enumerate() {
        let action_path = path.index("actions", i);
        required_uuid(cue_action.uuid.as_ref(), &action_path.field("uuid"))?;
        if cue_action.r#type != action::ActionType::PresentationSlide as i32 {
            continue;
        }
        let slide_path = action_path.field("slide");
        let presentation_slide = match &cue_action.action_type_data {
            Some(action::ActionTypeData::Slide(action::SlideType {
                slide: Some(action::slide_type::Slide::Presentation(slide)),
            })) => slide,
            _ => return Err(slide_path.error("presentation slide action without a slide")),
        };
        let base_path = slide_path.field("base_slide");
        let base = presentation_slide
            .base_slide
            .as_ref()
            .ok_or_else(|| base_path.error("missing"))?;

        required_uuid(base.uuid.as_ref(), &base_path.field("uuid"))?;
        let size = base.size.ok_or_else(|| base_path.field("size").error("missing"))?;
        if size.width <= 0.0 || size.height <= 0.0 {
            return Err(base_path
                .field("size")
                .error(format!("non-positive size {}x{}", size.width, size.height)));
        }
        if base.draws_background_color {
            required_color(base.background_color.as_ref(), &base_path.field("background_color"))?;
        }
        if base.elements.is_empty() {
            return Err(base_path.field("elements").error("slide has no elements"));
        }
        for (j, element) in base.elements.iter().enumerate() {
            validate_slide_element(element, &base_path.index("elements", j))?;
        }
    }
    Ok(id)
}

fn validate_slide_element(element: &slide::Element, path: &FieldPath) -> Result<()> {
    let path = path.field("element");
    let element = element.element.as_ref().ok_or_else(|| path.error("missing"))?;

    required_uuid(element.uuid.as_ref(), &path.field("uuid"))?;
    let bounds = element.bounds.ok_or_else(|| path.field("bounds").error("missing"))?;
    if bounds.origin.is_none() || bounds.size.is_none() {
        return Err(path.field("bounds").error("origin and size are required"));
    }
    if element.path.as_ref().is_none_or(|p| p.points.is_empty()) {
        return Err(path.field("path").error("missing shape path"));
    }

    let fill = element.fill.ok_or_else(|| path.field("fill").error("missing"))?;
    required_color(fill.color.as_ref(), &path.field("fill").field("color"))?;
    let stroke = element.stroke.as_ref().ok_or_else(|| path.field("stroke").error("missing"))?;
    required_color(stroke.color.as_ref(), &path.field("stroke").field("color"))?;
    if stroke.width < 0.0 {
        return Err(path.field("stroke").field("width").error("negative width"));
    }
    validate_shadow(element.shadow.as_ref(), &path.field("shadow"))?;
    if element.feather.is_none() {
        return Err(path.field("feather").error("missing"));
    }

    let text_path = path.field("text");
    let text = element.text.as_ref().ok_or_else(|| text_path.error("missing"))?;
    if text.rtf_data.is_empty() {
        return Err(text_path.field("rtf_data").error("empty rich text payload"));
    }
    validate_text_attributes(text, &text_path)?;
    validate_shadow(text.shadow.as_ref(), &text_path.field("shadow"))
}

fn validate_text_attributes(text: &graphics::Text, path: &FieldPath) -> Result<()> {
    let path = path.field("attributes");
    let attributes = text.attributes.as_ref().ok_or_else(|| path.error("missing"))?;
    let font_path = path.field("font");
    let font = attributes.font.as_ref().ok_or_else(|| font_path.error("missing"))?;
    if font.name.trim().is_empty() {
        return Err(font_path.field("name").error("empty font name"));
    }
    if font.size.is_nan() || font.size <= 0.0 {
        return Err(font_path.field("size").error(format!("invalid size {}", font.size)));
    }
    match &attributes.fill {
        Some(graphics::text::attributes::Fill::TextSolidFill(color)) => {
            validate_color(color, &path.field("text_solid_fill"))
        },
        None => Err(path.field("text_solid_fill").error("missing")),
    }
}

fn validate_shadow(shadow: Option<&graphics::Shadow>, path: &FieldPath) -> Result<()> {
    let shadow = shadow.ok_or_else(|| path.error("missing"))?;
    required_color(shadow.color.as_ref(), &path.field("color"))?;
    if !(0.0..=1.0).contains(&shadow.opacity) {
        return Err(path.field("opacity").error(format!("out of range: {}", shadow.opacity)));
    }
    Ok(())
}

fn validate_cue_group(
    cue_group: &CueGroup,
    cue_ids: &HashSet<uuid::Uuid>,
    path: &FieldPath,
) -> Result<uuid::Uuid> {
    let group_path = path.field("group");
    let group = cue_group.group.as_ref().ok_or_else(|| group_path.error("missing"))?;
    let id = required_uuid(group.uuid.as_ref(), &group_path.field("uuid"))?;
    if group.name.trim().is_empty() {
        return Err(group_path.field("name").error("empty group name"));
    }
    required_color(group.color.as_ref(), &group_path.field("color"))?;

    for (i, cue_id) in cue_group.cue_identifiers.iter().enumerate() {
        let id_path = path.index("cue_identifiers", i);
        if !cue_ids.contains(&parse_uuid(cue_id, &id_path)?) {
            return Err(id_path.error(format!("unknown cue {}", cue_id.string)));
        }
    }
    Ok(id)
}

fn required_uuid(id: Option<&Uuid>, path: &FieldPath) -> Result<uuid::Uuid> {
    let id = id.ok_or_else(|| path.error("missing"))?;
    parse_uuid(id, path)
}

fn parse_uuid(id: &Uuid, path: &FieldPath) -> Result<uuid::Uuid> {
    uuid::Uuid::parse_str(&id.string)
        .map_err(|e| path.error(format!("invalid UUID '{}': {}", id.string, e)))
}

fn required_color(color: Option<&Color>, path: &FieldPath) -> Result<()> {
    let color = color.ok_or_else(|| path.error("missing"))?;
    validate_color(color, path)
}

fn validate_color(color: &Color, path: &FieldPath) -> Result<()> {
    for (name, value) in [
        ("red", color.red),
        ("green", color.green),
        ("blue", color.blue),
        ("alpha", color.alpha),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(path.field(name).error(format!("out of range: {}", value)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_formatting() {
        let path = FieldPath::root()
            .index("cues", 3)
            .index("actions", 0)
            .field("slide")
            .field("base_slide");
        assert_eq!(path.0, "cues[3].actions[0].slide.base_slide");
    }

    #[test]
    fn test_missing_uuid_reports_root_field() {
        let err = validate_presentation(&Presentation::default()).unwrap_err();
        match err {
            Error::Schema { path, .. } => assert_eq!(path, "uuid"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_uuid_string() {
        let presentation = Presentation {
            uuid: Some(Uuid {
                string: "not-a-uuid".to_string(),
            }),
            ..Default::default()
        };
        let err = validate_presentation(&presentation).unwrap_err();
        assert!(err.to_string().contains("not-a-uuid"));
    }

    #[test]
    fn test_color_out_of_range() {
        let color = Color {
            red: 255.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
        };
        let err = validate_color(&color, &FieldPath::root().field("background_color")).unwrap_err();
        match err {
            Error::Schema { path, .. } => assert_eq!(path, "background_color.red"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
