//! PowerPoint (`.pptx`) encoder.
//!
//! Each deck slide becomes one PowerPoint slide with a flat background and
//! a single centred text box. Styling stops at font, size, colour and
//! weight; ProPresenter-only effects (shadow, outline) are not carried over.
//!
//! - **pres**: presentation-level state and `presentation.xml`
//! - **slide**: slide background and shape tree
//! - **shape**: the text box and its run formatting
//! - **package**: OPC zip container with master, layout and theme parts

pub mod package;
pub mod pres;
pub mod shape;
pub mod slide;

pub use package::{CoreProperties, write_package};
pub use pres::MutablePresentation;
pub use shape::{MutableShape, TextFormat};
pub use slide::MutableSlide;

use crate::common::Result;
use crate::options::PresentationOptions;
use crate::slides::Deck;

/// Text box width as a fraction of the slide width.
const TEXT_BOX_WIDTH: f64 = 0.9;
/// Text box height as a fraction of the slide height.
const TEXT_BOX_HEIGHT: f64 = 0.4;

/// Map a deck onto a presentation, one slide per deck slide.
pub fn build_presentation(deck: &Deck, options: &PresentationOptions) -> MutablePresentation {
    let mut presentation = MutablePresentation::new();
    let bounds = presentation.centered_box(TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT);

    for deck_slide in &deck.slides {
        let is_title = deck_slide.is_title();
        let slide = presentation.add_slide();
        slide.set_background(options.background_color);
        slide
            .add_text_box(
                if is_title { "Title" } else { "Lyrics" },
                deck_slide.lines.clone(),
                bounds,
            )
            .font(&options.font_family)
            .font_size(options.font_size_for(is_title))
            .bold(is_title)
            .color(options.text_color);
    }

    log::debug!("built pptx presentation: {} slides", presentation.slide_count());
    presentation
}

/// Encode a deck as `.pptx` bytes.
pub fn encode(deck: &Deck, options: &PresentationOptions) -> Result<Vec<u8>> {
    let presentation = build_presentation(deck, options);
    let properties = CoreProperties {
        title: deck.title.clone(),
        creator: options.author.clone(),
    };
    write_package(&presentation, &properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Rgba;
    use crate::hymn::{HymnStructure, Section};
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn hymn() -> HymnStructure {
        HymnStructure::new(vec![
            Section::verse(1, ["Be thou my vision", "O Lord of my heart"]),
            Section::chorus(["Naught be all else to me"]),
        ])
    }

    fn parts(bytes: &[u8]) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut parts = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            parts.push((file.name().to_string(), content));
        }
        parts
    }

    fn part<'a>(parts: &'a [(String, String)], name: &str) -> &'a str {
        parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
            .unwrap_or_else(|| panic!("missing part {name}"))
    }

    /// Collect the `<a:t>` texts of one part, resolving entity references.
    fn texts(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut in_text = false;
        let mut texts: Vec<String> = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    in_text = e.name().as_ref() == b"a:t";
                    if in_text {
                        texts.push(String::new());
                    }
                },
                Ok(Event::End(_)) => in_text = false,
                Ok(Event::Text(ref t)) if in_text => {
                    if let Some(last) = texts.last_mut() {
                        last.push_str(&String::from_utf8_lossy(&t.to_vec()));
                    }
                },
                Ok(Event::GeneralRef(ref r)) if in_text => {
                    let name = String::from_utf8_lossy(&r.to_vec()).to_string();
                    let resolved = quick_xml::escape::resolve_predefined_entity(&name)
                        .unwrap_or_else(|| panic!("unknown entity {name}"));
                    if let Some(last) = texts.last_mut() {
                        last.push_str(resolved);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
                _ => {},
            }
            buf.clear();
        }
        texts
    }

    #[test]
    fn test_one_slide_per_deck_slide() {
        let options = PresentationOptions::default();
        let deck = Deck::build(&hymn(), "Be Thou My Vision", &options).unwrap();
        let bytes = encode(&deck, &options).unwrap();
        let parts = parts(&bytes);

        let slides = parts
            .iter()
            .filter(|(n, _)| n.starts_with("ppt/slides/slide"))
            .count();
        assert_eq!(slides, deck.len());
        assert_eq!(texts(part(&parts, "ppt/slides/slide1.xml")), vec!["Be Thou My Vision"]);
        assert_eq!(
            texts(part(&parts, "ppt/slides/slide2.xml")),
            vec!["Be thou my vision", "O Lord of my heart"]
        );
    }

    #[test]
    fn test_title_slide_is_optional() {
        let options = PresentationOptions {
            include_title_slide: false,
            ..Default::default()
        };
        let deck = Deck::build(&hymn(), "Be Thou My Vision", &options).unwrap();
        let presentation = build_presentation(&deck, &options);
        assert_eq!(presentation.slide_count(), 2);
        assert_eq!(presentation.slides()[0].shapes()[0].lines()[0], "Be thou my vision");
    }

    #[test]
    fn test_styling_follows_options() {
        let options = PresentationOptions {
            background_color: Rgba::WHITE,
            text_color: Rgba::rgb(1.0, 0.0, 0.0),
            font_family: "Georgia".to_string(),
            ..Default::default()
        };
        let deck = Deck::build(&hymn(), "Be Thou My Vision", &options).unwrap();
        let presentation = build_presentation(&deck, &options);

        let title = &presentation.slides()[0];
        assert_eq!(title.background(), Some(Rgba::WHITE));
        let format = &title.shapes()[0].format;
        assert!(format.bold);
        assert_eq!(format.size, options.font_size_for(true));
        assert_eq!(format.font, "Georgia");

        let lyric = &presentation.slides()[1].shapes()[0];
        assert!(!lyric.format.bold);
        assert_eq!(lyric.format.color, Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(lyric.bounds(), presentation.centered_box(0.9, 0.4));
    }

    /// `sz` values (hundredths of a point) in one slide part.
    fn run_sizes(xml: &str) -> Vec<u32> {
        xml.match_indices(" sz=\"")
            .map(|(i, m)| {
                let rest = &xml[i + m.len()..];
                rest[..rest.find('"').unwrap()].parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_run_sizes_stay_in_range_at_option_bounds() {
        use crate::options::{MAX_FONT_SIZE, MIN_FONT_SIZE};

        for font_size in [MIN_FONT_SIZE, MAX_FONT_SIZE * 7.0 / 8.0] {
            let options = PresentationOptions {
                font_size,
                ..Default::default()
            };
            options.validate().unwrap();
            let deck = Deck::build(&hymn(), "Be Thou My Vision", &options).unwrap();
            let parts = parts(&encode(&deck, &options).unwrap());

            for (name, content) in parts.iter().filter(|(n, _)| n.starts_with("ppt/slides/slide")) {
                for sz in run_sizes(content) {
                    assert!((100..=400_000).contains(&sz), "{name}: sz={sz}");
                }
            }
        }

        let options = PresentationOptions {
            font_size: MAX_FONT_SIZE * 7.0 / 8.0,
            ..Default::default()
        };
        let deck = Deck::build(&hymn(), "Be Thou My Vision", &options).unwrap();
        let parts = parts(&encode(&deck, &options).unwrap());
        assert_eq!(run_sizes(part(&parts, "ppt/slides/slide1.xml")), vec![400_000]);
    }

    #[test]
    fn test_slide_xml_is_well_formed_with_escaped_title() {
        let options = PresentationOptions::default();
        let deck = Deck::build(&hymn(), "Jesus & \"Friend\"", &options).unwrap();
        let parts = parts(&encode(&deck, &options).unwrap());
        assert_eq!(texts(part(&parts, "ppt/slides/slide1.xml")), vec!["Jesus & \"Friend\""]);
        assert!(part(&parts, "docProps/core.xml").contains("Jesus &amp; &quot;Friend&quot;"));
    }
}
