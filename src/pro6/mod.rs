//! ProPresenter 6 (`.pro6`) encoder.
//!
//! A `.pro6` file is a UTF-8 XML document. Slide groupings hold their
//! slides in deck order, each slide holds one text element, and the element carries its rich text
//! as base64 RTF. Colours are written as space-separated `r g b a` channel
//! lists on the same 0–1 scale the binary encoder uses.
//!
//! The same dialect also serves requests for "version 7" XML; ProPresenter 7
//! imports it directly.

pub mod builder;
pub mod xml;

pub use builder::{Pro6Builder, VERSION_NUMBER};
pub use xml::{XmlElement, XmlNode};

use crate::common::{Identity, Result};
use crate::options::PresentationOptions;
use crate::slides::Deck;

/// Encode a deck as a ProPresenter 6 XML document.
pub fn encode<I: Identity>(
    deck: &Deck,
    options: &PresentationOptions,
    identity: &mut I,
) -> Result<String> {
    let document = Pro6Builder::new(options, identity).build(deck)?.to_document()?;
    log::debug!("encoded pro6 document: {} bytes", document.len());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Rgba, SeededIdentity};
    use crate::hymn::{HymnStructure, Section};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::collections::HashMap;

    /// One parsed element: name, raw (still escaped) attributes, text.
    #[derive(Debug, Default)]
    struct Parsed {
        name: String,
        attributes: HashMap<String, String>,
        text: String,
    }

    /// Parse a document, failing the test on any well-formedness error.
    fn parse(xml: &str) -> Vec<Parsed> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut elements: Vec<Parsed> = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                    let mut parsed = Parsed {
                        name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
                        ..Default::default()
                    };
                    for attr in e.attributes() {
                        let attr = attr.expect("malformed attribute");
                        parsed.attributes.insert(
                            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                            String::from_utf8_lossy(&attr.value).to_string(),
                        );
                    }
                    elements.push(parsed);
                },
                Ok(Event::Text(ref t)) => {
                    let text = String::from_utf8_lossy(&t.to_vec()).to_string();
                    if let Some(last) = elements.last_mut()
                        && !text.trim().is_empty()
                    {
                        last.text.push_str(&text);
                    }
                },
                Ok(Event::Eof) => break,
                Err(e) => panic!("malformed XML at {}: {e}", reader.buffer_position()),
                _ => {},
            }
            buf.clear();
        }
        elements
    }

    fn named<'a>(elements: &'a [Parsed], name: &str) -> Vec<&'a Parsed> {
        elements.iter().filter(|e| e.name == name).collect()
    }

    fn ivar<'a>(elements: &'a [Parsed], name: &str, ivar: &str) -> Vec<&'a Parsed> {
        named(elements, name)
            .into_iter()
            .filter(|e| e.attributes.get("rvXMLIvarName").map(String::as_str) == Some(ivar))
            .collect()
    }

    fn hymn() -> HymnStructure {
        HymnStructure::new(vec![
            Section::verse(1, ["What a friend we have in Jesus", "All our sins and griefs to bear"]),
            Section::chorus(["Take it to the Lord in prayer"]),
            Section::verse(2, ["Have we trials and temptations", "Is there trouble anywhere"]),
            Section::chorus(["Take it to the Lord in prayer"]),
        ])
    }

    fn render(title: &str, options: &PresentationOptions) -> String {
        let deck = Deck::build(&hymn(), title, options).unwrap();
        encode(&deck, options, &mut SeededIdentity::from_seed("pro6-test")).unwrap()
    }

    #[test]
    fn test_title_is_escaped_and_document_is_well_formed() {
        let options = PresentationOptions {
            author: Some("Scriven & Converse".to_string()),
            ..Default::default()
        };
        let xml = render("Jesus & \"Friend\"", &options);
        let elements = parse(&xml);

        for element in &elements {
            for value in element.attributes.values() {
                assert!(!value.contains('"'), "raw quote in {value}");
                for (i, _) in value.match_indices('&') {
                    let rest = &value[i..];
                    assert!(
                        rest.starts_with("&amp;")
                            || rest.starts_with("&quot;")
                            || rest.starts_with("&lt;")
                            || rest.starts_with("&gt;")
                            || rest.starts_with("&apos;"),
                        "unescaped ampersand in {value}"
                    );
                }
            }
        }

        let doc = &named(&elements, "RVPresentationDocument")[0];
        let title = quick_xml::escape::unescape(&doc.attributes["CCLISongTitle"]).unwrap();
        assert_eq!(title, "Jesus & \"Friend\"");
        assert_eq!(doc.attributes["CCLIAuthor"], "Scriven &amp; Converse");
    }

    #[test]
    fn test_repeated_chorus_gets_one_grouping_per_visit() {
        let options = PresentationOptions {
            include_title_slide: false,
            ..Default::default()
        };
        let elements = parse(&render("What a Friend", &options));

        let groups = named(&elements, "RVSlideGrouping");
        let names: Vec<&str> = groups.iter().map(|g| g.attributes["name"].as_str()).collect();
        assert_eq!(names, vec!["Verse 1", "Refrain", "Verse 2", "Refrain"]);
        assert_eq!(groups[1].attributes["color"], groups[3].attributes["color"]);
        assert_ne!(groups[1].attributes["uuid"], groups[3].attributes["uuid"]);
        assert_eq!(named(&elements, "RVDisplaySlide").len(), 4);

        assert!(named(&elements, "RVSongArrangement").is_empty());
        let doc = &named(&elements, "RVPresentationDocument")[0];
        assert_eq!(doc.attributes["selectedArrangementID"], "");
    }

    #[test]
    fn test_playback_follows_deck_order() {
        let options = PresentationOptions {
            lines_per_slide: 1,
            ..Default::default()
        };
        let deck = Deck::build(&hymn(), "What a Friend", &options).unwrap();
        let xml = encode(&deck, &options, &mut SeededIdentity::from_seed("pro6-order")).unwrap();
        let elements = parse(&xml);

        // Slides play in document order when no arrangement is selected
        let played: Vec<String> = ivar(&elements, "NSString", "PlainText")
            .iter()
            .map(|e| String::from_utf8(STANDARD.decode(&e.text).unwrap()).unwrap())
            .collect();
        let expected: Vec<String> = deck.slides.iter().map(|s| s.text()).collect();
        assert_eq!(played, expected);
    }

    #[test]
    fn test_color_fidelity() {
        let options = PresentationOptions {
            background_color: Rgba::WHITE,
            text_color: Rgba::BLACK,
            ..Default::default()
        };
        let elements = parse(&render("What a Friend", &options));

        let doc = &named(&elements, "RVPresentationDocument")[0];
        let background = Rgba::from_channel_list(&doc.attributes["backgroundColor"]).unwrap();
        assert_eq!(background, Rgba::WHITE);
        for slide in named(&elements, "RVDisplaySlide") {
            assert_eq!(slide.attributes["backgroundColor"], "1 1 1 1");
        }

        let rtf = &ivar(&elements, "NSString", "RTFData")[1];
        let payload = String::from_utf8(STANDARD.decode(&rtf.text).unwrap()).unwrap();
        assert!(payload.contains("{\\colortbl;\\red0\\green0\\blue0;}"));
    }

    #[test]
    fn test_text_element_payloads() {
        let options = PresentationOptions {
            include_shadow: true,
            include_outline: false,
            ..Default::default()
        };
        let elements = parse(&render("What a Friend", &options));

        let text_elements = named(&elements, "RVTextElement");
        assert_eq!(text_elements.len(), 5);
        assert_eq!(text_elements[0].attributes["drawingShadow"], "true");
        assert_eq!(text_elements[0].attributes["drawingStroke"], "false");
        assert_eq!(text_elements[0].attributes["drawingFill"], "false");
        assert_eq!(text_elements[0].attributes["fillColor"], "0 0 0 0");

        let plain = &ivar(&elements, "NSString", "PlainText")[1];
        assert_eq!(
            STANDARD.decode(&plain.text).unwrap(),
            b"What a friend we have in Jesus\nAll our sins and griefs to bear"
        );

        let title_rtf = &ivar(&elements, "NSString", "RTFData")[0];
        let title = String::from_utf8(STANDARD.decode(&title_rtf.text).unwrap()).unwrap();
        assert!(title.contains("\\b\\fs160 \\cf1 What a Friend}"));

        assert_eq!(ivar(&elements, "RVRect3D", "position")[0].text, "{60 60 0 1800 960}");
        assert_eq!(
            ivar(&elements, "shadow", "shadow")[0].text,
            "5|0 0 0 0.75|{3.535534, -3.535534}"
        );
    }

    #[test]
    fn test_document_header() {
        let options = PresentationOptions {
            ccli_number: Some(1234),
            copyright_year: Some(1855),
            ..Default::default()
        };
        let elements = parse(&render("What a Friend", &options));
        let doc = &named(&elements, "RVPresentationDocument")[0];
        assert_eq!(doc.attributes["versionNumber"], "600");
        assert_eq!(doc.attributes["width"], "1920");
        assert_eq!(doc.attributes["height"], "1080");
        assert_eq!(doc.attributes["CCLIDisplay"], "true");
        assert_eq!(doc.attributes["CCLISongNumber"], "1234");
        assert_eq!(doc.attributes["CCLICopyrightYear"], "1855");
        assert_eq!(doc.attributes["lastDateUsed"], "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_seeded_output_is_identical() {
        let options = PresentationOptions::default();
        assert_eq!(render("What a Friend", &options), render("What a Friend", &options));
    }
}
