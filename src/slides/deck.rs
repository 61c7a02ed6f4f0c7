//! The rendered deck consumed by every encoder.
//!
//! A [`Deck`] is the hymn after segmentation and text transforms: an
//! optional title slide followed by lyric slides carrying their final
//! display lines and section key.

use super::group::{Grouping, SectionKey, group_keys};
use super::segment::segment;
use super::text::{SectionLabeler, strip_punctuation};
use crate::common::Result;
use crate::hymn::HymnStructure;
use crate::options::PresentationOptions;

/// One slide as it will be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSlide {
    pub key: SectionKey,
    pub lines: Vec<String>,
}

impl DeckSlide {
    pub fn is_title(&self) -> bool {
        self.key == SectionKey::Title
    }

    /// Display text, one line per display line.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Title plus display-ready slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<DeckSlide>,
}

impl Deck {
    /// Segment `hymn` and apply the text options.
    pub fn build(hymn: &HymnStructure, title: &str, options: &PresentationOptions) -> Result<Self> {
        options.validate()?;
        let segmented = segment(hymn, options.lines_per_slide)?;

        let mut slides = Vec::with_capacity(segmented.len() + 1);
        if options.include_title_slide {
            slides.push(DeckSlide {
                key: SectionKey::Title,
                lines: vec![title.trim().to_string()],
            });
        }

        let mut labeler = SectionLabeler::new();
        for slide in segmented {
            let key = slide.key();
            let mut lines: Vec<String> = if options.strip_punctuation {
                slide.lines.iter().map(|l| strip_punctuation(l)).collect()
            } else {
                slide.lines
            };
            if options.include_verse_numbers {
                labeler.label(key, &mut lines);
            }
            slides.push(DeckSlide { key, lines });
        }

        Ok(Self {
            title: title.trim().to_string(),
            slides,
        })
    }

    /// Group slides by section identity.
    pub fn grouping(&self) -> Grouping {
        group_keys(self.slides.iter().map(|s| s.key))
    }

    /// Number of slides, including the title slide.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hymn::Section;

    fn amazing_grace() -> HymnStructure {
        HymnStructure::new(vec![
            Section::verse(
                1,
                [
                    "Amazing grace, how sweet the sound",
                    "That saved a wretch like me!",
                    "I once was lost, but now am found;",
                    "Was blind, but now I see.",
                    "'Twas grace that taught",
                    "my heart to fear",
                ],
            ),
            Section::chorus(["Praise God, praise God!"]),
        ])
    }

    #[test]
    fn test_title_slide_first() {
        let deck = Deck::build(&amazing_grace(), " Amazing Grace ", &PresentationOptions::default()).unwrap();
        assert_eq!(deck.title, "Amazing Grace");
        assert!(deck.slides[0].is_title());
        assert_eq!(deck.slides[0].text(), "Amazing Grace");
        assert_eq!(deck.len(), 5);
    }

    #[test]
    fn test_no_title_slide() {
        let options = PresentationOptions {
            include_title_slide: false,
            ..Default::default()
        };
        let deck = Deck::build(&amazing_grace(), "Amazing Grace", &options).unwrap();
        assert_eq!(deck.len(), 4);
        assert!(deck.slides.iter().all(|s| !s.is_title()));
    }

    #[test]
    fn test_single_prefix_per_verse() {
        let options = PresentationOptions {
            include_verse_numbers: true,
            include_title_slide: false,
            ..Default::default()
        };
        let deck = Deck::build(&amazing_grace(), "Amazing Grace", &options).unwrap();
        // verse 1 spans three slides at two lines per slide
        assert_eq!(deck.slides[0].lines[0], "1 Amazing grace, how sweet the sound");
        assert_eq!(deck.slides[1].lines[0], "I once was lost, but now am found;");
        assert_eq!(deck.slides[2].lines[0], "'Twas grace that taught");
        assert_eq!(deck.slides[3].lines[0], "Refrain: Praise God, praise God!");
        let prefixed = deck
            .slides
            .iter()
            .flat_map(|s| &s.lines)
            .filter(|l| l.starts_with("1 "))
            .count();
        assert_eq!(prefixed, 1);
    }

    #[test]
    fn test_strip_then_label() {
        let options = PresentationOptions {
            include_verse_numbers: true,
            strip_punctuation: true,
            include_title_slide: false,
            ..Default::default()
        };
        let deck = Deck::build(&amazing_grace(), "Amazing Grace", &options).unwrap();
        assert_eq!(deck.slides[0].lines[0], "1 Amazing grace how sweet the sound");
        assert_eq!(deck.slides[2].lines[0], "'Twas grace that taught");
        assert_eq!(deck.slides[3].lines[0], "Refrain: Praise God praise God");
    }

    #[test]
    fn test_grouping_includes_intro() {
        let deck = Deck::build(&amazing_grace(), "Amazing Grace", &PresentationOptions::default()).unwrap();
        let grouping = deck.grouping();
        let names: Vec<&str> = grouping.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Intro", "Verse 1", "Refrain"]);
        assert_eq!(grouping.groups[1].slides, vec![1, 2, 3]);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = PresentationOptions {
            lines_per_slide: 0,
            ..Default::default()
        };
        assert!(Deck::build(&amazing_grace(), "x", &options).is_err());
    }
}
