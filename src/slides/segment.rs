//! Slide segmentation.
//!
//! Chunks each section's lines into slides of at most `lines_per_slide`
//! lines. A slide never spans two sections.

use super::group::SectionKey;
use crate::common::{Error, Result};
use crate::hymn::{HymnStructure, SectionKind};

/// A run of consecutive lines from one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub lines: Vec<String>,
    pub kind: SectionKind,
    /// Verse number, copied from the source section
    pub number: Option<u32>,
    /// Index of the source section in the hymn
    pub section_index: usize,
}

impl Slide {
    /// Identity of the section this slide came from.
    pub fn key(&self) -> SectionKey {
        SectionKey::from_section(self.kind, self.number)
    }
}

/// Split a hymn into slides, preserving section and line order.
///
/// The structure is validated first; a verse without a number (or any other
/// broken invariant) is rejected rather than coerced. Sections without lines
/// contribute no slides.
pub fn segment(hymn: &HymnStructure, lines_per_slide: usize) -> Result<Vec<Slide>> {
    if lines_per_slide == 0 {
        return Err(Error::InvalidOptions(
            "linesPerSlide must be at least 1".to_string(),
        ));
    }
    hymn.validate()?;

    let mut slides = Vec::with_capacity(hymn.line_count().div_ceil(lines_per_slide));
    for (section_index, section) in hymn.sections.iter().enumerate() {
        if section.lines.is_empty() {
            log::warn!(
                "section {} ({}) has no lines, skipping",
                section_index,
                section.kind
            );
            continue;
        }
        for chunk in section.lines.chunks(lines_per_slide) {
            slides.push(Slide {
                lines: chunk.iter().map(|line| line.text.clone()).collect(),
                kind: section.kind,
                number: section.number,
                section_index,
            });
        }
    }

    log::debug!(
        "segmented {} sections into {} slides ({} lines per slide)",
        hymn.sections.len(),
        slides.len(),
        lines_per_slide
    );
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hymn::Section;

    fn sample() -> HymnStructure {
        HymnStructure::new(vec![
            Section::verse(1, ["a", "b", "c", "d", "e"]),
            Section::chorus(["f", "g"]),
        ])
    }

    #[test]
    fn test_chunks_per_section() {
        let slides = segment(&sample(), 2).unwrap();
        let lines: Vec<Vec<&str>> = slides
            .iter()
            .map(|s| s.lines.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(
            lines,
            vec![vec!["a", "b"], vec!["c", "d"], vec!["e"], vec!["f", "g"]]
        );
        assert_eq!(slides[2].number, Some(1));
        assert_eq!(slides[3].kind, SectionKind::Chorus);
        assert_eq!(slides[3].section_index, 1);
    }

    #[test]
    fn test_slide_never_spans_sections() {
        let slides = segment(&sample(), 10).unwrap();
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].lines.len(), 5);
    }

    #[test]
    fn test_empty_section_yields_nothing() {
        let hymn = HymnStructure::new(vec![
            Section::verse(1, Vec::<String>::new()),
            Section::chorus(["x"]),
        ]);
        let slides = segment(&hymn, 2).unwrap();
        assert_eq!(slides.len(), 1);
        assert!(slides.iter().all(|s| !s.lines.is_empty()));
    }

    #[test]
    fn test_zero_lines_per_slide_rejected() {
        assert!(matches!(
            segment(&sample(), 0),
            Err(Error::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_invalid_structure_rejected() {
        let mut hymn = sample();
        hymn.sections[0].number = None;
        assert!(matches!(
            segment(&hymn, 2),
            Err(Error::InvalidStructure { section: 0, .. })
        ));
    }

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use crate::hymn::Section;
        use proptest::prelude::*;

        /// Strategy to generate a section of any kind with a valid number
        fn section_strategy() -> impl Strategy<Value = Section> {
            (
                0u8..4,
                1u32..6,
                prop::collection::vec("[a-zA-Z ,.']{0,12}", 0..9),
            )
                .prop_map(|(kind, number, lines)| match kind {
                    0 => Section::verse(number, lines),
                    1 => Section::chorus(lines),
                    2 => Section::bridge(lines),
                    _ => Section::other(lines),
                })
        }

        fn hymn_strategy() -> impl Strategy<Value = HymnStructure> {
            prop::collection::vec(section_strategy(), 0..6).prop_map(HymnStructure::new)
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_segmentation_is_deterministic(hymn in hymn_strategy(), per in 1usize..5) {
                let first = segment(&hymn, per).unwrap();
                let second = segment(&hymn, per).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn prop_chunks_cover_each_section(hymn in hymn_strategy(), per in 1usize..5) {
                let slides = segment(&hymn, per).unwrap();
                for slide in &slides {
                    prop_assert!(!slide.lines.is_empty());
                    prop_assert!(slide.lines.len() <= per);
                }
                for (index, section) in hymn.sections.iter().enumerate() {
                    let own: Vec<&Slide> = slides.iter().filter(|s| s.section_index == index).collect();
                    let total: usize = own.iter().map(|s| s.lines.len()).sum();
                    prop_assert_eq!(total, section.lines.len());
                    prop_assert_eq!(own.len(), section.lines.len().div_ceil(per));
                    let rebuilt: Vec<&str> = own.iter().flat_map(|s| s.lines.iter().map(String::as_str)).collect();
                    let source: Vec<&str> = section.lines.iter().map(|l| l.text.as_str()).collect();
                    prop_assert_eq!(rebuilt, source);
                }
                // section order is preserved
                prop_assert!(slides.windows(2).all(|w| w[0].section_index <= w[1].section_index));
            }
        }
    }
}
