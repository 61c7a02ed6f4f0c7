//! Normalised hymn structure consumed by the encoders.
//!
//! A [`HymnStructure`] is produced upstream by the lyric parser. The codec
//! only checks its structural invariants; it never re-parses or re-cleans
//! the text.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a lyric section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Verse,
    Chorus,
    Bridge,
    Other,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SectionKind::Verse => "verse",
            SectionKind::Chorus => "chorus",
            SectionKind::Bridge => "bridge",
            SectionKind::Other => "other",
        })
    }
}

/// One lyric line, already cleaned by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub text: String,
    /// Position of the line in the source text
    pub original_index: usize,
}

impl Line {
    pub fn new(text: impl Into<String>, original_index: usize) -> Self {
        Self {
            text: text.into(),
            original_index,
        }
    }
}

/// A verse, chorus, bridge or untyped block of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Verse number; present iff `kind == Verse`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    pub lines: Vec<Line>,
}

impl Section {
    /// Create a numbered verse.
    pub fn verse<I, S>(number: u32, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(SectionKind::Verse, Some(number), lines)
    }

    /// Create a chorus.
    pub fn chorus<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(SectionKind::Chorus, None, lines)
    }

    /// Create a bridge.
    pub fn bridge<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(SectionKind::Bridge, None, lines)
    }

    /// Create an untyped section.
    pub fn other<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(SectionKind::Other, None, lines)
    }

    fn with_kind<I, S>(kind: SectionKind, number: Option<u32>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            number,
            lines: lines
                .into_iter()
                .enumerate()
                .map(|(i, text)| Line::new(text, i))
                .collect(),
        }
    }

    /// Check the `number` iff verse invariant.
    fn validate(&self, index: usize) -> Result<()> {
        match (self.kind, self.number) {
            (SectionKind::Verse, None) => Err(Error::InvalidStructure {
                section: index,
                reason: "verse section has no number".to_string(),
            }),
            (SectionKind::Verse, Some(0)) => Err(Error::InvalidStructure {
                section: index,
                reason: "verse numbers start at 1".to_string(),
            }),
            (kind, Some(n)) if kind != SectionKind::Verse => Err(Error::InvalidStructure {
                section: index,
                reason: format!("{} section carries verse number {}", kind, n),
            }),
            _ => Ok(()),
        }
    }
}

/// Ordered sections of a hymn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HymnStructure {
    pub sections: Vec<Section>,
}

impl HymnStructure {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Validate every section, reporting the first offender.
    pub fn validate(&self) -> Result<()> {
        self.sections
            .iter()
            .enumerate()
            .try_for_each(|(i, section)| section.validate(i))
    }

    /// Total number of lines across all sections.
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.lines.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_number_lines() {
        let section = Section::verse(1, ["a", "b", "c"]);
        assert_eq!(section.kind, SectionKind::Verse);
        assert_eq!(section.number, Some(1));
        assert_eq!(section.lines[2], Line::new("c", 2));
    }

    #[test]
    fn test_valid_structure() {
        let hymn = HymnStructure::new(vec![
            Section::verse(1, ["a"]),
            Section::chorus(["b"]),
            Section::bridge(["c"]),
            Section::other(["d"]),
        ]);
        assert!(hymn.validate().is_ok());
        assert_eq!(hymn.line_count(), 4);
    }

    #[test]
    fn test_verse_without_number_rejected() {
        let mut verse = Section::verse(1, ["a"]);
        verse.number = None;
        let hymn = HymnStructure::new(vec![Section::chorus(["x"]), verse]);
        match hymn.validate() {
            Err(Error::InvalidStructure { section, reason }) => {
                assert_eq!(section, 1);
                assert!(reason.contains("no number"));
            },
            other => panic!("expected InvalidStructure, got {:?}", other),
        }
    }

    #[test]
    fn test_numbered_chorus_rejected() {
        let mut chorus = Section::chorus(["a"]);
        chorus.number = Some(2);
        let hymn = HymnStructure::new(vec![chorus]);
        assert!(matches!(
            hymn.validate(),
            Err(Error::InvalidStructure { section: 0, .. })
        ));
    }

    #[test]
    fn test_verse_zero_rejected() {
        let hymn = HymnStructure::new(vec![Section::verse(0, ["a"])]);
        assert!(hymn.validate().is_err());
    }
}
