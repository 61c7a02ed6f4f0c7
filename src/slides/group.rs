//! Section grouping shared by the presentation encoders.
//!
//! Both ProPresenter formats organise slides into named, coloured groups.
//! The grouping is computed once here and rendered by each encoder into its
//! own substrate, so the two formats always agree on names, colours and
//! membership.
//!
//! Neither format is given an arrangement. Pro7 plays cues in document
//! order, which is deck order. Pro6 nests slides inside groups, so it
//! renders one grouping per contiguous [`SectionRun`] to keep deck order.

use crate::common::Rgba;
use crate::hymn::SectionKind;
use std::collections::HashMap;
use std::fmt;

/// Colours handed to verse groups, in order of first appearance.
pub const VERSE_PALETTE: [Rgba; 6] = [
    Rgba::rgb(0.0, 0.47, 0.9),
    Rgba::rgb(0.16, 0.67, 0.33),
    Rgba::rgb(0.93, 0.5, 0.13),
    Rgba::rgb(0.58, 0.29, 0.79),
    Rgba::rgb(0.0, 0.65, 0.65),
    Rgba::rgb(0.86, 0.2, 0.4),
];

/// Colour of chorus, bridge and untyped groups.
pub const NEUTRAL_GROUP_COLOR: Rgba = Rgba::rgb(0.5, 0.5, 0.5);

/// Colour of the title ("Intro") group.
pub const TITLE_GROUP_COLOR: Rgba = Rgba::rgb(0.95, 0.77, 0.06);

/// Identity of a section for grouping and label injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Title,
    Verse(u32),
    Chorus,
    Bridge,
    Other,
}

impl SectionKey {
    /// Key for a section of the given kind.
    ///
    /// Verse numbers are guaranteed by structure validation; a missing one
    /// maps to verse 0 so the key stays total.
    pub fn from_section(kind: SectionKind, number: Option<u32>) -> Self {
        match kind {
            SectionKind::Verse => SectionKey::Verse(number.unwrap_or(0)),
            SectionKind::Chorus => SectionKey::Chorus,
            SectionKind::Bridge => SectionKey::Bridge,
            SectionKind::Other => SectionKey::Other,
        }
    }

    /// Group name shown in the viewer.
    pub fn group_name(&self) -> String {
        match self {
            SectionKey::Title => "Intro".to_string(),
            SectionKey::Verse(n) => format!("Verse {}", n),
            SectionKey::Chorus => "Refrain".to_string(),
            SectionKey::Bridge => "Bridge".to_string(),
            SectionKey::Other => "Other".to_string(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKey::Title => f.write_str("title"),
            SectionKey::Verse(n) => write!(f, "verse-{}", n),
            SectionKey::Chorus => f.write_str("chorus"),
            SectionKey::Bridge => f.write_str("bridge"),
            SectionKey::Other => f.write_str("other"),
        }
    }
}

/// A named, coloured bucket of slides sharing one section identity.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup {
    pub key: SectionKey,
    pub name: String,
    pub color: Rgba,
    /// Deck slide indices, in playback order
    pub slides: Vec<usize>,
}

/// Consecutive deck slides belonging to one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRun {
    /// Index into [`Grouping::groups`]
    pub group: usize,
    pub slides: Vec<usize>,
}

/// Groups plus the contiguous runs that reproduce deck order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grouping {
    /// Groups in order of first appearance
    pub groups: Vec<SectionGroup>,
    /// Runs in deck order; concatenating their slides yields `0..len`
    pub runs: Vec<SectionRun>,
}

/// Assigns slides to groups.
///
/// The verse palette position lives in the grouper itself, so each
/// generation call starts its colour cycle from the first palette entry.
#[derive(Debug, Default)]
pub struct SectionGrouper {
    index: HashMap<SectionKey, usize>,
    grouping: Grouping,
    next_verse_color: usize,
}

impl SectionGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next slide (by deck index) as belonging to `key`.
    pub fn push(&mut self, slide: usize, key: SectionKey) {
        let group_index = match self.index.get(&key) {
            Some(&existing) => existing,
            None => {
                let color = self.color_for(key);
                self.grouping.groups.push(SectionGroup {
                    key,
                    name: key.group_name(),
                    color,
                    slides: Vec::new(),
                });
                let created = self.grouping.groups.len() - 1;
                self.index.insert(key, created);
                created
            },
        };

        self.grouping.groups[group_index].slides.push(slide);
        match self.grouping.runs.last_mut() {
            Some(run) if run.group == group_index => run.slides.push(slide),
            _ => self.grouping.runs.push(SectionRun {
                group: group_index,
                slides: vec![slide],
            }),
        }
    }

    fn color_for(&mut self, key: SectionKey) -> Rgba {
        match key {
            SectionKey::Title => TITLE_GROUP_COLOR,
            SectionKey::Verse(_) => {
                let color = VERSE_PALETTE[self.next_verse_color % VERSE_PALETTE.len()];
                self.next_verse_color += 1;
                color
            },
            _ => NEUTRAL_GROUP_COLOR,
        }
    }

    pub fn finish(self) -> Grouping {
        self.grouping
    }
}

/// Group a sequence of slide keys.
pub fn group_keys<I>(keys: I) -> Grouping
where
    I: IntoIterator<Item = SectionKey>,
{
    let mut grouper = SectionGrouper::new();
    for (slide, key) in keys.into_iter().enumerate() {
        grouper.push(slide, key);
    }
    grouper.finish()
}
