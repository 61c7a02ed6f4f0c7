//! Render-time text transforms applied to slide lines.
//!
//! Both transforms run once, in the shared deck, so every output format
//! shows exactly the same words for the same options.

use super::group::SectionKey;
use std::collections::HashSet;

/// Characters removed by [`strip_punctuation`].
const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '\u{2014}', '\u{2013}', '\u{201C}', '\u{201D}',
    '\u{2018}', '\u{2019}', '\u{201E}', '\u{00AB}', '\u{00BB}',
];

/// Apostrophes that survive when they join two word characters.
const APOSTROPHES: &[char] = &['\'', '\u{2019}'];

/// Words whose leading apostrophe marks an elision (`'Tis`, `'neath`).
const ELIDED_WORDS: &[&str] = &[
    "tis", "twas", "twere", "twill", "twould", "tween", "twixt", "neath", "gainst", "mid",
    "midst", "round",
];

/// Remove punctuation and collapse the gaps it leaves.
///
/// Apostrophes inside words (contractions such as `o'er` or `God's`),
/// leading apostrophes of elided words (`'Tis`, `'Twas`) and hyphens are
/// kept. Removed characters become spaces, so `Lord—my` turns into
/// `Lord my` rather than `Lordmy`. The transform is idempotent.
pub fn strip_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if !PUNCTUATION.contains(&c) {
            out.push(c);
            continue;
        }
        let keep = APOSTROPHES.contains(&c) && {
            let after_word = i > 0 && chars[i - 1].is_alphanumeric();
            let before_word = chars.get(i + 1).is_some_and(|next| next.is_alphanumeric());
            (after_word && before_word) || (!after_word && starts_elision(&chars[i + 1..]))
        };
        out.push(if keep { c } else { ' ' });
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether `rest` begins with one of [`ELIDED_WORDS`], case-insensitively.
fn starts_elision(rest: &[char]) -> bool {
    let word: String = rest
        .iter()
        .take_while(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();
    ELIDED_WORDS.contains(&word.as_str())
}

/// Injects verse numbers and the refrain label.
///
/// The first slide of each verse gets `"{n} "` in front of its first line,
/// the first chorus slide gets `"Refrain: "`. Each section key is labelled
/// once; later slides (and later repeats) of the same key are left alone.
#[derive(Debug, Default)]
pub struct SectionLabeler {
    seen: HashSet<SectionKey>,
}

impl SectionLabeler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label `lines` (in place) if this is the first slide seen for `key`.
    pub fn label(&mut self, key: SectionKey, lines: &mut [String]) {
        let prefix = match key {
            SectionKey::Verse(n) => format!("{} ", n),
            SectionKey::Chorus => "Refrain: ".to_string(),
            _ => return,
        };
        if !self.seen.insert(key) {
            return;
        }
        if let Some(first) = lines.first_mut() {
            first.insert_str(0, &prefix);
        }
    }
}
