//! Format selection and the single export entry point.
//!
//! [`export`] takes a hymn, its title and the presentation options, builds
//! the shared deck once and hands it to the encoder for the requested
//! format. The result carries the suggested filename and content type
//! alongside the bytes or text.

use crate::common::{Error, Identity, Result, SystemIdentity};
use crate::hymn::HymnStructure;
use crate::options::PresentationOptions;
use crate::slides::Deck;
use crate::{pptx, pro6, pro7, text};
use std::fmt;
use std::str::FromStr;

/// Every selector accepted by [`OutputFormat::from_str`].
pub const SUPPORTED_FORMATS: &[&str] = &[
    "pptx",
    "propresenter6",
    "pro6",
    "propresenter7",
    "pro7",
    "pro",
    "text",
    "txt",
    "text-per-slide",
];

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Pptx,
    ProPresenter6,
    ProPresenter7,
    Text,
    TextPerSlide,
}

impl OutputFormat {
    /// Canonical file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pptx => "pptx",
            OutputFormat::ProPresenter6 => "pro6",
            OutputFormat::ProPresenter7 => "pro",
            OutputFormat::Text | OutputFormat::TextPerSlide => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            },
            OutputFormat::ProPresenter6 => "application/xml",
            OutputFormat::ProPresenter7 => "application/octet-stream",
            OutputFormat::Text | OutputFormat::TextPerSlide => "text/plain; charset=utf-8",
        }
    }

    /// Whether the encoded output is binary rather than UTF-8 text.
    pub fn is_binary(self) -> bool {
        matches!(self, OutputFormat::Pptx | OutputFormat::ProPresenter7)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Selectors are matched case-insensitively after trimming.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pptx" => Ok(OutputFormat::Pptx),
            "propresenter6" | "pro6" => Ok(OutputFormat::ProPresenter6),
            "propresenter7" | "pro7" | "pro" => Ok(OutputFormat::ProPresenter7),
            "text" | "txt" => Ok(OutputFormat::Text),
            "text-per-slide" => Ok(OutputFormat::TextPerSlide),
            _ => Err(Error::UnsupportedFormat {
                requested: s.to_string(),
                supported: SUPPORTED_FORMATS.to_vec(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Pptx => "pptx",
            OutputFormat::ProPresenter6 => "propresenter6",
            OutputFormat::ProPresenter7 => "propresenter7",
            OutputFormat::Text => "text",
            OutputFormat::TextPerSlide => "text-per-slide",
        };
        f.write_str(name)
    }
}

/// Encoded document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Binary(Vec<u8>),
    Text(String),
}

impl Output {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Output::Binary(bytes) => bytes,
            Output::Text(text) => text.as_bytes(),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Output::Binary(bytes) => bytes,
            Output::Text(text) => text.into_bytes(),
        }
    }
}

/// A finished export: suggested filename, content type and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub content_type: &'static str,
    pub output: Output,
}

/// Filename for `title` in `format`.
///
/// Every character that is not an ASCII letter or digit becomes `_`.
/// A blank title falls back to `hymn`.
pub fn export_filename(title: &str, format: OutputFormat) -> String {
    let title = title.trim();
    let stem: String = if title.is_empty() {
        "hymn".to_string()
    } else {
        title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!("{}.{}", stem, format.extension())
}

/// Export with random identifiers and the current time.
pub fn export(
    hymn: &HymnStructure,
    title: &str,
    options: &PresentationOptions,
    format: OutputFormat,
) -> Result<Export> {
    export_with_identity(hymn, title, options, format, &mut SystemIdentity)
}

/// Export drawing identifiers and timestamps from `identity`.
///
/// With a [`SeededIdentity`](crate::common::SeededIdentity) the output is
/// byte-identical across calls.
pub fn export_with_identity<I: Identity>(
    hymn: &HymnStructure,
    title: &str,
    options: &PresentationOptions,
    format: OutputFormat,
    identity: &mut I,
) -> Result<Export> {
    let deck = Deck::build(hymn, title, options)?;
    log::debug!("exporting '{}' as {}: {} slides", deck.title, format, deck.len());

    let output = match format {
        OutputFormat::Pptx => Output::Binary(pptx::encode(&deck, options)?),
        OutputFormat::ProPresenter6 => Output::Text(pro6::encode(&deck, options, identity)?),
        OutputFormat::ProPresenter7 => Output::Binary(pro7::encode(&deck, options, identity)?),
        OutputFormat::Text => Output::Text(text::render_text(&deck)),
        OutputFormat::TextPerSlide => Output::Text(text::render_text_per_slide(&deck)),
    };

    Ok(Export {
        filename: export_filename(title, format),
        content_type: format.content_type(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SeededIdentity;
    use crate::hymn::Section;

    fn hymn() -> HymnStructure {
        HymnStructure::new(vec![
            Section::verse(1, ["Holy, holy, holy", "Lord God Almighty"]),
            Section::chorus(["God in three persons"]),
        ])
    }

    #[test]
    fn test_format_aliases() {
        let cases = [
            ("pptx", OutputFormat::Pptx),
            ("propresenter6", OutputFormat::ProPresenter6),
            ("pro6", OutputFormat::ProPresenter6),
            ("propresenter7", OutputFormat::ProPresenter7),
            ("pro7", OutputFormat::ProPresenter7),
            ("pro", OutputFormat::ProPresenter7),
            ("text", OutputFormat::Text),
            ("txt", OutputFormat::Text),
            ("text-per-slide", OutputFormat::TextPerSlide),
            (" PPTX ", OutputFormat::Pptx),
        ];
        for (selector, expected) in cases {
            assert_eq!(selector.parse::<OutputFormat>().unwrap(), expected, "{selector}");
        }
    }

    #[test]
    fn test_unknown_format_lists_choices() {
        match "keynote".parse::<OutputFormat>() {
            Err(Error::UnsupportedFormat { requested, supported }) => {
                assert_eq!(requested, "keynote");
                assert_eq!(supported, SUPPORTED_FORMATS);
            },
            other => panic!("expected unsupported format, got {other:?}"),
        }
    }

    #[test]
    fn test_display_parses_back() {
        for format in [
            OutputFormat::Pptx,
            OutputFormat::ProPresenter6,
            OutputFormat::ProPresenter7,
            OutputFormat::Text,
            OutputFormat::TextPerSlide,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_filename_convention() {
        assert_eq!(
            export_filename("Holy, Holy, Holy!", OutputFormat::ProPresenter7),
            "Holy__Holy__Holy_.pro"
        );
        assert_eq!(export_filename("Amazing Grace", OutputFormat::Pptx), "Amazing_Grace.pptx");
        assert_eq!(export_filename("Été", OutputFormat::ProPresenter6), "_t_.pro6");
        assert_eq!(export_filename("  ", OutputFormat::TextPerSlide), "hymn.txt");
    }

    #[test]
    fn test_export_envelope() {
        let options = PresentationOptions::default();
        let mut identity = SeededIdentity::from_seed("export");

        let pro6 = export_with_identity(&hymn(), "Holy", &options, OutputFormat::ProPresenter6, &mut identity)
            .unwrap();
        assert_eq!(pro6.filename, "Holy.pro6");
        assert_eq!(pro6.content_type, "application/xml");
        assert!(matches!(&pro6.output, Output::Text(xml) if xml.starts_with("<?xml")));

        let pro7 = export_with_identity(&hymn(), "Holy", &options, OutputFormat::ProPresenter7, &mut identity)
            .unwrap();
        assert!(matches!(pro7.output, Output::Binary(_)));

        let pptx = export(&hymn(), "Holy", &options, OutputFormat::Pptx).unwrap();
        assert!(pptx.output.as_bytes().starts_with(b"PK"));
        assert!(OutputFormat::Pptx.is_binary());
    }

    #[test]
    fn test_text_export() {
        let options = PresentationOptions {
            include_title_slide: false,
            ..Default::default()
        };
        let export = export(&hymn(), "Holy", &options, OutputFormat::TextPerSlide).unwrap();
        assert_eq!(export.content_type, "text/plain; charset=utf-8");
        assert_eq!(
            String::from_utf8(export.output.into_bytes()).unwrap(),
            "--- Slide 1 ---\nHoly, holy, holy\nLord God Almighty\n\n--- Slide 2 ---\nGod in three persons\n"
        );
    }

    #[test]
    fn test_invalid_options_rejected_before_encoding() {
        let options = PresentationOptions {
            lines_per_slide: 0,
            ..Default::default()
        };
        assert!(matches!(
            export(&hymn(), "Holy", &options, OutputFormat::Pptx),
            Err(Error::InvalidOptions(_))
        ));
    }
}
