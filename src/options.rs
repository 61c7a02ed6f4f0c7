//! Presentation options.
//!
//! One immutable [`PresentationOptions`] value is handed to a generation call
//! and read by every encoder, so a given option always has the same effect
//! in every output format.

use crate::common::{Error, Result, Rgba};
use serde::{Deserialize, Serialize};

/// Ratio between title-slide and content font sizes (160pt : 140pt).
pub const TITLE_SIZE_NUMERATOR: f64 = 8.0;
pub const TITLE_SIZE_DENOMINATOR: f64 = 7.0;

/// Smallest font size, in points, accepted for any slide.
pub const MIN_FONT_SIZE: f64 = 1.0;
/// Largest font size, in points, accepted for any slide (PowerPoint's `sz` ceiling).
pub const MAX_FONT_SIZE: f64 = 4000.0;

/// Everything a caller can tune about generated presentations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresentationOptions {
    /// Maximum number of lyric lines per slide
    pub lines_per_slide: usize,
    /// Prepend a slide carrying the hymn title
    pub include_title_slide: bool,
    /// Prefix the first line of each verse with its number and of the chorus with "Refrain:"
    pub include_verse_numbers: bool,
    /// Remove punctuation from lyric lines at render time
    pub strip_punctuation: bool,
    pub font_family: String,
    /// Content font size in points
    pub font_size: f64,
    pub background_color: Rgba,
    pub text_color: Rgba,
    pub outline_color: Rgba,
    pub include_shadow: bool,
    pub include_outline: bool,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub ccli_number: Option<u32>,
    pub copyright_year: Option<u32>,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            lines_per_slide: 2,
            include_title_slide: true,
            include_verse_numbers: false,
            strip_punctuation: false,
            font_family: "Arial".to_string(),
            font_size: 70.0,
            background_color: Rgba::BLACK,
            text_color: Rgba::WHITE,
            outline_color: Rgba::BLACK,
            include_shadow: true,
            include_outline: false,
            author: None,
            publisher: None,
            ccli_number: None,
            copyright_year: None,
        }
    }
}

impl PresentationOptions {
    /// Load options from a YAML document and validate them.
    ///
    /// Missing keys fall back to [`PresentationOptions::default`].
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse presentation options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize options to YAML.
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize presentation options: {}", e)))
    }

    /// Reject values no encoder can honour.
    pub fn validate(&self) -> Result<()> {
        if self.lines_per_slide == 0 {
            return Err(Error::InvalidOptions(
                "linesPerSlide must be at least 1".to_string(),
            ));
        }
        // The title size is derived, so it has to fit the same range
        for (name, size) in [
            ("fontSize", self.font_size),
            ("title font size", self.title_font_size()),
        ] {
            if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
                return Err(Error::InvalidOptions(format!(
                    "{} must be between {} and {} points, got {}",
                    name, MIN_FONT_SIZE, MAX_FONT_SIZE, size
                )));
            }
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::InvalidOptions("fontFamily is empty".to_string()));
        }
        for (name, color) in [
            ("backgroundColor", &self.background_color),
            ("textColor", &self.text_color),
            ("outlineColor", &self.outline_color),
        ] {
            color
                .validate()
                .map_err(|e| Error::InvalidOptions(format!("{}: {}", name, e)))?;
        }
        Ok(())
    }

    /// Font size for the title slide.
    pub fn title_font_size(&self) -> f64 {
        self.font_size * TITLE_SIZE_NUMERATOR / TITLE_SIZE_DENOMINATOR
    }

    /// Font size for a slide, in points.
    pub fn font_size_for(&self, is_title: bool) -> f64 {
        if is_title {
            self.title_font_size()
        } else {
            self.font_size
        }
    }

    /// Whether any copyright metadata was supplied.
    pub fn has_copyright(&self) -> bool {
        self.author.is_some()
            || self.publisher.is_some()
            || self.ccli_number.is_some()
            || self.copyright_year.is_some()
    }
}
