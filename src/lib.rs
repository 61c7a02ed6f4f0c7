//! Canticle - presentation files for hymn lyrics
//!
//! This library turns a hymn (title plus ordered verse, chorus and bridge
//! sections) into files that presentation software can open directly.
//!
//! # Features
//!
//! - **ProPresenter 7**: binary protobuf `.pro` documents with cues and cue groups
//! - **ProPresenter 6**: XML `.pro6` documents with base64 RTF slide text
//! - **PowerPoint**: `.pptx` decks with one centred text box per slide
//! - **Plain text**: all slides, or one `--- Slide N ---` block per slide
//! - **Deterministic output**: inject a seeded identity to get byte-identical files
//!
//! # Example - Exporting a hymn
//!
//! ```
//! use canticle::{HymnStructure, OutputFormat, PresentationOptions, Section, export};
//!
//! # fn main() -> Result<(), canticle::Error> {
//! let hymn = HymnStructure::new(vec![
//!     Section::verse(1, ["Amazing grace, how sweet the sound", "That saved a wretch like me"]),
//!     Section::chorus(["Praise God, praise God"]),
//! ]);
//!
//! let options = PresentationOptions::default();
//! let format: OutputFormat = "pro7".parse()?;
//! let export = export(&hymn, "Amazing Grace", &options, format)?;
//! assert_eq!(export.filename, "Amazing_Grace.pro");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reproducible output
//!
//! ```
//! use canticle::common::SeededIdentity;
//! use canticle::{HymnStructure, OutputFormat, PresentationOptions, Section, export_with_identity};
//!
//! # fn main() -> Result<(), canticle::Error> {
//! let hymn = HymnStructure::new(vec![Section::verse(1, ["Holy, holy, holy"])]);
//! let options = PresentationOptions::default();
//!
//! let render = || {
//!     let mut identity = SeededIdentity::from_seed("holy");
//!     export_with_identity(&hymn, "Holy", &options, OutputFormat::ProPresenter6, &mut identity)
//! };
//! assert_eq!(render()?.output, render()?.output);
//! # Ok(())
//! # }
//! ```

/// Shared error type, colour model, XML escaping and the identity seam
pub mod common;

/// Hymn input structure and its validation
pub mod hymn;

/// Presentation options, defaults and YAML loading
pub mod options;

/// Segmentation, labels, grouping and the rendered deck
pub mod slides;

/// Cocoa-dialect RTF payloads
pub mod rtf;

/// ProPresenter 7 binary encoder
pub mod pro7;

/// ProPresenter 6 XML encoder
pub mod pro6;

/// PowerPoint encoder
pub mod pptx;

/// Plain-text renderings
pub mod text;

/// Format selection and the export entry point
pub mod export;

// Re-export commonly used types for convenience
pub use common::{Error, Result, Rgba};
pub use export::{Export, Output, OutputFormat, export, export_filename, export_with_identity};
pub use hymn::{HymnStructure, Section, SectionKind};
pub use options::PresentationOptions;
pub use slides::{Deck, DeckSlide};
