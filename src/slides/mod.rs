//! Slide model shared by all output formats.
//!
//! - **segment**: chunks sections into slides
//! - **text**: punctuation stripping and verse/refrain labels
//! - **group**: named, coloured section groups and their contiguous runs
//! - **deck**: the display-ready slide list every encoder renders
//! - **layout**: canvas geometry and effect constants

pub mod deck;
pub mod group;
pub mod layout;
pub mod segment;
pub mod text;

pub use deck::{Deck, DeckSlide};
pub use group::{Grouping, SectionGroup, SectionGrouper, SectionKey, SectionRun};
pub use segment::{Slide, segment};
pub use text::{SectionLabeler, strip_punctuation};
