//! ProPresenter 7 (`.pro`) encoder.
//!
//! A `.pro` file is a single protobuf `rv.data.Presentation` message. The
//! encoder turns a [`Deck`] into that object graph (one cue per slide, one
//! cue group per section, no arrangement), validates it and
//! serializes it with prost.
//!
//! - **schema**: the `rv.data` message subset, declared with prost derives
//! - **builder**: deck to object graph, in dependency order
//! - **validate**: field-path checks run before serialization

pub mod builder;
pub mod schema;
pub mod validate;

pub use builder::Pro7Builder;
pub use validate::validate_presentation;

use crate::common::{Identity, Result};
use crate::options::PresentationOptions;
use crate::slides::Deck;

/// Encode a deck as ProPresenter 7 bytes.
pub fn encode<I: Identity>(
    deck: &Deck,
    options: &PresentationOptions,
    identity: &mut I,
) -> Result<Vec<u8>> {
    Pro7Builder::new(options, identity).encode(deck)
}
