//! Rich-text encoding for slide text.
//!
//! Both ProPresenter encoders embed each slide's text as an RTF document in
//! the Cocoa dialect. [`RichText`] builds that document from the slide text
//! and a [`TextStyle`]; [`RtfWriter`] is the control-word level writer under
//! it.
//!
//! # Example
//!
//! ```
//! use canticle::options::PresentationOptions;
//! use canticle::rtf::{RichText, TextStyle};
//!
//! let style = TextStyle::for_slide(&PresentationOptions::default(), false);
//! let text = RichText::new("Amazing grace\nhow sweet the sound", &style)?;
//! assert!(!text.to_base64().is_empty());
//! # Ok::<(), canticle::Error>(())
//! ```

pub mod payload;
pub mod writer;

pub use payload::{RichText, TextStyle};
pub use writer::RtfWriter;
