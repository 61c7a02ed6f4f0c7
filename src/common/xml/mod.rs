//! XML helpers shared by the XML-based writers.

mod escape;

pub use escape::escape_xml;
