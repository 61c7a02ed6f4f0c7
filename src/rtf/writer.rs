//! Cocoa-dialect RTF writer.
//!
//! Writes the subset of RTF the ProPresenter text engine reads back: one
//! font, a small colour table, one centred paragraph style and plain runs.

use crate::common::Rgba;
use crate::slides::layout::tab_stops_twips;
use std::io::{self, Write};

/// Cocoa RTF version stamped into the header.
const COCOA_RTF_VERSION: i32 = 2639;

/// RTF writer producing the Cocoa text system dialect.
pub struct RtfWriter<W: Write> {
    /// Output writer
    writer: W,
}

impl<W: Write> RtfWriter<W> {
    /// Create a new RTF writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the document header and open the outer group.
    pub fn write_document_header(&mut self) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("rtf", Some(1))?;
        self.write_control_word("ansi", None)?;
        self.write_control_word("ansicpg", Some(1252))?;
        self.write_control_word("cocoartf", Some(COCOA_RTF_VERSION))?;
        self.write_str("\n")?;
        self.write_control_word("cocoatextscaling", Some(0))?;
        self.write_control_word("cocoaplatform", Some(0))?;
        Ok(())
    }

    /// Write a single-entry font table (`\f0`).
    pub fn write_font_table(&mut self, family: &str) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("fonttbl", None)?;
        self.write_control_word("f", Some(0))?;
        self.write_control_word("fswiss", None)?;
        self.write_control_word("fcharset", Some(0))?;
        self.write_str(" ")?;
        self.write_text(family)?;
        self.write_str(";}\n")
    }

    /// Write the colour table and its Cocoa expanded twin.
    ///
    /// Index 0 is the reserved auto colour; `colors[i]` becomes `\cf{i + 1}`.
    pub fn write_color_table(&mut self, colors: &[Rgba]) -> io::Result<()> {
        self.write_str("{")?;
        self.write_control_word("colortbl", None)?;
        self.write_str(";")?;
        for color in colors {
            let [r, g, b, _] = color.to_rgb8();
            self.write_control_word("red", Some(i32::from(r)))?;
            self.write_control_word("green", Some(i32::from(g)))?;
            self.write_control_word("blue", Some(i32::from(b)))?;
            self.write_str(";")?;
        }
        self.write_str("}\n")?;

        self.write_str("{")?;
        self.write_control_word("*", None)?;
        self.write_control_word("expandedcolortbl", None)?;
        self.write_str(";")?;
        for color in colors {
            self.write_control_word("csgenericrgb", None)?;
            self.write_control_word("c", Some(expanded_channel(color.red)))?;
            self.write_control_word("c", Some(expanded_channel(color.green)))?;
            self.write_control_word("c", Some(expanded_channel(color.blue)))?;
            if color.alpha < 1.0 {
                self.write_control_word("c", Some(expanded_channel(color.alpha)))?;
            }
            self.write_str(";")?;
        }
        self.write_str("}\n")
    }

    /// Reset paragraph formatting to the centred style with fixed tab stops.
    pub fn write_paragraph_properties(&mut self) -> io::Result<()> {
        self.write_control_word("pard", None)?;
        for stop in tab_stops_twips() {
            self.write_control_word("tx", Some(stop as i32))?;
        }
        self.write_control_word("pardirnatural", None)?;
        self.write_control_word("qc", None)?;
        self.write_control_word("partightenfactor", Some(0))?;
        self.write_str("\n\n")
    }

    /// Write character formatting for the following run.
    pub fn write_character_properties(
        &mut self,
        half_points: i32,
        bold: bool,
        color_index: i32,
    ) -> io::Result<()> {
        self.write_control_word("f", Some(0))?;
        if bold {
            self.write_control_word("b", None)?;
        }
        self.write_control_word("fs", Some(half_points))?;
        self.write_str(" ")?;
        self.write_control_word("cf", Some(color_index))?;
        self.write_str(" ")
    }

    /// Close the outer group.
    pub fn write_document_end(&mut self) -> io::Result<()> {
        self.write_str("}")
    }

    /// Write a control word
    pub fn write_control_word(&mut self, word: &str, param: Option<i32>) -> io::Result<()> {
        self.write_str("\\")?;
        self.write_str(word)?;
        if let Some(p) = param {
            write!(self.writer, "{}", p)?;
        }
        Ok(())
    }

    /// Write plain text (with proper escaping)
    ///
    /// Newlines become a backslash followed by a literal line break, which is
    /// how Cocoa stores a line break inside one paragraph.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            match ch {
                '\\' => self.write_str("\\\\")?,
                '{' => self.write_str("\\{")?,
                '}' => self.write_str("\\}")?,
                '\r' => {},
                '\n' => self.write_str("\\\n")?,
                '\t' => self.write_control_word("tab", None)?,
                c if c.is_ascii() => {
                    write!(self.writer, "{}", c)?;
                },
                c => {
                    let mut units = [0u16; 2];
                    for unit in c.encode_utf16(&mut units) {
                        // \u takes a signed 16-bit value
                        self.write_control_word("uc", Some(0))?;
                        self.write_control_word("u", Some(i32::from(*unit as i16)))?;
                        self.write_str(" ")?;
                    }
                },
            }
        }
        Ok(())
    }

    /// Write a string
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.writer.write_all(s.as_bytes())
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Channel value on the expanded colour table's 0..=100000 scale.
fn expanded_channel(value: f64) -> i32 {
    (value.clamp(0.0, 1.0) * 100_000.0).round() as i32
}
