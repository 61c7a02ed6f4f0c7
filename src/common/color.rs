//! RGBA colour shared by every encoder.
//!
//! Channels are stored normalised to `[0, 1]`. ProPresenter 7 wants 32-bit
//! floats, ProPresenter 6 wants space separated decimal channels, RTF colour
//! tables and DrawingML want 0-255 integers; all of those are derived from
//! this one representation so the formats cannot drift apart.

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    /// Create an opaque colour.
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// Create a colour with an explicit alpha channel.
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a colour from 0-255 channels.
    pub fn from_rgb8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red: f64::from(red) / 255.0,
            green: f64::from(green) / 255.0,
            blue: f64::from(blue) / 255.0,
            alpha: f64::from(alpha) / 255.0,
        }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(format!(
                "'{}' is not a hexadecimal colour",
                input
            )));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| Error::InvalidColor(format!("'{}': {}", input, e)))
        };

        match hex.len() {
            3 => {
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::from_rgb8(short(0)?, short(1)?, short(2)?, 255))
            },
            6 => Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Ok(Self::from_rgb8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            n => Err(Error::InvalidColor(format!(
                "'{}' has {} hex digits, expected 3, 6 or 8",
                input, n
            ))),
        }
    }

    /// Reject channels outside `[0, 1]` or non-finite values.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidColor(format!(
                    "{} channel {} is outside [0, 1]",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Channels scaled to 0-255 (red, green, blue, alpha).
    pub fn to_rgb8(&self) -> [u8; 4] {
        let scale = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            scale(self.red),
            scale(self.green),
            scale(self.blue),
            scale(self.alpha),
        ]
    }

    /// `RRGGBB` without the alpha channel, as DrawingML expects.
    pub fn to_hex_rgb(&self) -> String {
        let [r, g, b, _] = self.to_rgb8();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Space separated `r g b a` channel list used by ProPresenter 6.
    pub fn to_channel_list(&self) -> String {
        format!(
            "{} {} {} {}",
            format_channel(self.red),
            format_channel(self.green),
            format_channel(self.blue),
            format_channel(self.alpha)
        )
    }

    /// Parse the `r g b a` form written by [`Rgba::to_channel_list`].
    pub fn from_channel_list(input: &str) -> Result<Self> {
        let channels = input
            .split_whitespace()
            .map(|part| {
                part.parse::<f64>()
                    .map_err(|e| Error::InvalidColor(format!("'{}': {}", input, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        match channels.as_slice() {
            [r, g, b, a] => {
                let color = Self::rgba(*r, *g, *b, *a);
                color.validate()?;
                Ok(color)
            },
            _ => Err(Error::InvalidColor(format!(
                "'{}' must have four channels",
                input
            ))),
        }
    }

    /// The same colour with a different alpha.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

/// Shortest decimal form, limited to six fractional digits.
fn format_channel(value: f64) -> String {
    let rounded = (value * 1_000_000.0).round() / 1_000_000.0;
    // Display already drops a trailing ".0"
    format!("{}", rounded + 0.0)
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgb8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Rgba> for String {
    fn from(value: Rgba) -> Self {
        value.to_string()
    }
}
