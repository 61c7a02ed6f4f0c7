//! Canvas geometry and effect constants shared by the ProPresenter encoders.

use crate::common::Rgba;

/// Canvas size in points.
pub const CANVAS_WIDTH: f64 = 1920.0;
pub const CANVAS_HEIGHT: f64 = 1080.0;

/// Inset between the canvas edge and the text box.
pub const TEXT_INSET: f64 = 60.0;

/// Width of the text outline, in points.
pub const STROKE_WIDTH: f64 = 3.0;

/// Fill colour of the text box. The fill is written disabled in both formats.
pub const TEXT_BOX_FILL: Rgba = Rgba::rgba(0.0, 0.0, 0.0, 0.0);

/// RTF tab stop spacing in twips (the Cocoa text system default).
pub const TAB_INTERVAL_TWIPS: u32 = 560;

/// Number of explicit tab stops written per paragraph.
pub const TAB_STOP_COUNT: u32 = 12;

/// Axis-aligned rectangle in canvas points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The full canvas.
    pub const fn canvas() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }

    /// The fixed text box every slide uses.
    pub const fn text_box() -> Self {
        Self {
            x: TEXT_INSET,
            y: TEXT_INSET,
            width: CANVAS_WIDTH - 2.0 * TEXT_INSET,
            height: CANVAS_HEIGHT - 2.0 * TEXT_INSET,
        }
    }
}

/// Tab stop positions in twips.
pub fn tab_stops_twips() -> impl Iterator<Item = u32> {
    (1..=TAB_STOP_COUNT).map(|i| i * TAB_INTERVAL_TWIPS)
}

/// Tab stop positions in points (20 twips per point).
pub fn tab_stops_points() -> impl Iterator<Item = f64> {
    tab_stops_twips().map(|t| f64::from(t) / 20.0)
}

/// Drop shadow behind the slide text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSpec {
    /// Direction in degrees, counter-clockwise from +x with +y pointing up
    pub angle: f64,
    /// Distance from the text, in points
    pub distance: f64,
    /// Blur radius, in points
    pub radius: f64,
    pub color: Rgba,
    pub opacity: f64,
}

/// Down-right shadow used on every slide.
pub const TEXT_SHADOW: ShadowSpec = ShadowSpec {
    angle: 315.0,
    distance: 5.0,
    radius: 5.0,
    color: Rgba::BLACK,
    opacity: 0.75,
};

impl ShadowSpec {
    /// Signed `(x, y)` offset in a y-up coordinate system.
    ///
    /// 315 degrees gives a positive x and a negative y, i.e. down and to the
    /// right on screen. Values are rounded to six decimals.
    pub fn offset_xy(&self) -> (f64, f64) {
        let radians = self.angle.to_radians();
        let round = |v: f64| ((v * 1_000_000.0).round() / 1_000_000.0) + 0.0;
        (
            round(self.distance * radians.cos()),
            round(self.distance * radians.sin()),
        )
    }
}
