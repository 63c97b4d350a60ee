use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{FigureError, FigureResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#RRGGBB`, `RRGGBB`, `#RRGGBBAA` or `RRGGBBAA`.
    pub fn from_hex(hex: &str) -> FigureResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FigureError::InvalidColor(format!(
                "`{hex}` is not a #RRGGBB or #RRGGBBAA hex color"
            )));
        }

        let channel = |index: usize| -> FigureResult<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|err| FigureError::InvalidColor(format!("`{hex}`: {err}")))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Parses a hex color or one of the names `white`, `black` and `none`.
    ///
    /// `none` maps to fully transparent black.
    pub fn parse(value: &str) -> FigureResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Self::WHITE),
            "black" | "k" => Ok(Self::BLACK),
            "none" | "transparent" => Ok(Self::rgba(0.0, 0.0, 0.0, 0.0)),
            other => Self::from_hex(other),
        }
    }

    /// Uppercase `#RRGGBB`; the alpha byte is appended only when not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02X}{:02X}{:02X}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if byte(self.alpha) == u8::MAX {
            rgb
        } else {
            format!("{rgb}{:02X}", byte(self.alpha))
        }
    }

    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    pub fn validate(self) -> FigureResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FigureError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Draw command for one line segment in point space (1/72 in, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> FigureResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(FigureError::InvalidFigure(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(FigureError::InvalidFigure(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }

    pub(crate) fn bounds(self) -> Bounds {
        let half = self.stroke_width / 2.0;
        Bounds {
            left: self.x1.min(self.x2) - half,
            top: self.y1.min(self.y2) - half,
            right: self.x1.max(self.x2) + half,
            bottom: self.y1.max(self.y2) + half,
        }
    }
}

/// Filled rectangle with an optional border, in point space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::BLACK,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    pub fn validate(self) -> FigureResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(FigureError::InvalidFigure(
                "rect origin must be finite".to_owned(),
            ));
        }
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(FigureError::InvalidFigure(
                "rect size must be finite and > 0".to_owned(),
            ));
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(FigureError::InvalidFigure(
                "rect border width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.border_color.validate()
    }

    pub(crate) fn bounds(self) -> Bounds {
        let half = self.border_width / 2.0;
        Bounds {
            left: self.x - half,
            top: self.y - half,
            right: self.x + self.width + half,
            bottom: self.y + self.height + half,
        }
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// One label in point space; `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_pt: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_pt: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_pt,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> FigureResult<()> {
        if self.text.is_empty() {
            return Err(FigureError::InvalidFigure(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(FigureError::InvalidFigure(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(FigureError::InvalidFigure(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }

    /// Upper-bound extent for when no backend metrics are available.
    #[must_use]
    pub fn estimated_extent(&self) -> TextExtent {
        TextExtent {
            width: self.text.chars().count() as f64 * self.font_size_pt * MAX_ADVANCE_EM,
            ascent: self.font_size_pt * MAX_ASCENT_EM,
            descent: self.font_size_pt * MAX_DESCENT_EM,
        }
    }

    /// Page-space box of this label laid out with `extent`.
    #[must_use]
    pub fn bounds_with(&self, extent: TextExtent) -> Bounds {
        let left = match self.h_align {
            TextHAlign::Left => self.x,
            TextHAlign::Center => self.x - extent.width / 2.0,
            TextHAlign::Right => self.x - extent.width,
        };
        Bounds {
            left,
            top: self.y - extent.ascent,
            right: left + extent.width,
            bottom: self.y + extent.descent,
        }
    }
}

// No glyph in common sans faces advances more than 1 em or rises above it.
const MAX_ADVANCE_EM: f64 = 1.0;
const MAX_ASCENT_EM: f64 = 1.0;
const MAX_DESCENT_EM: f64 = 0.3;

/// Laid-out size of one label in points, measured from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

/// Axis-aligned box in point space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    #[must_use]
    pub fn padded(self, pad: f64) -> Self {
        Self {
            left: self.left - pad,
            top: self.top - pad,
            right: self.right + pad,
            bottom: self.bottom + pad,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, TextExtent, TextHAlign, TextPrimitive};

    #[test]
    fn hex_parse_accepts_optional_hash_and_alpha() {
        let orange = Color::from_hex("#E69F00").expect("valid hex");
        assert_eq!(orange, Color::from_hex("e69f00").expect("valid hex"));
        assert_eq!(orange.to_hex(), "#E69F00");

        let translucent = Color::from_hex("#00000080").expect("valid hex");
        assert_eq!(translucent.to_hex(), "#00000080");
    }

    #[test]
    fn hex_parse_rejects_malformed_values() {
        for bad in ["", "#FFF", "#GGGGGG", "#1234567", "red"] {
            assert!(Color::from_hex(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn named_colors_parse() {
        assert_eq!(Color::parse("white").expect("white"), Color::WHITE);
        assert!(Color::parse("none").expect("none").is_transparent());
    }

    #[test]
    fn estimated_extent_covers_wide_glyphs() {
        let label = TextPrimitive::new("MMMM", 50.0, 20.0, 10.0, Color::BLACK, TextHAlign::Center);
        let extent = label.estimated_extent();
        assert!(extent.width >= 40.0);

        let bounds = label.bounds_with(extent);
        assert_eq!(bounds.left, 50.0 - extent.width / 2.0);
        assert!(bounds.top <= 20.0 - 8.0);
    }

    #[test]
    fn measured_extent_places_right_aligned_text() {
        let label = TextPrimitive::new("x", 100.0, 50.0, 10.0, Color::BLACK, TextHAlign::Right);
        let bounds = label.bounds_with(TextExtent {
            width: 30.0,
            ascent: 9.0,
            descent: 3.0,
        });
        assert_eq!(bounds.left, 70.0);
        assert_eq!(bounds.right, 100.0);
        assert_eq!(bounds.top, 41.0);
        assert_eq!(bounds.bottom, 53.0);
    }
}
