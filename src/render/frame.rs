use crate::error::{FigureError, FigureResult};
use crate::render::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic page for one save: size in points, primitives already
/// placed in page coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub width_pt: f64,
    pub height_pt: f64,
    /// `None` leaves the page transparent.
    pub background: Option<Color>,
    pub edgecolor: Option<Color>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(width_pt: f64, height_pt: f64) -> Self {
        Self {
            width_pt,
            height_pt,
            background: None,
            edgecolor: None,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Moves every primitive by `(dx, dy)`.
    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        for line in &mut self.lines {
            line.x1 += dx;
            line.x2 += dx;
            line.y1 += dy;
            line.y2 += dy;
        }
        for rect in &mut self.rects {
            rect.x += dx;
            rect.y += dy;
        }
        for text in &mut self.texts {
            text.x += dx;
            text.y += dy;
        }
    }

    pub fn validate(&self) -> FigureResult<()> {
        if !self.width_pt.is_finite()
            || !self.height_pt.is_finite()
            || self.width_pt <= 0.0
            || self.height_pt <= 0.0
        {
            return Err(FigureError::InvalidFigure(format!(
                "page size must be finite and > 0: {}x{} pt",
                self.width_pt, self.height_pt
            )));
        }
        if let Some(color) = self.background {
            color.validate()?;
        }
        if let Some(color) = self.edgecolor {
            color.validate()?;
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
