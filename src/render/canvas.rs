use std::path::Path;

use tracing::debug;

use crate::error::{FigureError, FigureResult};
use crate::export::{ExportFormat, Figure, SaveOptions};
use crate::journal::MM_PER_INCH;
use crate::render::{
    Bounds, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextExtent, TextHAlign,
    TextPrimitive, renderer_for,
};
use crate::style::StyleConfig;

pub const POINTS_PER_INCH: f64 = 72.0;

const DEFAULT_FIGSIZE_IN: (f64, f64) = (6.4, 4.8);
const DEFAULT_LINE_WIDTH_PT: f64 = 1.5;
const DEFAULT_FONT_SIZE_PT: f64 = 10.0;

/// In-memory figure with a physical size, drawn with point-space primitives
/// (origin top-left).
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width_in: f64,
    height_in: f64,
    pub background: Color,
    pub line_width_pt: f64,
    pub font_size_pt: f64,
    color_cycle: Vec<Color>,
    cycle_position: usize,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl Canvas {
    pub fn new(width_in: f64, height_in: f64) -> FigureResult<Self> {
        if !width_in.is_finite() || !height_in.is_finite() || width_in <= 0.0 || height_in <= 0.0
        {
            return Err(FigureError::InvalidFigure(format!(
                "figure size must be finite and > 0: {width_in}x{height_in} in"
            )));
        }
        Ok(Self {
            width_in,
            height_in,
            background: Color::WHITE,
            line_width_pt: DEFAULT_LINE_WIDTH_PT,
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            color_cycle: Vec::new(),
            cycle_position: 0,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        })
    }

    pub fn from_mm(width_mm: f64, height_mm: f64) -> FigureResult<Self> {
        Self::new(width_mm / MM_PER_INCH, height_mm / MM_PER_INCH)
    }

    /// Seeds size, background, color cycle, line width and font size from
    /// `figure.figsize`, `figure.facecolor`, `axes.prop_cycle`,
    /// `lines.linewidth` and `font.size`.
    pub fn from_style(style: &StyleConfig) -> FigureResult<Self> {
        let (width_in, height_in) = style.get_pair("figure.figsize").unwrap_or(DEFAULT_FIGSIZE_IN);
        let mut canvas = Self::new(width_in, height_in)?;
        if let Some(facecolor) = style.get_str("figure.facecolor") {
            canvas.background = Color::parse(facecolor)?;
        }
        if let Some(cycle) = style.color_cycle() {
            canvas.color_cycle = cycle.to_vec();
        }
        if let Some(width) = style.get_f64("lines.linewidth") {
            canvas.line_width_pt = width;
        }
        if let Some(size) = style.get_f64("font.size") {
            canvas.font_size_pt = size;
        }
        debug!(width_in, height_in, cycle = canvas.color_cycle.len(), "canvas from style");
        Ok(canvas)
    }

    #[must_use]
    pub fn size_points(&self) -> (f64, f64) {
        (
            self.width_in * POINTS_PER_INCH,
            self.height_in * POINTS_PER_INCH,
        )
    }

    #[must_use]
    pub fn color_cycle(&self) -> &[Color] {
        &self.color_cycle
    }

    /// Next cycle color, wrapping around; black when the cycle is empty.
    pub fn next_color(&mut self) -> Color {
        if self.color_cycle.is_empty() {
            return Color::BLACK;
        }
        let color = self.color_cycle[self.cycle_position % self.color_cycle.len()];
        self.cycle_position += 1;
        color
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    /// Connects `points` with the next cycle color and returns that color.
    pub fn add_polyline(&mut self, points: &[(f64, f64)]) -> Color {
        let color = self.next_color();
        let width = self.line_width_pt;
        self.lines.extend(points.windows(2).map(|pair| {
            let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
            LinePrimitive::new(x1, y1, x2, y2, width, color)
        }));
        color
    }

    /// Adds a black label at the canvas font size.
    pub fn add_label(&mut self, text: impl Into<String>, x: f64, y: f64, h_align: TextHAlign) {
        self.texts.push(TextPrimitive::new(
            text,
            x,
            y,
            self.font_size_pt,
            Color::BLACK,
            h_align,
        ));
    }

    /// Extent of everything drawn, with text sized by its upper-bound estimate.
    #[must_use]
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.content_bounds_with(&mut |text: &TextPrimitive| text.estimated_extent())
    }

    /// Extent of everything drawn, with text sized by `measure`.
    pub fn content_bounds_with(
        &self,
        measure: &mut dyn FnMut(&TextPrimitive) -> TextExtent,
    ) -> Option<Bounds> {
        let shapes = self
            .lines
            .iter()
            .map(|line| line.bounds())
            .chain(self.rects.iter().map(|rect| rect.bounds()));
        let texts = self.texts.iter().map(|text| text.bounds_with(measure(text)));
        shapes.chain(texts).reduce(Bounds::union)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    /// Page for one save: the whole canvas, or the drawn content plus
    /// `pad_inches` when `tight_bbox` is set and something is drawn.
    ///
    /// Text is sized by its upper-bound estimate; see [`Canvas::page_frame_for`].
    pub fn page_frame(&self, options: &SaveOptions) -> FigureResult<RenderFrame> {
        self.frame_around(self.content_bounds(), options)
    }

    /// Like [`Canvas::page_frame`], but text is sized by `renderer`'s own
    /// metrics where it offers them.
    pub fn page_frame_for(
        &self,
        options: &SaveOptions,
        renderer: &dyn Renderer,
    ) -> FigureResult<RenderFrame> {
        let bounds = self.content_bounds_with(&mut |text: &TextPrimitive| {
            renderer
                .measure_text(text)
                .unwrap_or_else(|| text.estimated_extent())
        });
        self.frame_around(bounds, options)
    }

    fn frame_around(
        &self,
        content: Option<Bounds>,
        options: &SaveOptions,
    ) -> FigureResult<RenderFrame> {
        let (width_pt, height_pt) = self.size_points();
        let page = match content {
            Some(bounds) if options.tight_bbox => {
                bounds.padded(options.pad_inches * POINTS_PER_INCH)
            }
            _ => Bounds {
                left: 0.0,
                top: 0.0,
                right: width_pt,
                bottom: height_pt,
            },
        };

        let mut frame = RenderFrame::new(page.width(), page.height());
        frame.background = options.facecolor;
        frame.edgecolor = options.edgecolor;
        frame.lines.clone_from(&self.lines);
        frame.rects.clone_from(&self.rects);
        frame.texts.clone_from(&self.texts);
        frame.translate(-page.left, -page.top);
        frame.validate()?;
        Ok(frame)
    }
}

impl Figure for Canvas {
    fn size_inches(&self) -> (f64, f64) {
        (self.width_in, self.height_in)
    }

    fn save(
        &mut self,
        path: &Path,
        format: ExportFormat,
        options: &SaveOptions,
    ) -> FigureResult<()> {
        let mut renderer = renderer_for(format)?;
        let frame = self.page_frame_for(options, &*renderer)?;
        debug!(
            path = %path.display(),
            %format,
            backend = renderer.backend_name(),
            width_pt = frame.width_pt,
            height_pt = frame.height_pt,
            "rendering canvas"
        );
        renderer.render_to_file(&frame, format, options, path)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn tight_bbox_crops_to_content_plus_padding() {
        let canvas = Canvas::new(4.0, 3.0).expect("canvas").with_rect(RectPrimitive::new(
            72.0,
            72.0,
            36.0,
            18.0,
            Color::BLACK,
        ));

        let frame = canvas
            .page_frame(&SaveOptions::default().with_pad_inches(0.5))
            .expect("frame");

        assert_relative_eq!(frame.width_pt, 36.0 + 72.0);
        assert_relative_eq!(frame.height_pt, 18.0 + 72.0);
        assert_relative_eq!(frame.rects[0].x, 36.0);
        assert_relative_eq!(frame.rects[0].y, 36.0);
    }

    #[test]
    fn empty_canvas_keeps_full_page_even_when_tight() {
        let canvas = Canvas::new(2.0, 1.0).expect("canvas");
        let frame = canvas.page_frame(&SaveOptions::default()).expect("frame");
        assert_relative_eq!(frame.width_pt, 144.0);
        assert_relative_eq!(frame.height_pt, 72.0);
    }

    #[test]
    fn color_cycle_wraps() {
        let mut canvas = Canvas::new(1.0, 1.0).expect("canvas");
        assert_eq!(canvas.next_color(), Color::BLACK);

        canvas.color_cycle = vec![Color::WHITE, Color::BLACK];
        assert_eq!(canvas.next_color(), Color::WHITE);
        assert_eq!(canvas.next_color(), Color::BLACK);
        assert_eq!(canvas.next_color(), Color::WHITE);
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(Canvas::new(0.0, 1.0).is_err());
        assert!(Canvas::from_mm(89.0, f64::NAN).is_err());
    }
}
