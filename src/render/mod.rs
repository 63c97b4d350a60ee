mod canvas;
mod frame;
mod null_figure;
mod primitives;
mod svg;

use std::path::Path;

pub use canvas::{Canvas, POINTS_PER_INCH};
pub use frame::RenderFrame;
pub use null_figure::{NullFigure, SaveAttempt};
pub use primitives::{
    Bounds, Color, LinePrimitive, RectPrimitive, TextExtent, TextHAlign, TextPrimitive,
};
pub use svg::SvgRenderer;

use crate::error::FigureResult;
use crate::export::{ExportFormat, SaveOptions};

/// Contract implemented by any file-writing backend.
///
/// Backends receive a fully placed `RenderFrame`, so cropping and option
/// resolution stay out of drawing code.
pub trait Renderer {
    fn backend_name(&self) -> &'static str;

    fn supports(&self, format: ExportFormat) -> bool;

    /// Laid-out size of `text` with this backend's fonts, when it can tell.
    fn measure_text(&self, _text: &TextPrimitive) -> Option<TextExtent> {
        None
    }

    fn render_to_file(
        &mut self,
        frame: &RenderFrame,
        format: ExportFormat,
        options: &SaveOptions,
        path: &Path,
    ) -> FigureResult<()>;
}

/// Picks the backend for `format`: SVG is always built in, the rest need the
/// `cairo-backend` feature.
pub fn renderer_for(format: ExportFormat) -> FigureResult<Box<dyn Renderer>> {
    if format == ExportFormat::Svg {
        return Ok(Box::new(SvgRenderer));
    }

    #[cfg(feature = "cairo-backend")]
    {
        return Ok(Box::new(CairoRenderer::default()));
    }

    #[cfg(not(feature = "cairo-backend"))]
    {
        Err(crate::error::FigureError::UnsupportedFormat {
            format,
            reason: "requires the `cairo-backend` feature".to_owned(),
        })
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
