use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, PdfSurface, PsSurface};
use pango::FontDescription;
use tiff::encoder::{Rational, TiffEncoder, colortype};
use tiff::tags::ResolutionUnit;

use crate::error::{FigureError, FigureResult};
use crate::export::{ExportFormat, SaveOptions};
use crate::render::{
    Color, POINTS_PER_INCH, RenderFrame, Renderer, TextExtent, TextHAlign, TextPrimitive,
};

const METERS_PER_INCH: f64 = 0.0254;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo backend.
///
/// Vector formats (PDF, EPS) draw straight onto Cairo surfaces in points.
/// Raster formats draw onto an ARGB image surface scaled to the requested DPI
/// and are encoded with `png` and `tiff` so the files declare that DPI.
/// SVG stays with the built-in writer.
#[derive(Debug, Default)]
pub struct CairoRenderer {
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn draw(&mut self, context: &Context, frame: &RenderFrame) -> FigureResult<()> {
        let mut stats = CairoRenderStats::default();

        if let Some(background) = frame.background {
            apply_color(context, background);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to paint background", err))?;
        }

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        context.set_line_cap(cairo::LineCap::Round);
        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let layout = text_layout(context, text);
            let extent = layout_extent(&layout);
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - extent.width / 2.0,
                TextHAlign::Right => text.x - extent.width,
            };

            apply_color(context, text.color);
            context.move_to(x, text.y - extent.ascent);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        if let Some(edge) = frame.edgecolor {
            apply_color(context, edge);
            context.set_line_width(1.0);
            context.rectangle(0.0, 0.0, frame.width_pt, frame.height_pt);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke page edge", err))?;
        }

        self.last_stats = stats;
        Ok(())
    }

    fn render_raster(&mut self, frame: &RenderFrame, dpi: u32) -> FigureResult<ImageSurface> {
        let scale = f64::from(dpi) / POINTS_PER_INCH;
        let width_px = (frame.width_pt * scale).ceil() as i32;
        let height_px = (frame.height_pt * scale).ceil() as i32;
        if width_px <= 0 || height_px <= 0 {
            return Err(FigureError::InvalidFigure(
                "raster size must be > 0 pixels".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width_px, height_px)
            .map_err(|err| map_backend_error("failed to create image surface", err))?;
        {
            let context = Context::new(&surface)
                .map_err(|err| map_backend_error("failed to create cairo context", err))?;
            context.scale(scale, scale);
            self.draw(&context, frame)?;
        }
        surface.flush();
        Ok(surface)
    }
}

impl Renderer for CairoRenderer {
    fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    fn supports(&self, format: ExportFormat) -> bool {
        format != ExportFormat::Svg
    }

    fn measure_text(&self, text: &TextPrimitive) -> Option<TextExtent> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1).ok()?;
        let context = Context::new(&surface).ok()?;
        Some(layout_extent(&text_layout(&context, text)))
    }

    fn render_to_file(
        &mut self,
        frame: &RenderFrame,
        format: ExportFormat,
        options: &SaveOptions,
        path: &Path,
    ) -> FigureResult<()> {
        frame.validate()?;
        let (width, height) = (frame.width_pt, frame.height_pt);

        match format {
            ExportFormat::Pdf => {
                let surface = PdfSurface::new(width, height, path)
                    .map_err(|err| map_backend_error("failed to create pdf surface", err))?;
                self.draw_vector(&surface, frame)?;
                surface.finish();
            }
            ExportFormat::Eps => {
                let surface = PsSurface::new(width, height, path)
                    .map_err(|err| map_backend_error("failed to create eps surface", err))?;
                surface.set_eps(true);
                self.draw_vector(&surface, frame)?;
                surface.finish();
            }
            ExportFormat::Png => {
                let mut surface = self.render_raster(frame, options.dpi)?;
                let pixels = RgbaPixels::from_surface(&mut surface)?;
                write_png(&pixels, options.dpi, path)?;
            }
            ExportFormat::Tiff => {
                let mut surface = self.render_raster(frame, options.dpi)?;
                let pixels = RgbaPixels::from_surface(&mut surface)?;
                write_tiff(&pixels, options.dpi, path)?;
            }
            ExportFormat::Svg => {
                return Err(FigureError::UnsupportedFormat {
                    format,
                    reason: "svg is written by the built-in svg backend".to_owned(),
                });
            }
        }
        Ok(())
    }
}

impl CairoRenderer {
    fn draw_vector<S: AsRef<cairo::Surface>>(
        &mut self,
        surface: &S,
        frame: &RenderFrame,
    ) -> FigureResult<()> {
        let context = Context::new(surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.draw(&context, frame)
    }
}

/// Straight (non-premultiplied) RGBA8 copy of an image surface.
struct RgbaPixels {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaPixels {
    /// Converts Cairo's premultiplied native-endian ARGB32.
    fn from_surface(surface: &mut ImageSurface) -> FigureResult<Self> {
        let width = surface.width() as usize;
        let height = surface.height() as usize;
        let stride = surface.stride() as usize;
        let data = surface
            .data()
            .map_err(|err| FigureError::Backend(format!("failed to read image surface: {err}")))?;

        let mut rgba = Vec::with_capacity(width * height * 4);
        for row in data.chunks(stride).take(height) {
            for pixel in row[..width * 4].chunks_exact(4) {
                let argb = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
                let alpha = (argb >> 24) as u8;
                let unpremultiply = |channel: u32| -> u8 {
                    if alpha == 0 {
                        0
                    } else {
                        ((channel & 0xFF) * 255 / u32::from(alpha)).min(255) as u8
                    }
                };
                rgba.extend_from_slice(&[
                    unpremultiply(argb >> 16),
                    unpremultiply(argb >> 8),
                    unpremultiply(argb),
                    alpha,
                ]);
            }
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
            data: rgba,
        })
    }
}

/// PNG with a `pHYs` chunk carrying `dpi` (in pixels per meter).
fn write_png(pixels: &RgbaPixels, dpi: u32, path: &Path) -> FigureResult<()> {
    let png_error = |err: png::EncodingError| FigureError::Backend(format!("failed to write png: {err}"));
    let pixels_per_meter = (f64::from(dpi) / METERS_PER_INCH).round() as u32;

    let mut encoder = png::Encoder::new(BufWriter::new(File::create(path)?), pixels.width, pixels.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_pixel_dims(Some(png::PixelDimensions {
        xppu: pixels_per_meter,
        yppu: pixels_per_meter,
        unit: png::Unit::Meter,
    }));
    let mut writer = encoder.write_header().map_err(png_error)?;
    writer.write_image_data(&pixels.data).map_err(png_error)?;
    writer.finish().map_err(png_error)
}

/// TIFF with XResolution/YResolution of `dpi` per inch.
fn write_tiff(pixels: &RgbaPixels, dpi: u32, path: &Path) -> FigureResult<()> {
    let tiff_error = |err: tiff::TiffError| FigureError::Backend(format!("failed to write tiff: {err}"));

    let mut encoder = TiffEncoder::new(BufWriter::new(File::create(path)?)).map_err(tiff_error)?;
    let mut image = encoder
        .new_image::<colortype::RGBA8>(pixels.width, pixels.height)
        .map_err(tiff_error)?;
    image.resolution(ResolutionUnit::Inch, Rational { n: dpi, d: 1 });
    image.write_data(&pixels.data).map_err(tiff_error)
}

fn text_layout(context: &Context, text: &TextPrimitive) -> pango::Layout {
    let layout = pangocairo::functions::create_layout(context);
    let mut font_description = FontDescription::from_string("Sans");
    font_description.set_absolute_size(text.font_size_pt * f64::from(pango::SCALE));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);
    layout
}

fn layout_extent(layout: &pango::Layout) -> TextExtent {
    let scale = f64::from(pango::SCALE);
    let (width, height) = layout.size();
    let baseline = f64::from(layout.baseline()) / scale;
    TextExtent {
        width: f64::from(width) / scale,
        ascent: baseline,
        descent: f64::from(height) / scale - baseline,
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> FigureError {
    FigureError::Backend(format!("{prefix}: {err}"))
}
