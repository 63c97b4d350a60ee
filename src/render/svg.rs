use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{FigureError, FigureResult};
use crate::export::{ExportFormat, SaveOptions};
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Dependency-free SVG writer; units are points.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn render_to_string(&self, frame: &RenderFrame) -> FigureResult<String> {
        frame.validate()?;
        let mut svg = String::new();
        write_document(&mut svg, frame).map_err(|err| FigureError::Backend(format!("svg: {err}")))?;
        Ok(svg)
    }
}

impl Renderer for SvgRenderer {
    fn backend_name(&self) -> &'static str {
        "svg"
    }

    fn supports(&self, format: ExportFormat) -> bool {
        format == ExportFormat::Svg
    }

    fn render_to_file(
        &mut self,
        frame: &RenderFrame,
        format: ExportFormat,
        _options: &SaveOptions,
        path: &Path,
    ) -> FigureResult<()> {
        if !self.supports(format) {
            return Err(FigureError::UnsupportedFormat {
                format,
                reason: "the svg backend only writes svg".to_owned(),
            });
        }
        let svg = self.render_to_string(frame)?;
        fs::write(path, svg)?;
        Ok(())
    }
}

fn write_document(svg: &mut String, frame: &RenderFrame) -> std::fmt::Result {
    let (width, height) = (frame.width_pt, frame.height_pt);
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}pt" height="{height}pt" viewBox="0 0 {width} {height}">"#
    )?;

    if let Some(background) = frame.background {
        writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{width}" height="{height}" {}/>"#,
            fill(background)
        )?;
    }

    for rect in &frame.rects {
        write!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" {}"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            fill(rect.fill_color)
        )?;
        if rect.border_width > 0.0 {
            write!(svg, " {}", stroke(rect.border_color, rect.border_width))?;
        }
        writeln!(svg, "/>")?;
    }

    for line in &frame.lines {
        writeln!(
            svg,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" {} stroke-linecap="round"/>"#,
            line.x1,
            line.y1,
            line.x2,
            line.y2,
            stroke(line.color, line.stroke_width)
        )?;
    }

    for text in &frame.texts {
        let anchor = match text.h_align {
            TextHAlign::Left => "start",
            TextHAlign::Center => "middle",
            TextHAlign::Right => "end",
        };
        writeln!(
            svg,
            r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="{anchor}" {}>{}</text>"#,
            text.x,
            text.y,
            text.font_size_pt,
            fill(text.color),
            escape_xml(&text.text)
        )?;
    }

    if let Some(edge) = frame.edgecolor {
        writeln!(
            svg,
            r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="none" {}/>"#,
            stroke(edge, 1.0)
        )?;
    }

    writeln!(svg, "</svg>")
}

fn fill(color: Color) -> String {
    format!(
        r#"fill="{}" fill-opacity="{}""#,
        opaque_hex(color),
        color.alpha
    )
}

fn stroke(color: Color, width: f64) -> String {
    format!(
        r#"stroke="{}" stroke-opacity="{}" stroke-width="{width}""#,
        opaque_hex(color),
        color.alpha
    )
}

fn opaque_hex(color: Color) -> String {
    Color { alpha: 1.0, ..color }.to_hex()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{LinePrimitive, TextPrimitive};

    #[test]
    fn document_carries_point_size_and_escaped_text() {
        let mut frame = RenderFrame::new(100.0, 50.0);
        frame.background = Some(Color::WHITE);
        frame
            .lines
            .push(LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.0, Color::BLACK));
        frame.texts.push(TextPrimitive::new(
            "a < b & c",
            5.0,
            20.0,
            8.0,
            Color::BLACK,
            TextHAlign::Left,
        ));

        let svg = SvgRenderer.render_to_string(&frame).expect("svg");

        assert!(svg.contains(r#"width="100pt" height="50pt""#));
        assert!(svg.contains("a &lt; b &amp; c"));
        assert_eq!(svg.matches("<line").count(), 1);
    }

    #[test]
    fn transparent_frame_has_no_background_rect() {
        let frame = RenderFrame::new(10.0, 10.0);
        let svg = SvgRenderer.render_to_string(&frame).expect("svg");
        assert!(!svg.contains("<rect"));
    }
}
