#![cfg(feature = "cairo-backend")]

use std::fs::{self, File};

use pubfig::render::{CairoRenderer, Renderer, TextHAlign};
use pubfig::{
    Canvas, ExportFormat, FigureError, SaveOptions, save_for_journal,
    save_publication_figure,
};
use tiff::decoder::{Decoder, ifd::Value};
use tiff::tags::Tag;

fn sample_canvas() -> Canvas {
    let mut canvas = Canvas::new(3.5, 2.5).expect("canvas");
    canvas.add_polyline(&[(20.0, 150.0), (80.0, 60.0), (160.0, 100.0), (230.0, 30.0)]);
    canvas.add_label("Concentration (mM)", 125.0, 170.0, TextHAlign::Center);
    canvas
}

#[test]
fn cairo_writes_every_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut canvas = sample_canvas();

    let report = save_publication_figure(
        &mut canvas,
        dir.path().join("figure"),
        &ExportFormat::ALL,
        &SaveOptions::default(),
    );

    assert!(report.is_complete(), "{report}");
    for format in ExportFormat::ALL {
        let path = dir.path().join(format!("figure.{}", format.extension()));
        let size = fs::metadata(&path).expect("file written").len();
        assert!(size > 0, "{} is empty", path.display());
    }

    let pdf = fs::read(dir.path().join("figure.pdf")).expect("pdf");
    assert!(pdf.starts_with(b"%PDF"));
    let png = fs::read(dir.path().join("figure.png")).expect("png");
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn cairo_renderer_counts_drawn_primitives() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canvas = sample_canvas();
    let options = SaveOptions::default().with_dpi(72);
    let frame = canvas.page_frame(&options).expect("frame");

    let mut renderer = CairoRenderer::default();
    renderer
        .render_to_file(&frame, ExportFormat::Png, &options, &dir.path().join("f.png"))
        .expect("render");

    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 3);
    assert_eq!(stats.texts_drawn, 1);
    assert_eq!(stats.rects_drawn, 0);
}

#[test]
fn png_declares_its_resolution() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut canvas = sample_canvas();

    let report = save_publication_figure(
        &mut canvas,
        dir.path().join("dpi"),
        &[ExportFormat::Png],
        &SaveOptions::default().with_dpi(300),
    );
    assert!(report.is_complete(), "{report}");

    let file = File::open(dir.path().join("dpi.png")).expect("png");
    let reader = png::Decoder::new(file).read_info().expect("png header");
    let dims = reader.info().pixel_dims.expect("pHYs chunk");

    // 300 dpi is 11811 pixels per meter.
    assert_eq!(dims.xppu, 11811);
    assert_eq!(dims.yppu, 11811);
    assert!(matches!(dims.unit, png::Unit::Meter));
}

#[test]
fn journal_photo_tiff_declares_journal_dpi() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut canvas = sample_canvas();

    let report = save_for_journal(&mut canvas, dir.path().join("photo"), "nature", "photo")
        .expect("nature");
    assert!(report.is_complete(), "{report}");

    let file = File::open(dir.path().join("photo.tiff")).expect("tiff");
    let mut decoder = Decoder::new(file).expect("tiff header");
    let x_resolution = decoder.get_tag(Tag::XResolution).expect("x resolution");
    let y_resolution = decoder.get_tag(Tag::YResolution).expect("y resolution");
    let unit = decoder.get_tag_u32(Tag::ResolutionUnit).expect("unit");

    assert!(matches!(x_resolution, Value::Rational(300, 1)));
    assert!(matches!(y_resolution, Value::Rational(300, 1)));
    // 2 = inch
    assert_eq!(unit, 2);
}

#[test]
fn raster_pixel_size_follows_dpi() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut canvas = Canvas::new(1.0, 0.5).expect("canvas");

    save_publication_figure(
        &mut canvas,
        dir.path().join("blank"),
        &[ExportFormat::Png],
        &SaveOptions::default().with_dpi(144),
    );

    let file = File::open(dir.path().join("blank.png")).expect("png");
    let reader = png::Decoder::new(file).read_info().expect("png header");
    assert_eq!(reader.info().width, 144);
    assert_eq!(reader.info().height, 72);
}

#[test]
fn cairo_leaves_svg_to_the_built_in_writer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let canvas = sample_canvas();
    let options = SaveOptions::default();
    let frame = canvas.page_frame(&options).expect("frame");

    let mut renderer = CairoRenderer::default();
    assert!(!renderer.supports(ExportFormat::Svg));
    let err = renderer
        .render_to_file(&frame, ExportFormat::Svg, &options, &dir.path().join("f.svg"))
        .expect_err("svg goes through the svg backend");
    assert!(matches!(err, FigureError::UnsupportedFormat { format: ExportFormat::Svg, .. }));

    let mut canvas = sample_canvas();
    let report = save_publication_figure(
        &mut canvas,
        dir.path().join("vector"),
        &[ExportFormat::Svg],
        &options,
    );
    assert!(report.is_complete(), "{report}");
    let svg = fs::read_to_string(dir.path().join("vector.svg")).expect("svg");
    assert!(svg.contains("<line"));
}

#[test]
fn tight_frame_fits_pango_measured_labels() {
    let mut canvas = Canvas::new(4.0, 2.0).expect("canvas");
    canvas.add_label("MMMMMMMMMMMMMMMMMMMM", 144.0, 72.0, TextHAlign::Center);
    let renderer = CairoRenderer::default();
    let options = SaveOptions::default();

    let extent = renderer
        .measure_text(&canvas.texts[0])
        .expect("pango metrics");
    let frame = canvas.page_frame_for(&options, &renderer).expect("frame");
    let text = &frame.texts[0];

    assert!(extent.width > 0.0);
    assert!(text.x - extent.width / 2.0 >= 0.0);
    assert!(text.x + extent.width / 2.0 <= frame.width_pt);
    assert!(text.y - extent.ascent >= 0.0);
    assert!(text.y + extent.descent <= frame.height_pt);
}
