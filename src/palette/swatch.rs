use crate::error::FigureResult;
use crate::palette::Palette;
use crate::render::{Canvas, Color, POINTS_PER_INCH, RectPrimitive, TextHAlign, TextPrimitive};

const CANVAS_WIDTH_IN: f64 = 8.0;
const ROW_HEIGHT_PT: f64 = 40.0;
const MARGIN_PT: f64 = 12.0;
const LABEL_COLUMN_PT: f64 = 120.0;
const SWATCH_HEIGHT_PT: f64 = 26.0;
const SWATCH_GAP_PT: f64 = 3.0;
const LABEL_FONT_PT: f64 = 9.0;
const HEX_FONT_PT: f64 = 5.5;

/// Builds a preview figure with one row per palette: its label followed by a
/// bordered swatch per color, each captioned with its hex code.
pub fn palette_swatch_canvas() -> FigureResult<Canvas> {
    let rows = Palette::ALL.len() as f64;
    let height_in = (rows * ROW_HEIGHT_PT + 2.0 * MARGIN_PT) / POINTS_PER_INCH;
    let mut canvas = Canvas::new(CANVAS_WIDTH_IN, height_in)?;

    let widest = Palette::ALL
        .iter()
        .map(|palette| palette.hex_colors().len())
        .max()
        .unwrap_or(1) as f64;
    let swatch_area = CANVAS_WIDTH_IN * POINTS_PER_INCH - LABEL_COLUMN_PT - 2.0 * MARGIN_PT;
    let swatch_width = swatch_area / widest - SWATCH_GAP_PT;

    for (row, palette) in Palette::ALL.into_iter().enumerate() {
        let top = MARGIN_PT + row as f64 * ROW_HEIGHT_PT;
        let center_y = top + SWATCH_HEIGHT_PT / 2.0;
        canvas.texts.push(TextPrimitive::new(
            palette.label(),
            MARGIN_PT + LABEL_COLUMN_PT - 8.0,
            center_y + LABEL_FONT_PT * 0.3,
            LABEL_FONT_PT,
            Color::BLACK,
            TextHAlign::Right,
        ));

        for (column, (hex, color)) in palette
            .hex_colors()
            .iter()
            .zip(palette.colors()?)
            .enumerate()
        {
            let x = MARGIN_PT + LABEL_COLUMN_PT + column as f64 * (swatch_width + SWATCH_GAP_PT);
            canvas.rects.push(
                RectPrimitive::new(x, top, swatch_width, SWATCH_HEIGHT_PT, color)
                    .with_border(0.5, Color::BLACK),
            );
            canvas.texts.push(TextPrimitive::new(
                *hex,
                x + swatch_width / 2.0,
                center_y + HEX_FONT_PT * 0.3,
                HEX_FONT_PT,
                caption_color(color),
                TextHAlign::Center,
            ));
        }
    }

    Ok(canvas)
}

/// White on dark swatches, black elsewhere (Rec. 709 luma).
fn caption_color(color: Color) -> Color {
    let luma = 0.2126 * color.red + 0.7152 * color.green + 0.0722 * color.blue;
    if luma < 0.45 { Color::WHITE } else { Color::BLACK }
}
