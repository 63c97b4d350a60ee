//! pubfig: publication-ready figure helpers.
//!
//! Colorblind-safe palettes, journal export tables, size compliance checks and
//! style presets applied to a caller-owned [`StyleConfig`]. Figures are written
//! through the [`Figure`] trait; the built-in [`Canvas`] renders SVG without
//! extra dependencies and every other format with the `cairo-backend` feature.

pub mod error;
pub mod export;
pub mod journal;
pub mod palette;
pub mod render;
pub mod style;
pub mod telemetry;

pub use error::{FigureError, FigureResult};
pub use export::{
    ExportFormat, ExportReport, Figure, SaveOptions, SizeCheck, check_figure_size,
    save_for_journal, save_publication_figure, verify_font_embedding,
};
pub use journal::{ColumnWidth, FigureType, Journal};
pub use palette::{Palette, apply_palette, get_palette};
pub use render::{Canvas, Color, NullFigure};
pub use style::{
    StyleConfig, StylePreset, apply_publication_style, configure_for_journal,
    create_style_template, reset_to_default, set_color_palette,
};
