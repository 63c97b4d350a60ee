//! Figure export helpers.
//!
//! Figures are reached through the [`Figure`] trait so export policy (output
//! naming, per-format resolution, journal tables, failure isolation) stays
//! independent of the drawing backend.

mod fonts;
mod publication;
mod size_check;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FigureError, FigureResult};
use crate::render::Color;
use crate::style::StyleConfig;

pub use fonts::{FontEmbedding, FontEmbeddingReport, PdfFont, verify_font_embedding};
pub use publication::{ExportFailure, ExportReport, save_for_journal, save_publication_figure};
pub use size_check::{ColumnType, SizeCheck, check_figure_size};

/// Highest resolution used for rasters embedded in vector output.
pub const VECTOR_MAX_DPI: u32 = 300;

/// A figure that can report its physical size and write itself to disk.
pub trait Figure {
    /// Width and height in inches.
    fn size_inches(&self) -> (f64, f64);

    /// Writes one file. `options` are already resolved for `format`.
    fn save(&mut self, path: &Path, format: ExportFormat, options: &SaveOptions)
    -> FigureResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Png,
    Eps,
    Svg,
    Tiff,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Pdf,
        ExportFormat::Png,
        ExportFormat::Eps,
        ExportFormat::Svg,
        ExportFormat::Tiff,
    ];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Png => "png",
            Self::Eps => "eps",
            Self::Svg => "svg",
            Self::Tiff => "tiff",
        }
    }

    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Pdf | Self::Eps | Self::Svg)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Case-insensitive; `tif` is accepted for TIFF.
impl FromStr for ExportFormat {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().trim_start_matches('.').to_ascii_lowercase();
        if lowered == "tif" {
            return Ok(Self::Tiff);
        }
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == lowered)
            .ok_or_else(|| {
                FigureError::unknown("format", s, Self::ALL.into_iter().map(Self::extension))
            })
    }
}

/// Save settings shared by every format of one export call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SaveOptions {
    /// Raster resolution; vector formats are capped at [`VECTOR_MAX_DPI`].
    pub dpi: u32,
    pub transparent: bool,
    /// Trim whitespace to the drawn content plus `pad_inches`.
    pub tight_bbox: bool,
    pub pad_inches: f64,
    /// Page background; `None` leaves it transparent.
    pub facecolor: Option<Color>,
    pub edgecolor: Option<Color>,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            dpi: 300,
            transparent: false,
            tight_bbox: true,
            pad_inches: 0.1,
            facecolor: Some(Color::WHITE),
            edgecolor: None,
        }
    }
}

impl SaveOptions {
    #[must_use]
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    #[must_use]
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    #[must_use]
    pub fn with_tight_bbox(mut self, tight_bbox: bool) -> Self {
        self.tight_bbox = tight_bbox;
        self
    }

    #[must_use]
    pub fn with_pad_inches(mut self, pad_inches: f64) -> Self {
        self.pad_inches = pad_inches;
        self
    }

    #[must_use]
    pub fn with_facecolor(mut self, facecolor: Color) -> Self {
        self.facecolor = Some(facecolor);
        self
    }

    /// Reads `savefig.dpi`, `savefig.transparent`, `savefig.bbox`,
    /// `savefig.pad_inches`, `savefig.facecolor` and `savefig.edgecolor`;
    /// missing keys keep the defaults.
    pub fn from_style(style: &StyleConfig) -> FigureResult<Self> {
        let mut options = Self::default();
        if let Some(dpi) = style.get_f64("savefig.dpi") {
            if !dpi.is_finite() || dpi <= 0.0 {
                return Err(FigureError::InvalidFigure(format!(
                    "savefig.dpi must be > 0, got {dpi}"
                )));
            }
            options.dpi = dpi.round() as u32;
        }
        if let Some(transparent) = style.get_bool("savefig.transparent") {
            options.transparent = transparent;
        }
        if let Some(bbox) = style.get_str("savefig.bbox") {
            options.tight_bbox = bbox == "tight";
        }
        if let Some(pad) = style.get_f64("savefig.pad_inches") {
            options.pad_inches = pad;
        }
        if let Some(facecolor) = style.get_str("savefig.facecolor") {
            let color = Color::parse(facecolor)?;
            options.facecolor = (!color.is_transparent()).then_some(color);
        }
        if let Some(edgecolor) = style.get_str("savefig.edgecolor") {
            let color = Color::parse(edgecolor)?;
            options.edgecolor = (!color.is_transparent()).then_some(color);
        }
        Ok(options)
    }

    /// Settings actually handed to the figure for `format`.
    #[must_use]
    pub fn for_format(&self, format: ExportFormat) -> Self {
        let mut resolved = *self;
        if format.is_vector() {
            resolved.dpi = resolved.dpi.min(VECTOR_MAX_DPI);
        }
        if resolved.transparent {
            resolved.facecolor = None;
        }
        resolved
    }

    pub fn validate(&self) -> FigureResult<()> {
        if self.dpi == 0 {
            return Err(FigureError::InvalidFigure("dpi must be > 0".to_owned()));
        }
        if !self.pad_inches.is_finite() || self.pad_inches < 0.0 {
            return Err(FigureError::InvalidFigure(
                "pad_inches must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(color) = self.facecolor {
            color.validate()?;
        }
        if let Some(color) = self.edgecolor {
            color.validate()?;
        }
        Ok(())
    }
}
