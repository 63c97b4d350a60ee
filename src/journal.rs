//! Per-journal figure requirements.
//!
//! Three static tables are keyed by [`Journal`]:
//! - preferred export formats and resolution per [`FigureType`],
//! - single/double column widths,
//! - size limits used by the compliance check (absent for IEEE).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FigureError;
use crate::export::ExportFormat;
use crate::style::StylePreset;

pub const MM_PER_INCH: f64 = 25.4;

/// Allowed deviation from a column width, exclusive.
pub const WIDTH_TOLERANCE_MM: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Journal {
    Nature,
    Science,
    Cell,
    Plos,
    Acs,
    Ieee,
}

impl Journal {
    pub const ALL: [Journal; 6] = [
        Journal::Nature,
        Journal::Science,
        Journal::Cell,
        Journal::Plos,
        Journal::Acs,
        Journal::Ieee,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Science => "science",
            Self::Cell => "cell",
            Self::Plos => "plos",
            Self::Acs => "acs",
            Self::Ieee => "ieee",
        }
    }

    #[must_use]
    pub const fn export_spec(self, figure_type: FigureType) -> ExportSpec {
        use ExportFormat::{Eps, Pdf, Png, Tiff};
        use FigureType::{Combination, LineArt, Photo};

        let (formats, dpi): (&'static [ExportFormat], u32) = match (self, figure_type) {
            (Self::Nature | Self::Cell, LineArt) => (&[Pdf, Eps], 1000),
            (Self::Nature | Self::Cell, Photo) => (&[Tiff], 300),
            (Self::Nature | Self::Cell, Combination) => (&[Pdf], 600),
            (Self::Science, LineArt) => (&[Eps, Pdf], 1000),
            (Self::Science, Photo) => (&[Tiff], 300),
            (Self::Science, Combination) => (&[Eps], 600),
            (Self::Plos, LineArt) => (&[Pdf, Eps], 600),
            (Self::Plos, Photo) => (&[Tiff, Png], 300),
            (Self::Plos, Combination) => (&[Tiff], 300),
            (Self::Acs, LineArt) => (&[Tiff, Pdf], 600),
            (Self::Acs, Photo) => (&[Tiff], 300),
            (Self::Acs, Combination) => (&[Tiff], 600),
            (Self::Ieee, LineArt) => (&[Pdf, Eps], 600),
            (Self::Ieee, Photo) => (&[Tiff], 300),
            (Self::Ieee, Combination) => (&[Pdf], 300),
        };
        ExportSpec { formats, dpi }
    }

    #[must_use]
    pub const fn column_widths(self) -> ColumnWidths {
        let (single_mm, double_mm) = match self {
            Self::Nature => (89.0, 183.0),
            Self::Science => (55.0, 175.0),
            Self::Cell => (85.0, 178.0),
            Self::Plos => (83.0, 173.0),
            Self::Acs => (82.5, 178.0),
            Self::Ieee => (89.0, 182.0),
        };
        ColumnWidths {
            single_mm,
            double_mm,
        }
    }

    /// Limits used by the size compliance check; IEEE publishes none.
    #[must_use]
    pub const fn size_limits(self) -> Option<SizeLimits> {
        let max_height_mm = match self {
            Self::Nature | Self::Acs => 247.0,
            Self::Science | Self::Plos => 233.0,
            Self::Cell => 230.0,
            Self::Ieee => return None,
        };
        let widths = self.column_widths();
        Some(SizeLimits {
            single_column_mm: widths.single_mm,
            double_column_mm: widths.double_mm,
            max_height_mm,
        })
    }

    #[must_use]
    pub const fn style_preset(self) -> StylePreset {
        match self {
            Self::Nature => StylePreset::Nature,
            Self::Science => StylePreset::Science,
            Self::Cell => StylePreset::Cell,
            Self::Plos | Self::Acs | Self::Ieee => StylePreset::Default,
        }
    }

    pub(crate) fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive.
impl FromStr for Journal {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|journal| journal.name() == lowered)
            .ok_or_else(|| FigureError::unknown("journal", s, Self::names()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureType {
    LineArt,
    Photo,
    #[default]
    Combination,
}

impl FigureType {
    pub const ALL: [FigureType; 3] = [
        FigureType::LineArt,
        FigureType::Photo,
        FigureType::Combination,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LineArt => "line_art",
            Self::Photo => "photo",
            Self::Combination => "combination",
        }
    }
}

impl fmt::Display for FigureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureType {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|figure_type| figure_type.name() == s)
            .ok_or_else(|| {
                FigureError::unknown("figure type", s, Self::ALL.into_iter().map(Self::name))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnWidth {
    #[default]
    Single,
    Double,
}

impl ColumnWidth {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnWidth {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            other => Err(FigureError::unknown(
                "column width",
                other,
                ["single", "double"],
            )),
        }
    }
}

/// Preferred output for one journal and figure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportSpec {
    pub formats: &'static [ExportFormat],
    pub dpi: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnWidths {
    pub single_mm: f64,
    pub double_mm: f64,
}

impl ColumnWidths {
    #[must_use]
    pub const fn for_column(self, column: ColumnWidth) -> f64 {
        match column {
            ColumnWidth::Single => self.single_mm,
            ColumnWidth::Double => self.double_mm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeLimits {
    pub single_column_mm: f64,
    pub double_column_mm: f64,
    pub max_height_mm: f64,
}
