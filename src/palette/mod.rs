//! Colorblind-friendly palettes and related color tables.

mod swatch;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FigureError, FigureResult};
use crate::render::Color;
use crate::style::{StyleConfig, StyleValue};

pub use swatch::palette_swatch_canvas;
pub use tables::{
    DIVERGING_COLORMAPS_AVOID, DIVERGING_COLORMAPS_SAFE, DNA_BASES, DNA_BASES_ACCESSIBLE,
    FLUOROPHORES_ACCESSIBLE, FLUOROPHORES_TRADITIONAL, OKABE_ITO, OKABE_ITO_NAMED,
    SEQUENTIAL_COLORMAPS, TOL_BRIGHT, TOL_HIGH_CONTRAST, TOL_LIGHT, TOL_MUTED, WONG,
};

/// Named categorical palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Palette {
    #[default]
    OkabeIto,
    Wong,
    TolBright,
    TolMuted,
    TolLight,
    TolHighContrast,
}

impl Palette {
    pub const ALL: [Palette; 6] = [
        Palette::OkabeIto,
        Palette::Wong,
        Palette::TolBright,
        Palette::TolMuted,
        Palette::TolLight,
        Palette::TolHighContrast,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OkabeIto => "okabe_ito",
            Self::Wong => "wong",
            Self::TolBright => "tol_bright",
            Self::TolMuted => "tol_muted",
            Self::TolLight => "tol_light",
            Self::TolHighContrast => "tol_high_contrast",
        }
    }

    /// Human-facing label, e.g. for swatch rows.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OkabeIto => "Okabe-Ito",
            Self::Wong => "Wong",
            Self::TolBright => "Tol Bright",
            Self::TolMuted => "Tol Muted",
            Self::TolLight => "Tol Light",
            Self::TolHighContrast => "Tol High Contrast",
        }
    }

    #[must_use]
    pub const fn hex_colors(self) -> &'static [&'static str] {
        match self {
            Self::OkabeIto => OKABE_ITO,
            Self::Wong => WONG,
            Self::TolBright => TOL_BRIGHT,
            Self::TolMuted => TOL_MUTED,
            Self::TolLight => TOL_LIGHT,
            Self::TolHighContrast => TOL_HIGH_CONTRAST,
        }
    }

    /// Parsed colors, in authored order.
    pub fn colors(self) -> FigureResult<Vec<Color>> {
        self.hex_colors()
            .iter()
            .map(|hex| Color::from_hex(hex))
            .collect()
    }

    pub(crate) fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|palette| palette.name() == s)
            .ok_or_else(|| FigureError::unknown("palette", s, Self::names()))
    }
}

/// Returns a copy of the named palette's hex colors.
pub fn get_palette(name: &str) -> FigureResult<Vec<&'static str>> {
    let palette: Palette = name.parse()?;
    Ok(palette.hex_colors().to_vec())
}

/// Makes the named palette the color cycle of `config` and returns its colors.
///
/// `config` is left untouched when the name is unknown.
pub fn apply_palette(config: &mut StyleConfig, name: &str) -> FigureResult<Vec<&'static str>> {
    let palette: Palette = name.parse()?;
    config.set("axes.prop_cycle", StyleValue::ColorCycle(palette.colors()?));
    debug!(palette = palette.name(), colors = palette.hex_colors().len(), "applied palette");
    Ok(palette.hex_colors().to_vec())
}

/// How a colormap fares for colorblind readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColormapAdvice {
    Sequential,
    DivergingSafe,
    Avoid,
    Unknown,
}

/// Classifies a colormap name; a trailing `_r` (reversed map) is ignored.
#[must_use]
pub fn colormap_advice(name: &str) -> ColormapAdvice {
    let base = name.strip_suffix("_r").unwrap_or(name);
    if SEQUENTIAL_COLORMAPS.contains(&base) {
        ColormapAdvice::Sequential
    } else if DIVERGING_COLORMAPS_SAFE.contains(&base) {
        ColormapAdvice::DivergingSafe
    } else if DIVERGING_COLORMAPS_AVOID.contains(&base) {
        ColormapAdvice::Avoid
    } else {
        ColormapAdvice::Unknown
    }
}
