use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FigureError, FigureResult};
use crate::journal::{ColumnWidth, Journal, MM_PER_INCH};
use crate::palette::{OKABE_ITO, Palette};
use crate::render::Color;
use crate::style::{StyleConfig, StyleValue};

/// Height-to-width ratio of figures sized by `configure_for_journal`.
const JOURNAL_FIGURE_ASPECT: f64 = 0.75;

/// Named overlay on top of [`base_style`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StylePreset {
    #[default]
    Default,
    Nature,
    Science,
    Cell,
    Minimal,
    Presentation,
}

impl StylePreset {
    pub const ALL: [StylePreset; 6] = [
        StylePreset::Default,
        StylePreset::Nature,
        StylePreset::Science,
        StylePreset::Cell,
        StylePreset::Minimal,
        StylePreset::Presentation,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Nature => "nature",
            Self::Science => "science",
            Self::Cell => "cell",
            Self::Minimal => "minimal",
            Self::Presentation => "presentation",
        }
    }

    /// Looks up `name`, falling back to `Default` with a warning.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(style = name, "style not recognized, using 'default'");
            Self::Default
        })
    }

    /// Keys this preset changes relative to the base style.
    #[must_use]
    pub fn overrides(self) -> StyleConfig {
        match self {
            Self::Default => StyleConfig::new(),
            Self::Nature => StyleConfig::from_iter([
                ("font.size", 7_i64),
                ("axes.labelsize", 8),
                ("axes.titlesize", 8),
                ("xtick.labelsize", 6),
                ("ytick.labelsize", 6),
                ("legend.fontsize", 6),
                ("savefig.dpi", 600),
            ]),
            Self::Science => StyleConfig::from_iter([
                ("font.size", 7_i64),
                ("axes.labelsize", 8),
                ("xtick.labelsize", 6),
                ("ytick.labelsize", 6),
                ("legend.fontsize", 6),
                ("savefig.dpi", 600),
            ]),
            Self::Cell => StyleConfig::from_iter([
                ("font.size", 8_i64),
                ("axes.labelsize", 9),
                ("xtick.labelsize", 7),
                ("ytick.labelsize", 7),
                ("legend.fontsize", 7),
                ("savefig.dpi", 600),
            ]),
            Self::Minimal => StyleConfig::from_iter([
                ("axes.linewidth", 0.8),
                ("xtick.major.width", 0.8),
                ("ytick.major.width", 0.8),
                ("lines.linewidth", 2.0),
            ]),
            Self::Presentation => StyleConfig::from_iter([
                ("font.size", StyleValue::Int(14)),
                ("axes.labelsize", StyleValue::Int(16)),
                ("axes.titlesize", StyleValue::Int(18)),
                ("xtick.labelsize", StyleValue::Int(12)),
                ("ytick.labelsize", StyleValue::Int(12)),
                ("legend.fontsize", StyleValue::Int(12)),
                ("axes.linewidth", StyleValue::Float(1.5)),
                ("lines.linewidth", StyleValue::Float(2.5)),
                ("lines.markersize", StyleValue::Int(8)),
            ]),
        }
    }

    /// Base style merged with this preset's overrides.
    #[must_use]
    pub fn config(self) -> StyleConfig {
        let mut config = base_style();
        config.update(&self.overrides());
        config
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StylePreset {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| FigureError::unknown("style", s, Self::ALL.into_iter().map(Self::name)))
    }
}

/// Publication-quality defaults shared by every preset.
#[must_use]
pub fn base_style() -> StyleConfig {
    let okabe_ito = OKABE_ITO
        .iter()
        .filter_map(|hex| Color::from_hex(hex).ok())
        .collect();
    let sans_serif = ["Arial", "Helvetica", "DejaVu Sans"]
        .map(str::to_owned)
        .to_vec();

    StyleConfig::new()
        // figure
        .with("figure.dpi", 100_i64)
        .with("figure.facecolor", "white")
        .with("figure.autolayout", false)
        .with("figure.constrained_layout.use", true)
        // font
        .with("font.size", 8_i64)
        .with("font.family", "sans-serif")
        .with("font.sans-serif", StyleValue::List(sans_serif))
        // axes
        .with("axes.linewidth", 0.5)
        .with("axes.labelsize", 9_i64)
        .with("axes.titlesize", 9_i64)
        .with("axes.labelweight", "normal")
        .with("axes.spines.top", false)
        .with("axes.spines.right", false)
        .with("axes.spines.left", true)
        .with("axes.spines.bottom", true)
        .with("axes.edgecolor", "black")
        .with("axes.labelcolor", "black")
        .with("axes.axisbelow", true)
        .with("axes.prop_cycle", StyleValue::ColorCycle(okabe_ito))
        .with("axes.grid", false)
        // ticks
        .with("xtick.major.size", 3_i64)
        .with("xtick.minor.size", 2_i64)
        .with("xtick.major.width", 0.5)
        .with("xtick.minor.width", 0.5)
        .with("xtick.labelsize", 7_i64)
        .with("xtick.direction", "out")
        .with("ytick.major.size", 3_i64)
        .with("ytick.minor.size", 2_i64)
        .with("ytick.major.width", 0.5)
        .with("ytick.minor.width", 0.5)
        .with("ytick.labelsize", 7_i64)
        .with("ytick.direction", "out")
        // lines
        .with("lines.linewidth", 1.5)
        .with("lines.markersize", 4_i64)
        .with("lines.markeredgewidth", 0.5)
        // legend
        .with("legend.fontsize", 7_i64)
        .with("legend.frameon", false)
        .with("legend.loc", "best")
        // savefig
        .with("savefig.dpi", 300_i64)
        .with("savefig.format", "pdf")
        .with("savefig.bbox", "tight")
        .with("savefig.pad_inches", 0.05)
        .with("savefig.transparent", false)
        .with("savefig.facecolor", "white")
        // image
        .with("image.cmap", "viridis")
        .with("image.aspect", "auto")
}

/// Overlays the named preset onto `config` and returns the preset used.
///
/// Unknown names log a warning and apply the base style unchanged.
pub fn apply_publication_style(config: &mut StyleConfig, style_name: &str) -> StylePreset {
    let preset = StylePreset::resolve(style_name);
    config.update(&preset.config());
    info!(requested = style_name, applied = preset.name(), "applied publication style");
    preset
}

/// Sets the color cycle, falling back to Okabe-Ito with a warning.
pub fn set_color_palette(config: &mut StyleConfig, palette_name: &str) -> Palette {
    let palette = palette_name.parse::<Palette>().unwrap_or_else(|err: FigureError| {
        warn!(error = %err, "falling back to 'okabe_ito' palette");
        Palette::OkabeIto
    });
    let colors = palette
        .hex_colors()
        .iter()
        .filter_map(|hex| Color::from_hex(hex).ok())
        .collect();
    config.set("axes.prop_cycle", StyleValue::ColorCycle(colors));
    info!(
        palette = palette.name(),
        colors = palette.hex_colors().len(),
        "applied color palette"
    );
    palette
}

/// Applies the journal's style and sizes figures to one column at 4:3.
pub fn configure_for_journal(
    config: &mut StyleConfig,
    journal: &str,
    column: ColumnWidth,
) -> FigureResult<()> {
    let journal: Journal = journal.parse()?;
    apply_publication_style(config, journal.style_preset().name());

    let width_mm = journal.column_widths().for_column(column);
    let width_in = width_mm / MM_PER_INCH;
    config.set(
        "figure.figsize",
        StyleValue::Pair(width_in, width_in * JOURNAL_FIGURE_ASPECT),
    );
    info!(
        journal = journal.name(),
        column = column.name(),
        width_mm,
        "configured figure size for journal"
    );
    Ok(())
}

/// Drops every key so figures fall back to their built-in defaults.
pub fn reset_to_default(config: &mut StyleConfig) {
    config.clear();
    info!("reset style configuration to defaults");
}
