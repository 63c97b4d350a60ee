use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::export::Figure;
use crate::journal::{Journal, MM_PER_INCH, SizeLimits, WIDTH_TOLERANCE_MM};

/// Journal used when the requested one has no size table.
const FALLBACK_JOURNAL: Journal = Journal::Nature;

const FALLBACK_LIMITS: SizeLimits = match FALLBACK_JOURNAL.size_limits() {
    Some(limits) => limits,
    None => panic!("fallback journal must carry size limits"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Single,
    Double,
}

impl ColumnType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

/// Figure dimensions compared against one journal's limits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeCheck {
    pub width_inches: f64,
    pub height_inches: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Requested journal name, lower-cased.
    pub journal: String,
    /// Journal whose limits were applied.
    pub reference_journal: Journal,
    /// `true` when the requested journal had no size table.
    pub fell_back: bool,
    pub column_type: Option<ColumnType>,
    pub width_ok: bool,
    pub height_ok: bool,
    pub compliant: bool,
    pub recommendations: SizeLimits,
}

/// Compares `fig`'s physical size with `journal`'s column widths and height.
///
/// Never fails: journals without a size table (unknown names, IEEE) are
/// checked against Nature's limits and a warning is logged.
pub fn check_figure_size<F: Figure + ?Sized>(fig: &F, journal: &str) -> SizeCheck {
    let requested = journal.trim().to_ascii_lowercase();
    let (width_inches, height_inches) = fig.size_inches();
    let width_mm = width_inches * MM_PER_INCH;
    let height_mm = height_inches * MM_PER_INCH;

    let resolved = requested
        .parse::<Journal>()
        .ok()
        .and_then(|journal| journal.size_limits().map(|limits| (journal, limits)));
    let (reference_journal, limits, fell_back) = match resolved {
        Some((journal, limits)) => (journal, limits, false),
        None => {
            warn!(
                journal = %requested,
                fallback = FALLBACK_JOURNAL.name(),
                "journal has no size specification, using fallback"
            );
            (FALLBACK_JOURNAL, FALLBACK_LIMITS, true)
        }
    };

    let column_type = if (width_mm - limits.single_column_mm).abs() < WIDTH_TOLERANCE_MM {
        Some(ColumnType::Single)
    } else if (width_mm - limits.double_column_mm).abs() < WIDTH_TOLERANCE_MM {
        Some(ColumnType::Double)
    } else {
        None
    };
    let width_ok = column_type.is_some();
    let height_ok = height_mm <= limits.max_height_mm;

    let check = SizeCheck {
        width_inches,
        height_inches,
        width_mm,
        height_mm,
        journal: requested,
        reference_journal,
        fell_back,
        column_type,
        width_ok,
        height_ok,
        compliant: width_ok && height_ok,
        recommendations: limits,
    };
    info!(
        journal = %check.journal,
        width_mm = %format!("{width_mm:.1}"),
        height_mm = %format!("{height_mm:.1}"),
        column = check.column_type.map_or("custom", ColumnType::name),
        compliant = check.compliant,
        "checked figure size"
    );
    check
}

impl fmt::Display for SizeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);
        let title = self.journal.to_uppercase();
        let reference = self.reference_journal.name().to_uppercase();
        let mark = |ok: bool, pass: &'static str, fail: &'static str| if ok { pass } else { fail };

        writeln!(f, "{rule}")?;
        writeln!(f, "Figure Size Check for {title}")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "Current size: {:.1} × {:.1} mm",
            self.width_mm, self.height_mm
        )?;
        writeln!(
            f,
            "              ({:.2} × {:.2} inches)",
            self.width_inches, self.height_inches
        )?;
        writeln!(f)?;
        writeln!(f, "{reference} specifications:")?;
        writeln!(
            f,
            "  Single column: {} mm",
            self.recommendations.single_column_mm
        )?;
        writeln!(
            f,
            "  Double column: {} mm",
            self.recommendations.double_column_mm
        )?;
        writeln!(f, "  Max height: {} mm", self.recommendations.max_height_mm)?;
        writeln!(f)?;
        writeln!(f, "Compliance:")?;
        writeln!(
            f,
            "  Width: {} ({})",
            mark(self.width_ok, "✓ OK", "✗ Non-standard"),
            self.column_type.map_or("custom", ColumnType::name)
        )?;
        writeln!(
            f,
            "  Height: {}",
            mark(self.height_ok, "✓ OK", "✗ Too tall")
        )?;
        writeln!(
            f,
            "  Overall: {}",
            mark(self.compliant, "✓ COMPLIANT", "✗ NEEDS ADJUSTMENT")
        )?;
        writeln!(f, "{rule}")
    }
}
