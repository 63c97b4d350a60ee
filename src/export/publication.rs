use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::error::FigureResult;
use crate::export::{ExportFormat, Figure, SaveOptions};
use crate::journal::{FigureType, Journal};

/// One format that could not be written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFailure {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub error: String,
}

/// Outcome of one multi-format export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<ExportFailure>,
}

impl ExportReport {
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.saved {
            writeln!(f, "✓ Saved: {}", path.display())?;
        }
        for failure in &self.failed {
            writeln!(
                f,
                "✗ Failed to save {}: {}",
                failure.path.display(),
                failure.error
            )?;
        }
        Ok(())
    }
}

/// Saves `fig` once per format as `<dir>/<stem>.<ext>`.
///
/// `<dir>` is the parent of `filename` when that directory exists, otherwise
/// the current directory; `<stem>` drops any extension `filename` carries.
/// A failing format is recorded and the remaining formats are still attempted.
pub fn save_publication_figure<F: Figure + ?Sized>(
    fig: &mut F,
    filename: impl AsRef<Path>,
    formats: &[ExportFormat],
    options: &SaveOptions,
) -> ExportReport {
    let (output_dir, base_name) = resolve_output_base(filename.as_ref());
    let mut report = ExportReport::default();

    for &format in formats {
        let output_file = output_dir.join(format!("{base_name}.{}", format.extension()));
        let resolved = options.for_format(format);

        let outcome = resolved
            .validate()
            .and_then(|()| fig.save(&output_file, format, &resolved));
        match outcome {
            Ok(()) => {
                info!(path = %output_file.display(), %format, dpi = resolved.dpi, "saved figure");
                report.saved.push(output_file);
            }
            Err(err) => {
                warn!(path = %output_file.display(), %format, error = %err, "failed to save figure");
                report.failed.push(ExportFailure {
                    path: output_file,
                    format,
                    error: err.to_string(),
                });
            }
        }
    }

    report
}

/// Saves with the formats and resolution the journal asks for.
///
/// Unknown journal or figure-type names are errors listing the valid options.
pub fn save_for_journal<F: Figure + ?Sized>(
    fig: &mut F,
    filename: impl AsRef<Path>,
    journal: &str,
    figure_type: &str,
) -> FigureResult<ExportReport> {
    let journal: Journal = journal.parse()?;
    let figure_type: FigureType = figure_type.parse()?;
    let spec = journal.export_spec(figure_type);

    let formats: Vec<&str> = spec.formats.iter().map(|format| format.extension()).collect();
    info!(
        journal = journal.name(),
        %figure_type,
        formats = %formats.join(", "),
        dpi = spec.dpi,
        "saving for journal"
    );

    let options = SaveOptions::default().with_dpi(spec.dpi);
    Ok(save_publication_figure(fig, filename, spec.formats, &options))
}

fn resolve_output_base(filename: &Path) -> (PathBuf, String) {
    let base_name = filename
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "figure".to_owned());

    let output_dir = match filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && parent.is_dir() => parent.to_path_buf(),
        _ => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    (output_dir, base_name)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::resolve_output_base;

    #[test]
    fn output_base_strips_extension_and_keeps_existing_parent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (output_dir, base) = resolve_output_base(&dir.path().join("figure1.png"));
        assert_eq!(output_dir, dir.path());
        assert_eq!(base, "figure1");
    }

    #[test]
    fn missing_parent_falls_back_to_current_dir() {
        let (output_dir, base) =
            resolve_output_base(Path::new("/definitely/not/here/plot.pdf"));
        assert_eq!(output_dir, std::env::current_dir().expect("cwd"));
        assert_eq!(base, "plot");
    }
}
