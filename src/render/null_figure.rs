use std::path::{Path, PathBuf};

use crate::error::{FigureError, FigureResult};
use crate::export::{ExportFormat, Figure, SaveOptions};

/// One call to `Figure::save` seen by a [`NullFigure`].
#[derive(Debug, Clone, PartialEq)]
pub struct SaveAttempt {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub options: SaveOptions,
}

/// Figure that writes nothing and records every save attempt.
///
/// Used by tests and dry runs; formats listed in `failing_formats` report a
/// backend error instead of succeeding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NullFigure {
    pub width_in: f64,
    pub height_in: f64,
    pub failing_formats: Vec<ExportFormat>,
    pub attempts: Vec<SaveAttempt>,
}

impl NullFigure {
    #[must_use]
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_on(mut self, formats: &[ExportFormat]) -> Self {
        self.failing_formats.extend_from_slice(formats);
        self
    }
}

impl Figure for NullFigure {
    fn size_inches(&self) -> (f64, f64) {
        (self.width_in, self.height_in)
    }

    fn save(
        &mut self,
        path: &Path,
        format: ExportFormat,
        options: &SaveOptions,
    ) -> FigureResult<()> {
        self.attempts.push(SaveAttempt {
            path: path.to_path_buf(),
            format,
            options: *options,
        });
        if self.failing_formats.contains(&format) {
            return Err(FigureError::Backend(format!(
                "null figure configured to fail for {format}"
            )));
        }
        Ok(())
    }
}
