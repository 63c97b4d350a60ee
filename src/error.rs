use thiserror::Error;

use crate::export::ExportFormat;

pub type FigureResult<T> = Result<T, FigureError>;

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("{kind} `{name}` not recognized. Available: {available}")]
    UnknownName {
        kind: &'static str,
        name: String,
        available: String,
    },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid figure: {0}")]
    InvalidFigure(String),

    #[error("format `{format}` is not supported: {reason}")]
    UnsupportedFormat {
        format: ExportFormat,
        reason: String,
    },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("pdf inspection failed: {0}")]
    PdfInspection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl FigureError {
    /// Builds an `UnknownName` error listing every accepted name.
    pub(crate) fn unknown<'a>(
        kind: &'static str,
        name: &str,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::UnknownName {
            kind,
            name: name.to_owned(),
            available: available.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}
