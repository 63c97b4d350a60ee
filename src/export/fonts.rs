use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::FigureResult;

/// Overall verdict of a PDF font check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontEmbedding {
    Embedded,
    NotEmbedded,
    /// The document references no fonts.
    NoFonts,
    /// Inspection support is not compiled in (`pdf-inspect` feature).
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfFont {
    pub name: String,
    pub subtype: String,
    pub embedded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontEmbeddingReport {
    pub status: FontEmbedding,
    pub page_count: Option<usize>,
    pub fonts: Vec<PdfFont>,
}

impl FontEmbeddingReport {
    /// `Some(true)` when every font is embedded, `None` when unchecked.
    #[must_use]
    pub fn all_embedded(&self) -> Option<bool> {
        match self.status {
            FontEmbedding::Embedded | FontEmbedding::NoFonts => Some(true),
            FontEmbedding::NotEmbedded => Some(false),
            FontEmbedding::Unknown => None,
        }
    }
}

impl fmt::Display for FontEmbeddingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == FontEmbedding::Unknown {
            return writeln!(
                f,
                "Font embedding not verified: rebuild with the `pdf-inspect` feature"
            );
        }
        if let Some(pages) = self.page_count {
            writeln!(f, "PDF has {pages} page(s)")?;
        }
        for font in &self.fonts {
            let mark = if font.embedded { "✓" } else { "✗" };
            writeln!(f, "  {mark} {} ({})", font.name, font.subtype)?;
        }
        let verdict = match self.status {
            FontEmbedding::Embedded => "all fonts embedded",
            FontEmbedding::NotEmbedded => "some fonts are not embedded",
            FontEmbedding::NoFonts => "no fonts referenced",
            FontEmbedding::Unknown => "not checked",
        };
        writeln!(f, "Fonts: {verdict}")
    }
}

/// Reports whether every font in the PDF at `path` is embedded.
///
/// Without the `pdf-inspect` feature the report's status is
/// [`FontEmbedding::Unknown`] and the file is not opened.
pub fn verify_font_embedding(path: impl AsRef<Path>) -> FigureResult<FontEmbeddingReport> {
    let path = path.as_ref();

    #[cfg(feature = "pdf-inspect")]
    {
        let report = inspect::inspect_pdf(path)?;
        info!(
            path = %path.display(),
            pages = report.page_count.unwrap_or_default(),
            fonts = report.fonts.len(),
            status = ?report.status,
            "checked pdf font embedding"
        );
        if report.status == FontEmbedding::NotEmbedded {
            warn!(path = %path.display(), "pdf contains fonts that are not embedded");
        }
        return Ok(report);
    }

    #[cfg(not(feature = "pdf-inspect"))]
    {
        warn!(
            path = %path.display(),
            "pdf inspection not available, font embedding not verified"
        );
        let report = FontEmbeddingReport {
            status: FontEmbedding::Unknown,
            page_count: None,
            fonts: Vec::new(),
        };
        info!(status = ?report.status, "skipped pdf font check");
        Ok(report)
    }
}

#[cfg(feature = "pdf-inspect")]
mod inspect {
    use std::path::Path;

    use lopdf::{Dictionary, Document, Object};

    use super::{FontEmbedding, FontEmbeddingReport, PdfFont};
    use crate::error::{FigureError, FigureResult};

    /// Subtypes that either carry their own glyphs or delegate to descendants.
    const SELF_CONTAINED_SUBTYPES: [&[u8]; 2] = [b"Type3", b"Type0"];
    const FONT_FILE_KEYS: [&[u8]; 3] = [b"FontFile", b"FontFile2", b"FontFile3"];

    pub(super) fn inspect_pdf(path: &Path) -> FigureResult<FontEmbeddingReport> {
        let document = Document::load(path)
            .map_err(|err| FigureError::PdfInspection(format!("{}: {err}", path.display())))?;

        let mut fonts = Vec::new();
        for object in document.objects.values() {
            let Some(dict) = as_dictionary(object) else {
                continue;
            };
            if name_of(dict, b"Type") != Some(b"Font".as_slice()) {
                continue;
            }
            let subtype = name_of(dict, b"Subtype").unwrap_or(b"Unknown");
            if SELF_CONTAINED_SUBTYPES.contains(&subtype) {
                continue;
            }
            fonts.push(PdfFont {
                name: String::from_utf8_lossy(name_of(dict, b"BaseFont").unwrap_or(b"?"))
                    .into_owned(),
                subtype: String::from_utf8_lossy(subtype).into_owned(),
                embedded: descriptor_has_font_file(&document, dict),
            });
        }

        let status = if fonts.is_empty() {
            FontEmbedding::NoFonts
        } else if fonts.iter().all(|font| font.embedded) {
            FontEmbedding::Embedded
        } else {
            FontEmbedding::NotEmbedded
        };

        Ok(FontEmbeddingReport {
            status,
            page_count: Some(document.get_pages().len()),
            fonts,
        })
    }

    fn as_dictionary(object: &Object) -> Option<&Dictionary> {
        match object {
            Object::Dictionary(dict) => Some(dict),
            Object::Stream(stream) => Some(&stream.dict),
            _ => None,
        }
    }

    fn name_of<'a>(dict: &'a Dictionary, key: &[u8]) -> Option<&'a [u8]> {
        match dict.get(key) {
            Ok(Object::Name(name)) => Some(name.as_slice()),
            _ => None,
        }
    }

    fn descriptor_has_font_file(document: &Document, font: &Dictionary) -> bool {
        let descriptor = match font.get(b"FontDescriptor") {
            Ok(Object::Reference(id)) => document.get_object(*id).ok().and_then(as_dictionary),
            Ok(object) => as_dictionary(object),
            Err(_) => None,
        };
        descriptor.is_some_and(|descriptor| {
            FONT_FILE_KEYS.iter().any(|key| descriptor.has(key))
        })
    }
}
