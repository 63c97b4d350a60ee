//! Writer for matplotlib's `key : value` style-file syntax.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::FigureResult;
use crate::style::{StyleConfig, StylePreset, StyleValue};

pub const DEFAULT_STYLE_FILE: &str = "publication.mplstyle";

/// Writes every entry of `config`, one per line, after a comment header.
pub fn write_style_file<W: Write>(config: &StyleConfig, mut writer: W) -> FigureResult<()> {
    writeln!(writer, "# Publication-quality matplotlib style")?;
    writeln!(writer, "# Usage: plt.style.use('{DEFAULT_STYLE_FILE}')")?;
    writeln!(writer)?;

    for (key, value) in config.iter() {
        writeln!(writer, "{key} : {}", format_value(value))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the merged mapping of the named preset (lenient lookup) to `path`.
pub fn create_style_template(path: impl AsRef<Path>, style_name: &str) -> FigureResult<StylePreset> {
    let path = path.as_ref();
    let preset = StylePreset::resolve(style_name);
    let file = File::create(path)?;
    write_style_file(&preset.config(), BufWriter::new(file))?;
    info!(path = %path.display(), style = preset.name(), "created style template");
    Ok(preset)
}

fn format_value(value: &StyleValue) -> String {
    match value {
        StyleValue::Bool(true) => "True".to_owned(),
        StyleValue::Bool(false) => "False".to_owned(),
        StyleValue::Int(value) => value.to_string(),
        StyleValue::Float(value) => value.to_string(),
        StyleValue::Text(value) => value.clone(),
        StyleValue::List(items) => items.join(", "),
        StyleValue::Pair(first, second) => format!("{first}, {second}"),
        // `#` opens a comment in style files, so hex digits go unprefixed.
        StyleValue::ColorCycle(colors) => {
            let quoted: Vec<String> = colors
                .iter()
                .map(|color| format!("'{}'", color.to_hex().trim_start_matches('#')))
                .collect();
            format!("cycler('color', [{}])", quoted.join(", "))
        }
    }
}
