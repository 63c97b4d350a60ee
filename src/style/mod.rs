//! Style presets and the caller-owned configuration they are applied to.

mod config;
mod preset;
mod template;

pub use config::{StyleConfig, StyleValue};
pub use preset::{
    StylePreset, apply_publication_style, base_style, configure_for_journal, reset_to_default,
    set_color_palette,
};
pub use template::{DEFAULT_STYLE_FILE, create_style_template, write_style_file};
