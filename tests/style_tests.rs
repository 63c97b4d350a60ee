use std::fs;

use approx::assert_relative_eq;
use pubfig::journal::{ColumnWidth, MM_PER_INCH};
use pubfig::style::{
    DEFAULT_STYLE_FILE, StyleValue, base_style, create_style_template, write_style_file,
};
use pubfig::{
    Canvas, Color, FigureError, Palette, SaveOptions, StyleConfig, StylePreset,
    apply_publication_style, configure_for_journal, reset_to_default, set_color_palette,
};

#[test]
fn nature_style_overrides_base_fonts() {
    let mut config = StyleConfig::new();
    let applied = apply_publication_style(&mut config, "nature");

    assert_eq!(applied, StylePreset::Nature);
    assert_eq!(config.get_f64("font.size"), Some(7.0));
    assert_eq!(config.get_f64("savefig.dpi"), Some(600.0));
    assert_eq!(config.get_bool("axes.spines.top"), Some(false));
    assert_eq!(config.len(), base_style().len());
}

#[test]
fn unknown_style_applies_the_base_style() {
    let mut config = StyleConfig::new();
    let applied = apply_publication_style(&mut config, "vaporwave");

    assert_eq!(applied, StylePreset::Default);
    assert_eq!(config, base_style());
}

#[test]
fn presentation_style_enlarges_text() {
    let mut config = StyleConfig::new();
    apply_publication_style(&mut config, "presentation");

    assert_eq!(config.get_f64("font.size"), Some(14.0));
    assert_eq!(config.get_f64("lines.linewidth"), Some(2.5));
    assert_eq!(config.get("lines.markersize"), Some(&StyleValue::Int(8)));
    assert_eq!(config.get("axes.linewidth"), Some(&StyleValue::Float(1.5)));
}

#[test]
fn every_preset_override_keeps_the_base_value_kind() {
    let base = base_style();
    for preset in StylePreset::ALL {
        for (key, value) in preset.overrides().iter() {
            let base_value = base.get(key).expect("key in base style");
            assert_eq!(
                std::mem::discriminant(value),
                std::mem::discriminant(base_value),
                "{preset} changes the kind of {key}"
            );
        }
    }
}

#[test]
fn applying_styles_keeps_unrelated_keys() {
    let mut config = StyleConfig::new().with("custom.key", "kept");
    apply_publication_style(&mut config, "minimal");
    assert_eq!(config.get_str("custom.key"), Some("kept"));
}

#[test]
fn set_color_palette_falls_back_to_okabe_ito() {
    let mut config = StyleConfig::new();
    let palette = set_color_palette(&mut config, "neon");

    assert_eq!(palette, Palette::OkabeIto);
    let cycle = config.color_cycle().expect("cycle");
    assert_eq!(cycle[0].to_hex(), "#E69F00");
}

#[test]
fn set_color_palette_uses_known_palette() {
    let mut config = StyleConfig::new();
    assert_eq!(set_color_palette(&mut config, "wong"), Palette::Wong);
    assert_eq!(config.color_cycle().expect("cycle")[0], Color::BLACK);
}

#[test]
fn configure_for_journal_sets_column_width_at_four_by_three() {
    let mut config = StyleConfig::new();
    configure_for_journal(&mut config, "nature", ColumnWidth::Single).expect("nature");

    let (width, height) = config.get_pair("figure.figsize").expect("figsize");
    assert_relative_eq!(width, 89.0 / MM_PER_INCH, epsilon = 1e-12);
    assert_relative_eq!(height, width * 0.75, epsilon = 1e-12);
    assert_eq!(config.get_f64("font.size"), Some(7.0));
}

#[test]
fn configure_for_journal_double_column() {
    let mut config = StyleConfig::new();
    configure_for_journal(&mut config, "ieee", ColumnWidth::Double).expect("ieee");

    let (width, _) = config.get_pair("figure.figsize").expect("figsize");
    assert_relative_eq!(width * MM_PER_INCH, 182.0, epsilon = 1e-9);
    // IEEE has no dedicated preset.
    assert_eq!(config.get_f64("font.size"), Some(8.0));
}

#[test]
fn configure_for_unknown_journal_is_an_error_and_leaves_config() {
    let mut config = StyleConfig::new();
    let err = configure_for_journal(&mut config, "lancet", ColumnWidth::Single)
        .expect_err("unknown journal");

    assert!(matches!(err, FigureError::UnknownName { kind: "journal", .. }));
    assert!(config.is_empty());
}

#[test]
fn column_width_parses_strictly() {
    assert_eq!("double".parse::<ColumnWidth>().expect("double"), ColumnWidth::Double);
    assert!("triple".parse::<ColumnWidth>().is_err());
}

#[test]
fn reset_clears_every_key() {
    let mut config = StyleConfig::new();
    apply_publication_style(&mut config, "cell");
    reset_to_default(&mut config);
    assert!(config.is_empty());
}

#[test]
fn configured_style_drives_canvas_and_save_options() {
    let mut config = StyleConfig::new();
    configure_for_journal(&mut config, "science", ColumnWidth::Single).expect("science");
    set_color_palette(&mut config, "tol_bright");

    let mut canvas = Canvas::from_style(&config).expect("canvas");
    let options = SaveOptions::from_style(&config).expect("options");

    let (width_pt, _) = canvas.size_points();
    assert_relative_eq!(width_pt, 55.0 / MM_PER_INCH * 72.0, epsilon = 1e-9);
    assert_eq!(canvas.next_color(), Color::from_hex("#4477AA").expect("hex"));
    assert_relative_eq!(canvas.font_size_pt, 7.0);
    assert_eq!(options.dpi, 600);
    assert!(options.tight_bbox);
    assert_relative_eq!(options.pad_inches, 0.05);
}

#[test]
fn style_template_is_written_in_style_file_syntax() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(DEFAULT_STYLE_FILE);

    let preset = create_style_template(&path, "science").expect("template");
    let contents = fs::read_to_string(&path).expect("read template");

    assert_eq!(preset, StylePreset::Science);
    assert!(contents.starts_with("# Publication-quality matplotlib style"));
    assert!(contents.contains("font.size : 7\n"));
    assert!(contents.contains("axes.spines.top : False\n"));
    assert!(contents.contains("font.sans-serif : Arial, Helvetica, DejaVu Sans\n"));
    assert!(contents.contains("axes.prop_cycle : cycler('color', ['E69F00', "));
    assert_eq!(
        contents.lines().filter(|line| line.contains(" : ")).count(),
        base_style().len()
    );
}

#[test]
fn style_template_with_unknown_name_uses_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let preset = create_style_template(dir.path().join("x.mplstyle"), "nope").expect("template");
    assert_eq!(preset, StylePreset::Default);
}

#[test]
fn style_file_writer_keeps_insertion_order() {
    let config = StyleConfig::new()
        .with("lines.linewidth", 1.5)
        .with("legend.frameon", true)
        .with("figure.figsize", StyleValue::Pair(3.5, 2.625));
    let mut buffer = Vec::new();
    write_style_file(&config, &mut buffer).expect("write");

    let text = String::from_utf8(buffer).expect("utf8");
    let body: Vec<_> = text.lines().skip(3).collect();
    assert_eq!(
        body,
        [
            "lines.linewidth : 1.5",
            "legend.frameon : True",
            "figure.figsize : 3.5, 2.625",
        ]
    );
}

#[test]
fn style_config_serializes_to_json() {
    let json = StylePreset::Minimal.config().to_json_pretty().expect("json");
    assert!(json.contains("\"lines.linewidth\": 2.0"));
    assert!(json.contains("\"#E69F00\""));
}
