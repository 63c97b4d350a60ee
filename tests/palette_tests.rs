use pubfig::palette::{
    ColormapAdvice, DNA_BASES, DNA_BASES_ACCESSIBLE, FLUOROPHORES_ACCESSIBLE,
    FLUOROPHORES_TRADITIONAL, Palette, colormap_advice, palette_swatch_canvas,
};
use pubfig::{Color, FigureError, StyleConfig, apply_palette, get_palette};

#[test]
fn wong_starts_with_black() {
    let wong = get_palette("wong").expect("wong palette");
    assert_eq!(wong.len(), 8);
    assert_eq!(wong[0], "#000000");
}

#[test]
fn okabe_ito_is_the_default_palette() {
    let default = get_palette(Palette::default().name()).expect("default palette");
    assert_eq!(default[0], "#E69F00");
    assert_eq!(default.len(), 8);
}

#[test]
fn unknown_palette_error_lists_every_name() {
    let err = get_palette("rainbow").expect_err("unknown palette must fail");
    assert!(matches!(err, FigureError::UnknownName { kind: "palette", .. }));

    let message = err.to_string();
    assert!(message.contains("rainbow"));
    for palette in Palette::ALL {
        assert!(message.contains(palette.name()), "missing {palette} in {message}");
    }
}

#[test]
fn palette_lookup_is_case_sensitive() {
    assert!(get_palette("Wong").is_err());
}

#[test]
fn returned_palette_is_an_owned_copy() {
    let mut first = get_palette("tol_bright").expect("palette");
    first.clear();
    assert_eq!(get_palette("tol_bright").expect("palette").len(), 7);
}

#[test]
fn apply_palette_sets_color_cycle() {
    let mut config = StyleConfig::new();
    let colors = apply_palette(&mut config, "tol_high_contrast").expect("apply");

    let cycle = config.color_cycle().expect("cycle set");
    assert_eq!(cycle.len(), colors.len());
    assert_eq!(cycle[0], Color::from_hex("#004488").expect("hex"));
}

#[test]
fn failed_apply_leaves_config_untouched() {
    let mut config = StyleConfig::new().with("font.size", 8_i64);
    let before = config.clone();

    assert!(apply_palette(&mut config, "nope").is_err());
    assert_eq!(config, before);
}

#[test]
fn domain_tables_hold_valid_colors() {
    for (_, hex) in FLUOROPHORES_TRADITIONAL
        .iter()
        .chain(FLUOROPHORES_ACCESSIBLE)
        .chain(DNA_BASES)
        .chain(DNA_BASES_ACCESSIBLE)
    {
        Color::from_hex(hex).expect("valid hex");
    }
    assert_eq!(DNA_BASES.len(), 4);
}

#[test]
fn colormap_advice_flags_red_green_maps() {
    assert_eq!(colormap_advice("RdYlGn_r"), ColormapAdvice::Avoid);
    assert_eq!(colormap_advice("cividis"), ColormapAdvice::Sequential);
    assert_eq!(colormap_advice("RdBu"), ColormapAdvice::DivergingSafe);
}

#[test]
fn swatch_canvas_renders_to_svg() {
    let canvas = palette_swatch_canvas().expect("swatch canvas");
    let frame = canvas
        .page_frame(&pubfig::SaveOptions::default())
        .expect("frame");
    let svg = pubfig::render::SvgRenderer
        .render_to_string(&frame)
        .expect("svg");

    assert!(svg.contains("Tol High Contrast"));
    assert!(svg.contains("#DDAA33"));
}
