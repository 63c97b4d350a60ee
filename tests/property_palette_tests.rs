use pubfig::palette::Palette;
use pubfig::{Color, get_palette};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_palette_is_non_empty_and_parses(index in 0usize..Palette::ALL.len()) {
        let palette = Palette::ALL[index];
        let colors = get_palette(palette.name()).expect("known palette");

        prop_assert!(!colors.is_empty());
        for hex in &colors {
            prop_assert_eq!(hex.len(), 7);
            prop_assert!(hex.starts_with('#'));
            let color = Color::from_hex(hex).expect("valid hex");
            prop_assert_eq!(color.to_hex(), hex.to_ascii_uppercase());
        }
        prop_assert_eq!(palette.colors().expect("colors").len(), colors.len());
    }

    #[test]
    fn unknown_names_never_resolve(name in "[a-z_]{1,20}") {
        prop_assume!(Palette::ALL.iter().all(|palette| palette.name() != name));
        prop_assert!(get_palette(&name).is_err());
    }
}
