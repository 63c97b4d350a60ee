use pubfig::journal::{Journal, MM_PER_INCH, WIDTH_TOLERANCE_MM};
use pubfig::{NullFigure, check_figure_size};
use proptest::prelude::*;

fn journal_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["nature", "science", "cell", "plos", "acs", "ieee", "other"])
}

proptest! {
    #[test]
    fn size_check_is_deterministic(
        width_mm in 10.0f64..400.0,
        height_mm in 10.0f64..400.0,
        journal in journal_name(),
    ) {
        let figure = NullFigure::new(width_mm / MM_PER_INCH, height_mm / MM_PER_INCH);

        let first = check_figure_size(&figure, journal);
        let second = check_figure_size(&figure, journal);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.compliant, first.width_ok && first.height_ok);
        prop_assert_eq!(first.width_ok, first.column_type.is_some());
    }

    #[test]
    fn width_ok_tracks_column_tolerance(width_mm in 10.0f64..400.0) {
        let figure = NullFigure::new(width_mm / MM_PER_INCH, 1.0);
        let check = check_figure_size(&figure, "nature");
        let limits = Journal::Nature.size_limits().expect("nature limits");

        let near_column = (check.width_mm - limits.single_column_mm).abs() < WIDTH_TOLERANCE_MM
            || (check.width_mm - limits.double_column_mm).abs() < WIDTH_TOLERANCE_MM;
        prop_assert_eq!(check.width_ok, near_column);
    }
}
