use approx::relative_eq;
use chartjs_model::colors::{Color, ColorBuilder, GradientBuilder, GradientType};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rgba_strings_parse_back_property(
        red in any::<u8>(),
        green in any::<u8>(),
        blue in any::<u8>(),
        alpha in 0.0f64..=1.0
    ) {
        let color = Color::rgba(red, green, blue, alpha).expect("valid alpha");
        let parsed = ColorBuilder::parse(&color.to_rgba()).expect("parse rgba");
        prop_assert_eq!(parsed, color);

        let hex = ColorBuilder::parse(&color.to_hex()).expect("parse hex");
        prop_assert_eq!((hex.red, hex.green, hex.blue), (red, green, blue));
    }

    #[test]
    fn interpolated_channels_stay_between_stops_property(
        from in any::<(u8, u8, u8)>(),
        to in any::<(u8, u8, u8)>(),
        from_alpha in 0.0f64..=1.0,
        to_alpha in 0.0f64..=1.0,
        offset in 0.0f64..=1.0
    ) {
        let start = Color::rgb(from.0, from.1, from.2).alpha(from_alpha);
        let stop = Color::rgb(to.0, to.1, to.2).alpha(to_alpha);
        let gradient = GradientBuilder::create(GradientType::Linear)
            .add_colors_start_stop(start, stop)
            .build()
            .expect("gradient");

        let color = gradient.interpolated_color(offset).expect("interpolate");
        let within = |value: u8, a: u8, b: u8| value >= a.min(b) && value <= a.max(b);
        prop_assert!(within(color.red, from.0, to.0));
        prop_assert!(within(color.green, from.1, to.1));
        prop_assert!(within(color.blue, from.2, to.2));

        let expected_alpha = from_alpha + offset * (to_alpha - from_alpha);
        prop_assert!(relative_eq!(color.alpha, expected_alpha, epsilon = 1e-9));
    }
}
