use chartjs_model::colors::{Color, ColorBuilder, color_name, named_color};

#[test]
fn parses_every_supported_notation() {
    assert_eq!(ColorBuilder::parse("#f00").expect("short hex"), Color::rgb(255, 0, 0));
    assert_eq!(
        ColorBuilder::parse("#00FF7f").expect("hex"),
        Color::rgb(0, 255, 127)
    );
    assert_eq!(
        ColorBuilder::parse("rgb(10, 20, 30)").expect("rgb"),
        Color::rgb(10, 20, 30)
    );
    assert_eq!(
        ColorBuilder::parse("rgba(10,20,30,0.5)").expect("rgba"),
        Color::rgb(10, 20, 30).alpha(0.5)
    );
    assert_eq!(
        ColorBuilder::parse("hsl(0, 100%, 50%)").expect("hsl"),
        Color::rgb(255, 0, 0)
    );
    assert_eq!(
        ColorBuilder::parse("hsla(120, 100%, 50%, 0.25)").expect("hsla"),
        Color::rgb(0, 255, 0).alpha(0.25)
    );
    assert_eq!(
        ColorBuilder::parse("RebeccaPurple").expect("named"),
        Color::rgb(102, 51, 153)
    );
}

#[test]
fn rejects_out_of_range_components() {
    assert!(ColorBuilder::parse("rgb(256,0,0)").is_err());
    assert!(ColorBuilder::parse("rgba(0,0,0,1.5)").is_err());
    assert!(ColorBuilder::parse("hsl(361,50%,50%)").is_err());
    assert!(ColorBuilder::parse("hsl(10,101%,50%)").is_err());
    assert!(ColorBuilder::parse("#12345").is_err());
    assert!(ColorBuilder::parse("notacolor").is_err());
    assert!(ColorBuilder::parse("").is_err());
}

#[test]
fn rgba_output_has_no_spaces() {
    assert_eq!(Color::rgb(1, 2, 3).to_rgba(), "rgba(1,2,3,1)");
    assert_eq!(Color::rgb(1, 2, 3).alpha(0.1).to_string(), "rgba(1,2,3,0.1)");
    assert_eq!(Color::rgb(255, 0, 16).to_hex(), "#ff0010");
}

#[test]
fn alpha_is_clamped() {
    assert_eq!(Color::rgb(0, 0, 0).alpha(2.0).alpha, 1.0);
    assert_eq!(Color::rgb(0, 0, 0).alpha(-1.0).alpha, 0.0);
    assert!(Color::rgba(0, 0, 0, f64::NAN).is_err());
}

#[test]
fn argb_packing_round_trips_opaque_colors() {
    let color = Color::rgb(12, 34, 56);
    assert_eq!(color.to_argb(), 0xff0c_2238);
    assert_eq!(Color::from_argb(color.to_argb()), color);
}

#[test]
fn named_colors_are_case_insensitive() {
    assert_eq!(named_color("DarkOrange"), Some(Color::rgb(255, 140, 0)));
    assert_eq!(color_name(Color::rgb(255, 140, 0)), Some("darkorange"));
    assert_eq!(named_color("grey-ish"), None);
}
