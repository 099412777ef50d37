use crate::colors::color::{Color, DEFAULT_ALPHA, check_alpha};
use crate::colors::html::named_color;
use crate::error::{ChartError, ChartResult};

/// Parses CSS color strings into [`Color`].
pub struct ColorBuilder;

impl ColorBuilder {
    /// Accepts `#rgb`, `#rrggbb`, `rgb()`, `rgba()`, `hsl()`, `hsla()` and CSS names.
    pub fn parse(value: &str) -> ChartResult<Color> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ChartError::InvalidColor("color value is empty".to_owned()));
        }
        let lower = trimmed.to_ascii_lowercase();
        if let Some(hex) = lower.strip_prefix('#') {
            parse_hex(hex, value)
        } else if let Some(body) = function_body(&lower, "rgba") {
            let [red, green, blue, alpha] = split_components::<4>(body, value)?;
            Color::rgba(
                parse_channel(red, value)?,
                parse_channel(green, value)?,
                parse_channel(blue, value)?,
                parse_alpha(alpha, value)?,
            )
        } else if let Some(body) = function_body(&lower, "rgb") {
            let [red, green, blue] = split_components::<3>(body, value)?;
            Ok(Color::rgb(
                parse_channel(red, value)?,
                parse_channel(green, value)?,
                parse_channel(blue, value)?,
            ))
        } else if let Some(body) = function_body(&lower, "hsla") {
            let [hue, saturation, lightness, alpha] = split_components::<4>(body, value)?;
            hsl_to_rgb(
                parse_bounded(hue, 360, value)?,
                parse_percentage(saturation, value)?,
                parse_percentage(lightness, value)?,
                parse_alpha(alpha, value)?,
            )
        } else if let Some(body) = function_body(&lower, "hsl") {
            let [hue, saturation, lightness] = split_components::<3>(body, value)?;
            hsl_to_rgb(
                parse_bounded(hue, 360, value)?,
                parse_percentage(saturation, value)?,
                parse_percentage(lightness, value)?,
                DEFAULT_ALPHA,
            )
        } else {
            named_color(&lower).ok_or_else(|| invalid(value))
        }
    }

    pub fn parse_all<S: AsRef<str>>(values: &[S]) -> ChartResult<Vec<Color>> {
        values
            .iter()
            .map(|value| Self::parse(value.as_ref()))
            .collect()
    }
}

fn invalid(value: &str) -> ChartError {
    ChartError::InvalidColor(format!("invalid format for a color: `{value}`"))
}

fn function_body<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_components<'a, const N: usize>(body: &'a str, value: &str) -> ChartResult<[&'a str; N]> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    parts.try_into().map_err(|_| invalid(value))
}

fn parse_hex(hex: &str, value: &str) -> ChartResult<Color> {
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_owned(),
        _ => {
            return Err(ChartError::InvalidColor(format!(
                "hex color `{value}` must have 3 or 6 digits"
            )));
        }
    };
    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| invalid(value))
    };
    Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_bounded(component: &str, max: u16, value: &str) -> ChartResult<u16> {
    let parsed: u16 = component.parse().map_err(|_| invalid(value))?;
    if parsed > max {
        return Err(ChartError::InvalidColor(format!(
            "component {parsed} of `{value}` exceeds {max}"
        )));
    }
    Ok(parsed)
}

fn parse_channel(component: &str, value: &str) -> ChartResult<u8> {
    parse_bounded(component, 255, value).map(|channel| channel as u8)
}

fn parse_percentage(component: &str, value: &str) -> ChartResult<u16> {
    let number = component.strip_suffix('%').ok_or_else(|| invalid(value))?;
    parse_bounded(number.trim(), 100, value)
}

fn parse_alpha(component: &str, value: &str) -> ChartResult<f64> {
    let alpha: f64 = component.parse().map_err(|_| invalid(value))?;
    check_alpha(alpha)
}

fn hsl_to_rgb(hue: u16, saturation: u16, lightness: u16, alpha: f64) -> ChartResult<Color> {
    let hue = f64::from(hue % 360) / 360.0;
    let saturation = f64::from(saturation) / 100.0;
    let lightness = f64::from(lightness) / 100.0;

    let upper = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - saturation * lightness
    };
    let lower = 2.0 * lightness - upper;

    let channel = |offset: f64| {
        let value = hue_to_rgb(lower, upper, hue + offset).clamp(0.0, 1.0);
        (value * 255.0).round() as u8
    };
    Color::rgba(
        channel(1.0 / 3.0),
        channel(0.0),
        channel(-1.0 / 3.0),
        alpha,
    )
}

fn hue_to_rgb(lower: f64, upper: f64, channel: f64) -> f64 {
    let mut channel = channel;
    if channel < 0.0 {
        channel += 1.0;
    }
    if channel > 1.0 {
        channel -= 1.0;
    }
    if 6.0 * channel < 1.0 {
        return lower + (upper - lower) * 6.0 * channel;
    }
    if 2.0 * channel < 1.0 {
        return upper;
    }
    if 3.0 * channel < 2.0 {
        return lower + (upper - lower) * 6.0 * (2.0 / 3.0 - channel);
    }
    lower
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_primary_hues_map_to_rgb_primaries() {
        assert_eq!(ColorBuilder::parse("hsl(0, 100%, 50%)").expect("red"), Color::rgb(255, 0, 0));
        assert_eq!(ColorBuilder::parse("hsl(120,100%,50%)").expect("green"), Color::rgb(0, 255, 0));
        assert_eq!(ColorBuilder::parse("hsl(240, 100%, 50%)").expect("blue"), Color::rgb(0, 0, 255));
    }

    #[test]
    fn hsl_rejects_out_of_range_components() {
        assert!(ColorBuilder::parse("hsl(400, 10%, 10%)").is_err());
        assert!(ColorBuilder::parse("hsl(10, 120%, 10%)").is_err());
        assert!(ColorBuilder::parse("hsl(10, 20, 10%)").is_err());
    }
}
