use gpui::{Rgba, rgba};
use serde::{Deserialize, Deserializer, de::Error};

/// Deserializes a color written as `#rgb`, `#rrggbb`, `#rrggbbaa` or
/// `transparent`.
pub fn de_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;

    parse_color(&string).ok_or_else(|| {
        D::Error::custom(format!(
            "expected `transparent` or a hex color like `#rrggbb`, got \"{string}\""
        ))
    })
}

pub(crate) fn parse_color(string: &str) -> Option<Rgba> {
    let string = string.trim();

    if string.eq_ignore_ascii_case("transparent") {
        return Some(rgba(0x00000000));
    }

    let hex = string.strip_prefix('#')?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(hex, 16).ok()?;

    match hex.len() {
        3 => {
            let [_, _, high, low] = value.to_be_bytes();
            let r = (high & 0x0f) as u32;
            let g = (low >> 4) as u32;
            let b = (low & 0x0f) as u32;

            Some(rgba(
                ((r * 0x11) << 24) | ((g * 0x11) << 16) | ((b * 0x11) << 8) | 0xff,
            ))
        }
        6 => Some(rgba((value << 8) | 0xff)),
        8 => Some(rgba(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_color("#2563eb"), Some(rgb(0x2563eb)));
    }

    #[test]
    fn parses_shorthand_hex() {
        assert_eq!(parse_color("#fff"), Some(rgb(0xffffff)));
        assert_eq!(parse_color("#1a2"), Some(rgb(0x11aa22)));
    }

    #[test]
    fn parses_hex_with_alpha() {
        let color = parse_color("#00000080").unwrap();
        assert_eq!(color.r, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parses_transparent_keyword() {
        let color = parse_color("Transparent").unwrap();
        assert_eq!(color.a, 0.0);
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_color("2563eb"), None);
        assert_eq!(parse_color("#25"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("#+12345"), None);
        assert_eq!(parse_color("red"), None);
    }
}
