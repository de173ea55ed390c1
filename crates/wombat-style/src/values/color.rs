//! Color values and the color-resolution collaborator
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// An opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    ///
    /// The leading `#` is optional; legacy `bgcolor` attributes often omit it.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
        // by replicating digits, not by adding zeros."
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: short(3)?,
            }),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self {
                r: long(0)?,
                g: long(2)?,
                b: long(4)?,
                a: long(6)?,
            }),
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The sixteen basic HTML colors, plus `orange` and `transparent`.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "aqua" | "cyan" => Self::rgb(0, 255, 255),
            "fuchsia" | "magenta" => Self::rgb(255, 0, 255),
            "lime" => Self::rgb(0, 255, 0),
            "maroon" => Self::rgb(128, 0, 0),
            "navy" => Self::rgb(0, 0, 128),
            "olive" => Self::rgb(128, 128, 0),
            "purple" => Self::rgb(128, 0, 128),
            "silver" => Self::rgb(192, 192, 192),
            "teal" => Self::rgb(0, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            "transparent" => Self {
                r: 0,
                g: 0,
                b: 0,
                a: 0,
            },
            _ => return None,
        };
        Some(color)
    }

    /// [§ 5.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// Legacy comma syntax only: `rgb(r, g, b)` and `rgba(r, g, b, alpha)`,
    /// with integer channels and an alpha between 0 and 1.
    #[must_use]
    pub fn from_rgb_function(text: &str) -> Option<Self> {
        let lower = text.trim().to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let channel = |s: &str| s.parse::<u8>().ok();
        match parts.as_slice() {
            [r, g, b] => Some(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, alpha] => {
                let alpha = alpha.parse::<f64>().ok()?.clamp(0.0, 1.0);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let a = (alpha * 255.0).round() as u8;
                Some(Self {
                    r: channel(r)?,
                    g: channel(g)?,
                    b: channel(b)?,
                    a,
                })
            }
            _ => None,
        }
    }

    /// Convert to hex string notation (#RRGGBB or #RRGGBBAA if alpha != 255)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Turns color text from the markup into a color.
///
/// Implemented by the host's color model. Returning `None` leaves the
/// corresponding style fields unset.
pub trait ColorResolver {
    /// Resolve `text` (a keyword, hex value, ...) to a color.
    fn color_from_text(&self, text: &str) -> Option<ColorValue>;
}

/// Resolves hex notation, `rgb()`/`rgba()` and basic named colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorResolver;

impl ColorResolver for CssColorResolver {
    fn color_from_text(&self, text: &str) -> Option<ColorValue> {
        let text = text.trim();
        if text.starts_with('#') {
            return ColorValue::from_hex(text);
        }
        ColorValue::from_named(text)
            .or_else(|| ColorValue::from_rgb_function(text))
            // Legacy attributes such as bgcolor="ff0000" drop the '#'.
            .or_else(|| ColorValue::from_hex(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_lengths() {
        assert_eq!(ColorValue::from_hex("#f00"), Some(ColorValue::rgb(255, 0, 0)));
        assert_eq!(ColorValue::from_hex("#FfA500"), Some(ColorValue::rgb(255, 165, 0)));
        assert_eq!(
            ColorValue::from_hex("#00ff0080"),
            Some(ColorValue {
                r: 0,
                g: 255,
                b: 0,
                a: 128
            })
        );
        assert_eq!(ColorValue::from_hex("#12345"), None);
        assert_eq!(ColorValue::from_hex("#ggg"), None);
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(
            ColorValue::from_rgb_function("rgb(10, 20, 30)"),
            Some(ColorValue::rgb(10, 20, 30))
        );
        assert_eq!(
            ColorValue::from_rgb_function("RGBA(0,0,0,0.5)").map(|c| c.a),
            Some(128)
        );
        assert_eq!(ColorValue::from_rgb_function("rgb(300, 0, 0)"), None);
        assert_eq!(ColorValue::from_rgb_function("rgb(1, 2)"), None);
    }

    #[test]
    fn test_resolver_fallbacks() {
        let colors = CssColorResolver;
        assert_eq!(colors.color_from_text(" Navy "), Some(ColorValue::rgb(0, 0, 128)));
        assert_eq!(colors.color_from_text("336699"), Some(ColorValue::rgb(0x33, 0x66, 0x99)));
        assert_eq!(colors.color_from_text("#abc"), Some(ColorValue::rgb(0xaa, 0xbb, 0xcc)));
        assert_eq!(colors.color_from_text("no-such-color"), None);
    }

    #[test]
    fn test_to_hex_string() {
        assert_eq!(ColorValue::rgb(0x25, 0x63, 0xeb).to_hex_string(), "#2563eb");
        assert_eq!(
            ColorValue::from_named("transparent").unwrap().to_hex_string(),
            "#00000000"
        );
    }
}
