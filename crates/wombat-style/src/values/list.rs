//! List marker styles
//!
//! [CSS Lists Level 3](https://www.w3.org/TR/css-lists-3/), restricted to the
//! nine marker styles the report engine can render as plain text.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Type of list item marker, from `list-style` / `list-style-type` or the
/// HTML `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ListStyle {
    /// No marker.
    None,
    /// Filled bullet.
    Disc,
    /// Hollow bullet.
    Circle,
    /// Square bullet.
    Square,
    /// 1. 2. 3.
    Arabic,
    /// i. ii. iii.
    LowerRoman,
    /// I. II. III.
    UpperRoman,
    /// a. b. c.
    LowerAlpha,
    /// A. B. C.
    UpperAlpha,
}

/// [§ 7.1.1 Roman numerals](https://www.w3.org/TR/css-counter-styles-3/#simple-numeric)
const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

impl ListStyle {
    /// Parse a `list-style-type` keyword.
    ///
    /// Matching is exact and case-sensitive. The `none.` spelling (with the
    /// trailing dot) is what existing report documents use for "no marker";
    /// a bare `none` is not recognized.
    #[must_use]
    pub fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "none." => Some(Self::None),
            "circle" => Some(Self::Circle),
            "disc" => Some(Self::Disc),
            "square" => Some(Self::Square),
            "decimal" | "arabic" => Some(Self::Arabic),
            "lower-alpha" => Some(Self::LowerAlpha),
            "upper-alpha" => Some(Self::UpperAlpha),
            "lower-roman" => Some(Self::LowerRoman),
            "upper-roman" => Some(Self::UpperRoman),
            _ => None,
        }
    }

    /// The marker text for the item at `ordinal` (1-based), including the
    /// trailing separator.
    ///
    /// Ordinal 0 has no marker in any style and yields an empty string.
    #[must_use]
    pub fn format(self, ordinal: u32) -> String {
        if ordinal == 0 {
            return String::new();
        }

        match self {
            Self::None => String::new(),
            Self::Disc => "() ".to_string(),
            Self::Circle => "o ".to_string(),
            Self::Square => "[] ".to_string(),
            Self::Arabic => format!("{ordinal}. "),
            Self::LowerRoman => format!("{}. ", to_roman(ordinal).to_ascii_lowercase()),
            Self::UpperRoman => format!("{}. ", to_roman(ordinal)),
            Self::LowerAlpha => format!("{}. ", to_alpha(ordinal).to_ascii_lowercase()),
            Self::UpperAlpha => format!("{}. ", to_alpha(ordinal)),
        }
    }

    /// Whether the style numbers its items (as opposed to a bullet or nothing).
    #[must_use]
    pub const fn is_ordinal(self) -> bool {
        matches!(
            self,
            Self::Arabic | Self::LowerRoman | Self::UpperRoman | Self::LowerAlpha | Self::UpperAlpha
        )
    }
}

/// Bijective base-26: 1 → A, 26 → Z, 27 → AA, 52 → AZ, 53 → BA.
fn to_alpha(mut number: u32) -> String {
    let mut letters = Vec::new();
    while number > 0 {
        number -= 1;
        // `number % 26` is always below 26.
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + (number % 26) as u8));
        number /= 26;
    }
    letters.iter().rev().collect()
}

/// Greedy subtractive Roman numeral: 4 → IV, 1994 → MCMXCIV.
fn to_roman(mut number: u32) -> String {
    let mut result = String::new();
    for &(value, symbol) in &ROMAN_NUMERALS {
        while number >= value {
            result.push_str(symbol);
            number -= value;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_alpha_numbering() {
        let cases = [(1, "A"), (2, "B"), (26, "Z"), (27, "AA"), (28, "AB"), (52, "AZ"), (53, "BA"), (702, "ZZ"), (703, "AAA")];
        for (ordinal, expected) in cases {
            assert_eq!(to_alpha(ordinal), expected, "ordinal {ordinal}");
        }
        assert_eq!(ListStyle::UpperAlpha.format(28), "AB. ");
        assert_eq!(ListStyle::LowerAlpha.format(53), "ba. ");
    }

    #[test]
    fn test_roman_numbering() {
        let cases = [(1, "I"), (4, "IV"), (9, "IX"), (14, "XIV"), (49, "XLIX"), (1994, "MCMXCIV"), (3999, "MMMCMXCIX")];
        for (ordinal, expected) in cases {
            assert_eq!(to_roman(ordinal), expected, "ordinal {ordinal}");
        }
        assert_eq!(ListStyle::UpperRoman.format(9), "IX. ");
        assert_eq!(ListStyle::LowerRoman.format(49), "xlix. ");
    }

    #[test]
    fn test_bullets_and_arabic() {
        assert_eq!(ListStyle::None.format(3), "");
        assert_eq!(ListStyle::Disc.format(3), "() ");
        assert_eq!(ListStyle::Circle.format(1), "o ");
        assert_eq!(ListStyle::Square.format(1), "[] ");
        assert_eq!(ListStyle::Arabic.format(42), "42. ");
    }

    #[test]
    fn test_ordinal_zero_is_empty_for_every_style() {
        for style in ListStyle::iter() {
            assert_eq!(style.format(0), "", "{style}");
        }
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ListStyle::parse("none."), Some(ListStyle::None));
        assert_eq!(ListStyle::parse("none"), None);
        assert_eq!(ListStyle::parse("decimal"), Some(ListStyle::Arabic));
        assert_eq!(ListStyle::parse("arabic"), Some(ListStyle::Arabic));
        assert_eq!(ListStyle::parse("upper-roman"), Some(ListStyle::UpperRoman));
        assert_eq!(ListStyle::parse("Upper-Roman"), None);
        assert_eq!(ListStyle::parse("lower-greek"), None);
    }

    #[quickcheck_macros::quickcheck]
    fn prop_alpha_is_uppercase_and_nonempty(ordinal: u32) -> bool {
        let ordinal = ordinal.max(1);
        let text = to_alpha(ordinal);
        !text.is_empty() && text.chars().all(|c| c.is_ascii_uppercase())
    }

    #[quickcheck_macros::quickcheck]
    fn prop_roman_numeral_sums_back(ordinal: u16) -> bool {
        let ordinal = u32::from(ordinal.max(1));
        let text = to_roman(ordinal);
        let value = |c| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => 0,
        };
        let digits: Vec<i64> = text.chars().map(value).collect();
        let total: i64 = digits
            .iter()
            .enumerate()
            .map(|(i, &d)| if digits.get(i + 1).is_some_and(|&next| next > d) { -d } else { d })
            .sum();
        total == i64::from(ordinal)
    }
}
