//! Length values and parsing
//!
//! Every length is converted to points, the report's base unit. Percentages
//! share the same representation and are told apart by their sign: a
//! negative value means "percent of the containing box", which is the
//! convention the element style model uses downstream.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumString};
use wombat_common::warning::warn_once;

/// A length in points, or a sign-encoded percentage.
///
/// `LengthValue::from_points(12.0)` is twelve points;
/// `LengthValue::from_percentage(50.0)` is stored as `-50.0` and reads back
/// through [`percentage`](Self::percentage). Because of the encoding a
/// negative absolute length cannot be represented; it reads as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LengthValue(f64);

impl LengthValue {
    /// An absolute length in points.
    #[must_use]
    pub const fn from_points(points: f64) -> Self {
        Self(points)
    }

    /// A percentage of the containing box, e.g. `50.0` for `50%`.
    #[must_use]
    pub const fn from_percentage(percent: f64) -> Self {
        Self(-percent)
    }

    /// The raw encoded value, as the style model stores it.
    #[must_use]
    pub const fn raw(self) -> f64 {
        self.0
    }

    /// Whether this value is a percentage rather than an absolute length.
    #[must_use]
    pub fn is_percentage(self) -> bool {
        self.0 < 0.0
    }

    /// The length in points, or `None` for a percentage.
    #[must_use]
    pub fn points(self) -> Option<f64> {
        (!self.is_percentage()).then_some(self.0)
    }

    /// The percentage (positive), or `None` for an absolute length.
    #[must_use]
    pub fn percentage(self) -> Option<f64> {
        self.is_percentage().then_some(-self.0)
    }

    /// Resolve to points against the size of the containing box.
    #[must_use]
    pub fn resolve(self, container: f64) -> f64 {
        self.percentage()
            .map_or(self.0, |percent| percent * container / 100.0)
    }
}

/// Unit words accepted after a number.
///
/// Unit matching is case-sensitive: `12PT` is not a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum LengthUnit {
    /// `%`, percent of the containing box.
    #[strum(serialize = "%")]
    Percent,
    /// `cm`
    #[strum(serialize = "cm")]
    Centimeter,
    /// `mm`
    #[strum(serialize = "mm")]
    Millimeter,
    /// `pt`, the base unit.
    #[strum(serialize = "pt")]
    Point,
    /// `in`
    #[strum(serialize = "in")]
    Inch,
    /// `px`, assuming 96dpi (4px = 3pt).
    #[strum(serialize = "px")]
    Pixel,
    /// `pc`, 12 points.
    #[strum(serialize = "pc")]
    Pica,
}

impl LengthUnit {
    /// Convert `value` in this unit to the base unit.
    ///
    /// NOTE: the `cm` and `mm` factors are `25.4 / 72` and `2.54 / 72`,
    /// the inverse of the physical conversion (1cm is 72 / 2.54 points).
    /// Existing report documents are laid out against these factors, so
    /// they are kept until every consumer can move to the physical scale.
    #[must_use]
    pub fn to_length(self, value: f64) -> LengthValue {
        match self {
            Self::Percent => LengthValue::from_percentage(value),
            Self::Centimeter => LengthValue(value * 25.4 / 72.0),
            Self::Millimeter => LengthValue(value * 2.54 / 72.0),
            Self::Point => LengthValue(value),
            Self::Inch => LengthValue(value * 72.0),
            Self::Pixel => LengthValue(value * 3.0 / 4.0),
            Self::Pica => LengthValue(value * 12.0),
        }
    }
}

/// Parse a loosely formatted length such as `12pt`, `1.5 in`, `50%` or `10`.
///
/// The text must start with a number (optional sign, integer or decimal).
/// What follows decides the result:
/// - nothing, or anything that is not a word: the bare number, taken as points
///   (non-conforming markup relies on this);
/// - a known unit: the converted length;
/// - any other word: `None`.
///
/// Never fails loudly; every malformed input yields `None`.
#[must_use]
pub fn parse_length(text: &str) -> Option<LengthValue> {
    let (value, rest) = split_number(text.trim_start())?;

    let Some(word) = unit_word(rest.trim_start()) else {
        return Some(LengthValue(value));
    };

    if let Ok(unit) = LengthUnit::from_str(word) {
        Some(unit.to_length(value))
    } else {
        warn_once("Style", &format!("unknown length unit '{word}' in '{text}'"));
        None
    }
}

/// Split a leading number off `text`, returning its value and the remainder.
fn split_number(text: &str) -> Option<(f64, &str)> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - digits_start;

    if bytes.get(end) == Some(&b'.') {
        end += 1;
        let fraction_start = end;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
        digits += end - fraction_start;
    }

    if digits == 0 {
        return None;
    }

    let value = text[..end].parse::<f64>().ok()?;
    Some((value, &text[end..]))
}

/// The unit word at the start of `text`: `%`, or a letter followed by
/// letters and digits. Characters from U+00A0 up count as letters, so
/// `5ñ` and `12pt3` carry unknown units rather than bare numbers.
fn unit_word(text: &str) -> Option<&str> {
    if text.starts_with('%') {
        return Some("%");
    }

    let is_letter = |c: char| c.is_ascii_alphabetic() || c >= '\u{A0}';
    let mut chars = text.char_indices();
    if !chars.next().is_some_and(|(_, c)| is_letter(c)) {
        return None;
    }
    let end = chars
        .find(|&(_, c)| !(is_letter(c) || c.is_ascii_digit()))
        .map_or(text.len(), |(i, _)| i);
    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(text: &str) -> f64 {
        parse_length(text)
            .unwrap_or_else(|| panic!("'{text}' should parse"))
            .raw()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_unit_conversion_table() {
        assert_close(parsed("72pt"), 72.0);
        assert_close(parsed("1in"), 72.0);
        assert_close(parsed("1pc"), 12.0);
        assert_close(parsed("96px"), 72.0);
        assert_close(parsed("50%"), -50.0);
        assert_close(parsed("10"), 10.0);
    }

    #[test]
    fn test_metric_factors_are_kept_as_is() {
        assert_close(parsed("1cm"), 25.4 / 72.0);
        assert_close(parsed("10mm"), 10.0 * 2.54 / 72.0);
        assert!((parsed("1cm") - 0.3528).abs() < 1e-4);
    }

    #[test]
    fn test_decimals_signs_and_spacing() {
        assert_close(parsed("1.5in"), 108.0);
        assert_close(parsed(".5pt"), 0.5);
        assert_close(parsed("-2pt"), -2.0);
        assert_close(parsed("+3pt"), 3.0);
        assert_close(parsed("  4 pt"), 4.0);
    }

    #[test]
    fn test_bare_number_before_punctuation() {
        assert_close(parsed("12;"), 12.0);
        assert_close(parsed("12 , 3"), 12.0);
    }

    #[test]
    fn test_rejects_non_lengths() {
        assert_eq!(parse_length("bogus"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("pt"), None);
        assert_eq!(parse_length("-"), None);
        assert_eq!(parse_length("."), None);
    }

    #[test]
    fn test_rejects_unknown_units() {
        assert_eq!(parse_length("2em"), None);
        assert_eq!(parse_length("12PT"), None);
        assert_eq!(parse_length("1e3"), None);
    }

    #[test]
    fn test_unit_word_runs_through_digits_and_non_ascii() {
        assert_eq!(parse_length("12pt3"), None);
        assert_eq!(parse_length("5\u{f1}"), None);
        assert_eq!(parse_length("3\u{b5}m"), None);
        assert_close(parsed("12pt;"), 12.0);
        assert_close(parsed("12 pt 3"), 12.0);
    }

    #[test]
    fn test_percentage_accessors() {
        let pct = parse_length("25%").unwrap();
        assert!(pct.is_percentage());
        assert_eq!(pct.points(), None);
        assert_eq!(pct.percentage(), Some(25.0));
        assert_close(pct.resolve(200.0), 50.0);

        let abs = parse_length("8pt").unwrap();
        assert!(!abs.is_percentage());
        assert_eq!(abs.points(), Some(8.0));
        assert_close(abs.resolve(200.0), 8.0);
    }
}
