//! Font resolution
//!
//! [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)

use serde::Serialize;

use super::length::parse_length;
use crate::attribute::{AttributeKey, MergedAttributeView};

/// A resolved font: what the style record stores about text appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub size: f64,
    /// Italic or oblique face.
    pub italic: bool,
    /// Bold face.
    pub bold: bool,
}

/// Picks a font for a node from its merged attributes.
///
/// Implemented by the host's font registry. Returning `None` leaves every
/// font field of the record unset.
pub trait FontResolver {
    /// Resolve the font described by `view`.
    fn font_for(&self, view: &MergedAttributeView) -> Option<FontSpec>;
}

/// HTML font sizes 1 through 7, in points.
///
/// Used for `<font size="n">` and the `xx-small` … `xx-large` keywords.
pub const HTML_FONT_SIZES: [f64; 7] = [8.0, 10.0, 12.0, 14.0, 18.0, 24.0, 36.0];

/// Resolves fonts from `font-family`, `font-size`, `font-weight` and
/// `font-style`, falling back to a default family and size.
///
/// Always produces a font, like a stylesheet's font lookup does.
#[derive(Debug, Clone, PartialEq)]
pub struct CssFontResolver {
    /// Family used when no `font-family` is set.
    pub default_family: String,
    /// Size in points used when no usable `font-size` is set, and the base
    /// for percentage sizes.
    pub default_size: f64,
}

impl Default for CssFontResolver {
    fn default() -> Self {
        Self {
            default_family: "SansSerif".to_string(),
            default_size: 12.0,
        }
    }
}

impl FontResolver for CssFontResolver {
    fn font_for(&self, view: &MergedAttributeView) -> Option<FontSpec> {
        let family = view
            .text(AttributeKey::FontFamily)
            .and_then(|text| parse_font_family(&text))
            .unwrap_or_else(|| self.default_family.clone());

        let size = view
            .text(AttributeKey::FontSize)
            .and_then(|text| self.parse_font_size(&text))
            .unwrap_or(self.default_size);

        let bold = view
            .text(AttributeKey::FontWeight)
            .is_some_and(|text| is_bold(&text));

        let italic = view.text(AttributeKey::FontStyle).is_some_and(|text| {
            let style = text.trim();
            style.eq_ignore_ascii_case("italic") || style.eq_ignore_ascii_case("oblique")
        });

        Some(FontSpec {
            family,
            size,
            italic,
            bold,
        })
    }
}

impl CssFontResolver {
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
    ///
    /// Absolute-size keywords, lengths, and percentages of the default size.
    fn parse_font_size(&self, text: &str) -> Option<f64> {
        let keyword = match text.trim().to_ascii_lowercase().as_str() {
            "xx-small" => Some(0),
            "x-small" => Some(1),
            "small" => Some(2),
            "medium" => Some(3),
            "large" => Some(4),
            "x-large" => Some(5),
            "xx-large" => Some(6),
            _ => None,
        };
        if let Some(index) = keyword {
            return Some(HTML_FONT_SIZES[index]);
        }

        let length = parse_length(text)?;
        let size = length.resolve(self.default_size);
        (size > 0.0).then_some(size)
    }
}

/// [§ 3.1 'font-family'](https://www.w3.org/TR/css-fonts-4/#font-family-prop)
///
/// The first family of a comma-separated list, with quotes removed.
#[must_use]
pub fn parse_font_family(text: &str) -> Option<String> {
    let first = text.split(',').next()?.trim();
    let unquoted = first.trim_matches(|c| c == '"' || c == '\'').trim();
    (!unquoted.is_empty()).then(|| unquoted.to_string())
}

/// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// `bold`, `bolder` and numeric weights from 600 up count as bold.
fn is_bold(text: &str) -> bool {
    let weight = text.trim();
    weight.eq_ignore_ascii_case("bold")
        || weight.eq_ignore_ascii_case("bolder")
        || weight.parse::<u16>().is_ok_and(|w| w >= 600)
}

/// Map an HTML `<font size>` value to a `font-size` in points.
///
/// Accepts `1`–`7` and relative `+n` / `-n` (relative to 3), clamped to
/// the scale. Numbers outside the `i32` range do not parse.
#[must_use]
pub fn html_font_size(text: &str) -> Option<f64> {
    let text = text.trim();
    let index = if let Some(delta) = text.strip_prefix('+') {
        3i32.saturating_add(delta.parse().ok()?)
    } else if text.starts_with('-') {
        3i32.saturating_add(text.parse().ok()?)
    } else {
        text.parse::<i32>().ok()?
    };

    let index = usize::try_from(index.clamp(1, 7) - 1).ok()?;
    HTML_FONT_SIZES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeSource;

    fn view(declarations: &str) -> MergedAttributeView {
        MergedAttributeView::from_sources(&[AttributeSource::from_declarations(declarations)])
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let font = CssFontResolver::default().font_for(&view("")).unwrap();
        assert_eq!(font.family, "SansSerif");
        assert!((font.size - 12.0).abs() < f64::EPSILON);
        assert!(!font.bold);
        assert!(!font.italic);
    }

    #[test]
    fn test_reads_font_attributes() {
        let font = CssFontResolver::default()
            .font_for(&view(
                "font-family: 'Times New Roman', serif; font-size: 16px; font-weight: 700; font-style: Italic",
            ))
            .unwrap();
        assert_eq!(font.family, "Times New Roman");
        assert!((font.size - 12.0).abs() < f64::EPSILON);
        assert!(font.bold);
        assert!(font.italic);
    }

    #[test]
    fn test_font_size_keywords_and_percentages() {
        let resolver = CssFontResolver::default();
        assert_eq!(resolver.parse_font_size("x-large"), Some(24.0));
        assert_eq!(resolver.parse_font_size("150%"), Some(18.0));
        assert_eq!(resolver.parse_font_size("14pt"), Some(14.0));
        assert_eq!(resolver.parse_font_size("huge"), None);
        assert_eq!(resolver.parse_font_size("0"), None);
    }

    #[test]
    fn test_html_font_sizes() {
        assert_eq!(html_font_size("1"), Some(8.0));
        assert_eq!(html_font_size("7"), Some(36.0));
        assert_eq!(html_font_size("+1"), Some(14.0));
        assert_eq!(html_font_size("-2"), Some(8.0));
        assert_eq!(html_font_size("12"), Some(36.0));
        assert_eq!(html_font_size("big"), None);
    }

    #[test]
    fn test_html_font_size_extremes_clamp() {
        assert_eq!(html_font_size("+2147483647"), Some(36.0));
        assert_eq!(html_font_size("-2147483648"), Some(8.0));
        assert_eq!(html_font_size("2147483647"), Some(36.0));
        assert_eq!(html_font_size("+99999999999"), None);
    }
}
