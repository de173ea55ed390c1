//! Translation of a node's raw markup attributes into its inline source.
//!
//! Two kinds of markup attribute carry style: the `style` attribute with
//! its declaration block, and HTML presentational attributes (`bgcolor`,
//! `align`, `<font size>`, ...). Both become entries of one
//! [`AttributeSource`], with `style` declarations taking precedence.

use wombat_dom::AttributesMap;

use crate::attribute::{AttributeKey, AttributeSource};
use crate::values::html_font_size;

/// Build the inline attribute source for a node from its raw attributes.
///
/// Attributes that carry no style (`id`, `class`, ...) are dropped.
#[must_use]
pub fn translate_inline(attrs: &AttributesMap) -> AttributeSource {
    let mut source = AttributeSource::new();

    for (name, value) in attrs {
        if let Some((key, translated)) = translate_presentational(name, value) {
            source.set(key, translated);
        }
    }

    if let Some(style) = attrs.get("style") {
        source.extend_from(&AttributeSource::from_declarations(style));
    }

    source
}

/// Map one presentational attribute to an attribute key and value.
fn translate_presentational(name: &str, value: &str) -> Option<(AttributeKey, String)> {
    let key = match name.to_ascii_lowercase().as_str() {
        "bgcolor" => AttributeKey::BackgroundColor,
        "color" => AttributeKey::Color,
        "face" => AttributeKey::FontFamily,
        "size" => {
            let points = html_font_size(value)?;
            return Some((AttributeKey::FontSize, format!("{points}pt")));
        }
        "align" => AttributeKey::Align,
        "valign" => AttributeKey::VerticalAlign,
        "width" => AttributeKey::Width,
        "height" => AttributeKey::Height,
        "border" => AttributeKey::BorderWidth,
        "cellpadding" => AttributeKey::Padding,
        "nowrap" => return Some((AttributeKey::WhiteSpace, "nowrap".to_string())),
        "type" => return list_type(value).map(|style| (AttributeKey::ListStyleType, style.to_string())),
        "title" => AttributeKey::Title,
        "href" => AttributeKey::Href,
        "page-break" => AttributeKey::PageBreak,
        _ => return None,
    };
    Some((key, value.to_string()))
}

/// [HTML 4.01 § 10.3 Lists](https://www.w3.org/TR/html401/struct/lists.html#adef-type-LI)
///
/// The `type` attribute of `ol`, `ul` and `li`. Numbering codes are
/// case-sensitive (`a` and `A` differ); bullet names are not.
fn list_type(value: &str) -> Option<&'static str> {
    let value = value.trim();
    match value {
        "1" => Some("decimal"),
        "a" => Some("lower-alpha"),
        "A" => Some("upper-alpha"),
        "i" => Some("lower-roman"),
        "I" => Some("upper-roman"),
        _ => match value.to_ascii_lowercase().as_str() {
            "disc" => Some("disc"),
            "circle" => Some("circle"),
            "square" => Some("square"),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> AttributesMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn text(source: &AttributeSource, key: AttributeKey) -> Option<String> {
        source.get(key).map(ToString::to_string)
    }

    #[test]
    fn test_presentational_attributes() {
        let source = translate_inline(&attrs(&[
            ("bgcolor", "#ffffcc"),
            ("align", "center"),
            ("valign", "top"),
            ("nowrap", ""),
            ("id", "intro"),
            ("title", "Intro"),
        ]));
        assert_eq!(text(&source, AttributeKey::BackgroundColor).as_deref(), Some("#ffffcc"));
        assert_eq!(text(&source, AttributeKey::Align).as_deref(), Some("center"));
        assert_eq!(text(&source, AttributeKey::VerticalAlign).as_deref(), Some("top"));
        assert_eq!(text(&source, AttributeKey::WhiteSpace).as_deref(), Some("nowrap"));
        assert_eq!(text(&source, AttributeKey::Title).as_deref(), Some("Intro"));
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn test_style_attribute_overrides_presentational() {
        let source = translate_inline(&attrs(&[
            ("color", "red"),
            ("style", "color: green; padding-left: 3pt"),
        ]));
        assert_eq!(text(&source, AttributeKey::Color).as_deref(), Some("green"));
        assert_eq!(text(&source, AttributeKey::PaddingLeft).as_deref(), Some("3pt"));
    }

    #[test]
    fn test_font_size_and_list_type() {
        let source = translate_inline(&attrs(&[("size", "+2"), ("type", "I")]));
        assert_eq!(text(&source, AttributeKey::FontSize).as_deref(), Some("18pt"));
        assert_eq!(text(&source, AttributeKey::ListStyleType).as_deref(), Some("upper-roman"));

        let lower = translate_inline(&attrs(&[("type", "i")]));
        assert_eq!(text(&lower, AttributeKey::ListStyleType).as_deref(), Some("lower-roman"));

        let bogus = translate_inline(&attrs(&[("size", "huge"), ("type", "checkbox")]));
        assert!(bogus.is_empty());
    }

    #[test]
    fn test_empty_attributes_give_empty_source() {
        assert!(translate_inline(&AttributesMap::new()).is_empty());
    }
}
