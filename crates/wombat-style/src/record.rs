//! The style record: the element style model a node's attributes resolve into.
//!
//! Every field is an `Option`; `None` means "not written". Resolution only
//! ever overwrites fields, so a record that arrives partly filled keeps the
//! fields nothing in the view touched.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::values::{
    BorderStyle, ColorValue, HorizontalAlignment, LengthValue, ListStyle, TextWrap,
    VerticalAlignment, VerticalTextAlign, WhitespaceCollapse,
};

/// Namespace for node attributes carried over from HTML markup.
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// One side of a box border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BorderEdge {
    /// Line width.
    pub width: Option<LengthValue>,
    /// Line style.
    pub style: Option<BorderStyle>,
    /// Line color.
    pub color: Option<ColorValue>,
}

/// Resolved style of one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleRecord {
    /// Background fill.
    pub background_color: Option<ColorValue>,
    /// Foreground (text) color.
    pub paint: Option<ColorValue>,

    /// Top border.
    pub border_top: BorderEdge,
    /// Left border.
    pub border_left: BorderEdge,
    /// Bottom border.
    pub border_bottom: BorderEdge,
    /// Right border.
    pub border_right: BorderEdge,

    /// Top padding. Margins land here too; the model has no margins.
    pub padding_top: Option<LengthValue>,
    /// Left padding.
    pub padding_left: Option<LengthValue>,
    /// Bottom padding.
    pub padding_bottom: Option<LengthValue>,
    /// Right padding.
    pub padding_right: Option<LengthValue>,

    /// Minimum box width, from `width`.
    pub min_width: Option<LengthValue>,
    /// Minimum box height, from `height`.
    pub min_height: Option<LengthValue>,

    /// Font family name.
    pub font_family: Option<String>,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Italic face.
    pub italic: Option<bool>,
    /// Bold face.
    pub bold: Option<bool>,

    /// Extra space between characters.
    pub letter_spacing: Option<LengthValue>,
    /// Extra space between words.
    pub word_spacing: Option<LengthValue>,
    /// Line height.
    pub line_height: Option<LengthValue>,
    /// Indent of the first line of a paragraph.
    pub first_line_indent: Option<LengthValue>,

    /// Horizontal alignment of the content.
    pub alignment: Option<HorizontalAlignment>,
    /// Vertical alignment of the box.
    pub vertical_alignment: Option<VerticalAlignment>,
    /// Vertical alignment of text on its line.
    pub vertical_text_alignment: Option<VerticalTextAlign>,

    /// Struck-through text.
    pub strikethrough: Option<bool>,
    /// Underlined text.
    pub underlined: Option<bool>,

    /// Whitespace handling.
    pub whitespace_collapse: Option<WhitespaceCollapse>,
    /// Line wrapping.
    pub text_wrap: Option<TextWrap>,

    /// List item marker style.
    pub list_style: Option<ListStyle>,
    /// Hyperlink target.
    pub href_target: Option<String>,
    /// Force a page break after the element.
    pub page_break_after: Option<bool>,

    /// Namespaced node attributes: namespace, then attribute name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, BTreeMap<String, String>>,
}

impl StyleRecord {
    /// Set the node attribute `name` in `namespace`.
    pub fn set_attribute(&mut self, namespace: &str, name: &str, value: impl Into<String>) {
        let _ = self
            .attributes
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
    }

    /// The node attribute `name` in `namespace`, if set.
    #[must_use]
    pub fn attribute(&self, namespace: &str, name: &str) -> Option<&str> {
        self.attributes
            .get(namespace)?
            .get(name)
            .map(String::as_str)
    }

    /// All four border edges, in top, left, bottom, right order.
    pub fn edges_mut(&mut self) -> [&mut BorderEdge; 4] {
        [
            &mut self.border_top,
            &mut self.border_left,
            &mut self.border_bottom,
            &mut self.border_right,
        ]
    }

    /// All four padding fields, in top, left, bottom, right order.
    pub fn paddings_mut(&mut self) -> [&mut Option<LengthValue>; 4] {
        [
            &mut self.padding_top,
            &mut self.padding_left,
            &mut self.padding_bottom,
            &mut self.padding_right,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_attributes() {
        let mut record = StyleRecord::default();
        assert_eq!(record.attribute(HTML_NAMESPACE, "title"), None);

        record.set_attribute(HTML_NAMESPACE, "title", "first");
        record.set_attribute(HTML_NAMESPACE, "title", "second");
        assert_eq!(record.attribute(HTML_NAMESPACE, "title"), Some("second"));
        assert_eq!(record.attribute("urn:other", "title"), None);
    }

    #[test]
    fn test_edges_cover_all_sides() {
        let mut record = StyleRecord::default();
        for edge in record.edges_mut() {
            edge.style = Some(BorderStyle::Dashed);
        }
        assert_eq!(record.border_top.style, Some(BorderStyle::Dashed));
        assert_eq!(record.border_right.style, Some(BorderStyle::Dashed));

        *record.paddings_mut()[1] = Some(LengthValue::from_points(2.0));
        assert_eq!(record.padding_left, Some(LengthValue::from_points(2.0)));
        assert_eq!(record.padding_top, None);
    }
}
