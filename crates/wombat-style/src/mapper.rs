//! Style mapping
//!
//! Translates a node's [`MergedAttributeView`] into [`StyleRecord`] fields.
//! Each group of properties is mapped by its own function, always in the
//! same order, so that a later group can deliberately override an earlier
//! one (the border color overrides the foreground tint, margins override
//! padding).
//!
//! Mapping is best-effort: a value that does not parse leaves its field as
//! it was, and never stops the remaining groups from being mapped.

use wombat_common::warning::warn_once;

use crate::attribute::{AttributeKey, MergedAttributeView};
use crate::record::{HTML_NAMESPACE, StyleRecord};
use crate::values::{
    BorderStyle, ColorResolver, ColorValue, FontResolver, HorizontalAlignment, LengthValue,
    ListStyle, TextWrap, VerticalAlignment, VerticalTextAlign, WhitespaceCollapse, parse_length,
};

/// Per-side keys in top, left, bottom, right order, matching
/// [`StyleRecord::edges_mut`] and [`StyleRecord::paddings_mut`].
const BORDER_WIDTH_SIDES: [AttributeKey; 4] = [
    AttributeKey::BorderTopWidth,
    AttributeKey::BorderLeftWidth,
    AttributeKey::BorderBottomWidth,
    AttributeKey::BorderRightWidth,
];

const PADDING_SIDES: [AttributeKey; 4] = [
    AttributeKey::PaddingTop,
    AttributeKey::PaddingLeft,
    AttributeKey::PaddingBottom,
    AttributeKey::PaddingRight,
];

const MARGIN_SIDES: [AttributeKey; 4] = [
    AttributeKey::MarginTop,
    AttributeKey::MarginLeft,
    AttributeKey::MarginBottom,
    AttributeKey::MarginRight,
];

/// Write the style described by `view` into `record`.
///
/// Only fields whose attributes are present (and parse) are written, with
/// one exception: whitespace handling is always written, defaulting to
/// collapse and wrap.
pub fn map_style(
    view: &MergedAttributeView,
    colors: &dyn ColorResolver,
    fonts: &dyn FontResolver,
    record: &mut StyleRecord,
) {
    map_colors(view, colors, record);
    map_border(view, colors, record);
    map_box(view, record);
    map_font(view, fonts, record);
    map_spacing(view, record);
    map_alignment(view, record);
    map_text_decoration(view, record);
    map_whitespace(view, record);
    map_list_style(view, record);
    map_passthrough(view, record);
}

/// The length for `key`, if present and parseable.
fn length(view: &MergedAttributeView, key: AttributeKey) -> Option<LengthValue> {
    parse_length(&view.text(key)?)
}

/// The color for `key`, if present and resolvable.
fn color(view: &MergedAttributeView, colors: &dyn ColorResolver, key: AttributeKey) -> Option<ColorValue> {
    let text = view.text(key)?;
    let resolved = colors.color_from_text(text.trim());
    if resolved.is_none() {
        warn_once("Style", &format!("cannot resolve {key} '{text}'"));
    }
    resolved
}

/// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
///
/// The foreground color also tints all four borders; an explicit
/// `border-color` replaces that tint in [`map_border`].
fn map_colors(view: &MergedAttributeView, colors: &dyn ColorResolver, record: &mut StyleRecord) {
    if let Some(background) = color(view, colors, AttributeKey::BackgroundColor) {
        record.background_color = Some(background);
    }

    if let Some(foreground) = color(view, colors, AttributeKey::Color) {
        record.paint = Some(foreground);
        for edge in record.edges_mut() {
            edge.color = Some(foreground);
        }
    }
}

/// [§ 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
fn map_border(view: &MergedAttributeView, colors: &dyn ColorResolver, record: &mut StyleRecord) {
    if let Some(text) = view.text(AttributeKey::BorderStyle) {
        match BorderStyle::parse(&text) {
            Some(style) => {
                for edge in record.edges_mut() {
                    edge.style = Some(style);
                }
            }
            None => warn_once("Style", &format!("unknown border-style '{text}'")),
        }
    }

    if let Some(width) = length(view, AttributeKey::BorderWidth) {
        for edge in record.edges_mut() {
            edge.width = Some(width);
        }
    }

    for (key, edge) in BORDER_WIDTH_SIDES.into_iter().zip(record.edges_mut()) {
        if let Some(width) = length(view, key) {
            edge.width = Some(width);
        }
    }

    if let Some(border_color) = color(view, colors, AttributeKey::BorderColor) {
        for edge in record.edges_mut() {
            edge.color = Some(border_color);
        }
    }
}

/// Padding, then margins, then the box size.
///
/// The record has no margin fields; margins are written into the padding
/// fields and so win over padding when both are set.
fn map_box(view: &MergedAttributeView, record: &mut StyleRecord) {
    for (shorthand, sides) in [
        (AttributeKey::Padding, PADDING_SIDES),
        (AttributeKey::Margin, MARGIN_SIDES),
    ] {
        if let Some(all) = length(view, shorthand) {
            for padding in record.paddings_mut() {
                *padding = Some(all);
            }
        }
        for (key, padding) in sides.into_iter().zip(record.paddings_mut()) {
            if let Some(side) = length(view, key) {
                *padding = Some(side);
            }
        }
    }

    if let Some(width) = length(view, AttributeKey::Width) {
        record.min_width = Some(width);
    }
    if let Some(height) = length(view, AttributeKey::Height) {
        record.min_height = Some(height);
    }
}

fn map_font(view: &MergedAttributeView, fonts: &dyn FontResolver, record: &mut StyleRecord) {
    if let Some(font) = fonts.font_for(view) {
        record.font_family = Some(font.family);
        record.font_size = Some(font.size);
        record.italic = Some(font.italic);
        record.bold = Some(font.bold);
    }
}

fn map_spacing(view: &MergedAttributeView, record: &mut StyleRecord) {
    let fields = [
        (AttributeKey::LetterSpacing, &mut record.letter_spacing),
        (AttributeKey::WordSpacing, &mut record.word_spacing),
        (AttributeKey::LineHeight, &mut record.line_height),
        (AttributeKey::TextIndent, &mut record.first_line_indent),
    ];
    for (key, field) in fields {
        if let Some(value) = length(view, key) {
            *field = Some(value);
        }
    }
}

/// `align` and `text-align` share one field; `text-align` is applied last
/// and wins. `vertical-align` feeds two fields with different keyword sets:
/// text alignment takes only its exact keywords, box alignment is lenient.
fn map_alignment(view: &MergedAttributeView, record: &mut StyleRecord) {
    for key in [AttributeKey::Align, AttributeKey::TextAlign] {
        let Some(text) = view.text(key) else {
            continue;
        };
        match HorizontalAlignment::parse(&text) {
            Ok(alignment) => record.alignment = Some(alignment),
            Err(error) => warn_once("Style", &error.to_string()),
        }
    }

    let Some(text) = view.text(AttributeKey::VerticalAlign) else {
        return;
    };
    let text_align = VerticalTextAlign::parse(&text);
    let box_align = VerticalAlignment::parse(&text);

    if let Ok(align) = &text_align {
        record.vertical_text_alignment = Some(*align);
    }
    match box_align {
        Ok(align) => record.vertical_alignment = Some(align),
        Err(error) if text_align.is_err() => warn_once("Style", &error.to_string()),
        Err(_) => {}
    }
}

/// [§ 2.1 'text-decoration-line'](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
///
/// A present `text-decoration` replaces both flags, so `none` (or any
/// value without a known line) clears inherited decoration.
fn map_text_decoration(view: &MergedAttributeView, record: &mut StyleRecord) {
    let Some(text) = view.text(AttributeKey::TextDecoration) else {
        return;
    };

    record.strikethrough = Some(false);
    record.underlined = Some(false);
    for word in text.split_whitespace() {
        match word {
            "line-through" => record.strikethrough = Some(true),
            "underline" => record.underlined = Some(true),
            _ => {}
        }
    }
}

/// [§ 3 'white-space'](https://www.w3.org/TR/css-text-3/#white-space-property)
fn map_whitespace(view: &MergedAttributeView, record: &mut StyleRecord) {
    let (collapse, wrap) = match view.text(AttributeKey::WhiteSpace).as_deref().map(str::trim) {
        Some("pre") => (WhitespaceCollapse::Preserve, TextWrap::None),
        Some("nowrap") => (WhitespaceCollapse::PreserveBreaks, TextWrap::None),
        _ => (WhitespaceCollapse::Collapse, TextWrap::Wrap),
    };
    record.whitespace_collapse = Some(collapse);
    record.text_wrap = Some(wrap);
}

/// `list-style` is read as if it were `list-style-type`; the more
/// specific `list-style-type` is applied after it.
fn map_list_style(view: &MergedAttributeView, record: &mut StyleRecord) {
    for key in [AttributeKey::ListStyle, AttributeKey::ListStyleType] {
        let Some(text) = view.text(key) else {
            continue;
        };
        match ListStyle::parse(text.trim()) {
            Some(style) => record.list_style = Some(style),
            None => warn_once("Style", &format!("unknown {key} '{text}'")),
        }
    }

    for key in [AttributeKey::ListStyleImage, AttributeKey::ListStylePosition] {
        if view.contains(key) {
            warn_once("Style", &format!("{key} is not supported"));
        }
    }
}

fn map_passthrough(view: &MergedAttributeView, record: &mut StyleRecord) {
    if view.contains(AttributeKey::PageBreak) {
        record.page_break_after = Some(true);
    }
    if let Some(target) = view.text(AttributeKey::Href) {
        record.href_target = Some(target.into_owned());
    }
    if let Some(title) = view.text(AttributeKey::Title) {
        record.set_attribute(HTML_NAMESPACE, "title", title);
    }
}
