//! Keyword-valued style fields: border style, alignments and whitespace modes.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::MappingError;

/// [§ 4.2 'border-style'](https://www.w3.org/TR/css-backgrounds-3/#border-style)
///
/// The border styles the element style model can draw. Matching is
/// case-insensitive; anything else is not a border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum BorderStyle {
    /// No border.
    None,
    /// No border, winning border conflicts in tables.
    Hidden,
    /// A series of dots.
    Dotted,
    /// A series of short dashes.
    Dashed,
    /// A single solid line.
    Solid,
    /// Two parallel solid lines.
    Double,
    /// Alternating dots and dashes.
    DotDash,
    /// Two dots followed by a dash.
    DotDotDash,
    /// A wavy line.
    Wave,
    /// Carved into the canvas.
    Groove,
    /// Coming out of the canvas.
    Ridge,
    /// The box looks embedded.
    Inset,
    /// The box looks raised.
    Outset,
}

impl BorderStyle {
    /// Parse a border style keyword, `None` if unrecognized.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::from_str(text.trim()).ok()
    }
}

/// Horizontal alignment of an element's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Flush left.
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
    /// Stretched to both edges.
    Justify,
}

impl HorizontalAlignment {
    /// Parse the `align` / `text-align` keyword.
    ///
    /// # Errors
    /// Returns [`MappingError::UnknownKeyword`] for anything other than
    /// `left`, `center`, `right` or `justify` (case-insensitive).
    pub fn parse(text: &str) -> Result<Self, MappingError> {
        Self::from_str(text.trim()).map_err(|_| MappingError::unknown("text-align", text))
    }
}

/// Vertical alignment of an element's box inside its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Aligned to the top.
    Top,
    /// Centered vertically.
    Middle,
    /// Aligned to the bottom.
    Bottom,
}

impl VerticalAlignment {
    /// Parse a box vertical alignment leniently: case-insensitive, with
    /// `center` accepted as a synonym for `middle`.
    ///
    /// # Errors
    /// Returns [`MappingError::UnknownKeyword`] for any other keyword,
    /// including text-only values such as `baseline`.
    pub fn parse(text: &str) -> Result<Self, MappingError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" | "center" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            _ => Err(MappingError::unknown("vertical-align", text)),
        }
    }
}

/// [§ 4.5 'vertical-align'](https://www.w3.org/TR/css-inline-3/#propdef-vertical-align)
///
/// Vertical alignment of text relative to its line. Matching is strict:
/// exact, lowercase keywords only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum VerticalTextAlign {
    /// Align the baseline with the parent's baseline.
    Baseline,
    /// Lower to the subscript position.
    Sub,
    /// Raise to the superscript position.
    Super,
    /// Align with the top of the line box.
    Top,
    /// Align with the top of the parent's text.
    TextTop,
    /// Align the midpoint with the parent's middle.
    Middle,
    /// Align with the bottom of the line box.
    Bottom,
    /// Align with the bottom of the parent's text.
    TextBottom,
    /// Align with the central baseline.
    Central,
    /// Use the script's dominant baseline.
    UseScript,
}

impl VerticalTextAlign {
    /// Parse a text vertical alignment strictly.
    ///
    /// # Errors
    /// Returns [`MappingError::UnknownKeyword`] unless `text` is exactly one
    /// of the variant keywords.
    pub fn parse(text: &str) -> Result<Self, MappingError> {
        Self::from_str(text).map_err(|_| MappingError::unknown("vertical-align", text))
    }
}

/// How runs of whitespace in text are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WhitespaceCollapse {
    /// Collapse whitespace runs, including line breaks, to one space.
    Collapse,
    /// Keep all whitespace.
    Preserve,
    /// Collapse spaces but keep line breaks.
    PreserveBreaks,
}

/// Whether text wraps at the edge of its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextWrap {
    /// Wrap at the box edge.
    Wrap,
    /// Never wrap.
    None,
}
