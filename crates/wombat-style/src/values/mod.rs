//! Style value types and parsing
//!
//! - Lengths in points, with sign-encoded percentages
//! - Colors and the color collaborator
//! - Fonts and the font collaborator
//! - Keyword fields (border style, alignment, whitespace)
//! - List marker styles

mod color;
mod font;
mod keywords;
mod length;
mod list;

pub use color::{ColorResolver, ColorValue, CssColorResolver};
pub use font::{
    CssFontResolver, FontResolver, FontSpec, HTML_FONT_SIZES, html_font_size, parse_font_family,
};
pub use keywords::{
    BorderStyle, HorizontalAlignment, TextWrap, VerticalAlignment, VerticalTextAlign,
    WhitespaceCollapse,
};
pub use length::{LengthUnit, LengthValue, parse_length};
pub use list::ListStyle;
