//! Error types for keyword parsing and stylesheet loading.
//!
//! None of these errors escape style resolution: the mapper catches every
//! [`MappingError`] and leaves the affected field unset. They exist so the
//! individual parsers have honest signatures and can be tested directly.

use thiserror::Error;

/// A keyword attribute value that could not be mapped to a style field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The value is not one of the keywords the property accepts.
    #[error("unknown {property} keyword '{value}'")]
    UnknownKeyword {
        /// The attribute being mapped, e.g. `vertical-align`.
        property: &'static str,
        /// The rejected value, as written.
        value: String,
    },
}

impl MappingError {
    pub(crate) fn unknown(property: &'static str, value: &str) -> Self {
        Self::UnknownKeyword {
            property,
            value: value.to_string(),
        }
    }
}

/// A problem found while parsing stylesheet text.
///
/// [`Stylesheet::parse`](crate::Stylesheet::parse) reports these as warnings
/// and skips the offending rule; [`Stylesheet::parse_strict`](crate::Stylesheet::parse_strict)
/// returns the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// A `/*` comment with no closing `*/`.
    #[error("unterminated comment starting at byte {offset}")]
    UnterminatedComment {
        /// Byte offset of the opening `/*`.
        offset: usize,
    },
    /// A `{` block with no closing `}`.
    #[error("unterminated rule block for selector '{selector}'")]
    UnterminatedBlock {
        /// The selector text preceding the block.
        selector: String,
    },
    /// A rule block with no selector in front of it.
    #[error("rule block without a selector")]
    MissingSelector,
    /// A selector other than a bare tag name.
    #[error("unsupported selector '{0}' (only tag names are supported)")]
    UnsupportedSelector(String),
    /// A tag name outside the recognized tag vocabulary.
    #[error("unknown tag '{0}' in selector")]
    UnknownTag(String),
}
