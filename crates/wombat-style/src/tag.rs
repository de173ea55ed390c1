//! The recognized tag vocabulary.
//!
//! Leaves carry their enclosing inline tags as plain names; the cascade
//! classifies each name once into a [`TagKey`] and dispatches on that.

use std::str::FromStr;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A markup tag the stylesheet can hold rules for.
///
/// Variant order is the canonical order in which a leaf's tags contribute
/// stylesheet rules: when two tag rules set the same attribute, the rule of
/// the tag declared first here wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Tag {
    A,
    B,
    Strong,
    I,
    Em,
    U,
    Ins,
    S,
    Strike,
    Del,
    Font,
    Span,
    Code,
    Tt,
    Big,
    Small,
    Sub,
    Sup,
    Center,
    P,
    Div,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Pre,
    Blockquote,
    Ul,
    Ol,
    Li,
    Table,
    Tr,
    Td,
    Th,
    Body,
    Html,
}

impl Tag {
    /// Look up a tag name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(&name.trim().to_ascii_lowercase()).ok()
    }

    /// Whether the tag introduces a list whose items get markers.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Ul | Self::Ol)
    }
}

/// How the cascade treats one tag name found on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    /// A hyperlink anchor: its target is lifted into its own source, and
    /// it contributes the `a` rule like any styled tag.
    Hyperlink,
    /// A tag contributing its stylesheet rule.
    Styled(Tag),
    /// A name outside the vocabulary; contributes nothing.
    Ignored,
}

impl TagKey {
    /// Classify a tag name. Total: every name maps to some variant.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        match Tag::from_name(name) {
            Some(Tag::A) => Self::Hyperlink,
            Some(tag) => Self::Styled(tag),
            None => Self::Ignored,
        }
    }

    /// The tag whose stylesheet rule applies, `None` for ignored names.
    #[must_use]
    pub const fn tag(self) -> Option<Tag> {
        match self {
            Self::Hyperlink => Some(Tag::A),
            Self::Styled(tag) => Some(tag),
            Self::Ignored => None,
        }
    }
}
