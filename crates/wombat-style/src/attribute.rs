//! Attribute keys, attribute sources and the merged attribute view.
//!
//! An [`AttributeSource`] is one contributor to a node's style: its inline
//! attributes, a stylesheet rule for one of its tags, or the hyperlink
//! target of an enclosing anchor. The cascade flattens an ordered list of
//! sources into a [`MergedAttributeView`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use wombat_common::warning::warn_once;

/// The fixed vocabulary of style-relevant attributes.
///
/// Names are the kebab-case CSS property names (`background-color`,
/// `padding-left`, ...). `href`, `title` and `page-break` are passthrough
/// keys whose values are copied verbatim. Variant order is the canonical
/// ordering of a source's entries.
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AttributeKey {
    /// `background-color`
    BackgroundColor,
    /// `color`, the foreground (text) color.
    Color,
    /// `border-style`, all four sides.
    BorderStyle,
    /// `border-width`, all four sides.
    BorderWidth,
    /// `border-top-width`
    BorderTopWidth,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-color`, all four sides.
    BorderColor,
    /// `width`
    Width,
    /// `height`
    Height,
    /// `padding`, all four sides.
    Padding,
    /// `padding-top`
    PaddingTop,
    /// `padding-left`
    PaddingLeft,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-right`
    PaddingRight,
    /// `margin`, all four sides.
    Margin,
    /// `margin-top`
    MarginTop,
    /// `margin-left`
    MarginLeft,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-right`
    MarginRight,
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-weight`
    FontWeight,
    /// `font-style`
    FontStyle,
    /// `letter-spacing`
    LetterSpacing,
    /// `word-spacing`
    WordSpacing,
    /// `line-height`
    LineHeight,
    /// `text-indent`
    TextIndent,
    /// `align`, the legacy HTML alignment attribute.
    Align,
    /// `text-align`
    TextAlign,
    /// `vertical-align`
    VerticalAlign,
    /// `text-decoration`
    TextDecoration,
    /// `white-space`
    WhiteSpace,
    /// `list-style`
    ListStyle,
    /// `list-style-type`
    ListStyleType,
    /// `list-style-image`
    ListStyleImage,
    /// `list-style-position`
    ListStylePosition,
    /// `href`, a hyperlink target.
    Href,
    /// `title`, advisory text for the element.
    Title,
    /// `page-break`, a free-form marker forcing a break after the element.
    PageBreak,
}

impl AttributeKey {
    /// Classify a property or attribute name, `None` for names outside the
    /// vocabulary. Matching ignores ASCII case and surrounding whitespace.
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        Self::from_str(&name.trim().to_ascii_lowercase()).ok()
    }
}

/// An attribute value as the markup delivered it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Text, e.g. `12pt` or `underline line-through`.
    Text(String),
    /// A number supplied programmatically.
    Number(f64),
}

impl AttributeValue {
    /// The value as text, the form every style parser consumes.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for AttributeValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// One contributor to a node's style: an ordered map from key to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AttributeSource(BTreeMap<AttributeKey, AttributeValue>);

impl AttributeSource {
    /// An empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key`, replacing any earlier value.
    pub fn set(&mut self, key: AttributeKey, value: impl Into<AttributeValue>) {
        let _ = self.0.insert(key, value.into());
    }

    /// Copy every entry of `other` into this source; `other` wins on conflicts.
    pub fn extend_from(&mut self, other: &Self) {
        self.0
            .extend(other.0.iter().map(|(key, value)| (*key, value.clone())));
    }

    /// The value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.0.get(&key)
    }

    /// Whether `key` is set.
    #[must_use]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Number of keys set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    /// Parse a declaration block such as `color: red; padding: 4pt`.
    ///
    /// Unknown properties and declarations without a `:` are skipped; a
    /// trailing `!important` is dropped. Later declarations of the same
    /// property win.
    #[must_use]
    pub fn from_declarations(text: &str) -> Self {
        let mut source = Self::new();
        for declaration in text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                if !declaration.trim().is_empty() {
                    warn_once("Style", &format!("ignoring malformed declaration '{}'", declaration.trim()));
                }
                continue;
            };

            let value = value.trim();
            let value = value.strip_suffix("!important").map_or(value, str::trim_end);
            if value.is_empty() {
                continue;
            }

            match AttributeKey::classify(name) {
                Some(key) => source.set(key, value),
                None => warn_once("Style", &format!("ignoring unsupported property '{}'", name.trim())),
            }
        }
        source
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for AttributeSource {
    fn from_iter<T: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The effective attributes of one node after the cascade.
///
/// Built once per node from its prioritized sources and never modified
/// afterwards. For a key defined by several sources, the value of the
/// highest-priority source is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MergedAttributeView {
    attrs: BTreeMap<AttributeKey, AttributeValue>,
}

impl MergedAttributeView {
    /// Flatten `sources`, given highest priority first.
    ///
    /// Folds from the lowest-priority source to the highest so that each
    /// application overwrites the keys set by the sources below it.
    #[must_use]
    pub fn from_sources(sources: &[AttributeSource]) -> Self {
        let attrs = sources
            .iter()
            .rev()
            .fold(BTreeMap::new(), |mut attrs, source| {
                attrs.extend(source.iter().map(|(key, value)| (key, value.clone())));
                attrs
            });
        Self { attrs }
    }

    /// The effective value for `key`.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.attrs.get(&key)
    }

    /// The effective value for `key` as text.
    #[must_use]
    pub fn text(&self, key: AttributeKey) -> Option<Cow<'_, str>> {
        self.get(key).map(AttributeValue::as_text)
    }

    /// Whether any source set `key`.
    #[must_use]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.attrs.contains_key(&key)
    }

    /// Number of effective keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether no source set anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Effective entries in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> {
        self.attrs.iter().map(|(key, value)| (*key, value))
    }
}
