//! Tag-rule stylesheets.
//!
//! A stylesheet maps tag names to declaration blocks:
//!
//! ```text
//! b, strong { font-weight: bold; }
//! pre       { white-space: pre; font-family: Monospaced; }
//! ```
//!
//! Selectors are bare tag names. Class, id, attribute and combinator
//! selectors are not supported.

use std::collections::BTreeMap;

use wombat_common::warning::warn_once;
use wombat_dom::{DomTree, NodeId};

use crate::attribute::AttributeSource;
use crate::error::StylesheetError;
use crate::tag::Tag;

/// Finds the stylesheet rule for a tag on a particular node.
///
/// The node is passed so that lookups can take context into account; the
/// tag-only [`Stylesheet`] ignores it.
pub trait RuleLookup {
    /// The rule for `tag` as it applies to `node`, if any.
    fn rule(&self, tag: Tag, tree: &DomTree, node: NodeId) -> Option<&AttributeSource>;
}

/// Built-in rules for common rich-text tags.
const DEFAULT_RULES: &str = r"
/* Phrase markup */
b, strong { font-weight: bold; }
i, em { font-style: italic; }
u, ins { text-decoration: underline; }
s, strike, del { text-decoration: line-through; }
a { color: blue; text-decoration: underline; }
code, tt { font-family: Monospaced; }
big { font-size: 14pt; }
small { font-size: 10pt; }
sub { vertical-align: sub; }
sup { vertical-align: super; }

/* Blocks */
center { text-align: center; }
pre { white-space: pre; font-family: Monospaced; }
h1 { font-size: 24pt; font-weight: bold; }
h2 { font-size: 18pt; font-weight: bold; }
h3 { font-size: 14pt; font-weight: bold; }
h4 { font-size: 12pt; font-weight: bold; }
h5 { font-size: 10pt; font-weight: bold; }
h6 { font-size: 8pt; font-weight: bold; }
th { font-weight: bold; text-align: center; }

/* Lists */
ul { list-style-type: disc; }
ol { list-style-type: decimal; }
";

/// A table of tag rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    rules: BTreeMap<Tag, AttributeSource>,
}

impl Stylesheet {
    /// An empty stylesheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A stylesheet holding the built-in rules.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::parse(DEFAULT_RULES)
    }

    /// Parse stylesheet text, skipping anything malformed.
    ///
    /// Each skipped rule or selector is reported once through the warning
    /// channel.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let (sheet, errors) = Self::parse_collecting(css);
        for error in errors {
            warn_once("Stylesheet", &error.to_string());
        }
        sheet
    }

    /// Parse stylesheet text, rejecting anything malformed.
    ///
    /// # Errors
    /// Returns the first [`StylesheetError`] found.
    pub fn parse_strict(css: &str) -> Result<Self, StylesheetError> {
        let (sheet, errors) = Self::parse_collecting(css);
        match errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(sheet),
        }
    }

    /// Add declarations for `tag`. Merges with an existing rule for the
    /// same tag; the new declarations win.
    pub fn add_rule(&mut self, tag: Tag, declarations: &AttributeSource) {
        self.rules.entry(tag).or_default().extend_from(declarations);
    }

    /// Merge every rule of `other` into this stylesheet; `other` wins.
    pub fn merge(&mut self, other: &Self) {
        for (tag, declarations) in &other.rules {
            self.add_rule(*tag, declarations);
        }
    }

    /// The rule for `tag`, if any.
    #[must_use]
    pub fn rule_for(&self, tag: Tag) -> Option<&AttributeSource> {
        self.rules.get(&tag)
    }

    /// Number of tags with a rule.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no tag has a rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn parse_collecting(css: &str) -> (Self, Vec<StylesheetError>) {
        let mut sheet = Self::new();
        let mut errors = Vec::new();

        let css = match strip_comments(css) {
            Ok(css) => css,
            Err(error) => {
                errors.push(error);
                return (sheet, errors);
            }
        };

        let mut rest = css.as_str();
        while let Some(open) = rest.find('{') {
            let selector = rest[..open].trim();
            let after_open = &rest[open + 1..];
            let Some(close) = after_open.find('}') else {
                errors.push(StylesheetError::UnterminatedBlock {
                    selector: selector.to_string(),
                });
                return (sheet, errors);
            };

            let declarations = AttributeSource::from_declarations(&after_open[..close]);
            rest = &after_open[close + 1..];

            if selector.is_empty() {
                errors.push(StylesheetError::MissingSelector);
                continue;
            }

            for name in selector.split(',').map(str::trim) {
                match parse_selector(name) {
                    Ok(tag) => sheet.add_rule(tag, &declarations),
                    Err(error) => errors.push(error),
                }
            }
        }

        (sheet, errors)
    }
}

impl RuleLookup for Stylesheet {
    fn rule(&self, tag: Tag, _tree: &DomTree, _node: NodeId) -> Option<&AttributeSource> {
        self.rule_for(tag)
    }
}

/// A selector must be a bare tag name from the vocabulary.
fn parse_selector(name: &str) -> Result<Tag, StylesheetError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(StylesheetError::UnsupportedSelector(name.to_string()));
    }
    Tag::from_name(name).ok_or_else(|| StylesheetError::UnknownTag(name.to_string()))
}

/// Remove `/* ... */` comments.
fn strip_comments(css: &str) -> Result<String, StylesheetError> {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start + 2..].find("*/") else {
            return Err(StylesheetError::UnterminatedComment {
                offset: css.len() - rest.len() + start,
            });
        };
        rest = &rest[start + 2 + end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}
