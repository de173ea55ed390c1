//! Style resolution for rich-text report elements.
//!
//! # Scope
//!
//! Given a parsed markup tree and a tag stylesheet, this crate works out
//! the effective style of every node and writes it into a [`StyleRecord`]:
//!
//! - **Attribute cascade** ([`cascade`])
//!   - Inline `style` and presentational attributes
//!   - Hyperlink targets of enclosing anchors
//!   - Tag rules, in a deterministic tag order
//!
//! - **Value parsing** ([`values`])
//!   - Lengths in points, with sign-encoded percentages
//!   - Colors, fonts and keyword fields
//!   - List marker styles (bullets, arabic, roman, alphabetic)
//!
//! - **Style mapping** ([`mapper`])
//!   - Borders, padding and margins, size, spacing, alignment
//!   - Text decoration, whitespace handling, list style
//!   - Hyperlink, title and page-break passthrough
//!
//! # Error handling
//!
//! Resolution never fails. Input that cannot be parsed leaves the affected
//! field unset; input that is recognized but unsupported is reported once
//! through [`wombat_common::warning`].
//!
//! # Example
//!
//! ```
//! use wombat_dom::{DomTree, LeafData, NodeId, TagRun};
//! use wombat_style::{ResolverConfig, compute_styles};
//!
//! let mut tree = DomTree::new();
//! let leaf = tree.append_leaf(
//!     NodeId::ROOT,
//!     LeafData::new("Total").with_tag(TagRun::new("b")),
//! );
//!
//! let styles = compute_styles(&tree, None, &ResolverConfig::default());
//! assert_eq!(styles[&leaf].bold, Some(true));
//! ```

/// Attribute keys, attribute sources and the merged attribute view.
pub mod attribute;
/// The attribute cascade: collecting and merging a node's sources.
pub mod cascade;
/// Resolver configuration.
pub mod config;
/// Whole-document resolution and list markers.
pub mod document;
/// Error types.
pub mod error;
/// Translation of raw markup attributes into an inline source.
pub mod inline;
/// Mapping merged attributes onto style record fields.
pub mod mapper;
/// The style record written by the mapper.
pub mod record;
/// Tag-rule stylesheets and the rule lookup seam.
pub mod stylesheet;
/// The recognized tag vocabulary.
pub mod tag;
/// Style value types and their parsers.
pub mod values;

pub use attribute::{AttributeKey, AttributeSource, AttributeValue, MergedAttributeView};
pub use cascade::{cascade_sources, resolve_attributes};
pub use config::ResolverConfig;
pub use document::{StyleResolver, compute_styles, list_markers, resolve_document};
pub use error::{MappingError, StylesheetError};
pub use inline::translate_inline;
pub use mapper::map_style;
pub use record::{BorderEdge, HTML_NAMESPACE, StyleRecord};
pub use stylesheet::{RuleLookup, Stylesheet};
pub use tag::{Tag, TagKey};
pub use values::{
    ColorResolver, ColorValue, CssColorResolver, CssFontResolver, FontResolver, FontSpec,
    LengthValue, ListStyle, parse_length,
};
