//! Whole-document style resolution and list markers.

use std::collections::BTreeMap;

use wombat_dom::{DomTree, NodeId, NodeType};

use crate::cascade::resolve_attributes;
use crate::config::ResolverConfig;
use crate::mapper::map_style;
use crate::record::StyleRecord;
use crate::stylesheet::{RuleLookup, Stylesheet};
use crate::tag::Tag;
use crate::values::{ColorResolver, CssColorResolver, FontResolver, ListStyle};

/// Resolves node styles against one set of rules and collaborators.
///
/// Holds only shared borrows, so one resolver can serve many nodes, and
/// nodes of the same tree can be resolved independently.
#[derive(Clone, Copy)]
pub struct StyleResolver<'a> {
    rules: &'a dyn RuleLookup,
    colors: &'a dyn ColorResolver,
    fonts: &'a dyn FontResolver,
}

impl<'a> StyleResolver<'a> {
    /// A resolver over the given rules and collaborators.
    #[must_use]
    pub fn new(
        rules: &'a dyn RuleLookup,
        colors: &'a dyn ColorResolver,
        fonts: &'a dyn FontResolver,
    ) -> Self {
        Self { rules, colors, fonts }
    }

    /// Write the style of `id` into `record`.
    ///
    /// Fields the node's attributes do not touch keep their current value.
    pub fn resolve_node(&self, tree: &DomTree, id: NodeId, record: &mut StyleRecord) {
        let view = resolve_attributes(tree, id, self.rules);
        map_style(&view, self.colors, self.fonts, record);
    }

    /// Resolve every container and leaf of `tree`, each into a fresh record.
    ///
    /// Skipped input is reported through [`wombat_common::warning`]. A host
    /// resolving many documents should call
    /// [`clear_warnings`](wombat_common::warning::clear_warnings) between
    /// them; past its cap the log stops recording.
    #[must_use]
    pub fn resolve_document(&self, tree: &DomTree) -> BTreeMap<NodeId, StyleRecord> {
        tree.descendants(NodeId::ROOT)
            .filter(|&id| {
                tree.get(id)
                    .is_some_and(|node| !matches!(node.node_type, NodeType::Document))
            })
            .map(|id| {
                let mut record = StyleRecord::default();
                self.resolve_node(tree, id, &mut record);
                (id, record)
            })
            .collect()
    }
}

/// Resolve every node of `tree`. See [`StyleResolver::resolve_document`].
#[must_use]
pub fn resolve_document(
    tree: &DomTree,
    rules: &dyn RuleLookup,
    colors: &dyn ColorResolver,
    fonts: &dyn FontResolver,
) -> BTreeMap<NodeId, StyleRecord> {
    StyleResolver::new(rules, colors, fonts).resolve_document(tree)
}

/// Resolve every node of `tree` against `user` rules layered over the
/// configured base stylesheet, with the CSS color and font resolvers.
#[must_use]
pub fn compute_styles(
    tree: &DomTree,
    user: Option<&Stylesheet>,
    config: &ResolverConfig,
) -> BTreeMap<NodeId, StyleRecord> {
    let sheet = config.stylesheet(user);
    let fonts = config.font_resolver();
    resolve_document(tree, &sheet, &CssColorResolver, &fonts)
}

/// Marker text for every `li` inside a `ul` or `ol`.
///
/// The marker style is the item's own resolved list style, else that of
/// its nearest list, else disc for `ul` and arabic for `ol`. Items are
/// numbered from 1 among the `li` children of their parent.
#[must_use]
pub fn list_markers(
    tree: &DomTree,
    records: &BTreeMap<NodeId, StyleRecord>,
) -> BTreeMap<NodeId, String> {
    let mut markers = BTreeMap::new();
    for id in tree.descendants(NodeId::ROOT) {
        if container_tag(tree, id) != Some(Tag::Li) {
            continue;
        }
        let Some((list, list_tag)) = tree.ancestors(id).find_map(|ancestor| {
            container_tag(tree, ancestor)
                .filter(|tag| tag.is_list())
                .map(|tag| (ancestor, tag))
        }) else {
            continue;
        };

        let style = records
            .get(&id)
            .and_then(|record| record.list_style)
            .or_else(|| records.get(&list).and_then(|record| record.list_style))
            .unwrap_or(if list_tag == Tag::Ol {
                ListStyle::Arabic
            } else {
                ListStyle::Disc
            });

        let earlier_items = tree
            .preceding_siblings(id)
            .filter(|&sibling| container_tag(tree, sibling) == Some(Tag::Li))
            .count();
        let ordinal = u32::try_from(earlier_items + 1).unwrap_or(u32::MAX);

        let _ = markers.insert(id, style.format(ordinal));
    }
    markers
}

fn container_tag(tree: &DomTree, id: NodeId) -> Option<Tag> {
    tree.as_container(id)
        .and_then(|container| Tag::from_name(&container.tag_name))
}
