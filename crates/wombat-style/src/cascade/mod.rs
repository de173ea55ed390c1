//! Attribute cascade
//!
//! Collects the attribute sources that apply to a node, highest priority
//! first, and flattens them into a [`MergedAttributeView`]:
//!
//! 1. the node's inline attributes (its `style` attribute and
//!    presentational attributes), if any;
//! 2. for a leaf inside a hyperlink, the link target on its own;
//! 3. the stylesheet rules for the node's tags. A leaf contributes one rule
//!    per enclosing inline tag, in canonical [`Tag`] order; a container
//!    contributes the rule for its own tag.
//!
//! There is no specificity beyond this ordering.

use wombat_common::warning::warn_once;
use wombat_dom::{DomTree, LeafData, NodeId, NodeType, TagRun};

use crate::attribute::{AttributeKey, AttributeSource, MergedAttributeView};
use crate::inline::translate_inline;
use crate::stylesheet::RuleLookup;
use crate::tag::{Tag, TagKey};

/// The attribute sources for `id`, highest priority first.
///
/// The document node and unknown IDs have no sources.
#[must_use]
pub fn cascade_sources(tree: &DomTree, id: NodeId, rules: &dyn RuleLookup) -> Vec<AttributeSource> {
    let Some(node) = tree.get(id) else {
        return Vec::new();
    };

    let mut sources = Vec::new();
    if let Some(attrs) = tree.attrs(id) {
        let inline = translate_inline(attrs);
        if !inline.is_empty() {
            sources.push(inline);
        }
    }

    match &node.node_type {
        NodeType::Leaf(leaf) => {
            let link_position = sources.len();
            for (key, run) in leaf_tags(leaf) {
                if key == TagKey::Hyperlink {
                    if let Some(target) = run.attrs.get("href") {
                        let link = AttributeSource::new().with(AttributeKey::Href, target.as_str());
                        sources.insert(link_position, link);
                    }
                }
                if let Some(rule) = key.tag().and_then(|tag| rules.rule(tag, tree, id)) {
                    sources.push(rule.clone());
                }
            }
        }
        NodeType::Container(container) => match TagKey::classify(&container.tag_name).tag() {
            Some(tag) => {
                if let Some(rule) = rules.rule(tag, tree, id) {
                    sources.push(rule.clone());
                }
            }
            None => warn_once("Cascade", &format!("no rules for unknown tag '{}'", container.tag_name)),
        },
        NodeType::Document => {}
    }

    sources
}

/// The merged attribute view for `id`.
#[must_use]
pub fn resolve_attributes(tree: &DomTree, id: NodeId, rules: &dyn RuleLookup) -> MergedAttributeView {
    MergedAttributeView::from_sources(&cascade_sources(tree, id, rules))
}

/// The recognized tags of a leaf, in canonical order, each at most once.
///
/// The parser gives no ordering guarantee for a leaf's tags, so the order
/// is imposed here to keep resolution deterministic. Repeated runs of one
/// tag collapse to the first, except that a run carrying `href` replaces
/// one without it.
fn leaf_tags(leaf: &LeafData) -> Vec<(TagKey, &TagRun)> {
    let mut tags: Vec<(Tag, TagKey, &TagRun)> = Vec::new();
    for run in &leaf.tags {
        let key = TagKey::classify(&run.tag_name);
        let Some(tag) = key.tag() else {
            warn_once("Cascade", &format!("no rules for unknown tag '{}'", run.tag_name));
            continue;
        };
        match tags.iter_mut().find(|(seen, _, _)| *seen == tag) {
            Some(entry) => {
                if !entry.2.attrs.contains_key("href") && run.attrs.contains_key("href") {
                    *entry = (tag, key, run);
                }
            }
            None => tags.push((tag, key, run)),
        }
    }
    tags.sort_by_key(|(tag, _, _)| *tag);
    tags.into_iter().map(|(_, key, run)| (key, run)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeValue;
    use crate::stylesheet::Stylesheet;
    use wombat_dom::ContainerData;

    fn text(view: &MergedAttributeView, key: AttributeKey) -> Option<String> {
        view.text(key).map(|t| t.into_owned())
    }

    #[test]
    fn test_inline_source_comes_first() {
        let sheet = Stylesheet::parse("b { color: blue; font-size: 10pt }");
        let mut tree = DomTree::new();
        let leaf = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("x")
                .with_attr("style", "color: red")
                .with_tag(TagRun::new("b")),
        );

        let sources = cascade_sources(&tree, leaf, &sheet);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].get(AttributeKey::Color), Some(&AttributeValue::from("red")));

        let view = resolve_attributes(&tree, leaf, &sheet);
        assert_eq!(text(&view, AttributeKey::Color).as_deref(), Some("red"));
        assert_eq!(text(&view, AttributeKey::FontSize).as_deref(), Some("10pt"));
    }

    #[test]
    fn test_link_target_follows_inline_source() {
        let sheet = Stylesheet::parse("a { color: blue } b { font-weight: bold }");
        let mut tree = DomTree::new();
        let leaf = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("x")
                .with_attr("title", "tip")
                .with_tag(TagRun::new("b"))
                .with_tag(TagRun::new("a").with_attr("href", "https://example.com")),
        );

        let sources = cascade_sources(&tree, leaf, &sheet);
        assert_eq!(sources.len(), 4);
        assert!(sources[0].contains(AttributeKey::Title));
        assert_eq!(sources[1].len(), 1);
        assert_eq!(
            sources[1].get(AttributeKey::Href),
            Some(&AttributeValue::from("https://example.com"))
        );
        assert!(sources[2].contains(AttributeKey::Color));
        assert!(sources[3].contains(AttributeKey::FontWeight));
    }

    #[test]
    fn test_anchor_without_target_adds_only_its_rule() {
        let sheet = Stylesheet::parse("a { color: blue }");
        let mut tree = DomTree::new();
        let leaf = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("x").with_tag(TagRun::new("a").with_attr("name", "top")),
        );

        let sources = cascade_sources(&tree, leaf, &sheet);
        assert_eq!(sources.len(), 1);
        assert!(!resolve_attributes(&tree, leaf, &sheet).contains(AttributeKey::Href));
    }

    #[test]
    fn test_repeated_anchor_keeps_the_target() {
        let sheet = Stylesheet::parse("a { color: blue }");
        let mut tree = DomTree::new();
        let leaf = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("x")
                .with_tag(TagRun::new("a").with_attr("name", "top"))
                .with_tag(TagRun::new("a").with_attr("href", "#totals"))
                .with_tag(TagRun::new("a").with_attr("href", "#later")),
        );

        let sources = cascade_sources(&tree, leaf, &sheet);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].get(AttributeKey::Href), Some(&AttributeValue::from("#totals")));
        assert!(sources[1].contains(AttributeKey::Color));
    }

    #[test]
    fn test_leaf_tag_order_is_canonical() {
        let sheet = Stylesheet::parse("u { text-decoration: underline } s { text-decoration: line-through }");
        let mut tree = DomTree::new();
        let forward = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("x").with_tag(TagRun::new("u")).with_tag(TagRun::new("s")),
        );
        let backward = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("y").with_tag(TagRun::new("S")).with_tag(TagRun::new("u")),
        );

        let a = resolve_attributes(&tree, forward, &sheet);
        let b = resolve_attributes(&tree, backward, &sheet);
        assert_eq!(a, b);
        assert_eq!(text(&a, AttributeKey::TextDecoration).as_deref(), Some("underline"));
    }

    #[test]
    fn test_unknown_and_repeated_tags() {
        let sheet = Stylesheet::parse("b { font-weight: bold }");
        let mut tree = DomTree::new();
        let leaf = tree.append_leaf(
            NodeId::ROOT,
            LeafData::new("x")
                .with_tag(TagRun::new("blink"))
                .with_tag(TagRun::new("b"))
                .with_tag(TagRun::new("b")),
        );
        assert_eq!(cascade_sources(&tree, leaf, &sheet).len(), 1);
    }

    #[test]
    fn test_container_uses_own_tag_only() {
        let sheet = Stylesheet::parse("p { padding: 2pt } b { font-weight: bold }");
        let mut tree = DomTree::new();
        let p = tree.append_container(NodeId::ROOT, ContainerData::new("P").with_attr("align", "right"));
        let unknown = tree.append_container(NodeId::ROOT, ContainerData::new("marquee"));

        let sources = cascade_sources(&tree, p, &sheet);
        assert_eq!(sources.len(), 2);
        assert!(sources[0].contains(AttributeKey::Align));
        assert!(sources[1].contains(AttributeKey::Padding));

        assert!(cascade_sources(&tree, unknown, &sheet).is_empty());
    }

    #[test]
    fn test_document_and_missing_nodes_have_no_sources() {
        let sheet = Stylesheet::with_defaults();
        let tree = DomTree::new();
        assert!(cascade_sources(&tree, NodeId::ROOT, &sheet).is_empty());
        assert!(resolve_attributes(&tree, NodeId(42), &sheet).is_empty());
    }
}
