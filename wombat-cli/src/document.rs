//! JSON document descriptions.
//!
//! A document is one node or a list of top-level nodes. Containers name a
//! tag and hold children; leaves hold text and the inline tags wrapping it:
//!
//! ```json
//! [
//!   { "tag": "p", "attrs": { "align": "center" }, "children": [
//!     { "text": "Total: " },
//!     { "text": "42", "tags": [{ "tag": "b" }, { "tag": "a", "attrs": { "href": "#t" } }] }
//!   ] }
//! ]
//! ```

use serde::Deserialize;
use wombat_dom::{AttributesMap, ContainerData, DomTree, LeafData, NodeId, TagRun};

/// One inline tag wrapping a leaf.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TagSpec {
    tag: String,
    #[serde(default)]
    attrs: AttributesMap,
}

/// A node of the document description.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MarkupNode {
    Leaf {
        text: String,
        #[serde(default)]
        attrs: AttributesMap,
        #[serde(default)]
        tags: Vec<TagSpec>,
    },
    Container {
        tag: String,
        #[serde(default)]
        attrs: AttributesMap,
        #[serde(default)]
        children: Vec<MarkupNode>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentFile {
    Nodes(Vec<MarkupNode>),
    Node(MarkupNode),
}

/// Parse a JSON document description into a markup tree.
pub fn parse_document(json: &str) -> serde_json::Result<DomTree> {
    let nodes = match serde_json::from_str(json)? {
        DocumentFile::Nodes(nodes) => nodes,
        DocumentFile::Node(node) => vec![node],
    };

    let mut tree = DomTree::new();
    for node in nodes {
        append(&mut tree, NodeId::ROOT, node);
    }
    Ok(tree)
}

fn append(tree: &mut DomTree, parent: NodeId, node: MarkupNode) {
    match node {
        MarkupNode::Leaf { text, attrs, tags } => {
            let mut leaf = LeafData::new(&text);
            leaf.attrs = attrs;
            leaf.tags = tags
                .into_iter()
                .map(|spec| TagRun {
                    tag_name: spec.tag,
                    attrs: spec.attrs,
                })
                .collect();
            let _ = tree.append_leaf(parent, leaf);
        }
        MarkupNode::Container {
            tag,
            attrs,
            children,
        } => {
            let mut container = ContainerData::new(&tag);
            container.attrs = attrs;
            let id = tree.append_container(parent, container);
            for child in children {
                append(tree, id, child);
            }
        }
    }
}
