//! Rich-text markup tree for the Wombat style resolver.
//!
//! The tree is produced by a markup parser and only read by the resolver.
//! It distinguishes two kinds of styled nodes:
//!
//! - **Containers** are block-level elements (`p`, `div`, `li`, ...). A
//!   container carries exactly one tag, its own.
//! - **Leaves** are runs of text. A leaf records every inline tag that
//!   encloses the run (`b`, `a`, `font`, ...) as a [`TagRun`], so a leaf
//!   inside `<a href="x"><b>text</b></a>` carries both an `a` and a `b` run.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues.

use std::collections::BTreeMap;

/// Map of attribute names to values for a node or tag run.
///
/// Ordered so that every traversal of a node's attributes is deterministic.
pub type AttributesMap = BTreeMap<String, String>;

/// A type-safe index into the markup tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node in the arena together with its tree links.
#[derive(Debug, Clone)]
pub struct Node {
    /// What kind of node this is and the data it carries.
    pub node_type: NodeType,
    /// Parent node, `None` for the document and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// Sibling immediately after this node.
    pub next_sibling: Option<NodeId>,
    /// Sibling immediately before this node.
    pub prev_sibling: Option<NodeId>,
}

/// The kind of a markup node.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// The document root. Carries no style of its own.
    Document,
    /// A block-level element carrying exactly one tag.
    Container(ContainerData),
    /// A run of text carrying the inline tags that enclose it.
    Leaf(LeafData),
}

/// Container-specific data.
#[derive(Debug, Clone, Default)]
pub struct ContainerData {
    /// The element's tag name, as written in the markup.
    pub tag_name: String,
    /// Raw markup attributes of the element (`style`, `align`, `bgcolor`, ...).
    pub attrs: AttributesMap,
}

impl ContainerData {
    /// Create container data for `tag_name` with no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Add a raw markup attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }
}

/// An inline tag enclosing a text run, with that tag's own attributes.
///
/// For `<a href="x">` the run is `TagRun { tag_name: "a", attrs: {href: x} }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRun {
    /// The inline tag's name, as written in the markup.
    pub tag_name: String,
    /// The inline tag's attributes.
    pub attrs: AttributesMap,
}

impl TagRun {
    /// Create a tag run for `tag_name` with no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Add an attribute to the tag run.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }
}

/// Leaf-specific data.
#[derive(Debug, Clone, Default)]
pub struct LeafData {
    /// The text content of the run.
    pub text: String,
    /// The leaf's own raw markup attributes.
    pub attrs: AttributesMap,
    /// Inline tags enclosing the run. The order is whatever the parser
    /// produced; the resolver does not depend on it.
    pub tags: Vec<TagRun>,
}

impl LeafData {
    /// Create a leaf for `text` with no tags and no attributes.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Add an enclosing inline tag.
    #[must_use]
    pub fn with_tag(mut self, tag: TagRun) -> Self {
        self.tags.push(tag);
        self
    }

    /// Add a raw markup attribute to the leaf itself.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }
}

/// Arena-based markup tree with O(1) node access and traversal.
///
/// This structure stores all nodes in a contiguous vector, using indices
/// for all relationships. The Document node is always at index 0.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
                next_sibling: None,
                prev_sibling: None,
            }],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, including the Document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Appends `child` as the last child of `parent`, updating all relationships.
    ///
    /// # Panics
    /// Panics if either ID was not allocated by this tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Allocate a container and append it to `parent`.
    pub fn append_container(&mut self, parent: NodeId, data: ContainerData) -> NodeId {
        let id = self.alloc(NodeType::Container(data));
        self.append_child(parent, id);
        id
    }

    /// Allocate a leaf and append it to `parent`.
    pub fn append_leaf(&mut self, parent: NodeId, data: LeafData) -> NodeId {
        let id = self.alloc(NodeType::Leaf(data));
        self.append_child(parent, id);
        id
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterate over preceding siblings (from immediately before to first child).
    #[must_use]
    pub fn preceding_siblings(&self, id: NodeId) -> PrecedingSiblingIterator<'_> {
        PrecedingSiblingIterator {
            tree: self,
            current: self.prev_sibling(id),
        }
    }

    /// Iterate over `id` and all of its descendants in document order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            stack: vec![id],
        }
    }

    /// Whether the node is a text leaf.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.as_leaf(id).is_some()
    }

    /// Get container data if this node is a container.
    #[must_use]
    pub fn as_container(&self, id: NodeId) -> Option<&ContainerData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Container(data) => Some(data),
            _ => None,
        })
    }

    /// Get leaf data if this node is a text leaf.
    #[must_use]
    pub fn as_leaf(&self, id: NodeId) -> Option<&LeafData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Leaf(data) => Some(data),
            _ => None,
        })
    }

    /// The raw markup attributes of a container or leaf.
    #[must_use]
    pub fn attrs(&self, id: NodeId) -> Option<&AttributesMap> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Container(data) => Some(&data.attrs),
            NodeType::Leaf(data) => Some(&data.attrs),
            NodeType::Document => None,
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Iterator over preceding siblings of a node.
pub struct PrecedingSiblingIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for PrecedingSiblingIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.prev_sibling(id);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push in reverse so the first child is visited next.
        self.stack.extend(self.tree.children(id).iter().rev());
        Some(id)
    }
}
