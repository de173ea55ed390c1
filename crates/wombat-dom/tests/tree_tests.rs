//! Tests for markup tree construction and traversal.

use wombat_dom::{ContainerData, DomTree, LeafData, NodeId, TagRun};

#[test]
fn test_append_links_siblings() {
    let mut tree = DomTree::new();
    let p = tree.append_container(NodeId::ROOT, ContainerData::new("p"));
    let a = tree.append_leaf(p, LeafData::new("one"));
    let b = tree.append_leaf(p, LeafData::new("two"));
    let c = tree.append_leaf(p, LeafData::new("three"));

    assert_eq!(tree.children(p), &[a, b, c]);
    assert_eq!(tree.parent(b), Some(p));
    assert_eq!(tree.prev_sibling(a), None);
    assert_eq!(tree.next_sibling(a), Some(b));
    assert_eq!(tree.prev_sibling(c), Some(b));
    assert_eq!(tree.preceding_siblings(c).collect::<Vec<_>>(), vec![b, a]);
}

#[test]
fn test_descendants_in_document_order() {
    let mut tree = DomTree::new();
    let ul = tree.append_container(NodeId::ROOT, ContainerData::new("ul"));
    let li1 = tree.append_container(ul, ContainerData::new("li"));
    let t1 = tree.append_leaf(li1, LeafData::new("first"));
    let li2 = tree.append_container(ul, ContainerData::new("li"));
    let t2 = tree.append_leaf(li2, LeafData::new("second"));

    let order: Vec<NodeId> = tree.descendants(NodeId::ROOT).collect();
    assert_eq!(order, vec![NodeId::ROOT, ul, li1, t1, li2, t2]);
    assert_eq!(tree.ancestors(t2).collect::<Vec<_>>(), vec![li2, ul, NodeId::ROOT]);
}

#[test]
fn test_node_kind_accessors() {
    let mut tree = DomTree::new();
    let div = tree.append_container(
        NodeId::ROOT,
        ContainerData::new("div").with_attr("align", "center"),
    );
    let leaf = tree.append_leaf(
        div,
        LeafData::new("link")
            .with_tag(TagRun::new("a").with_attr("href", "https://example.com"))
            .with_attr("title", "tip"),
    );

    assert!(tree.is_leaf(leaf));
    assert!(!tree.is_leaf(div));
    assert_eq!(tree.as_container(div).map(|c| c.tag_name.as_str()), Some("div"));
    assert_eq!(
        tree.attrs(div).and_then(|a| a.get("align")).map(String::as_str),
        Some("center")
    );

    let data = tree.as_leaf(leaf).unwrap();
    assert_eq!(data.text, "link");
    assert_eq!(data.tags.len(), 1);
    assert_eq!(data.tags[0].tag_name, "a");
    assert!(tree.attrs(NodeId::ROOT).is_none());
}
