//! Output of resolved styles, as JSON or as an indented tree.

use std::collections::BTreeMap;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use wombat_common::warning::recorded_warnings;
use wombat_dom::{DomTree, NodeId, NodeType};
use wombat_style::StyleRecord;

/// One node of the JSON report.
#[derive(Serialize)]
struct NodeReport<'a> {
    id: usize,
    parent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<&'a str>,
    style: &'a StyleRecord,
}

/// Every resolved node in document order, as pretty-printed JSON.
pub fn to_json(
    tree: &DomTree,
    styles: &BTreeMap<NodeId, StyleRecord>,
    markers: &BTreeMap<NodeId, String>,
) -> Result<String> {
    let nodes: Vec<NodeReport<'_>> = tree
        .descendants(NodeId::ROOT)
        .filter_map(|id| {
            let style = styles.get(&id)?;
            let node = tree.get(id)?;
            let (tag, text) = match &node.node_type {
                NodeType::Container(data) => (Some(data.tag_name.as_str()), None),
                NodeType::Leaf(data) => (None, Some(data.text.as_str())),
                NodeType::Document => (None, None),
            };
            Some(NodeReport {
                id: id.0,
                parent: tree.parent(id).map(|parent| parent.0),
                tag,
                text,
                marker: markers.get(&id).map(String::as_str),
                style,
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&nodes)?)
}

/// Print the tree with each node's resolved style on the same line.
pub fn print_text(
    tree: &DomTree,
    styles: &BTreeMap<NodeId, StyleRecord>,
    markers: &BTreeMap<NodeId, String>,
    color: bool,
) -> Result<()> {
    for &child in tree.children(NodeId::ROOT) {
        print_node(tree, child, 0, styles, markers, color)?;
    }

    let warnings = recorded_warnings();
    if !warnings.is_empty() {
        let summary = format!("{} warning(s)", warnings.len());
        if color {
            println!("\n{}", summary.yellow());
        } else {
            println!("\n{summary}");
        }
    }
    Ok(())
}

fn print_node(
    tree: &DomTree,
    id: NodeId,
    indent: usize,
    styles: &BTreeMap<NodeId, StyleRecord>,
    markers: &BTreeMap<NodeId, String>,
    color: bool,
) -> Result<()> {
    let Some(node) = tree.get(id) else {
        return Ok(());
    };

    let prefix = "  ".repeat(indent);
    let label = match &node.node_type {
        NodeType::Container(data) => format!("<{}>", data.tag_name),
        NodeType::Leaf(data) => {
            let display = data.text.replace('\n', "\\n").replace(' ', "\u{00B7}");
            format!("\"{display}\"")
        }
        NodeType::Document => "Document".to_string(),
    };
    let marker = markers
        .get(&id)
        .map(|marker| format!(" [{}]", marker.trim_end()))
        .unwrap_or_default();
    let summary = match styles.get(&id) {
        Some(style) => style_summary(style)?,
        None => String::new(),
    };

    if color {
        println!("{prefix}{}{} {}", label.cyan().bold(), marker.green(), summary.dimmed());
    } else {
        println!("{prefix}{label}{marker} {summary}");
    }

    for &child in tree.children(id) {
        print_node(tree, child, indent + 1, styles, markers, color)?;
    }
    Ok(())
}

/// The fields of `style` that are set, as `name=value` pairs.
fn style_summary(style: &StyleRecord) -> Result<String> {
    let mut parts = Vec::new();
    flatten("", &serde_json::to_value(style)?, &mut parts);
    Ok(parts.join(" "))
}

fn flatten(path: &str, value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            if let Some(hex) = color_hex(map) {
                out.push(format!("{path}={hex}"));
                return;
            }
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten(&child_path, child, out);
            }
        }
        Value::String(text) => out.push(format!("{path}={text}")),
        other => out.push(format!("{path}={other}")),
    }
}

/// A serialized color (`{r, g, b, a}`) as hex notation.
fn color_hex(map: &serde_json::Map<String, Value>) -> Option<String> {
    if map.len() != 4 {
        return None;
    }
    let channel = |name: &str| map.get(name).and_then(Value::as_u64);
    let (r, g, b, a) = (channel("r")?, channel("g")?, channel("b")?, channel("a")?);
    Some(if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    })
}
