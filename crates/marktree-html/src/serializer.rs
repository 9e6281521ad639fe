//! Rendering a [`TagTree`] back to markup, and a readable tree dump.
//!
//! Attributes are always written sorted by name so output is deterministic.
//! Self-closing nodes (raw-text elements included) render as `<name .../>`.

use marktree_dom::{Attribute, NodeId, TagTree};

/// Render every root of `tree`, in order.
#[must_use]
pub fn render_html(tree: &TagTree) -> String {
    render_nodes(tree, tree.roots())
}

/// Render the given nodes (and their subtrees) one after another.
#[must_use]
pub fn render_nodes(tree: &TagTree, ids: &[NodeId]) -> String {
    let mut out = String::new();
    for &id in ids {
        render_into(&mut out, tree, id);
    }
    out
}

/// Render one node and its subtree.
#[must_use]
pub fn render_node(tree: &TagTree, id: NodeId) -> String {
    let mut out = String::new();
    render_into(&mut out, tree, id);
    out
}

fn render_into(out: &mut String, tree: &TagTree, id: NodeId) {
    let Some(node) = tree.get(id) else {
        return;
    };

    out.push('<');
    out.push_str(&node.name);
    for attribute in node.sorted_attributes() {
        push_attribute(out, attribute);
    }

    if node.is_self_closing {
        out.push_str("/>");
        return;
    }

    out.push('>');
    out.push_str(&node.inner_text);
    for &child in tree.children(id) {
        render_into(out, tree, child);
    }
    out.push_str("</");
    out.push_str(&node.name);
    out.push('>');
}

/// ` name="value"`, or bare ` name` for a flag. A value containing `"` but
/// no `'` is wrapped in single quotes instead.
fn push_attribute(out: &mut String, attribute: &Attribute) {
    out.push(' ');
    out.push_str(&attribute.name);
    if !attribute.has_value {
        return;
    }
    let quote = if attribute.value.contains('"') && !attribute.value.contains('\'') {
        '\''
    } else {
        '"'
    };
    out.push('=');
    out.push(quote);
    out.push_str(&attribute.value);
    out.push(quote);
}

/// Indented dump of a subtree: one tag per line, two spaces per level.
#[must_use]
pub fn format_tree(tree: &TagTree, id: NodeId) -> String {
    let mut out = String::new();
    format_into(&mut out, tree, id, 0);
    out
}

/// Print a subtree for debugging.
pub fn print_tree(tree: &TagTree, id: NodeId) {
    print!("{}", format_tree(tree, id));
}

fn format_into(out: &mut String, tree: &TagTree, id: NodeId, depth: usize) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(&node.name);
    for attribute in node.sorted_attributes() {
        push_attribute(out, attribute);
    }

    if node.is_self_closing {
        out.push_str("/>\n");
        return;
    }

    out.push('>');
    out.push_str(&node.inner_text);

    let children = tree.children(id);
    if !children.is_empty() {
        out.push('\n');
        for &child in children {
            format_into(out, tree, child, depth + 1);
        }
        out.push_str(&indent);
    }

    out.push_str("</");
    out.push_str(&node.name);
    out.push_str(">\n");
}
