#![forbid(unsafe_code)]

//! HTML serialization.
//!
//! The single place where node trees become markup text. Text nodes and
//! attribute values are escaped here and nowhere else; builders upstream
//! deal only in typed nodes.

use crate::node::{Element, Node};

/// Tags whose text children are raw text in HTML and must not be
/// entity-escaped.
const RAW_TEXT_TAGS: &[&str] = &["style", "script"];

/// Serialize a sequence of nodes.
#[must_use]
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, false, &mut out);
    }
    out
}

/// Serialize one node into `out`.
pub fn write_node(node: &Node, raw_text: bool, out: &mut String) {
    match node {
        Node::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&html_escape::encode_text(text));
            }
        }
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    for (name, value) in el.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    let raw_text = RAW_TEXT_TAGS.contains(&el.tag());
    for child in el.children() {
        write_node(child, raw_text, out);
    }

    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}
