#![forbid(unsafe_code)]

//! Slot structure.
//!
//! A slot shows one symbol. Its `data-value` attribute carries the
//! current symbol for the style layer, its `.scale` stacks all eleven
//! glyphs for the roll, and its `.value` overlay holds the symbol as
//! (visually hidden) text for copy/paste and screen readers.

use crate::node::{Element, Node};
use reel_core::Symbol;
use reel_style::RollStyle;

/// Id of the element the patch stream targets.
pub const WRAPPER_ID: &str = "wrapper";

/// Build one slot bound to `index`, currently showing `symbol`.
#[must_use]
pub fn slot(index: usize, symbol: Symbol) -> Element {
    let mut scale = Element::new("span")
        .attr("class", "scale")
        .attr("aria-hidden", "true");
    for glyph in Symbol::SCALE {
        scale = scale.child(Element::new("span").child(Node::text(glyph.to_string())));
    }

    Element::new("span")
        .attr("class", "digit")
        .attr("data-value", symbol.to_string())
        .attr("id", format!("digit{index}"))
        .child(scale)
        .child(
            Element::new("span")
                .attr("class", "value")
                .child(Node::text(symbol.to_string())),
        )
}

/// Build the wrapper element holding one slot per symbol.
#[must_use]
pub fn wrapper(symbols: &[Symbol]) -> Element {
    let mut el = Element::new("span").attr("id", WRAPPER_ID);
    for (index, symbol) in symbols.iter().enumerate() {
        el = el.child(slot(index, *symbol));
    }
    el
}

/// Build the full mount tree: the style block followed by the wrapper.
#[must_use]
pub fn root(style: &RollStyle, symbols: &[Symbol]) -> Vec<Node> {
    vec![
        Element::new("style").child(Node::text(style.to_css())).into(),
        wrapper(symbols).into(),
    ]
}
