#![forbid(unsafe_code)]

//! Minimal mutation ops for the slot tree.
//!
//! The reconcile engine emits patches; the host applies them. Only two
//! shapes exist: replace the whole slot set (growth allocation) and
//! rebind one slot's symbol (fill). A slot whose symbol did not change
//! never appears in the stream.

use crate::node::Node;
use crate::slot;
use reel_core::Symbol;

/// One mutation of the slot tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch {
    /// Replace every slot. Emitted by the growth allocation pass, where
    /// the new symbols are all blank.
    Reset {
        /// Symbols for the rebuilt slot set, one per slot.
        symbols: Vec<Symbol>,
    },
    /// Rebind one slot's symbol: its `data-value` attribute and hidden
    /// value text.
    SetSymbol {
        /// Slot position, `0` is most significant.
        index: usize,
        /// The symbol to show.
        symbol: Symbol,
    },
}

/// Apply a patch to a wrapper element.
///
/// A `SetSymbol` whose index has no slot is skipped silently, mirroring
/// the render buffer convention of ignoring out-of-bounds writes.
pub fn apply(wrapper: &mut crate::node::Element, patch: &Patch) {
    match patch {
        Patch::Reset { symbols } => {
            *wrapper = slot::wrapper(symbols);
        }
        Patch::SetSymbol { index, symbol } => {
            let id = format!("digit{index}");
            let Some(digit) = wrapper.find_child_mut(|c| c.attribute("id") == Some(id.as_str()))
            else {
                return;
            };
            digit.set_attr("data-value", symbol.to_string());
            if let Some(value) = digit.find_child_mut(|c| c.attribute("class") == Some("value")) {
                value.children_mut().clear();
                value.children_mut().push(Node::text(symbol.to_string()));
            }
        }
    }
}
