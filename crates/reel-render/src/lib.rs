#![forbid(unsafe_code)]

//! Structural rendering for the reel counter.
//!
//! Markup is built as a typed node tree, never as string concatenation;
//! serialization and escaping live in exactly one place, the HTML writer.
//! Slot updates travel as [`Patch`] ops so a host mutates only what
//! changed, which matters: the roll transition is driven by
//! attribute-change events, and touching an unchanged slot would
//! retrigger it.
//!
//! [`Patch`]: patch::Patch

pub mod html;
pub mod node;
pub mod patch;
pub mod slot;

pub use html::to_html;
pub use node::{Element, Node};
pub use patch::Patch;
pub use slot::{root, slot, wrapper};
