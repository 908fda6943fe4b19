#![forbid(unsafe_code)]

//! Core primitives for the reel counter: the symbol alphabet, the digit
//! codec, value parsing, and the render state carried between reconcile
//! passes.
//!
//! Everything in this crate is pure and allocation-light; no host concerns
//! (markup, styling, timers, visibility) leak in here.

pub mod codec;
pub mod state;
pub mod symbol;

pub use codec::{digits_of, natural_width, parse_value};
pub use state::RenderState;
pub use symbol::Symbol;
