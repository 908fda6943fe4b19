#![forbid(unsafe_code)]

//! Discrete vertical offsets of the glyph scale.
//!
//! A slot's scale is a vertical stack of the eleven non-blank glyphs.
//! Showing a symbol means translating the stack so that glyph sits in the
//! slot's viewport; the roll animation is the continuous transition
//! between two such offsets.

use reel_core::Symbol;

/// Vertical offset, in percent of one glyph height, that positions the
/// scale so `symbol` is visible.
///
/// Digit `d` sits at `-10·d %`; the minus glyph hangs below the digits at
/// `-100 %`. `Blank` parks the scale one step above digit zero (`+10 %`),
/// the neutral "no value yet" position new slots start from.
#[must_use]
pub const fn offset_percent(symbol: Symbol) -> i32 {
    match symbol {
        Symbol::Blank => 10,
        Symbol::Digit(d) => -10 * d as i32,
        Symbol::Minus => -100,
    }
}
