#![forbid(unsafe_code)]

//! Styling layer for the reel counter.
//!
//! Widgets never hardcode visual offsets; the scale mapping and the roll
//! transition live here, decoupled from slot structure the same way a
//! stylesheet is decoupled from markup. The output is a CSS block the
//! host embeds next to the slot tree: eleven discrete vertical offsets,
//! one per symbol, plus a single configurable transition duration.

pub mod roll;
pub mod scale;

pub use roll::RollStyle;
pub use scale::offset_percent;
