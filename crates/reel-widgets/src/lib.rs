#![forbid(unsafe_code)]

//! The rolling counter component and its reconcile engine.

pub mod counter;
pub mod reconcile;

pub use counter::{CounterConfig, RollingCounter};
pub use reconcile::{Engine, FILL_DELAY, Phase, Slot};
