#![forbid(unsafe_code)]

//! Reel public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use reel_core::{RenderState, Symbol, digits_of, natural_width, parse_value};

// --- Style re-exports ------------------------------------------------------

pub use reel_style::{RollStyle, offset_percent};

// --- Render re-exports -----------------------------------------------------

pub use reel_render::{Element, Node, Patch, to_html};

// --- Runtime re-exports ----------------------------------------------------

pub use reel_runtime::{
    CapabilityError, HostCaps, IntersectionRecord, IntersectionSource, LifecycleController,
    ScriptedViewport, Ticker, TickerHandle, ViewportHooks, ViewportOptions, ViewportThresholds,
    VisibilityState,
};

// --- Widget re-exports -----------------------------------------------------

pub use reel_widgets::{CounterConfig, Engine, FILL_DELAY, Phase, RollingCounter, Slot};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for reel hosts.
#[derive(Debug)]
pub enum Error {
    /// A required host capability is absent.
    Capability(CapabilityError),
    /// Host binding error with message.
    Host(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Capability(err) => write!(f, "{err}"),
            Self::Host(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<CapabilityError> for Error {
    fn from(err: CapabilityError) -> Self {
        Self::Capability(err)
    }
}

/// Standard result type for reel APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CounterConfig, Error, HostCaps, IntersectionRecord, LifecycleController, Patch, Result,
        RollStyle, RollingCounter, Symbol, ViewportHooks, ViewportOptions,
    };

    pub use crate::{core, render, runtime, style, widgets};
}

pub use reel_core as core;
pub use reel_render as render;
pub use reel_runtime as runtime;
pub use reel_style as style;
pub use reel_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_error_converts() {
        let err: Error = CapabilityError {
            missing: HostCaps::VIEWPORT,
        }
        .into();
        assert!(matches!(err, Error::Capability(_)));
        assert!(err.to_string().contains("VIEWPORT"));
    }

    #[test]
    fn prelude_builds_a_counter() {
        use crate::prelude::*;

        let (mut counter, tree) = RollingCounter::mount(CounterConfig::new().value("7"));
        assert_eq!(tree.len(), 2);
        counter.set_value("8");
        assert!(!counter.take_patches().is_empty());
    }
}
