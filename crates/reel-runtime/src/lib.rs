#![forbid(unsafe_code)]

//! Host-facing runtime for the reel counter.
//!
//! The engine itself is synchronous and pure; everything that touches the
//! outside world is injected through this crate. Two capabilities exist:
//! a timer that drives deferred fill passes, and a viewport observer that
//! drives the replay/reset lifecycle. Both have deterministic test
//! doubles, so no test ever sleeps or scrolls a real page.

pub mod caps;
pub mod ticker;
pub mod viewport;

pub use caps::{CapabilityError, HostCaps};
pub use ticker::{StopSignal, Ticker, TickerHandle};
pub use viewport::{
    IntersectionRecord, IntersectionSource, LifecycleController, ScriptedViewport,
    ViewportHooks, ViewportOptions, ViewportThresholds, VisibilityState,
};
