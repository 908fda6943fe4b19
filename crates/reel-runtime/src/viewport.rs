#![forbid(unsafe_code)]

//! Viewport visibility lifecycle.
//!
//! Hosts deliver [`IntersectionRecord`]s; the [`LifecycleController`]
//! turns threshold crossings into exactly-once `on_enter`/`on_exit`
//! dispatches through the [`ViewportHooks`] trait. The controller owns no
//! component state, only the visibility phase, so it stays decoupled from
//! the reconcile engine.

use crate::caps::{CapabilityError, HostCaps};
use std::collections::VecDeque;

/// One visibility observation delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRecord {
    /// Whether the element currently intersects the viewport.
    pub is_intersecting: bool,
    /// Intersection ratio in `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionRecord {
    /// Record for an element intersecting at `ratio`.
    #[must_use]
    pub const fn intersecting(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    /// Record for an element no longer intersecting, last seen at `ratio`.
    #[must_use]
    pub const fn departed(ratio: f64) -> Self {
        Self {
            is_intersecting: false,
            ratio,
        }
    }
}

/// Ratio thresholds for enter and exit crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportThresholds {
    /// Minimum ratio, while intersecting, that counts as entered.
    pub enter: f64,
    /// Maximum last-known ratio, after intersection ends, that counts as
    /// a scrolled-past exit.
    pub exit: f64,
}

impl Default for ViewportThresholds {
    fn default() -> Self {
        // Fully visible to enter; any partial visibility on the way out.
        Self {
            enter: 1.0,
            exit: 1.0,
        }
    }
}

/// Observer configuration a host binding applies when registering the
/// real observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    /// Enter/exit ratio thresholds.
    pub thresholds: ViewportThresholds,
    /// Root margin in pixels, vertical then horizontal.
    pub root_margin: (i32, i32),
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            thresholds: ViewportThresholds::default(),
            root_margin: (-150, 0),
        }
    }
}

/// Visibility phase of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    /// Never fully entered the viewport.
    #[default]
    Unseen,
    /// Entered; the enter hook has fired.
    Visible,
    /// Left after being seen; the exit hook has fired.
    Exited,
}

/// Lifecycle hooks a component implements to react to visibility.
pub trait ViewportHooks {
    /// The element became fully visible.
    fn on_enter(&mut self);
    /// The element scrolled out of view.
    fn on_exit(&mut self);
}

/// Turns intersection records into exactly-once hook dispatches.
#[derive(Debug, Default)]
pub struct LifecycleController {
    options: ViewportOptions,
    state: VisibilityState,
}

impl LifecycleController {
    /// Register a lifecycle against the host's declared capabilities.
    ///
    /// Errors when the host has no viewport observer; callers keep the
    /// value-rendering path and simply run without replay/reset.
    pub fn register(
        caps: HostCaps,
        options: ViewportOptions,
    ) -> Result<Self, CapabilityError> {
        if !caps.contains(HostCaps::VIEWPORT) {
            #[cfg(feature = "tracing")]
            tracing::warn!("viewport capability missing; replay/reset lifecycle disabled");
            return Err(CapabilityError {
                missing: HostCaps::VIEWPORT,
            });
        }
        Ok(Self {
            options,
            state: VisibilityState::Unseen,
        })
    }

    /// The configured observer options.
    #[must_use]
    pub fn options(&self) -> ViewportOptions {
        self.options
    }

    /// Current visibility phase.
    #[must_use]
    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// Process one intersection record, dispatching at most one hook.
    ///
    /// Enter: intersecting at or above the enter threshold, fired once per
    /// crossing. Exit: intersection ended with a last-known ratio at or
    /// below the exit threshold but above zero. A ratio of exactly zero
    /// means the element vanished without scrolling out (hidden or
    /// removed); that is not an exit and nothing fires.
    pub fn process<H: ViewportHooks>(&mut self, record: IntersectionRecord, hooks: &mut H) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            is_intersecting = record.is_intersecting,
            ratio = record.ratio,
            state = ?self.state,
            "visibility record"
        );

        let thresholds = self.options.thresholds;
        if record.is_intersecting
            && record.ratio >= thresholds.enter
            && self.state != VisibilityState::Visible
        {
            self.state = VisibilityState::Visible;
            hooks.on_enter();
        } else if !record.is_intersecting
            && record.ratio <= thresholds.exit
            && record.ratio > 0.0
            && self.state != VisibilityState::Exited
        {
            self.state = VisibilityState::Exited;
            hooks.on_exit();
        }
    }

    /// Process every record a source has queued.
    pub fn drain<S: IntersectionSource, H: ViewportHooks>(
        &mut self,
        source: &mut S,
        hooks: &mut H,
    ) {
        while let Some(record) = source.next_record() {
            self.process(record, hooks);
        }
    }
}

/// A feed of intersection records.
///
/// The real implementation is a host binding wrapping a platform
/// observer; tests use [`ScriptedViewport`].
pub trait IntersectionSource {
    /// Next pending record, if any.
    fn next_record(&mut self) -> Option<IntersectionRecord>;
}

/// Deterministic test double: a scripted queue of records.
#[derive(Debug, Default)]
pub struct ScriptedViewport {
    records: VecDeque<IntersectionRecord>,
}

impl ScriptedViewport {
    /// An empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a record for delivery.
    pub fn push(&mut self, record: IntersectionRecord) {
        self.records.push_back(record);
    }
}

impl Extend<IntersectionRecord> for ScriptedViewport {
    fn extend<T: IntoIterator<Item = IntersectionRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl IntersectionSource for ScriptedViewport {
    fn next_record(&mut self) -> Option<IntersectionRecord> {
        self.records.pop_front()
    }
}
