#![forbid(unsafe_code)]

//! The rolling counter component.
//!
//! Owns the render state and slots through its [`Engine`], parses
//! external input, and wires visibility into the reconcile pipeline:
//! entering the viewport rolls to the configured value, leaving it rolls
//! every allocated slot back to zero.
//!
//! Mutations queue [`Patch`]es internally; the host drains them with
//! [`take_patches`](RollingCounter::take_patches) after each call or hook
//! dispatch.

use crate::reconcile::{Engine, Phase};
use reel_core::{Symbol, parse_value};
use reel_render::{Node, Patch, root};
use reel_runtime::ViewportHooks;
use reel_style::RollStyle;
use std::time::Duration;

/// Mount-time configuration.
///
/// The initial value comes from the host's value attribute when present,
/// otherwise from the element's text content, parsed once at mount.
#[derive(Debug, Clone, Default)]
pub struct CounterConfig {
    value: Option<String>,
    text: Option<String>,
    style: RollStyle,
}

impl CounterConfig {
    /// Empty configuration: no initial value, default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value attribute's raw text.
    #[must_use]
    pub fn value(mut self, raw: impl Into<String>) -> Self {
        self.value = Some(raw.into());
        self
    }

    /// Set the fallback text content.
    #[must_use]
    pub fn text(mut self, raw: impl Into<String>) -> Self {
        self.text = Some(raw.into());
        self
    }

    /// Set the roll style.
    #[must_use]
    pub fn style(mut self, style: RollStyle) -> Self {
        self.style = style;
        self
    }

    fn initial(&self) -> Option<i64> {
        let raw = self.value.as_deref().or(self.text.as_deref())?;
        parse_value(raw)
    }
}

/// An animated counter rendered as independent rolling digits.
#[derive(Debug)]
pub struct RollingCounter {
    engine: Engine,
    initial: Option<i64>,
    style: RollStyle,
    outbox: Vec<Patch>,
}

impl RollingCounter {
    /// Mount the component: parse the initial value and build the mount
    /// tree (style block plus empty wrapper).
    ///
    /// The counter starts empty; the first roll happens when the
    /// lifecycle's enter hook fires, or on the first explicit
    /// [`set_value`](Self::set_value).
    #[must_use]
    pub fn mount(config: CounterConfig) -> (Self, Vec<Node>) {
        let initial = config.initial();
        let counter = Self {
            engine: Engine::new(),
            initial,
            style: config.style.clone(),
            outbox: Vec::new(),
        };
        let tree = root(&counter.style, &[]);
        (counter, tree)
    }

    /// Parse raw input and reconcile toward it.
    ///
    /// Invalid input degrades to the not-a-number state and renders blank
    /// at the current width; it never errors.
    pub fn set_value(&mut self, raw: &str) {
        self.apply(parse_value(raw));
    }

    /// Reconcile toward an integer value directly.
    pub fn set_number(&mut self, value: i64) {
        self.apply(Some(value));
    }

    /// The last value set, `None` for not-a-number.
    ///
    /// Reports the target, never an intermediate placeholder state.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.engine.state().value
    }

    /// Number of allocated slots.
    #[must_use]
    pub fn width(&self) -> usize {
        self.engine.state().width
    }

    /// Symbols currently shown, one per slot.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.engine.symbols()
    }

    /// Current deferral phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    /// The configured roll style.
    #[must_use]
    pub fn style(&self) -> &RollStyle {
        &self.style
    }

    /// Advance pending deferred work by `dt` of elapsed time.
    pub fn tick(&mut self, dt: Duration) {
        let patches = self.engine.tick(dt);
        self.outbox.extend(patches);
    }

    /// Roll every allocated slot to zero, keeping the width.
    pub fn reset_to_zero(&mut self) {
        let patches = self.engine.set_zeros();
        self.outbox.extend(patches);
    }

    /// Drain the queued patches in emission order.
    #[must_use]
    pub fn take_patches(&mut self) -> Vec<Patch> {
        std::mem::take(&mut self.outbox)
    }

    fn apply(&mut self, value: Option<i64>) {
        let patches = self.engine.set_target(value);
        self.outbox.extend(patches);
    }
}

impl ViewportHooks for RollingCounter {
    fn on_enter(&mut self) {
        self.apply(self.initial);
    }

    fn on_exit(&mut self) {
        self.reset_to_zero();
    }
}
