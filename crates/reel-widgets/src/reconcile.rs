#![forbid(unsafe_code)]

//! Reconcile engine: moves the slot set from one value to the next with
//! the minimum visible disruption.
//!
//! The common path is a fill: diff the next digit sequence against the
//! current slots and rebind only the symbols that changed. When the next
//! value needs more slots than are allocated, a two-phase growth protocol
//! runs instead: allocate blank slots synchronously, then fill on a
//! deferred pass. The split exists because a roll needs both a committed
//! start position and an end position; a slot created and filled in the
//! same pass has nothing to roll from.
//!
//! The deferral is an explicit state ([`Phase::Growing`]) advanced by
//! [`Engine::tick`] with injected time. The deferred fill re-reads the
//! engine's state at the moment it runs, so a value set between growth
//! and fill is never lost to a stale capture.

use reel_core::{RenderState, Symbol, digits_of};
use reel_render::Patch;
use std::time::Duration;

/// Delay between growth allocation and the deferred fill, long enough
/// for a host to commit the new slots' neutral layout.
pub const FILL_DELAY: Duration = Duration::from_millis(23);

/// Deferral state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pass pending.
    Stable,
    /// Slots were just allocated; the fill runs once `remaining` has
    /// elapsed. There is no cancellation path: a pending growth always
    /// completes.
    Growing {
        /// Time left until the deferred fill.
        remaining: Duration,
    },
}

/// What the next fill pass should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    /// A parsed value, `None` for the not-a-number state.
    Value(Option<i64>),
    /// The exit reset: every allocated slot shows `0`.
    Zeros,
}

/// A persistent visual unit bound to one digit position.
///
/// Created only when width grows; afterwards only its symbol is rebound.
/// Slots are never reordered or recreated for a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    symbol: Symbol,
}

impl Slot {
    const fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    /// The symbol this slot currently shows.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }
}

/// The reconcile engine: render state, slots, and the deferral phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    state: RenderState,
    slots: Vec<Slot>,
    target: Target,
    phase: Phase,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Fresh engine: no value, no slots, stable.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RenderState::new(),
            slots: Vec::new(),
            target: Target::Value(None),
            phase: Phase::Stable,
        }
    }

    /// Current render state.
    #[must_use]
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// The allocated slots, most significant first.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Symbols currently shown, one per slot.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.slots.iter().map(Slot::symbol).collect()
    }

    /// Current deferral phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a deferred fill is pending.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        matches!(self.phase, Phase::Growing { .. })
    }

    /// Reconcile toward a new target value.
    ///
    /// Growth case: allocates blank slots at the wider width and defers
    /// the fill. Fill case: rebinds only the slots whose symbol changed.
    pub fn set_target(&mut self, value: Option<i64>) -> Vec<Patch> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "reconcile",
            target = ?value,
            width = self.state.width,
        )
        .entered();

        let effective = self.state.effective_width(value);
        let growth = effective > self.state.width;
        self.target = Target::Value(value);
        self.state.value = value;

        let patches = if growth {
            self.state.width = effective;
            self.slots = vec![Slot::new(Symbol::Blank); effective];
            self.phase = Phase::Growing {
                remaining: FILL_DELAY,
            };
            vec![Patch::Reset {
                symbols: vec![Symbol::Blank; effective],
            }]
        } else {
            self.fill()
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(patches = patches.len(), growth, "reconcile pass done");
        patches
    }

    /// Reconcile toward the exit reset: every allocated slot rolls to
    /// `0`. Width is untouched, so a two-slot counter shows `00`, not
    /// `0`.
    pub fn set_zeros(&mut self) -> Vec<Patch> {
        self.target = Target::Zeros;
        if self.state.width > 0 {
            self.state.value = Some(0);
        }
        self.fill()
    }

    /// Advance pending deferral by `dt` of elapsed time.
    ///
    /// When the deadline passes, runs the deferred fill against the state
    /// current *now*, not a snapshot from when growth was scheduled.
    pub fn tick(&mut self, dt: Duration) -> Vec<Patch> {
        match self.phase {
            Phase::Stable => Vec::new(),
            Phase::Growing { remaining } => {
                if dt >= remaining {
                    self.phase = Phase::Stable;
                    self.fill()
                } else {
                    self.phase = Phase::Growing {
                        remaining: remaining - dt,
                    };
                    Vec::new()
                }
            }
        }
    }

    /// Diff the current target's digit sequence against the slots and
    /// rebind only what changed. Untouched slots emit nothing; the style
    /// layer's transition is attribute-driven, and touching an unchanged
    /// slot would retrigger it.
    fn fill(&mut self) -> Vec<Patch> {
        let next = match self.target {
            Target::Value(value) => digits_of(value, self.state.width),
            Target::Zeros => vec![Symbol::Digit(0); self.state.width],
        };
        debug_assert_eq!(next.len(), self.slots.len());

        let mut patches = Vec::new();
        for (index, (slot, symbol)) in self.slots.iter_mut().zip(next).enumerate() {
            if slot.symbol != symbol {
                slot.symbol = symbol;
                patches.push(Patch::SetSymbol { index, symbol });
            }
        }
        patches
    }
}
