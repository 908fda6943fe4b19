#![forbid(unsafe_code)]

//! Render state carried between reconcile passes.

use crate::codec::natural_width;

/// The value and slot width a counter last rendered.
///
/// `width` is monotonically non-decreasing over a counter's lifetime:
/// slots are never deallocated, only refilled. A value needing fewer
/// digits than the current width renders with leading blanks instead of
/// shrinking, which keeps layout stable and avoids re-triggering the
/// growth protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    /// Last target value; `None` is the not-a-number state.
    pub value: Option<i64>,
    /// Number of allocated slots.
    pub width: usize,
}

impl RenderState {
    /// Fresh state: no value, no slots.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            width: 0,
        }
    }

    /// Slot count needed to show `target` without losing columns.
    ///
    /// Never smaller than the current width.
    #[must_use]
    pub fn effective_width(&self, target: Option<i64>) -> usize {
        self.width.max(natural_width(target))
    }

    /// Whether moving to `target` requires allocating new slots.
    #[must_use]
    pub fn needs_growth(&self, target: Option<i64>) -> bool {
        self.effective_width(target) > self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_empty() {
        let state = RenderState::new();
        assert_eq!(state.value, None);
        assert_eq!(state.width, 0);
        assert_eq!(state, RenderState::default());
    }

    #[test]
    fn effective_width_takes_the_max() {
        let state = RenderState {
            value: Some(42),
            width: 2,
        };
        assert_eq!(state.effective_width(Some(7)), 2);
        assert_eq!(state.effective_width(Some(1234)), 4);
        assert_eq!(state.effective_width(None), 2);
    }

    #[test]
    fn growth_only_when_wider() {
        let state = RenderState {
            value: Some(42),
            width: 2,
        };
        assert!(!state.needs_growth(Some(99)));
        assert!(state.needs_growth(Some(100)));
        assert!(!state.needs_growth(None));
    }

    #[test]
    fn nan_never_grows_a_fresh_state() {
        assert!(!RenderState::new().needs_growth(None));
    }
}
