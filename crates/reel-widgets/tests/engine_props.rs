//! Property tests for the reconcile engine.

use proptest::prelude::*;
use reel_core::natural_width;
use reel_render::Patch;
use reel_widgets::{Engine, FILL_DELAY};

/// Drive the engine to a settled state for `value`.
fn settle(engine: &mut Engine, value: Option<i64>) {
    engine.set_target(value);
    engine.tick(FILL_DELAY);
}

proptest! {
    /// Width never shrinks over any sequence of targets.
    #[test]
    fn width_is_monotonic(values in prop::collection::vec(any::<Option<i64>>(), 1..20)) {
        let mut engine = Engine::new();
        let mut last_width = 0;
        for value in values {
            settle(&mut engine, value);
            let width = engine.state().width;
            prop_assert!(width >= last_width);
            prop_assert!(width >= natural_width(value));
            last_width = width;
        }
    }

    /// A settled engine re-targeted at the same value emits nothing.
    #[test]
    fn settled_retarget_is_silent(value in any::<Option<i64>>()) {
        let mut engine = Engine::new();
        settle(&mut engine, value);
        let symbols = engine.symbols();
        prop_assert!(engine.set_target(value).is_empty());
        prop_assert!(engine.tick(FILL_DELAY).is_empty());
        prop_assert_eq!(engine.symbols(), symbols);
    }

    /// Every fill patch targets a slot whose symbol actually changed, and
    /// no two patches target the same slot.
    #[test]
    fn fill_patches_are_minimal(a in any::<i64>(), b in any::<i64>()) {
        let mut engine = Engine::new();
        settle(&mut engine, Some(a));
        let before = engine.symbols();

        // Force the fill case by staying within the settled width.
        prop_assume!(natural_width(Some(b)) <= engine.state().width);
        let patches = engine.set_target(Some(b));

        let mut touched = Vec::new();
        for patch in &patches {
            match patch {
                Patch::SetSymbol { index, symbol } => {
                    prop_assert_ne!(before[*index], *symbol);
                    prop_assert!(!touched.contains(index));
                    touched.push(*index);
                }
                Patch::Reset { .. } => prop_assert!(false, "fill case must not reset"),
            }
        }

        // Untouched slots kept their symbol.
        let after = engine.symbols();
        for (index, symbol) in before.iter().enumerate() {
            if !touched.contains(&index) {
                prop_assert_eq!(after[index], *symbol);
            }
        }
    }

    /// The settled display always spells the target value.
    #[test]
    fn settled_display_spells_the_value(value in any::<i64>(), prime in any::<i64>()) {
        let mut engine = Engine::new();
        settle(&mut engine, Some(prime));
        settle(&mut engine, Some(value));
        let text: String = engine
            .symbols()
            .iter()
            .map(|s| s.as_char())
            .collect::<String>()
            .trim_start()
            .to_string();
        prop_assert_eq!(text, value.to_string());
    }
}
