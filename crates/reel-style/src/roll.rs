#![forbid(unsafe_code)]

//! Roll transition configuration and CSS emission.

use crate::scale::offset_percent;
use reel_core::Symbol;
use std::fmt::Write as _;
use std::time::Duration;

/// Default roll duration: one second.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(1);

/// Visual configuration of the roll transition.
///
/// The duration is the single tunable: it is emitted as the
/// `--roll-duration` custom property so hosts can still override it per
/// element without regenerating the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollStyle {
    duration: Duration,
}

impl Default for RollStyle {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
        }
    }
}

impl RollStyle {
    /// Create a style with the default one-second roll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the roll transition duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// The configured transition duration.
    #[must_use]
    pub fn roll_duration(&self) -> Duration {
        self.duration
    }

    /// Emit the style block: slot layout, the hidden value overlay, the
    /// scale transition, and one offset rule per symbol.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = String::with_capacity(1024);
        css.push_str(":host {\n");
        let _ = writeln!(css, "  --roll-duration: {};", css_duration(self.duration));
        css.push_str("}\n");
        css.push_str(
            ".digit {\n\
             \x20 overflow: hidden;\n\
             \x20 display: inline-flex;\n\
             \x20 position: relative;\n\
             \x20 text-align: center;\n\
             \x20 justify-content: center;\n\
             }\n\
             .value {\n\
             \x20 color: transparent;\n\
             \x20 position: relative;\n\
             }\n\
             .scale {\n\
             \x20 user-select: none;\n\
             \x20 position: absolute;\n\
             \x20 left: 50%;\n\
             \x20 right: 50%;\n\
             \x20 display: inline-flex;\n\
             \x20 align-items: center;\n\
             \x20 justify-content: center;\n\
             \x20 flex-direction: column;\n\
             \x20 transition: transform var(--roll-duration);\n\
             }\n\
             .scale span:last-child {\n\
             \x20 position: absolute;\n\
             \x20 bottom: -10%;\n\
             }\n",
        );

        let mut rule = |symbol: Symbol| {
            let _ = writeln!(
                css,
                ".digit[data-value=\"{}\"] .scale {{ transform: translateY({}%); }}",
                symbol.as_char(),
                offset_percent(symbol),
            );
        };
        rule(Symbol::Blank);
        for symbol in Symbol::SCALE {
            rule(symbol);
        }
        css
    }
}

/// Render a duration the way CSS expects it: whole seconds as `Ns`,
/// anything finer as integer milliseconds.
fn css_duration(duration: Duration) -> String {
    if duration.subsec_millis() == 0 && duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}
