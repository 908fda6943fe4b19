#![forbid(unsafe_code)]

//! Host capability flags.
//!
//! A host declares what it can provide; features that need an absent
//! capability degrade instead of crashing. A host without a viewport
//! observer still renders values, it just never replays or resets.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Capabilities a host environment provides.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HostCaps: u8 {
        /// No capabilities; value rendering only.
        const NONE     = 0b00;
        /// An intersection/visibility observer is available.
        const VIEWPORT = 0b01;
        /// A timer for deferred fill passes is available.
        const TIMER    = 0b10;
    }
}

impl Default for HostCaps {
    fn default() -> Self {
        Self::NONE
    }
}

/// A required capability is absent.
///
/// Fatal only for the feature that needed it; callers are expected to
/// continue without that feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityError {
    /// The capabilities that were required but missing.
    pub missing: HostCaps,
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host capability unavailable: {:?}", self.missing)
    }
}

impl std::error::Error for CapabilityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_combine() {
        let caps = HostCaps::VIEWPORT | HostCaps::TIMER;
        assert!(caps.contains(HostCaps::VIEWPORT));
        assert!(caps.contains(HostCaps::TIMER));
    }

    #[test]
    fn default_is_none() {
        assert_eq!(HostCaps::default(), HostCaps::NONE);
        assert!(!HostCaps::default().contains(HostCaps::VIEWPORT));
    }

    #[test]
    fn error_names_the_missing_capability() {
        let err = CapabilityError {
            missing: HostCaps::VIEWPORT,
        };
        assert!(err.to_string().contains("VIEWPORT"));
    }
}
