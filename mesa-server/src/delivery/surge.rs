//! Rush-Mode State
//!
//! Process-wide demand-surge flag for delivery pricing.

use std::sync::atomic::{AtomicBool, Ordering};

/// Multiplier applied to every zone fee while rush mode is active
pub const RUSH_MULTIPLIER: f64 = 1.5;

/// Injectable holder for the rush-mode flag.
///
/// Deliberately best-effort: a relaxed atomic with no lock, no
/// persistence, and no ordering guarantee between a concurrent quote
/// read and an admin toggle. Near-simultaneous toggles are
/// last-write-wins. The flag is a coarse promotional switch, not a
/// ledger, so quotes may observe either side of an in-flight toggle.
/// Restarting the process resets it to off.
#[derive(Debug, Default)]
pub struct RushState {
    active: AtomicBool,
}

impl RushState {
    /// Create with rush mode off
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether rush mode is currently active
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Set the flag and return the new value.
    ///
    /// Idempotent: setting the current value again is observably a
    /// no-op.
    pub fn set(&self, active: bool) -> bool {
        self.active.store(active, Ordering::Relaxed);
        active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive() {
        assert!(!RushState::new().is_active());
    }

    #[test]
    fn test_set_and_read() {
        let rush = RushState::new();
        assert!(rush.set(true));
        assert!(rush.is_active());
        assert!(!rush.set(false));
        assert!(!rush.is_active());
    }

    #[test]
    fn test_idempotent_toggle() {
        let rush = RushState::new();
        rush.set(true);
        rush.set(true);
        assert!(rush.is_active());
        rush.set(false);
        rush.set(false);
        assert!(!rush.is_active());
    }
}
