//! Auto-lock — counts consecutive cycles in which every room stayed locked.
//!
//! The rule watches lock state, not the motion sensors: any unlocked room
//! counts as activity and resets the streak.

use crate::house::House;

/// Number of consecutive fully-locked cycles that triggers a forced lock.
pub const AUTO_LOCK_THRESHOLD: u32 = 5;

/// Result of a single [`AutoLock::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoLockOutcome {
    /// A room was unlocked; the streak was reset.
    Reset,
    /// Every room was locked; the streak grew to the given length.
    Counted(u32),
    /// The threshold was reached; every room was locked and the streak reset.
    Engaged,
}

/// Streak counter for the auto-lock rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoLock {
    consecutive_locked_cycles: u32,
}

impl AutoLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current streak length.
    #[must_use]
    pub fn consecutive_locked_cycles(&self) -> u32 {
        self.consecutive_locked_cycles
    }

    /// Advance the counter by one cycle, locking the house once the
    /// threshold is reached.
    pub fn tick(&mut self, house: &mut House) -> AutoLockOutcome {
        if house.any_unlocked() {
            self.consecutive_locked_cycles = 0;
            return AutoLockOutcome::Reset;
        }

        self.consecutive_locked_cycles += 1;
        if self.consecutive_locked_cycles >= AUTO_LOCK_THRESHOLD {
            house.lock_all();
            self.consecutive_locked_cycles = 0;
            return AutoLockOutcome::Engaged;
        }

        AutoLockOutcome::Counted(self.consecutive_locked_cycles)
    }
}
