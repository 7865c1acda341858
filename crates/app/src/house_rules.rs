//! House rules — derived-state checks that run once per menu cycle.
//!
//! After every user action the rules run in a fixed order: the auto-lock
//! tick first, then the energy check. Neither is invoked directly by the
//! user.

use homesim_domain::auto_lock::{AutoLock, AutoLockOutcome};
use homesim_domain::house::House;
use homesim_domain::notice::Notice;

/// Per-cycle rule evaluator holding the auto-lock streak.
#[derive(Debug, Default)]
pub struct HouseRules {
    auto_lock: AutoLock,
}

impl HouseRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the current fully-locked streak.
    #[must_use]
    pub fn consecutive_locked_cycles(&self) -> u32 {
        self.auto_lock.consecutive_locked_cycles()
    }

    /// Run every rule for one cycle and return the notices they raised.
    pub fn end_cycle(&mut self, house: &mut House) -> Vec<Notice> {
        let mut notices = Vec::new();
        notices.extend(self.auto_lock_tick(house));
        notices.extend(Self::energy_check(house));
        notices
    }

    /// Advance the auto-lock streak, locking every room at the threshold.
    pub fn auto_lock_tick(&mut self, house: &mut House) -> Option<Notice> {
        match self.auto_lock.tick(house) {
            AutoLockOutcome::Engaged => {
                tracing::info!(rooms = house.room_count(), "auto-lock engaged");
                Some(Notice::AutoLocked)
            }
            AutoLockOutcome::Counted(cycles) => {
                tracing::debug!(cycles, "fully-locked cycle counted");
                None
            }
            AutoLockOutcome::Reset => {
                tracing::trace!("unlocked room seen, auto-lock streak reset");
                None
            }
        }
    }

    /// Warn when every light in the house is on. Never mutates.
    #[must_use]
    pub fn energy_check(house: &House) -> Option<Notice> {
        house.all_lights_on().then(|| {
            tracing::debug!("all lights on");
            Notice::EnergyWarning
        })
    }
}
