//! House service — the use-cases behind each menu option.

use rand::Rng;

use homesim_domain::error::HomeError;
use homesim_domain::house::House;
use homesim_domain::notice::Notice;

use crate::house_rules::HouseRules;

/// Application service owning the house, its rules, and the random source
/// used for temperatures and motion draws.
pub struct HouseService<R> {
    house: House,
    rules: HouseRules,
    rng: R,
}

impl<R: Rng> HouseService<R> {
    /// Build a house of `room_count` rooms, drawing temperatures from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `room_count` is outside
    /// `1..=MAX_ROOMS`, or [`HomeError::Allocation`] when room storage
    /// cannot be reserved.
    #[tracing::instrument(skip(rng))]
    pub fn initialize(room_count: i64, mut rng: R) -> Result<Self, HomeError> {
        let house = House::initialize(room_count, &mut rng)?;
        tracing::info!(rooms = house.room_count(), "house initialized");
        Ok(Self {
            house,
            rules: HouseRules::new(),
            rng,
        })
    }

    #[must_use]
    pub fn house(&self) -> &House {
        &self.house
    }

    /// Length of the current fully-locked streak.
    #[must_use]
    pub fn consecutive_locked_cycles(&self) -> u32 {
        self.rules.consecutive_locked_cycles()
    }

    /// Flip the light of a room.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `room` is outside
    /// `1..=room_count`; the house is left untouched.
    #[tracing::instrument(skip(self))]
    pub fn toggle_light(&mut self, room: i64) -> Result<Notice, HomeError> {
        let number = self.house.locate(room)?;
        let on = self.house.room_mut(number)?.toggle_light();
        Ok(Notice::LightToggled { room: number, on })
    }

    /// Flip the lock of a room.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `room` is outside
    /// `1..=room_count`; the house is left untouched.
    #[tracing::instrument(skip(self))]
    pub fn toggle_lock(&mut self, room: i64) -> Result<Notice, HomeError> {
        let number = self.house.locate(room)?;
        let locked = self.house.room_mut(number)?.toggle_lock();
        Ok(Notice::LockToggled {
            room: number,
            locked,
        })
    }

    /// Report the stored temperature of a room, followed by a warning when
    /// it is above the high-temperature threshold.
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `room` is outside
    /// `1..=room_count`.
    #[tracing::instrument(skip(self))]
    pub fn read_temperature(&self, room: i64) -> Result<Vec<Notice>, HomeError> {
        let number = self.house.locate(room)?;
        let room = self.house.room(number)?;

        let mut notices = vec![Notice::TemperatureRead {
            room: number,
            celsius: room.temperature_c,
        }];
        if room.is_too_hot() {
            tracing::warn!(room = %number, celsius = room.temperature_c, "high temperature");
            notices.push(Notice::HighTemperature { room: number });
        }
        Ok(notices)
    }

    /// Redraw every motion sensor and report each room's result.
    #[tracing::instrument(skip(self))]
    pub fn scan_motion(&mut self) -> Vec<Notice> {
        self.house.scan_motion(&mut self.rng);
        self.house
            .rooms()
            .iter()
            .map(|room| Notice::MotionScanned {
                room: room.number,
                detected: room.motion_detected,
            })
            .collect()
    }

    /// One status line per room. Never mutates.
    #[must_use]
    pub fn summarize(&self) -> Vec<Notice> {
        self.house
            .rooms()
            .iter()
            .cloned()
            .map(Notice::Status)
            .collect()
    }

    /// Run the per-cycle rules; call once after every menu action.
    pub fn end_cycle(&mut self) -> Vec<Notice> {
        self.rules.end_cycle(&mut self.house)
    }
}
