//! House — the fixed set of rooms a controller manages.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::{HomeError, ValidationError};
use crate::room::{Room, RoomNumber};

/// Largest house the controller accepts.
pub const MAX_ROOMS: usize = 10;

/// Range a room temperature is drawn from at initialization.
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 20..=30;

/// All rooms of the house, stored in room-number order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct House {
    rooms: Vec<Room>,
}

impl House {
    /// Create a house of `room_count` rooms with lights off, locks on, no
    /// motion and a temperature drawn from [`TEMPERATURE_RANGE`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeError::Validation`] when `room_count` is outside
    /// `1..=MAX_ROOMS`, or [`HomeError::Allocation`] when room storage
    /// cannot be reserved.
    pub fn initialize(room_count: i64, rng: &mut impl Rng) -> Result<Self, HomeError> {
        let count = usize::try_from(room_count)
            .ok()
            .filter(|count| (1..=MAX_ROOMS).contains(count))
            .ok_or(ValidationError::RoomCountOutOfRange {
                count: room_count,
                max: MAX_ROOMS,
            })?;

        let mut rooms = Vec::new();
        rooms.try_reserve_exact(count)?;
        rooms.extend((0..count).map(|index| {
            Room::new(
                RoomNumber::from_index(index),
                rng.gen_range(TEMPERATURE_RANGE),
            )
        }));

        Ok(Self { rooms })
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Resolve a user-supplied room number against this house.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RoomOutOfRange`] when `room` is outside
    /// `1..=room_count`.
    pub fn locate(&self, room: i64) -> Result<RoomNumber, ValidationError> {
        usize::try_from(room)
            .ok()
            .filter(|number| *number <= self.rooms.len())
            .and_then(RoomNumber::new)
            .ok_or(ValidationError::RoomOutOfRange {
                room,
                room_count: self.rooms.len(),
            })
    }

    /// Borrow a room.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RoomOutOfRange`] when `number` does not
    /// belong to this house.
    pub fn room(&self, number: RoomNumber) -> Result<&Room, ValidationError> {
        self.rooms
            .get(number.index())
            .ok_or_else(|| self.out_of_range(number))
    }

    /// Mutably borrow a room.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RoomOutOfRange`] when `number` does not
    /// belong to this house.
    pub fn room_mut(&mut self, number: RoomNumber) -> Result<&mut Room, ValidationError> {
        let err = self.out_of_range(number);
        self.rooms.get_mut(number.index()).ok_or(err)
    }

    /// Redraw every motion sensor as a fair coin flip.
    pub fn scan_motion(&mut self, rng: &mut impl Rng) {
        for room in &mut self.rooms {
            room.motion_detected = rng.gen_bool(0.5);
        }
    }

    #[must_use]
    pub fn all_lights_on(&self) -> bool {
        self.rooms.iter().all(|room| room.light_on)
    }

    #[must_use]
    pub fn any_unlocked(&self) -> bool {
        self.rooms.iter().any(|room| !room.locked)
    }

    pub fn lock_all(&mut self) {
        for room in &mut self.rooms {
            room.locked = true;
        }
    }

    fn out_of_range(&self, number: RoomNumber) -> ValidationError {
        ValidationError::RoomOutOfRange {
            room: i64::try_from(number.get()).unwrap_or(i64::MAX),
            room_count: self.rooms.len(),
        }
    }
}
