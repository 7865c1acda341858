//! Room — one unit of house state, addressed by a 1-based [`RoomNumber`].

use std::fmt;

/// Temperatures strictly above this value raise a warning.
pub const HIGH_TEMPERATURE_C: i32 = 30;

/// 1-based position of a room inside its house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomNumber(usize);

impl RoomNumber {
    /// Wrap a 1-based room number. Returns `None` for zero.
    #[must_use]
    pub fn new(number: usize) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// Build the number of the room stored at `index` (0-based).
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// 0-based storage index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 - 1
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything the controller tracks about a single room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub number: RoomNumber,
    pub light_on: bool,
    /// Fixed at initialization.
    pub temperature_c: i32,
    pub motion_detected: bool,
    pub locked: bool,
}

impl Room {
    /// A room in its power-on state: light off, no motion, locked.
    #[must_use]
    pub fn new(number: RoomNumber, temperature_c: i32) -> Self {
        Self {
            number,
            light_on: false,
            temperature_c,
            motion_detected: false,
            locked: true,
        }
    }

    /// Flip the light and return its new state.
    pub fn toggle_light(&mut self) -> bool {
        self.light_on = !self.light_on;
        self.light_on
    }

    /// Flip the lock and return its new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    #[must_use]
    pub fn is_too_hot(&self) -> bool {
        self.temperature_c > HIGH_TEMPERATURE_C
    }
}

/// One status line: `Room 1: Light OFF, Temp 24°C, No Motion, Locked`.
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {}: Light {}, Temp {}\u{b0}C, {}, {}",
            self.number,
            light_label(self.light_on),
            self.temperature_c,
            motion_label(self.motion_detected),
            lock_label(self.locked),
        )
    }
}

pub(crate) fn light_label(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

pub(crate) fn motion_label(detected: bool) -> &'static str {
    if detected {
        "Motion Detected"
    } else {
        "No Motion"
    }
}

pub(crate) fn lock_label(locked: bool) -> &'static str {
    if locked { "Locked" } else { "Unlocked" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first() -> RoomNumber {
        RoomNumber::new(1).unwrap()
    }

    #[test]
    fn should_reject_room_number_zero() {
        assert!(RoomNumber::new(0).is_none());
    }

    #[test]
    fn should_map_room_number_to_zero_based_index() {
        let number = RoomNumber::new(3).unwrap();
        assert_eq!(number.index(), 2);
        assert_eq!(RoomNumber::from_index(2), number);
    }

    #[test]
    fn should_start_dark_still_and_locked() {
        let room = Room::new(first(), 22);
        assert!(!room.light_on);
        assert!(!room.motion_detected);
        assert!(room.locked);
        assert_eq!(room.temperature_c, 22);
    }

    #[test]
    fn should_restore_light_when_toggled_twice() {
        let mut room = Room::new(first(), 22);
        assert!(room.toggle_light());
        assert!(!room.toggle_light());
        assert!(!room.light_on);
    }

    #[test]
    fn should_unlock_when_lock_toggled_once() {
        let mut room = Room::new(first(), 22);
        assert!(!room.toggle_lock());
        assert!(!room.locked);
    }

    #[test]
    fn should_flag_temperature_only_above_threshold() {
        assert!(!Room::new(first(), 30).is_too_hot());
        assert!(Room::new(first(), 31).is_too_hot());
    }

    #[test]
    fn should_display_status_line() {
        let mut room = Room::new(RoomNumber::new(2).unwrap(), 24);
        room.light_on = true;
        room.motion_detected = true;
        room.locked = false;
        assert_eq!(
            room.to_string(),
            "Room 2: Light ON, Temp 24\u{b0}C, Motion Detected, Unlocked"
        );
    }
}
