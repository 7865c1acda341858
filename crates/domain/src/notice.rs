//! Notice — a user-facing record of something the controller did or saw.
//!
//! Operations return notices instead of printing, so the caller decides
//! where they go.

use std::fmt;

use crate::room::{Room, RoomNumber, light_label, lock_label, motion_label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SystemInitialized { room_count: usize },
    LightToggled { room: RoomNumber, on: bool },
    LockToggled { room: RoomNumber, locked: bool },
    TemperatureRead { room: RoomNumber, celsius: i32 },
    HighTemperature { room: RoomNumber },
    MotionScanned { room: RoomNumber, detected: bool },
    /// Full status line for one room.
    Status(Room),
    AutoLocked,
    /// Every light in the house is on.
    EnergyWarning,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SystemInitialized { .. } => f.write_str("System initialized."),
            Self::LightToggled { room, on } => {
                write!(f, "Light in Room {room} is now {}.", light_label(*on))
            }
            Self::LockToggled { room, locked } => {
                write!(f, "Room {room} security is now {}.", lock_label(*locked))
            }
            Self::TemperatureRead { room, celsius } => {
                write!(f, "Room {room} temperature: {celsius}\u{b0}C")
            }
            Self::HighTemperature { room } => write!(
                f,
                "\u{1f6a8} WARNING: High temperature in Room {room}! Take action."
            ),
            Self::MotionScanned { room, detected } => {
                write!(f, "Room {room}: {}", motion_label(*detected))
            }
            Self::Status(room) => room.fmt(f),
            Self::AutoLocked => {
                f.write_str("\u{1f512} All rooms locked automatically due to inactivity.")
            }
            Self::EnergyWarning => f.write_str(
                "\u{26a0} All lights are ON! Consider turning some off to save energy.",
            ),
        }
    }
}
