//! Menu — the numbered options shown on every cycle and parsing of the
//! numbers typed back.

use std::fmt;
use std::io::{self, Write};

/// One entry of the controller menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ToggleLight,
    ReadTemperature,
    CheckMotion,
    ToggleLock,
    Summary,
    Exit,
}

impl MenuChoice {
    /// Every option in display order.
    pub const ALL: [Self; 6] = [
        Self::ToggleLight,
        Self::ReadTemperature,
        Self::CheckMotion,
        Self::ToggleLock,
        Self::Summary,
        Self::Exit,
    ];

    /// Number the user types to select this option.
    #[must_use]
    pub fn number(self) -> i64 {
        match self {
            Self::ToggleLight => 1,
            Self::ReadTemperature => 2,
            Self::CheckMotion => 3,
            Self::ToggleLock => 4,
            Self::Summary => 5,
            Self::Exit => 6,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ToggleLight => "Toggle Light",
            Self::ReadTemperature => "Read Temperature",
            Self::CheckMotion => "Check Motion Sensor",
            Self::ToggleLock => "Lock/Unlock Security System",
            Self::Summary => "House Status Summary",
            Self::Exit => "Exit",
        }
    }

    /// What the room prompt asks for, for options that target one room.
    #[must_use]
    pub fn room_action(self) -> Option<&'static str> {
        match self {
            Self::ToggleLight => Some("toggle light"),
            Self::ReadTemperature => Some("read temperature"),
            Self::ToggleLock => Some("lock/unlock"),
            Self::CheckMotion | Self::Summary | Self::Exit => None,
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = InputError;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|option| option.number() == choice)
            .ok_or(InputError::UnrecognizedChoice { choice })
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Console input that could not be turned into a menu action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid choice! Try again.")]
    UnrecognizedChoice { choice: i64 },

    #[error("Invalid input! Please enter a whole number.")]
    NotANumber { input: String },
}

/// Parse one line of console input as an integer.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] when the trimmed line is not an integer.
pub fn parse_number(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })
}

/// Write the full menu, preceded by a blank line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n===== Smart Home Menu =====")?;
    for option in MenuChoice::ALL {
        writeln!(out, "{option}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_numbers_one_to_six_in_order() {
        let parsed: Vec<MenuChoice> = (1..=6)
            .map(|n| MenuChoice::try_from(n).unwrap())
            .collect();
        assert_eq!(parsed, MenuChoice::ALL.to_vec());
    }

    #[test]
    fn should_reject_unknown_choice() {
        for choice in [0, 7, -1] {
            assert_eq!(
                MenuChoice::try_from(choice),
                Err(InputError::UnrecognizedChoice { choice })
            );
        }
    }

    #[test]
    fn should_parse_number_with_surrounding_whitespace() {
        assert_eq!(parse_number("  4\n"), Ok(4));
        assert_eq!(parse_number("-2"), Ok(-2));
    }

    #[test]
    fn should_reject_non_numeric_input() {
        assert_eq!(
            parse_number("kitchen\n"),
            Err(InputError::NotANumber {
                input: "kitchen".to_string()
            })
        );
    }

    #[test]
    fn should_prompt_for_room_only_on_room_actions() {
        assert_eq!(MenuChoice::ToggleLight.room_action(), Some("toggle light"));
        assert_eq!(MenuChoice::ToggleLock.room_action(), Some("lock/unlock"));
        assert_eq!(MenuChoice::CheckMotion.room_action(), None);
        assert_eq!(MenuChoice::Exit.room_action(), None);
    }

    #[test]
    fn should_render_menu() {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\n===== Smart Home Menu =====\n\
             1. Toggle Light\n\
             2. Read Temperature\n\
             3. Check Motion Sensor\n\
             4. Lock/Unlock Security System\n\
             5. House Status Summary\n\
             6. Exit\n"
        );
    }
}
