//! Console session — the read-eval-print loop behind the menu.
//!
//! Generic over its input and output so tests can script a whole run
//! against in-memory buffers.

use std::io::{self, BufRead, Write};

use rand::Rng;

use homesim_app::services::house_service::HouseService;
use homesim_domain::error::HomeError;
use homesim_domain::notice::Notice;

use crate::menu::{self, InputError, MenuChoice};

/// Errors that end a session with a failure exit code.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The house could not be created (bad room count, allocation failure).
    #[error("failed to initialize the house")]
    Home(#[from] HomeError),
    /// The room count was not a number.
    #[error("failed to read the number of rooms")]
    Input(#[from] InputError),
    /// Input ended before the room count was entered.
    #[error("input closed before the number of rooms was entered")]
    NoRoomCount,
    /// Reading from or writing to the console failed.
    #[error("console I/O failed")]
    Io(#[from] io::Error),
}

/// Whether the loop should keep going after an action.
enum Flow {
    Continue,
    InputClosed,
}

/// A single interactive run of the controller.
pub struct Session<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prompt for the room count, then serve menu actions until the user
    /// exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the room count is missing or invalid,
    /// room storage cannot be reserved, or the console fails. Every other
    /// bad input is reported to the user and the loop continues.
    pub fn run<R: Rng>(mut self, rng: R) -> Result<(), SessionError> {
        let mut service = self.start(rng)?;

        loop {
            menu::render(&mut self.output)?;
            let Some(choice) = self.prompt_number("Enter your choice: ")? else {
                tracing::info!("input closed, leaving menu");
                return Ok(());
            };

            match choice.and_then(MenuChoice::try_from) {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "\nExiting...")?;
                    self.output.flush()?;
                    return Ok(());
                }
                Ok(choice) => {
                    if let Flow::InputClosed = self.dispatch(&mut service, choice)? {
                        tracing::info!("input closed, leaving menu");
                        return Ok(());
                    }
                }
                Err(err) => {
                    tracing::debug!(?err, "rejected menu input");
                    writeln!(self.output, "{err}")?;
                }
            }

            for notice in service.end_cycle() {
                self.print_rule_notice(&notice)?;
            }
        }
    }

    fn start<R: Rng>(&mut self, rng: R) -> Result<HouseService<R>, SessionError> {
        let room_count = match self.prompt_number("Enter number of rooms: ")? {
            Some(Ok(count)) => count,
            Some(Err(err)) => {
                writeln!(self.output, "{err}")?;
                return Err(err.into());
            }
            None => return Err(SessionError::NoRoomCount),
        };

        let service = match HouseService::initialize(room_count, rng) {
            Ok(service) => service,
            Err(err) => {
                writeln!(self.output, "{err}")?;
                return Err(err.into());
            }
        };

        let initialized = Notice::SystemInitialized {
            room_count: service.house().room_count(),
        };
        writeln!(self.output, "\n{initialized}")?;
        Ok(service)
    }

    fn dispatch<R: Rng>(
        &mut self,
        service: &mut HouseService<R>,
        choice: MenuChoice,
    ) -> Result<Flow, SessionError> {
        match choice {
            MenuChoice::ToggleLight | MenuChoice::ReadTemperature | MenuChoice::ToggleLock => {
                let Some(room) = self.prompt_room(choice, service.house().room_count())? else {
                    return Ok(Flow::InputClosed);
                };
                let room = match room {
                    Ok(room) => room,
                    Err(err) => {
                        writeln!(self.output, "{err}")?;
                        return Ok(Flow::Continue);
                    }
                };
                let result = match choice {
                    MenuChoice::ToggleLight => service.toggle_light(room).map(|n| vec![n]),
                    MenuChoice::ToggleLock => service.toggle_lock(room).map(|n| vec![n]),
                    _ => service.read_temperature(room),
                };
                self.print_result(result)?;
            }
            MenuChoice::CheckMotion => {
                writeln!(self.output, "\nMotion Sensor Status:")?;
                self.print_notices(&service.scan_motion())?;
            }
            MenuChoice::Summary => {
                writeln!(self.output, "\n===== House Status =====")?;
                self.print_notices(&service.summarize())?;
            }
            MenuChoice::Exit => {}
        }
        Ok(Flow::Continue)
    }

    fn prompt_room(
        &mut self,
        choice: MenuChoice,
        room_count: usize,
    ) -> io::Result<Option<Result<i64, InputError>>> {
        let action = choice.room_action().unwrap_or("select");
        self.prompt_number(&format!(
            "Enter room number to {action} (1-{room_count}): "
        ))
    }

    /// Write `prompt`, then read one line. `None` means input is closed.
    fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<Result<i64, InputError>>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(menu::parse_number(&line)))
    }

    fn print_result(&mut self, result: Result<Vec<Notice>, HomeError>) -> io::Result<()> {
        match result {
            Ok(notices) => self.print_notices(&notices),
            Err(err) => {
                tracing::debug!(%err, "rejected room action");
                writeln!(self.output, "{err}")
            }
        }
    }

    fn print_notices(&mut self, notices: &[Notice]) -> io::Result<()> {
        for notice in notices {
            writeln!(self.output, "{notice}")?;
        }
        Ok(())
    }

    fn print_rule_notice(&mut self, notice: &Notice) -> io::Result<()> {
        if let Notice::AutoLocked = notice {
            writeln!(self.output)?;
        }
        writeln!(self.output, "{notice}")
    }
}
