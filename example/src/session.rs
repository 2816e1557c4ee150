//! Text-driven session standing in for taps on the home screen.
use std::{fmt::Write as _, str::FromStr, sync::Arc};

use aurora_components::{
    calendar_date::{CalendarDate, ParseDateError},
    date_picker_input::{DatePickerInputState, DatePickerPhase, PickerPanelView},
    native_picker::NativePickerEvent,
};
use aurora_ui::{Color, PlatformFamily};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::home::{HomeViewModel, birth_date_args};

/// One user action on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Tap the date field.
    Toggle,
    /// The native picker reports a picked date.
    Pick(CalendarDate),
    /// The native picker is dismissed.
    Dismiss,
    /// Tap the confirm button of the staged panel.
    Confirm,
    /// Tap the cancel button of the staged panel.
    Cancel,
    /// Tap `+`.
    Increment,
    /// Tap `-`.
    Decrement,
    /// Tap `Reset`.
    Reset,
    /// Print the screen.
    Show,
    /// End the session.
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` needs a date argument (YYYY-MM-DD)")]
    MissingDate(&'static str),
    #[error(transparent)]
    InvalidDate(#[from] ParseDateError),
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default();
        let argument = words.next();

        let command = match name {
            "open" | "toggle" | "tap" => Command::Toggle,
            "pick" => {
                let date = argument.ok_or(CommandError::MissingDate("pick"))?;
                return Ok(Command::Pick(date.parse()?));
            }
            "dismiss" => Command::Dismiss,
            "confirm" => Command::Confirm,
            "cancel" => Command::Cancel,
            "inc" | "+" => Command::Increment,
            "dec" | "-" => Command::Decrement,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        match argument {
            Some(_) => Err(CommandError::UnexpectedArgument(command.name())),
            None => Ok(command),
        }
    }
}

impl Command {
    fn name(self) -> &'static str {
        match self {
            Command::Toggle => "toggle",
            Command::Pick(_) => "pick",
            Command::Dismiss => "dismiss",
            Command::Confirm => "confirm",
            Command::Cancel => "cancel",
            Command::Increment => "inc",
            Command::Decrement => "dec",
            Command::Reset => "reset",
            Command::Show => "show",
            Command::Quit => "quit",
        }
    }
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The home screen plus the interaction state of its date field.
pub struct Session {
    home: Arc<RwLock<HomeViewModel>>,
    picker: DatePickerInputState,
    accent: Option<Color>,
}

impl Session {
    pub fn new(platform: PlatformFamily, initial: Option<CalendarDate>) -> Self {
        Self {
            home: Arc::new(RwLock::new(HomeViewModel::new(initial))),
            picker: DatePickerInputState::new(platform),
            accent: None,
        }
    }

    /// Overrides the confirm button background.
    pub fn with_accent(mut self, accent: Option<Color>) -> Self {
        self.accent = accent;
        self
    }

    pub fn home(&self) -> HomeViewModel {
        self.home.read().clone()
    }

    pub fn phase(&self) -> DatePickerPhase {
        self.picker.phase(&birth_date_args(&self.home, self.accent))
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        debug!(?command, "applying command");
        // Rebuilt per command so handlers see the latest host value.
        let args = birth_date_args(&self.home, self.accent);
        match command {
            Command::Toggle => self.picker.toggle(&args),
            Command::Pick(date) => self
                .picker
                .handle_picker_event(&args, NativePickerEvent::set(date)),
            Command::Dismiss => self
                .picker
                .handle_picker_event(&args, NativePickerEvent::dismissed()),
            Command::Confirm => self.picker.confirm(&args),
            Command::Cancel => self.picker.cancel(&args),
            Command::Increment => self.home.write().increment_counter(),
            Command::Decrement => self.home.write().decrement_counter(),
            Command::Reset => self.home.write().reset_counter(),
            Command::Show => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Renders the screen as plain text.
    pub fn render(&self) -> String {
        let args = birth_date_args(&self.home, self.accent);
        let view = self.picker.view(&args);
        let home = self.home.read();

        let mut out = String::new();
        let _ = writeln!(out, "{}", home.greeting());
        let _ = writeln!(out, "{}: [{}]", view.label, view.field_text);
        if let Some((message, _)) = &view.error {
            let _ = writeln!(out, "  ! {message}");
        }
        match &view.picker {
            None => {}
            Some(PickerPanelView::Native(props)) => {
                let _ = writeln!(
                    out,
                    "  picker ({}): {}",
                    props.display.as_str(),
                    props.value
                );
            }
            Some(PickerPanelView::Staged {
                picker,
                cancel,
                confirm,
                ..
            }) => {
                let _ = writeln!(
                    out,
                    "  picker ({}): {}  [{}] [{}]",
                    picker.display.as_str(),
                    picker.value,
                    cancel.text,
                    confirm.text
                );
            }
        }
        let _ = writeln!(out, "Contador: {}", home.counter());
        out
    }
}

#[cfg(test)]
mod tests {
    use aurora_components::{
        calendar_date::{CalendarDate, ParseDateError},
        date_picker_input::DatePickerPhase,
    };
    use aurora_ui::PlatformFamily;
    use rstest::rstest;

    use super::{Command, CommandError, Flow, Session};

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[rstest]
    #[case("open", Command::Toggle)]
    #[case("  pick 2025-03-10 ", Command::Pick(date(2025, 3, 10)))]
    #[case("+", Command::Increment)]
    #[case("quit", Command::Quit)]
    fn parses_commands(#[case] input: &str, #[case] expected: Command) {
        assert_eq!(input.parse::<Command>(), Ok(expected));
    }

    #[rstest]
    #[case("jump", CommandError::Unknown("jump".into()))]
    #[case("pick", CommandError::MissingDate("pick"))]
    #[case(
        "pick 2025-02-30",
        CommandError::InvalidDate(ParseDateError::OutOfRange("2025-02-30".into()))
    )]
    #[case("confirm now", CommandError::UnexpectedArgument("confirm"))]
    fn rejects_bad_commands(#[case] input: &str, #[case] expected: CommandError) {
        assert_eq!(input.parse::<Command>(), Err(expected));
    }

    #[test]
    fn ios_session_confirms_staged_date() {
        let mut session = Session::new(PlatformFamily::Ios, None);
        session.apply(Command::Toggle);
        session.apply(Command::Pick(date(2025, 3, 10)));
        assert!(session.render().contains("[Cancelar] [Confirmar]"));
        assert_eq!(session.home().selected_date(), None);

        session.apply(Command::Confirm);
        assert_eq!(session.home().selected_date(), Some(date(2025, 3, 10)));
        assert_eq!(session.phase(), DatePickerPhase::Closed);
        assert!(session.render().contains("Fecha de nacimiento: [10/03/2025]"));
    }

    #[test]
    fn android_session_applies_pick_immediately() {
        let mut session = Session::new(PlatformFamily::Android, Some(date(2025, 1, 1)));
        session.apply(Command::Toggle);
        assert_eq!(session.phase(), DatePickerPhase::OpenImmediate);
        session.apply(Command::Pick(date(2024, 1, 5)));
        assert_eq!(session.home().selected_date(), Some(date(2024, 1, 5)));
        assert_eq!(session.phase(), DatePickerPhase::Closed);
    }

    #[test]
    fn counter_commands_update_screen() {
        let mut session = Session::new(PlatformFamily::Android, None);
        session.apply(Command::Increment);
        session.apply(Command::Increment);
        session.apply(Command::Decrement);
        let screen = session.render();
        assert!(screen.contains("Contador: 1"));
        assert!(screen.contains("[Selecciona una fecha]"));

        session.apply(Command::Reset);
        assert_eq!(session.home().counter(), 0);
        assert_eq!(session.apply(Command::Quit), Flow::Quit);
    }
}
