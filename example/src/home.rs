//! Home screen view-model: greeting, counter and birth date field.
use std::sync::Arc;

use aurora_components::{
    calendar_date::CalendarDate,
    date_picker_input::{DatePickerColors, DatePickerInputArgs, DatePickerTexts},
};
use aurora_ui::Color;
use parking_lot::RwLock;
use tracing::info;

/// Greeting shown at the top of the home screen.
pub const GREETING: &str = "¡Bienvenido a Aurora Mobile!";

// Light palette entries the home screen hands to its date field.
const TEXT: Color = Color::from_hex(0x11181C);
const PLACEHOLDER: Color = Color::from_hex(0x9CA3AF);
const ICON: Color = Color::from_hex(0x687076);
const INPUT_BACKGROUND: Color = Color::from_hex(0xF9FAFB);
const INPUT_BORDER: Color = Color::from_hex(0xD1D5DB);
const ERROR: Color = Color::from_hex(0xEF4444);
const PRIMARY: Color = Color::from_hex(0x3B82F6);
const CARD: Color = Color::from_hex(0xFFFFFF);
const BORDER: Color = Color::from_hex(0xE5E7EB);

/// State behind the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewModel {
    greeting: String,
    counter: i64,
    selected_date: Option<CalendarDate>,
}

impl Default for HomeViewModel {
    fn default() -> Self {
        Self {
            greeting: GREETING.to_string(),
            counter: 0,
            selected_date: None,
        }
    }
}

impl HomeViewModel {
    /// Creates a view-model with an optional preselected date.
    pub fn new(selected_date: Option<CalendarDate>) -> Self {
        Self {
            selected_date,
            ..Self::default()
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected_date
    }

    pub fn increment_counter(&mut self) {
        self.counter += 1;
    }

    pub fn decrement_counter(&mut self) {
        self.counter -= 1;
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    pub fn set_selected_date(&mut self, date: CalendarDate) {
        self.selected_date = Some(date);
    }
}

/// Builds the birth date field args from the current view-model.
///
/// `accent` replaces the confirm button background when given.
pub fn birth_date_args(
    home: &Arc<RwLock<HomeViewModel>>,
    accent: Option<Color>,
) -> DatePickerInputArgs {
    let selected_date = home.read().selected_date();
    let sink = home.clone();

    DatePickerInputArgs::new("Fecha de nacimiento", "Selecciona una fecha")
        .value(selected_date)
        .on_change(move |date| {
            info!(%date, "birth date changed");
            sink.write().set_selected_date(date);
        })
        .on_blur(|| info!("birth date field lost focus"))
        .colors(
            DatePickerColors::default()
                .label(TEXT)
                .text(TEXT)
                .placeholder(PLACEHOLDER)
                .icon(ICON)
                .input_background(INPUT_BACKGROUND)
                .input_border(INPUT_BORDER)
                .error(ERROR)
                .confirm_button_background(accent.unwrap_or(PRIMARY))
                .picker_background(CARD)
                .picker_border(BORDER),
        )
        .texts(
            DatePickerTexts::default()
                .cancel("Cancelar")
                .confirm("Confirmar"),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aurora_components::calendar_date::CalendarDate;
    use parking_lot::RwLock;

    use super::{GREETING, HomeViewModel, PRIMARY, birth_date_args};

    #[test]
    fn counter_moves_both_ways_and_resets() {
        let mut home = HomeViewModel::default();
        home.increment_counter();
        home.increment_counter();
        home.decrement_counter();
        assert_eq!(home.counter(), 1);

        home.decrement_counter();
        home.decrement_counter();
        assert_eq!(home.counter(), -1);

        home.reset_counter();
        assert_eq!(home.counter(), 0);
        assert_eq!(home.greeting(), GREETING);
    }

    #[test]
    fn field_commits_into_view_model() {
        let home = Arc::new(RwLock::new(HomeViewModel::new(None)));
        let args = birth_date_args(&home, None);
        assert_eq!(args.value, None);
        assert_eq!(args.colors.confirm_button_background, Some(PRIMARY));

        let date = CalendarDate::new(1990, 7, 14).unwrap();
        args.on_change.call(date);
        assert_eq!(home.read().selected_date(), Some(date));
        assert_eq!(birth_date_args(&home, None).value, Some(date));
    }
}
