//! Date input field backed by the platform's native date picker.
//!
//! ## Usage
//!
//! Use in forms that need a single calendar date. The field shows the
//! formatted value or a placeholder and opens the native picker on tap.
//!
//! Android-style platforms apply a picked date immediately and close. iOS
//! stages changes until the user confirms or cancels, so the host's value is
//! only written on confirm.
//!
//! The host owns the selected value. [`DatePickerInputState`] holds only what
//! the field needs between events: the private visibility flag and the staged
//! date. Every handler takes the current [`DatePickerInputArgs`], so the state
//! always reads the host's latest value and visibility.
use aurora_ui::{Callback, CallbackWith, Color, PlatformFamily};
use derive_setters::Setters;
use tracing::{debug, warn};

use crate::{
    calendar_date::CalendarDate,
    native_picker::{
        NativePickerEvent, NativePickerEventKind, NativePickerProps, PickerDisplay, PickerMode,
    },
};

/// Border width of the field in its normal state.
pub const INPUT_BORDER_WIDTH: f32 = 1.0;
/// Border width of the field while it shows an error.
pub const ERROR_BORDER_WIDTH: f32 = 2.0;

/// How picker changes reach the host value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPolicy {
    /// Every picked date is committed at once and the picker closes.
    ImmediateApply,
    /// Picked dates are staged until the user confirms or cancels.
    StagedConfirm,
}

impl PickerPolicy {
    /// Returns the policy native to `family`.
    pub const fn for_platform(family: PlatformFamily) -> Self {
        match family {
            PlatformFamily::Android => PickerPolicy::ImmediateApply,
            PlatformFamily::Ios => PickerPolicy::StagedConfirm,
        }
    }
}

/// Interaction phase of a date picker input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerPhase {
    /// The picker is not presented.
    Closed,
    /// The picker is presented and commits on the first pick.
    OpenImmediate,
    /// The picker is presented and stages picks until confirm or cancel.
    OpenStaged,
}

/// Default palette and texts of the date picker input.
pub struct DatePickerDefaults;

impl DatePickerDefaults {
    /// Label text color.
    pub const LABEL: Color = Color::from_hex(0x1F2937);
    /// Value text color.
    pub const TEXT: Color = Color::from_hex(0x1F2937);
    /// Placeholder text color.
    pub const PLACEHOLDER: Color = Color::from_hex(0x9CA3AF);
    /// Calendar icon color.
    pub const ICON: Color = Color::from_hex(0x9CA3AF);
    /// Field background.
    pub const INPUT_BACKGROUND: Color = Color::from_hex(0xF9FAFB);
    /// Field border.
    pub const INPUT_BORDER: Color = Color::from_hex(0xE5E7EB);
    /// Error border and message color.
    pub const ERROR: Color = Color::from_hex(0xEF4444);
    /// Cancel button background.
    pub const CANCEL_BUTTON_BACKGROUND: Color = Color::from_hex(0xE5E7EB);
    /// Cancel button text.
    pub const CANCEL_BUTTON_TEXT: Color = Color::from_hex(0x1F2937);
    /// Confirm button background.
    pub const CONFIRM_BUTTON_BACKGROUND: Color = Color::from_hex(0x3B82F6);
    /// Confirm button text.
    pub const CONFIRM_BUTTON_TEXT: Color = Color::from_hex(0xFFFFFF);
    /// Staged picker panel background.
    pub const PICKER_BACKGROUND: Color = Color::from_hex(0xF9FAFB);
    /// Staged picker panel border.
    pub const PICKER_BORDER: Color = Color::from_hex(0xE5E7EB);

    /// Cancel button text.
    pub const CANCEL_TEXT: &'static str = "Cancel";
    /// Confirm button text.
    pub const CONFIRM_TEXT: &'static str = "Confirm";
}

/// Palette overrides. Unset entries fall back to [`DatePickerDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Setters)]
#[setters(strip_option)]
pub struct DatePickerColors {
    /// Label text color.
    pub label: Option<Color>,
    /// Value text color.
    pub text: Option<Color>,
    /// Placeholder text color.
    pub placeholder: Option<Color>,
    /// Calendar icon color.
    pub icon: Option<Color>,
    /// Field background.
    pub input_background: Option<Color>,
    /// Field border.
    pub input_border: Option<Color>,
    /// Error border and message color.
    pub error: Option<Color>,
    /// Cancel button background.
    pub cancel_button_background: Option<Color>,
    /// Cancel button text.
    pub cancel_button_text: Option<Color>,
    /// Confirm button background.
    pub confirm_button_background: Option<Color>,
    /// Confirm button text.
    pub confirm_button_text: Option<Color>,
    /// Staged picker panel background.
    pub picker_background: Option<Color>,
    /// Staged picker panel border.
    pub picker_border: Option<Color>,
}

/// Palette with every entry resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDatePickerColors {
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub text: Color,
    /// Placeholder text color.
    pub placeholder: Color,
    /// Calendar icon color.
    pub icon: Color,
    /// Field background.
    pub input_background: Color,
    /// Field border.
    pub input_border: Color,
    /// Error border and message color.
    pub error: Color,
    /// Cancel button background.
    pub cancel_button_background: Color,
    /// Cancel button text.
    pub cancel_button_text: Color,
    /// Confirm button background.
    pub confirm_button_background: Color,
    /// Confirm button text.
    pub confirm_button_text: Color,
    /// Staged picker panel background.
    pub picker_background: Color,
    /// Staged picker panel border.
    pub picker_border: Color,
}

impl DatePickerColors {
    /// Merges the overrides over [`DatePickerDefaults`].
    pub fn resolve(&self) -> ResolvedDatePickerColors {
        type D = DatePickerDefaults;
        ResolvedDatePickerColors {
            label: self.label.unwrap_or(D::LABEL),
            text: self.text.unwrap_or(D::TEXT),
            placeholder: self.placeholder.unwrap_or(D::PLACEHOLDER),
            icon: self.icon.unwrap_or(D::ICON),
            input_background: self.input_background.unwrap_or(D::INPUT_BACKGROUND),
            input_border: self.input_border.unwrap_or(D::INPUT_BORDER),
            error: self.error.unwrap_or(D::ERROR),
            cancel_button_background: self
                .cancel_button_background
                .unwrap_or(D::CANCEL_BUTTON_BACKGROUND),
            cancel_button_text: self.cancel_button_text.unwrap_or(D::CANCEL_BUTTON_TEXT),
            confirm_button_background: self
                .confirm_button_background
                .unwrap_or(D::CONFIRM_BUTTON_BACKGROUND),
            confirm_button_text: self.confirm_button_text.unwrap_or(D::CONFIRM_BUTTON_TEXT),
            picker_background: self.picker_background.unwrap_or(D::PICKER_BACKGROUND),
            picker_border: self.picker_border.unwrap_or(D::PICKER_BORDER),
        }
    }
}

/// Button text overrides for localization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Setters)]
#[setters(strip_option, into)]
pub struct DatePickerTexts {
    /// Cancel button text.
    pub cancel: Option<String>,
    /// Confirm button text.
    pub confirm: Option<String>,
}

impl DatePickerTexts {
    fn resolve(&self) -> (String, String) {
        (
            self.cancel
                .clone()
                .unwrap_or_else(|| DatePickerDefaults::CANCEL_TEXT.to_string()),
            self.confirm
                .clone()
                .unwrap_or_else(|| DatePickerDefaults::CONFIRM_TEXT.to_string()),
        )
    }
}

/// Configuration for a date picker input.
///
/// Recreate the args whenever the host's value or visibility changes; the
/// state reads them on every call.
#[derive(Clone, Setters)]
pub struct DatePickerInputArgs {
    /// Text shown above the field.
    #[setters(into)]
    pub label: String,
    /// Text shown in the field when there is no value.
    #[setters(into)]
    pub placeholder: String,
    /// The host's selected date.
    pub value: Option<CalendarDate>,
    /// Called with the new date when a selection is committed.
    #[setters(skip)]
    pub on_change: CallbackWith<CalendarDate>,
    /// Earliest selectable date, forwarded to the native picker.
    #[setters(strip_option)]
    pub minimum_date: Option<CalendarDate>,
    /// Latest selectable date, forwarded to the native picker.
    #[setters(strip_option)]
    pub maximum_date: Option<CalendarDate>,
    /// Host-controlled visibility. When set, the host owns visibility and
    /// receives every change through `on_open_change`.
    #[setters(strip_option)]
    pub is_open: Option<bool>,
    /// Visibility change requests for host-controlled visibility.
    #[setters(skip)]
    pub on_open_change: Option<CallbackWith<bool>>,
    /// Whether the field shows its error state.
    pub has_error: bool,
    /// Message shown under the field in the error state.
    #[setters(strip_option, into)]
    pub error_message: Option<String>,
    /// Called once each time the picker closes.
    #[setters(skip)]
    pub on_blur: Option<Callback>,
    /// Palette overrides.
    pub colors: DatePickerColors,
    /// Button text overrides.
    pub texts: DatePickerTexts,
    /// Custom formatter for the field text.
    #[setters(skip)]
    pub format_date: Option<CallbackWith<CalendarDate, String>>,
    /// Presentation hint for the native picker. Defaults per platform.
    #[setters(strip_option)]
    pub display: Option<PickerDisplay>,
}

impl Default for DatePickerInputArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            placeholder: String::new(),
            value: None,
            on_change: CallbackWith::new(|_| {}),
            minimum_date: None,
            maximum_date: None,
            is_open: None,
            on_open_change: None,
            has_error: false,
            error_message: None,
            on_blur: None,
            colors: DatePickerColors::default(),
            texts: DatePickerTexts::default(),
            format_date: None,
            display: None,
        }
    }
}

impl DatePickerInputArgs {
    /// Creates args with a label and placeholder.
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::default().label(label).placeholder(placeholder)
    }

    /// Sets the commit handler.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(CalendarDate) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(f);
        self
    }

    /// Sets the commit handler using a shared callback.
    pub fn on_change_shared(mut self, f: CallbackWith<CalendarDate>) -> Self {
        self.on_change = f;
        self
    }

    /// Sets the visibility change handler.
    ///
    /// Only called when the host also supplies [`is_open`](Self::is_open);
    /// otherwise the input keeps visibility to itself and this handler never
    /// fires.
    pub fn on_open_change<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_open_change = Some(CallbackWith::new(f));
        self
    }

    /// Sets the blur handler.
    pub fn on_blur<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_blur = Some(Callback::new(f));
        self
    }

    /// Sets a custom formatter for the field text.
    pub fn format_date<F>(mut self, f: F) -> Self
    where
        F: Fn(CalendarDate) -> String + Send + Sync + 'static,
    {
        self.format_date = Some(CallbackWith::new(f));
        self
    }

    /// Formats `date` with the custom formatter, or as `DD/MM/YYYY`.
    pub fn format(&self, date: CalendarDate) -> String {
        match &self.format_date {
            Some(formatter) => formatter.call(date),
            None => default_format_date(date),
        }
    }
}

/// Formats `date` as `DD/MM/YYYY`.
pub fn default_format_date(date: CalendarDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// A button in the staged picker panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelButtonView {
    /// Button text.
    pub text: String,
    /// Button background.
    pub background: Color,
    /// Button text color.
    pub text_color: Color,
}

/// The picker area below the field while it is open.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerPanelView {
    /// The platform's modal picker, nothing else.
    Native(NativePickerProps),
    /// An inline panel with the picker and cancel/confirm buttons.
    Staged {
        /// Props for the embedded native picker.
        picker: NativePickerProps,
        /// Panel background.
        background: Color,
        /// Panel border.
        border: Color,
        /// Cancel button.
        cancel: PanelButtonView,
        /// Confirm button.
        confirm: PanelButtonView,
    },
}

/// Everything needed to draw a date picker input for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePickerInputView {
    /// Label text.
    pub label: String,
    /// Label color.
    pub label_color: Color,
    /// Formatted value, or the placeholder.
    pub field_text: String,
    /// Color of `field_text`.
    pub field_text_color: Color,
    /// Calendar icon color.
    pub icon_color: Color,
    /// Field background.
    pub background: Color,
    /// Field border color.
    pub border_color: Color,
    /// Field border width.
    pub border_width: f32,
    /// Error message and its color, when one should be shown.
    pub error: Option<(String, Color)>,
    /// The open picker, if any.
    pub picker: Option<PickerPanelView>,
}

/// Per-field state of a date picker input.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use aurora_components::{
///     calendar_date::CalendarDate,
///     date_picker_input::{DatePickerInputArgs, DatePickerInputState, DatePickerPhase},
///     native_picker::NativePickerEvent,
/// };
/// use aurora_ui::PlatformFamily;
/// use parking_lot::RwLock;
///
/// let selected = Arc::new(RwLock::new(None));
/// let args = || {
///     let sink = selected.clone();
///     DatePickerInputArgs::new("Birthday", "Pick a date")
///         .value(*selected.read())
///         .on_change(move |date| *sink.write() = Some(date))
/// };
///
/// let mut state = DatePickerInputState::new(PlatformFamily::Ios);
/// state.toggle(&args());
/// assert_eq!(state.phase(&args()), DatePickerPhase::OpenStaged);
///
/// let date = CalendarDate::new(2025, 3, 10).unwrap();
/// state.handle_picker_event(&args(), NativePickerEvent::set(date));
/// state.confirm(&args());
/// assert_eq!(*selected.read(), Some(date));
/// assert_eq!(state.phase(&args()), DatePickerPhase::Closed);
/// ```
#[derive(Debug, Clone)]
pub struct DatePickerInputState {
    platform: PlatformFamily,
    policy: PickerPolicy,
    open: bool,
    // Staged date picked since the picker opened; `None` means "not yet
    // edited", so reads fall back to the host value of the current call.
    working_date: Option<CalendarDate>,
    today: fn() -> CalendarDate,
}

impl Default for DatePickerInputState {
    fn default() -> Self {
        Self::new(PlatformFamily::current())
    }
}

impl DatePickerInputState {
    /// Creates a closed input following the conventions of `platform`.
    pub fn new(platform: PlatformFamily) -> Self {
        Self {
            platform,
            policy: PickerPolicy::for_platform(platform),
            open: false,
            working_date: None,
            today: CalendarDate::today,
        }
    }

    /// Replaces the source of "today", used to seed the picker when the host
    /// has no value.
    pub fn with_today(mut self, today: fn() -> CalendarDate) -> Self {
        self.today = today;
        self
    }

    /// Returns the platform family this input imitates.
    pub fn platform(&self) -> PlatformFamily {
        self.platform
    }

    /// Returns the commit policy chosen at construction.
    pub fn policy(&self) -> PickerPolicy {
        self.policy
    }

    /// Returns whether the picker is presented, honoring host control.
    pub fn is_open(&self, args: &DatePickerInputArgs) -> bool {
        args.is_open.unwrap_or(self.open)
    }

    /// Returns the current interaction phase.
    pub fn phase(&self, args: &DatePickerInputArgs) -> DatePickerPhase {
        match (self.is_open(args), self.policy) {
            (false, _) => DatePickerPhase::Closed,
            (true, PickerPolicy::ImmediateApply) => DatePickerPhase::OpenImmediate,
            (true, PickerPolicy::StagedConfirm) => DatePickerPhase::OpenStaged,
        }
    }

    /// Handles a tap on the field.
    ///
    /// Opens the picker when closed. When open, behaves exactly like
    /// [`cancel`](Self::cancel): a staged date is discarded, never confirmed.
    pub fn toggle(&mut self, args: &DatePickerInputArgs) {
        if self.is_open(args) {
            self.cancel(args);
            return;
        }
        self.working_date = None;
        debug!(policy = ?self.policy, "date picker opened");
        self.set_open(args, true);
    }

    /// Handles a change reported by the native picker.
    pub fn handle_picker_event(&mut self, args: &DatePickerInputArgs, event: NativePickerEvent) {
        match self.phase(args) {
            DatePickerPhase::Closed => {
                debug!(?event, "ignoring picker event while closed");
            }
            DatePickerPhase::OpenImmediate => {
                if let (NativePickerEventKind::Set, Some(date)) = (event.kind, event.date) {
                    debug!(%date, "date picker applied");
                    args.on_change.call(date);
                } else {
                    debug!("date picker dismissed");
                }
                self.close(args);
            }
            DatePickerPhase::OpenStaged => {
                if let Some(date) = event.date {
                    self.working_date = Some(date);
                }
            }
        }
    }

    /// Commits the staged date and closes the picker.
    ///
    /// Only meaningful while [`DatePickerPhase::OpenStaged`]; ignored
    /// otherwise.
    pub fn confirm(&mut self, args: &DatePickerInputArgs) {
        if self.phase(args) != DatePickerPhase::OpenStaged {
            debug!(phase = ?self.phase(args), "ignoring confirm outside staged phase");
            return;
        }
        let date = self.staged(args);
        debug!(%date, "date picker confirmed");
        args.on_change.call(date);
        self.close(args);
    }

    /// Discards any staged date and closes the picker. Ignored when closed.
    pub fn cancel(&mut self, args: &DatePickerInputArgs) {
        if !self.is_open(args) {
            debug!("ignoring cancel while closed");
            return;
        }
        debug!("date picker cancelled");
        self.close(args);
    }

    /// Returns the props for the native picker, or `None` while closed.
    pub fn native_picker_props(&self, args: &DatePickerInputArgs) -> Option<NativePickerProps> {
        let value = match self.phase(args) {
            DatePickerPhase::Closed => return None,
            DatePickerPhase::OpenImmediate => self.seed(args),
            DatePickerPhase::OpenStaged => self.staged(args),
        };
        let hint = args
            .display
            .unwrap_or(PickerDisplay::default_for(self.platform));
        if !hint.is_supported_on(self.platform) {
            warn!(
                hint = hint.as_str(),
                platform = self.platform.as_str(),
                "display mode is not supported by this platform's picker"
            );
        }
        Some(NativePickerProps {
            value,
            mode: PickerMode::Date,
            display: hint,
            minimum_date: args.minimum_date,
            maximum_date: args.maximum_date,
        })
    }

    /// Computes what the field and its picker look like right now.
    pub fn view(&self, args: &DatePickerInputArgs) -> DatePickerInputView {
        let colors = args.colors.resolve();
        let (field_text, field_text_color) = match args.value {
            Some(date) => (args.format(date), colors.text),
            None => (args.placeholder.clone(), colors.placeholder),
        };
        let (border_color, border_width) = if args.has_error {
            (colors.error, ERROR_BORDER_WIDTH)
        } else {
            (colors.input_border, INPUT_BORDER_WIDTH)
        };
        let error = args
            .error_message
            .clone()
            .filter(|_| args.has_error)
            .map(|message| (message, colors.error));

        let picker = self.native_picker_props(args).map(|picker| match self.policy {
            PickerPolicy::ImmediateApply => PickerPanelView::Native(picker),
            PickerPolicy::StagedConfirm => {
                let (cancel_text, confirm_text) = args.texts.resolve();
                PickerPanelView::Staged {
                    picker,
                    background: colors.picker_background,
                    border: colors.picker_border,
                    cancel: PanelButtonView {
                        text: cancel_text,
                        background: colors.cancel_button_background,
                        text_color: colors.cancel_button_text,
                    },
                    confirm: PanelButtonView {
                        text: confirm_text,
                        background: colors.confirm_button_background,
                        text_color: colors.confirm_button_text,
                    },
                }
            }
        });

        DatePickerInputView {
            label: args.label.clone(),
            label_color: colors.label,
            field_text,
            field_text_color,
            icon_color: colors.icon,
            background: colors.input_background,
            border_color,
            border_width,
            error,
            picker,
        }
    }

    fn seed(&self, args: &DatePickerInputArgs) -> CalendarDate {
        args.value.unwrap_or_else(self.today)
    }

    fn staged(&self, args: &DatePickerInputArgs) -> CalendarDate {
        self.working_date.unwrap_or_else(|| self.seed(args))
    }

    fn close(&mut self, args: &DatePickerInputArgs) {
        self.working_date = None;
        self.set_open(args, false);
        if let Some(on_blur) = &args.on_blur {
            on_blur.call();
        }
    }

    // The single writer for visibility: host-controlled inputs only ever get
    // a request through `on_open_change`, the private flag is left alone.
    fn set_open(&mut self, args: &DatePickerInputArgs, open: bool) {
        if args.is_open.is_some() {
            match &args.on_open_change {
                Some(on_open_change) => on_open_change.call(open),
                None => debug!(open, "visibility is host-controlled without on_open_change"),
            }
        } else {
            if args.on_open_change.is_some() {
                debug!(open, "on_open_change ignored without is_open");
            }
            self.open = open;
        }
    }
}
