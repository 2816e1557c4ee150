//! Data exchanged with the platform's native date picker.
//!
//! ## Usage
//!
//! A host renders the native picker from [`NativePickerProps`] and feeds the
//! picker's change reports back as [`NativePickerEvent`]s.
use aurora_ui::PlatformFamily;

use crate::calendar_date::CalendarDate;

/// What the native picker lets the user choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerMode {
    /// Calendar date only.
    #[default]
    Date,
}

/// Presentation hint forwarded to the native picker.
///
/// Valid values differ between platform families; see
/// [`PickerDisplay::is_supported_on`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerDisplay {
    /// Platform default presentation.
    Default,
    /// Scrolling wheels.
    Spinner,
    /// Compact field that expands on tap (iOS).
    Compact,
    /// Calendar embedded in the layout (iOS).
    Inline,
    /// Calendar dialog (Android).
    Calendar,
    /// Clock dialog (Android).
    Clock,
}

impl PickerDisplay {
    /// Returns the hint used when the caller supplies none.
    pub const fn default_for(family: PlatformFamily) -> Self {
        match family {
            PlatformFamily::Ios => PickerDisplay::Spinner,
            PlatformFamily::Android => PickerDisplay::Default,
        }
    }

    /// Returns true when the native picker of `family` understands this hint.
    pub const fn is_supported_on(self, family: PlatformFamily) -> bool {
        match family {
            PlatformFamily::Ios => matches!(
                self,
                PickerDisplay::Default
                    | PickerDisplay::Spinner
                    | PickerDisplay::Compact
                    | PickerDisplay::Inline
            ),
            PlatformFamily::Android => matches!(
                self,
                PickerDisplay::Default
                    | PickerDisplay::Spinner
                    | PickerDisplay::Calendar
                    | PickerDisplay::Clock
            ),
        }
    }

    /// Returns the identifier the native picker expects.
    pub const fn as_str(self) -> &'static str {
        match self {
            PickerDisplay::Default => "default",
            PickerDisplay::Spinner => "spinner",
            PickerDisplay::Compact => "compact",
            PickerDisplay::Inline => "inline",
            PickerDisplay::Calendar => "calendar",
            PickerDisplay::Clock => "clock",
        }
    }
}

/// Props handed to the native picker while it is presented.
///
/// Bounds are forwarded exactly as configured; the native picker owns all
/// range handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativePickerProps {
    /// Date the picker shows as selected.
    pub value: CalendarDate,
    /// Selection mode.
    pub mode: PickerMode,
    /// Presentation hint.
    pub display: PickerDisplay,
    /// Earliest selectable date, if any.
    pub minimum_date: Option<CalendarDate>,
    /// Latest selectable date, if any.
    pub maximum_date: Option<CalendarDate>,
}

/// Kind of change reported by the native picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativePickerEventKind {
    /// The user picked a value.
    Set,
    /// The picker was dismissed without a value.
    Dismissed,
}

/// A change reported by the native picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativePickerEvent {
    /// What happened.
    pub kind: NativePickerEventKind,
    /// The date the picker now shows, when it reports one.
    pub date: Option<CalendarDate>,
}

impl NativePickerEvent {
    /// A `Set` event carrying `date`.
    pub fn set(date: CalendarDate) -> Self {
        Self {
            kind: NativePickerEventKind::Set,
            date: Some(date),
        }
    }

    /// A dismissal without a date.
    pub fn dismissed() -> Self {
        Self {
            kind: NativePickerEventKind::Dismissed,
            date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use aurora_ui::PlatformFamily;
    use rstest::rstest;

    use super::PickerDisplay;

    #[test]
    fn default_hint_follows_platform() {
        assert_eq!(
            PickerDisplay::default_for(PlatformFamily::Ios),
            PickerDisplay::Spinner
        );
        assert_eq!(
            PickerDisplay::default_for(PlatformFamily::Android),
            PickerDisplay::Default
        );
    }

    #[rstest]
    #[case(PickerDisplay::Default, true, true)]
    #[case(PickerDisplay::Spinner, true, true)]
    #[case(PickerDisplay::Compact, true, false)]
    #[case(PickerDisplay::Inline, true, false)]
    #[case(PickerDisplay::Calendar, false, true)]
    #[case(PickerDisplay::Clock, false, true)]
    fn support_matrix(
        #[case] display: PickerDisplay,
        #[case] on_ios: bool,
        #[case] on_android: bool,
    ) {
        assert_eq!(display.is_supported_on(PlatformFamily::Ios), on_ios);
        assert_eq!(display.is_supported_on(PlatformFamily::Android), on_android);
    }
}
