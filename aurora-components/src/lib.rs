//! Input components for Aurora apps.
//!
//! Components here are headless: they own interaction state and compute what
//! should be presented, while the host framework renders and reports events.
//!
//! # Example
//!
//! ```
//! use aurora_components::{
//!     calendar_date::CalendarDate,
//!     date_picker_input::{DatePickerInputArgs, DatePickerInputState},
//!     native_picker::NativePickerEvent,
//! };
//! use aurora_ui::PlatformFamily;
//!
//! let args = DatePickerInputArgs::new("Start date", "Select a date")
//!     .on_change(|date| println!("picked {date}"))
//!     .on_blur(|| println!("done"));
//!
//! let mut state = DatePickerInputState::new(PlatformFamily::Android);
//! state.toggle(&args);
//! if let Some(props) = state.native_picker_props(&args) {
//!     // Present the native picker with `props`, then forward its result.
//!     let picked = CalendarDate::new(2025, 3, 10).unwrap_or(props.value);
//!     state.handle_picker_event(&args, NativePickerEvent::set(picked));
//! }
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar_date;
pub mod date_picker_input;
pub mod native_picker;
