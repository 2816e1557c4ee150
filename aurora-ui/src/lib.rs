//! Shared value types for Aurora components.
//!
//! # Overview
//!
//! `aurora-ui` holds the small vocabulary every Aurora component is configured
//! with. It does not render anything and has no runtime of its own.
//!
//! - [`Color`] describes palette entries and parses `#RRGGBB` hex strings.
//! - [`Callback`] and [`CallbackWith`] are shareable, comparable event
//!   handlers used as component props.
//! - [`PlatformFamily`] selects between the interaction models that differ
//!   between mobile platforms.
//!
//! # Example
//!
//! ```
//! use aurora_ui::{Callback, CallbackWith, Color, PlatformFamily};
//!
//! let accent: Color = "#3B82F6".parse().unwrap();
//! assert_eq!(accent, Color::from_rgb_u8(0x3B, 0x82, 0xF6));
//!
//! let on_blur = Callback::new(|| println!("blurred"));
//! let on_count = CallbackWith::new(|count: u32| println!("count = {count}"));
//! on_blur.call();
//! on_count.call(3);
//!
//! let _family = PlatformFamily::current();
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod platform;
pub mod prop;

pub use crate::{
    color::{Color, ParseColorError},
    platform::PlatformFamily,
    prop::{Callback, CallbackWith},
};
