//! Minimal window, input and framebuffer layer for pixel-producing programs.
//!
//! A [`Session`] opens one window, translates window-system notifications
//! into a bounded queue of [`Event`]s, and shows whole BGRA frames with
//! [`Session::blit`].
//!
//! ```no_run
//! use pixel_display::{DisplayConfig, Session};
//!
//! let config = DisplayConfig::new("demo", 320, 240);
//! let mut session = Session::create(&config)?;
//! let frame = vec![0u8; 320 * 240 * 4];
//! while !session.poll_events() {
//!     while let Some(event) = session.pop_event() {
//!         println!("{:?}", event);
//!     }
//!     session.blit(&frame)?;
//!     pixel_display::sleep_ms(16);
//! }
//! session.destroy();
//! # Ok::<(), pixel_display::DisplayError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod platform;
pub mod traits;

pub use crate::config::DisplayConfig;
pub use crate::core::{
    keys, sleep_ms, DisplayError, Event, EventKind, EventQueue, Key, Lifecycle, MouseButton,
    Notification, OffscreenSurface, Session,
};
pub use crate::platform::{HeadlessPlatform, WinitPlatform};
