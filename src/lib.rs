//! Serial blinky
//!
//! Toggles a built-in indicator LED every half second and reports each new
//! level as a `LOW` / `HIGH` line on the serial console.
//!
//! The crate is hardware agnostic: the LED is any
//! [`embedded_hal::digital::OutputPin`], the pause is any
//! [`embedded_hal::delay::DelayNs`], and the console is a [`LogSink`].
//! The ESP32-S3 binding lives in `src/bin/main.rs` behind the `firmware`
//! feature.

#![cfg_attr(not(test), no_std)]

pub mod blinker;
pub mod config;
pub mod error;
pub mod sink;


pub use blinker::Blinker;
pub use error::{Error, Result};
pub use sink::{FmtSink, LogSink};
