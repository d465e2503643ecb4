//! This is a platform agnostic Rust driver for the STMicroelectronics STTS22H
//! digital temperature sensor, based on the [`embedded-hal-async`] traits.
//!
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal
//!
//! The STTS22H is an I2C/SMBus device with a handful of one-byte registers.
//! This driver allows you to:
//! - Set the output data rate (power-down, one-shot and free-run modes)
//! - Enable/disable block data update, register auto-increment and the SMBus
//!   timeout
//! - Set the high/low temperature thresholds and read back which one was
//!   crossed
//! - Read the raw temperature and convert it to degrees Celsius
//!   (0.01 °C per LSB)
//!
//! Datasheet:
//!   - [STTS22H](https://www.st.com/resource/en/datasheet/stts22h.pdf)
//!
//! # Examples
//!
//! ```rust,no_run
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::i2c::I2c;
//! # use stts22h_rs::Stts22hResult;
//! use stts22h_rs::{AddrPinState, Stts22h};
//! use stts22h_rs::config::Configuration;
//! # async fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Stts22hResult<(), I::Error> {
//!
//! let mut device = Stts22h::new_i2c(
//!     i2c,
//!     AddrPinState::PulledHigh,
//!     Configuration::default(),
//!     &mut delay,
//! ).await?;
//!
//! let celsius = device.temperature_celsius().await?;
//! # Ok(())
//! # }
//! ```
#![no_std]

pub mod bus;
pub mod config;
pub mod error;
pub mod register;
mod stts22h;

#[cfg(test)]
mod testing;

pub use stts22h::{from_lsb_to_celsius, AddrPinState, Stts22h, Stts22hResult};
