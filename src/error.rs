//! Errors that can occur when using the STTS22H device.
//!
//! This module provides an error type that encapsulates all possible errors that can occur during communication with STTS22H.
//! It is generic over the underlying bus error type.

use crate::register::InvalidRegisterField;

/// This represents all possible errors that can occur when using the STTS22H device.
#[derive(Debug)]
pub enum Stts22hError<BusError> {
    /// An error has occurred in the I2C driver
    Bus(BusError),

    /// Unable to communicate with STTS22H
    ///
    /// Could possibly indicate an error with pin configuration and/or wiring.
    NotConnected,

    /// Reading from a register returned unexpected data. This should not happen in normal circumstances.
    ///
    /// Could possibly indicate a bug in the driver, or less likely, a faulty chip or interference.
    UnexpectedRegisterData(InvalidRegisterField),
}
