//! ### TEMP_H_LIMIT - High temperature threshold (`0x02`, 1 byte, R/W)
//!
//! Holds the raw high temperature threshold. The over-threshold flag in the
//! STATUS (0x05) register is raised when the measured temperature exceeds it.
//!
//! The threshold is an offset/scaled code, not a Celsius value:
//! `code = (T(°C) / 0.64) + 63`. Writing 0 disables the high threshold.
//!
//! ### Default values
//! 0x00 (disabled)

#![doc(alias = "TEMP_H_LIMIT")]
use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the TEMP_H_LIMIT (0x02) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Used with [`Stts22h::read::<TempHLimit>()`] / [`Stts22h::write::<TempHLimit>()`]
/// or the convenience methods [`Stts22h::high_threshold`] and
/// [`Stts22h::set_high_threshold`].
pub struct TempHLimit;
impl Reg for TempHLimit { const ADDR: u8 = 0x02; }

impl Readable for TempHLimit {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}

impl Writable for TempHLimit {
    type In = u8;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = *v;
    }
}
