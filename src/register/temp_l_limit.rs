//! ### TEMP_L_LIMIT - Low temperature threshold (`0x03`, 1 byte, R/W)
//!
//! Holds the raw low temperature threshold. The under-threshold flag in the
//! STATUS (0x05) register is raised when the measured temperature drops below
//! it.
//!
//! The threshold is an offset/scaled code, not a Celsius value:
//! `code = (T(°C) / 0.64) + 63`. Writing 0 disables the low threshold.
//!
//! ### Default values
//! 0x00 (disabled)

#![doc(alias = "TEMP_L_LIMIT")]
use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

/// Marker struct for the TEMP_L_LIMIT (0x03) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Used with [`Stts22h::read::<TempLLimit>()`] / [`Stts22h::write::<TempLLimit>()`]
/// or the convenience methods [`Stts22h::low_threshold`] and
/// [`Stts22h::set_low_threshold`].
pub struct TempLLimit;
impl Reg for TempLLimit { const ADDR: u8 = 0x03; }

impl Readable for TempLLimit {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}

impl Writable for TempLLimit {
    type In = u8;
    fn encode(v: &Self::In, out: &mut [u8]) {
        out[0] = *v;
    }
}
