//! ### TEMP_L_OUT / TEMP_H_OUT - Temperature output (`0x06` / `0x07`, 1 byte each, R)
//!
//! The two halves of the signed 16-bit two's-complement temperature code,
//! 0.01 °C per LSB. TEMP_L_OUT is the least significant byte.
//!
//! The driver reads each byte in its own transaction and assembles them, see
//! [`Stts22h::temperature_raw`]. Enable block data update (CTRL `bdu`) to
//! keep the device from updating the pair between the two reads.

use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the TEMP_L_OUT (0x06) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct TempLOut;
impl Reg for TempLOut { const ADDR: u8 = 0x06; }

impl Readable for TempLOut {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}

/// Marker struct for the TEMP_H_OUT (0x07) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
pub struct TempHOut;
impl Reg for TempHOut { const ADDR: u8 = 0x07; }

impl Readable for TempHOut {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}
