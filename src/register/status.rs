//! ### STATUS - Device status (`0x05`, 1 byte, R)
//!
//! Reports whether a conversion is in progress and whether the measured
//! temperature has crossed the high/low thresholds set in TEMP_H_LIMIT (0x02)
//! and TEMP_L_LIMIT (0x03).
//!
//! The threshold flags are cleared when the temperature comes back within
//! limits, not on read.

#![doc(alias = "STATUS")]
use crate::register::{InvalidRegisterField, Readable, Reg};

const BUSY_MASK: u8 = 0b0000_0001;
const OVER_THH_MASK: u8 = 0b0000_0010;
const UNDER_THL_MASK: u8 = 0b0000_0100;

/// Marker struct for the STATUS (0x05) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Stts22h::read::<Status>()`] or the convenience method
/// [`Stts22h::status`].
pub struct Status;
impl Reg for Status { const ADDR: u8 = 0x05; }

/// Decoded contents of the STATUS (0x05) register.
#[derive(Copy, Clone, Debug)]
pub struct StatusFlags {
    busy: bool,
    over_high_limit: bool,
    under_low_limit: bool,
}

impl StatusFlags {
    pub fn new(busy: bool, over_high_limit: bool, under_low_limit: bool) -> Self {
        Self { busy, over_high_limit, under_low_limit }
    }

    /// Is a conversion currently in progress?
    pub fn busy(&self) -> bool { self.busy }

    /// Has the temperature exceeded the high threshold?
    pub fn over_high_limit(&self) -> bool { self.over_high_limit }

    /// Has the temperature dropped below the low threshold?
    pub fn under_low_limit(&self) -> bool { self.under_low_limit }

    /// Is there a finished conversion to be read?
    ///
    /// This is simply the inverse of [`busy`](Self::busy).
    pub fn data_ready(&self) -> bool { !self.busy }
}

impl Readable for Status {
    type Out = StatusFlags;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(StatusFlags {
            busy: (b[0] & BUSY_MASK) != 0,
            over_high_limit: (b[0] & OVER_THH_MASK) != 0,
            under_low_limit: (b[0] & UNDER_THL_MASK) != 0,
        })
    }
}
