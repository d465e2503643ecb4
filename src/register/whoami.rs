//! ### WHOAMI - Device identification (`0x01`, 1 byte, R)
//!
//! Contains the device identification code, which will always be 0xA0 for STTS22H.
//!
//! ### Default values
//! 0xA0
//!
//! ### Examples
//! ```rust,no_run
//! # use crate::stts22h_rs::{Stts22h, Stts22hResult};
//! # use crate::stts22h_rs::bus::Bus;
//! # async fn demo<B: Bus>(mut device: Stts22h<B>)
//! #     -> Stts22hResult<(), B::Error> {
//! use stts22h_rs::register::whoami::WhoAmI;
//!
//! // Print device id
//! let id = device.read::<WhoAmI>().await?;
//! assert_eq!(id, 0xA0);
//!
//! # Ok(()) }
//! ```
#![doc(alias = "WHOAMI")]
use crate::register::{InvalidRegisterField, Readable, Reg};

/// Marker struct for the WHOAMI (0x01) register
///
/// - **Length:** 1 byte
/// - **Access:** Read-only
///
/// Used with [`Stts22h::read::<WhoAmI>()`] or the convenience method
/// [`Stts22h::device_id`].
pub struct WhoAmI;
impl Reg for WhoAmI { const ADDR: u8 = 0x01; }

impl Readable for WhoAmI {
    type Out = u8;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        Ok(b[0])
    }
}
