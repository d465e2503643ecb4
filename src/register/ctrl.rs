//! ### CTRL - Control register (`0x04`, 1 byte, R/W)
//!
//! Packs all writable device settings into a single byte: one-shot trigger,
//! SMBus timeout disable, free-run mode, register auto-increment, averaging
//! (which selects the free-run output data rate), block data update and the
//! 1 Hz low-ODR mode.
//!
//! Several logical settings share this register, so updates from the driver
//! are always read-modify-write.
//!
//! ### Default values
//! 0x00 (power-down)
//!
//! ### Examples
//! ```rust,no_run
//! # use crate::stts22h_rs::{Stts22h, Stts22hResult};
//! # use crate::stts22h_rs::bus::Bus;
//! # async fn demo<B: Bus>(mut device: Stts22h<B>)
//! #     -> Stts22hResult<(), B::Error> {
//! use stts22h_rs::register::ctrl::{Ctrl, OutputDataRate};
//!
//! // Get and print the current control settings
//! let ctrl = device.read::<Ctrl>().await?;
//! assert!(ctrl.bdu);
//!
//! // Enter free-run mode at 100 Hz
//! device.set_data_rate(OutputDataRate::R100Hz).await?;
//!
//! # Ok(()) }
//! ```

use crate::register::{InvalidRegisterField, Readable, Reg, Writable};

const ONE_SHOT_MASK: u8 = 0b0000_0001;
const TIME_OUT_DIS_MASK: u8 = 0b0000_0010;
const FREERUN_MASK: u8 = 0b0000_0100;
const IF_ADD_INC_MASK: u8 = 0b0000_1000;
const AVG_MASK: u8 = 0b0011_0000;
const AVG_SHIFT: u8 = 4;
const BDU_MASK: u8 = 0b0100_0000;
const LOW_ODR_START_MASK: u8 = 0b1000_0000;

/// Marker struct for the CTRL (0x04) register
///
/// - **Length:** 1 byte
/// - **Access:** Read/Write
///
/// Used with [`Stts22h::read::<Ctrl>()`] or [`Stts22h::write::<Ctrl>()`]
pub struct Ctrl;
impl Reg for Ctrl { const ADDR: u8 = 0x04; }

/// The payload for the CTRL (0x04) register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CtrlCfg {
    /// Triggers a single conversion, after which the device returns to power-down.
    pub one_shot: bool,
    /// Disables the SMBus timeout reset mechanism.
    pub time_out_dis: bool,
    /// Enables free-run (continuous conversion) mode.
    pub freerun: bool,
    /// Enables register address auto-increment on multi-byte transfers.
    pub if_add_inc: bool,
    /// Averaging selection (2 bits). In free-run mode this selects the output data rate.
    pub avg: u8,
    /// Block data update: output registers are not updated between the low and high byte read.
    pub bdu: bool,
    /// Starts free-run mode at the 1 Hz low output data rate.
    pub low_odr_start: bool,
}

impl Readable for Ctrl {
    type Out = CtrlCfg;
    fn decode(b: &[u8]) -> Result<Self::Out, InvalidRegisterField> {
        let v = b[0];
        Ok(CtrlCfg {
            one_shot: v & ONE_SHOT_MASK != 0,
            time_out_dis: v & TIME_OUT_DIS_MASK != 0,
            freerun: v & FREERUN_MASK != 0,
            if_add_inc: v & IF_ADD_INC_MASK != 0,
            avg: (v & AVG_MASK) >> AVG_SHIFT,
            bdu: v & BDU_MASK != 0,
            low_odr_start: v & LOW_ODR_START_MASK != 0,
        })
    }
}

impl Writable for Ctrl {
    type In = CtrlCfg;

    fn encode(v: &Self::In, out: &mut [u8]) {
        let mut value = 0u8;
        if v.one_shot {
            value |= ONE_SHOT_MASK;
        }
        if v.time_out_dis {
            value |= TIME_OUT_DIS_MASK;
        }
        if v.freerun {
            value |= FREERUN_MASK;
        }
        if v.if_add_inc {
            value |= IF_ADD_INC_MASK;
        }
        value |= (v.avg << AVG_SHIFT) & AVG_MASK;
        if v.bdu {
            value |= BDU_MASK;
        }
        if v.low_odr_start {
            value |= LOW_ODR_START_MASK;
        }
        out[0] = value;
    }
}

/// The conversion modes / output data rates of the STTS22H.
///
/// A rate is not a single CTRL field: it spans the `one_shot`, `freerun`,
/// `low_odr_start` and `avg` bits. The discriminant packs those fields as
/// `(avg << 4) | (low_odr_start << 2) | (freerun << 1) | one_shot`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputDataRate {
    /// No conversions are performed. This is the state after power on.
    PowerDown   = 0x00,
    /// A single conversion is performed, then the device returns to power-down.
    OneShot     = 0x01,
    /// Free-run at 1 Hz (low-ODR mode).
    R1Hz        = 0x04,
    /// Free-run at 25 Hz.
    R25Hz       = 0x02,
    /// Free-run at 50 Hz.
    R50Hz       = 0x12,
    /// Free-run at 100 Hz.
    R100Hz      = 0x22,
    /// Free-run at 200 Hz.
    R200Hz      = 0x32,
}

impl OutputDataRate {
    /// Decodes the rate from the mode bits of a CTRL value.
    ///
    /// Bit combinations that do not correspond to a documented rate fall back
    /// to [`OutputDataRate::PowerDown`].
    pub fn from_ctrl(ctrl: &CtrlCfg) -> Self {
        let code = (ctrl.avg << 4)
            | (ctrl.low_odr_start as u8) << 2
            | (ctrl.freerun as u8) << 1
            | ctrl.one_shot as u8;

        match code {
            0x00 => OutputDataRate::PowerDown,
            0x01 => OutputDataRate::OneShot,
            0x04 => OutputDataRate::R1Hz,
            0x02 => OutputDataRate::R25Hz,
            0x12 => OutputDataRate::R50Hz,
            0x22 => OutputDataRate::R100Hz,
            0x32 => OutputDataRate::R200Hz,
            _ => OutputDataRate::PowerDown,
        }
    }

    /// Writes the mode bits of this rate into a CTRL value, leaving the
    /// unrelated `time_out_dis`, `if_add_inc` and `bdu` fields untouched.
    pub fn apply_to(self, ctrl: &mut CtrlCfg) {
        let code = self as u8;
        ctrl.one_shot = code & 0x01 != 0;
        ctrl.freerun = code & 0x02 != 0;
        ctrl.low_odr_start = code & 0x04 != 0;
        ctrl.avg = (code >> 4) & 0b11;
    }
}

/// SMBus timeout behavior, controlled by the `time_out_dis` bit in CTRL (0x04).
///
/// With the timeout enabled (the power-on default) the device resets its bus
/// interface when SCL is held low for more than ~25 ms, as required by SMBus.
/// Plain I2C masters clock-stretching beyond that must disable it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SmbusTimeoutMode {
    /// SMBus timeout active (power-on default).
    Enabled,
    /// SMBus timeout disabled.
    Disabled,
}
