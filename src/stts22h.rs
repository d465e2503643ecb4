use crate::bus::{Bus, I2c};
use crate::config::Configuration;
use crate::error::Stts22hError;
use crate::register::ctrl::{Ctrl, CtrlCfg, OutputDataRate, SmbusTimeoutMode};
use crate::register::status::{Status, StatusFlags};
use crate::register::temp_h_limit::TempHLimit;
use crate::register::temp_l_limit::TempLLimit;
use crate::register::temp_out::{TempHOut, TempLOut};
use crate::register::whoami::WhoAmI;
use crate::register::{Readable, Writable};
use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_async::delay::DelayNs;

/// Type alias for an STTS22H communicating over I2C
type Stts22hI2c<T> = Stts22h<I2c<T>>;

const STTS22H_ID: u8 = 0xA0;

/// Weight of one LSB of the raw temperature code, in degrees Celsius.
const CELSIUS_PER_LSB: f32 = 0.01;

/// Main STTS22H driver struct
pub struct Stts22h<B> {
    bus: B,
}

/// Type alias used to simplify return types throughout the driver
pub type Stts22hResult<T, BusError> = Result<T, Stts22hError<BusError>>;

impl<T> Stts22hI2c<T>
where
    T: embedded_hal_async::i2c::I2c,
    I2c<T>: Bus,
{
    /// Constructs a new Stts22h driver instance with a given configuration that communicates over I2C
    ///
    /// This function will:
    /// - Probe for a connected STTS22H device.
    /// - Apply the given configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use embedded_hal_async::delay::DelayNs;
    /// # use embedded_hal_async::i2c::I2c;
    /// # use stts22h_rs::Stts22hResult;
    ///  use stts22h_rs::{AddrPinState, Stts22h};
    ///  use stts22h_rs::config::Configuration;
    /// # async fn demo<I: I2c, D: DelayNs>(i2c: I, mut delay: D) -> Stts22hResult<(), I::Error> {
    ///
    ///  let device = Stts22h::new_i2c(
    ///     i2c,
    ///     AddrPinState::PulledHigh,
    ///     Configuration::default(),
    ///     &mut delay
    ///  ).await?;
    /// # Ok(())
    /// # }
    pub async fn new_i2c<D: DelayNs>(
        i2c: T,
        addr_pin_state: AddrPinState,
        config: Configuration,
        delay: &mut D,
    ) -> Stts22hResult<Self, <I2c<T> as Bus>::Error> {
        Self::new(I2c::new(i2c, addr_pin_state.into()), config, delay).await
    }
}

impl<B> Stts22h<B>
where
    B: Bus,
{
    /// Probes if the device is ready by attempting to read WHOAMI [`attempts`] times with a 1 ms delay.
    ///
    /// Returns [`Stts22hError::NotConnected`] if no valid response is received.
    async fn probe_ready<D: DelayNs>(
        bus: &mut B,
        delay: &mut D,
        attempts: u32,
    ) -> Stts22hResult<(), B::Error> {
        for _ in 0..attempts {
            if let Ok(id) = bus.read::<WhoAmI>().await {
                if id == STTS22H_ID {
                    return Ok(());
                }
            }

            delay.delay_ms(1).await;
        }

        Err(Stts22hError::NotConnected)
    }

    /// Creates a new instance of the Stts22h driver struct with the given configuration.
    pub(crate) async fn new<D: DelayNs>(
        mut bus: B,
        config: Configuration,
        delay: &mut D,
    ) -> Stts22hResult<Self, B::Error> {
        Self::probe_ready(&mut bus, delay, 5).await?;

        let mut device = Stts22h { bus };
        device.apply_configuration(&config).await?;

        Ok(device)
    }

    /// Applies the given configuration by writing the CTRL (0x04) register.
    pub async fn apply_configuration(
        &mut self,
        config: &Configuration,
    ) -> Stts22hResult<(), B::Error> {
        let mut ctrl = CtrlCfg {
            one_shot: false,
            time_out_dis: config.smbus_timeout == SmbusTimeoutMode::Disabled,
            freerun: false,
            if_add_inc: config.auto_increment,
            avg: 0,
            bdu: config.block_data_update,
            low_odr_start: false,
        };
        config.data_rate.apply_to(&mut ctrl);

        self.bus.write::<Ctrl>(&ctrl).await
    }

    /// Read a register using a **typed marker**.
    ///
    /// This is the low-level, register-accurate entry point. You pass a marker type
    /// from [`crate::register`] (e.g. `register::ctrl::Ctrl`), and you get back its
    /// decoded value (`R::Out`).
    ///
    /// For most users, the convenience methods (e.g. [`data_rate`](Self::data_rate))
    /// are easier to discover and have concrete return types. This generic is here
    /// when you want full control.
    ///
    /// # Examples
    /// Read WHOAMI (0x01):
    /// ```rust,no_run
    /// # use stts22h_rs::{register, Stts22h, Stts22hResult};
    /// # use stts22h_rs::bus::Bus;
    /// # async fn demo<B: Bus>(mut device: Stts22h<B>) -> Stts22hResult<(), B::Error> {
    /// let id: u8 = device.read::<register::whoami::WhoAmI>().await?;
    /// assert_eq!(id, 0xA0);
    /// # Ok(()) }
    /// ```
    pub async fn read<R: Readable>(&mut self) -> Stts22hResult<R::Out, B::Error> {
        Ok(self.bus.read::<R>().await?)
    }

    /// Write a register using a **typed marker**.
    ///
    /// You pass a marker type from [`crate::register`] (e.g. `register::ctrl::Ctrl`) and
    /// a value of its input type (`W::In`). The value is encoded by `W::encode(...)`
    /// and written to `W::ADDR`.
    ///
    /// This performs a **direct write** of the provided fields. If you need to
    /// preserve unrelated bits of a shared register like CTRL, prefer a
    /// read-modify-write: read the struct, change the fields you care about,
    /// then write it back. The convenience methods
    /// (e.g. [`set_data_rate`](Self::set_data_rate)) already do this.
    pub async fn write<W: Writable>(&mut self, v: &W::In) -> Stts22hResult<(), B::Error> {
        Ok(self.bus.write::<W>(v).await?)
    }

    /// Determines if the STTS22H device is connected by attempting to read the [`WhoAmI`] (0x01) register.
    pub async fn is_connected(&mut self) -> Stts22hResult<bool, B::Error> {
        let id = self.bus.read::<WhoAmI>().await?;

        Ok(id == STTS22H_ID)
    }

    /// Returns the raw device identification code from the WHOAMI (0x01) register.
    ///
    /// The STTS22H always reports 0xA0. Interpreting any other value is up to
    /// the caller, see also [`is_connected`](Self::is_connected).
    pub async fn device_id(&mut self) -> Stts22hResult<u8, B::Error> {
        Ok(self.bus.read::<WhoAmI>().await?)
    }

    /// Reads the current output data rate from the CTRL (0x04) register.
    ///
    /// Mode bit patterns that do not correspond to a documented rate are
    /// reported as [`OutputDataRate::PowerDown`].
    pub async fn data_rate(&mut self) -> Stts22hResult<OutputDataRate, B::Error> {
        let ctrl = self.bus.read::<Ctrl>().await?;

        Ok(OutputDataRate::from_ctrl(&ctrl))
    }

    /// Sets the output data rate by updating the mode bits of the CTRL (0x04) register.
    ///
    /// This is a read-modify-write: the `bdu`, `time_out_dis` and `if_add_inc`
    /// fields sharing the register are preserved.
    pub async fn set_data_rate(&mut self, rate: OutputDataRate) -> Stts22hResult<(), B::Error> {
        let mut ctrl = self.bus.read::<Ctrl>().await?;
        rate.apply_to(&mut ctrl);
        self.bus.write::<Ctrl>(&ctrl).await?;

        Ok(())
    }

    /// Triggers a single conversion, after which the device returns to power-down.
    ///
    /// Shorthand for `set_data_rate(OutputDataRate::OneShot)`. Poll
    /// [`new_data_ready`](Self::new_data_ready) to find out when the result
    /// can be read.
    pub async fn trigger_one_shot(&mut self) -> Stts22hResult<(), B::Error> {
        self.set_data_rate(OutputDataRate::OneShot).await
    }

    /// Reads the block data update setting from the CTRL (0x04) register.
    pub async fn block_data_update(&mut self) -> Stts22hResult<bool, B::Error> {
        Ok(self.bus.read::<Ctrl>().await?.bdu)
    }

    /// Enables or disables block data update (CTRL `bdu`).
    ///
    /// With block data update enabled, TEMP_L_OUT/TEMP_H_OUT are not refreshed
    /// until both bytes of the previous reading have been read out.
    pub async fn set_block_data_update(&mut self, enable: bool) -> Stts22hResult<(), B::Error> {
        let mut ctrl = self.bus.read::<Ctrl>().await?;
        ctrl.bdu = enable;
        self.bus.write::<Ctrl>(&ctrl).await?;

        Ok(())
    }

    /// Reads the register auto-increment setting from the CTRL (0x04) register.
    pub async fn auto_increment(&mut self) -> Stts22hResult<bool, B::Error> {
        Ok(self.bus.read::<Ctrl>().await?.if_add_inc)
    }

    /// Enables or disables register address auto-increment on multi-byte transfers (CTRL `if_add_inc`).
    pub async fn set_auto_increment(&mut self, enable: bool) -> Stts22hResult<(), B::Error> {
        let mut ctrl = self.bus.read::<Ctrl>().await?;
        ctrl.if_add_inc = enable;
        self.bus.write::<Ctrl>(&ctrl).await?;

        Ok(())
    }

    /// Reads the SMBus timeout mode from the CTRL (0x04) register.
    pub async fn smbus_timeout_mode(&mut self) -> Stts22hResult<SmbusTimeoutMode, B::Error> {
        let ctrl = self.bus.read::<Ctrl>().await?;

        Ok(if ctrl.time_out_dis {
            SmbusTimeoutMode::Disabled
        } else {
            SmbusTimeoutMode::Enabled
        })
    }

    /// Sets the SMBus timeout mode (CTRL `time_out_dis`).
    pub async fn set_smbus_timeout_mode(
        &mut self,
        mode: SmbusTimeoutMode,
    ) -> Stts22hResult<(), B::Error> {
        let mut ctrl = self.bus.read::<Ctrl>().await?;
        ctrl.time_out_dis = mode == SmbusTimeoutMode::Disabled;
        self.bus.write::<Ctrl>(&ctrl).await?;

        Ok(())
    }

    /// Reads the raw high temperature threshold from the TEMP_H_LIMIT (0x02) register.
    pub async fn high_threshold(&mut self) -> Stts22hResult<u8, B::Error> {
        Ok(self.bus.read::<TempHLimit>().await?)
    }

    /// Writes the raw high temperature threshold to the TEMP_H_LIMIT (0x02) register.
    ///
    /// The threshold code is `(T(°C) / 0.64) + 63`; 0 disables the threshold.
    /// The value is written as-is, no range validation is performed.
    pub async fn set_high_threshold(&mut self, raw: u8) -> Stts22hResult<(), B::Error> {
        Ok(self.bus.write::<TempHLimit>(&raw).await?)
    }

    /// Reads the raw low temperature threshold from the TEMP_L_LIMIT (0x03) register.
    pub async fn low_threshold(&mut self) -> Stts22hResult<u8, B::Error> {
        Ok(self.bus.read::<TempLLimit>().await?)
    }

    /// Writes the raw low temperature threshold to the TEMP_L_LIMIT (0x03) register.
    ///
    /// The threshold code is `(T(°C) / 0.64) + 63`; 0 disables the threshold.
    /// The value is written as-is, no range validation is performed.
    pub async fn set_low_threshold(&mut self, raw: u8) -> Stts22hResult<(), B::Error> {
        Ok(self.bus.write::<TempLLimit>(&raw).await?)
    }

    /// Returns the decoded STATUS (0x05) register.
    ///
    /// This carries the busy flag as well as the high/low threshold-crossing
    /// flags. The threshold flags clear when the temperature returns within
    /// limits, not on read.
    pub async fn status(&mut self) -> Stts22hResult<StatusFlags, B::Error> {
        Ok(self.bus.read::<Status>().await?)
    }

    /// Returns true if a conversion has finished and the output registers hold valid data.
    ///
    /// This is the inverse of the STATUS `busy` flag.
    pub async fn new_data_ready(&mut self) -> Stts22hResult<bool, B::Error> {
        Ok(self.bus.read::<Status>().await?.data_ready())
    }

    /// Reads the raw signed 16-bit temperature code.
    ///
    /// TEMP_L_OUT (0x06) and TEMP_H_OUT (0x07) are read in two separate
    /// transactions, low byte first; a failure on the first read is returned
    /// without attempting the second. The low byte is the least significant.
    pub async fn temperature_raw(&mut self) -> Stts22hResult<i16, B::Error> {
        let low = self.bus.read::<TempLOut>().await?;
        let high = self.bus.read::<TempHOut>().await?;

        Ok(i16::from_le_bytes([low, high]))
    }

    /// Reads the temperature and converts it to degrees Celsius.
    pub async fn temperature_celsius(&mut self) -> Stts22hResult<f32, B::Error> {
        Ok(from_lsb_to_celsius(self.temperature_raw().await?))
    }

    /// Reads the temperature as a [`uom::si::f32::ThermodynamicTemperature`].
    #[cfg(feature = "uom")]
    pub async fn temperature(
        &mut self,
    ) -> Stts22hResult<uom::si::f32::ThermodynamicTemperature, B::Error> {
        use uom::si::thermodynamic_temperature::degree_celsius;

        Ok(uom::si::f32::ThermodynamicTemperature::new::<degree_celsius>(
            self.temperature_celsius().await?,
        ))
    }

    /// Consumes the driver and releases the underlying bus.
    pub fn release(self) -> B {
        self.bus
    }
}

/// Converts a raw temperature code to degrees Celsius.
///
/// The STTS22H output is a two's-complement 16-bit value weighing 0.01 °C per
/// LSB. The conversion is linear with no offset, no rounding and no clamping.
pub fn from_lsb_to_celsius(lsb: i16) -> f32 {
    lsb as f32 * CELSIUS_PER_LSB
}

/// This enum should reflect the physical state of the ADDR pin. This is used to determine the I2C address
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AddrPinState {
    /// ADDR is pulled high by connection to VDD
    PulledHigh,
    /// ADDR is pulled low by connection to GND
    PulledLow,
}

impl Into<SevenBitAddress> for AddrPinState {
    fn into(self) -> SevenBitAddress {
        match self {
            AddrPinState::PulledHigh => 0x38,
            AddrPinState::PulledLow => 0x3F,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeBus, FakeDelay};

    async fn connected_device(bus: FakeBus<8>) -> Stts22h<FakeBus<8>> {
        Stts22h::new(bus, Configuration::default(), &mut FakeDelay {})
            .await
            .unwrap()
    }

    fn bus_with_device() -> FakeBus<8> {
        let mut bus: FakeBus<8> = FakeBus::new();
        bus.with_response::<WhoAmI>(&[STTS22H_ID]);

        bus
    }

    #[tokio::test]
    async fn stts22h_rejects_unknown_device_id() {
        let mut bus: FakeBus<8> = FakeBus::new();
        bus.with_response::<WhoAmI>(&[0xFF]);

        let result = Stts22h::new(bus, Configuration::default(), &mut FakeDelay {}).await;
        assert!(matches!(result, Err(Stts22hError::NotConnected)));
    }

    #[tokio::test]
    async fn stts22h_device_id() {
        let mut device = connected_device(bus_with_device()).await;

        assert_eq!(STTS22H_ID, device.device_id().await.unwrap());
        assert!(device.is_connected().await.unwrap());
    }

    #[tokio::test]
    async fn stts22h_data_rate_round_trips() {
        let mut device = connected_device(bus_with_device()).await;

        for rate in [
            OutputDataRate::PowerDown,
            OutputDataRate::OneShot,
            OutputDataRate::R1Hz,
            OutputDataRate::R25Hz,
            OutputDataRate::R50Hz,
            OutputDataRate::R100Hz,
            OutputDataRate::R200Hz,
        ] {
            device.set_data_rate(rate).await.unwrap();
            assert_eq!(rate, device.data_rate().await.unwrap());
        }
    }

    #[tokio::test]
    async fn stts22h_set_block_data_update_preserves_other_ctrl_fields() {
        let bus = bus_with_device();
        let config = Configuration::default()
            .data_rate(OutputDataRate::R100Hz)
            .block_data_update(false)
            .smbus_timeout(SmbusTimeoutMode::Disabled);
        let mut device = Stts22h::new(bus, config, &mut FakeDelay {}).await.unwrap();

        device.set_block_data_update(true).await.unwrap();

        assert!(device.block_data_update().await.unwrap());
        assert_eq!(OutputDataRate::R100Hz, device.data_rate().await.unwrap());
        assert!(device.auto_increment().await.unwrap());
        assert_eq!(
            SmbusTimeoutMode::Disabled,
            device.smbus_timeout_mode().await.unwrap()
        );
    }

    #[tokio::test]
    async fn stts22h_set_data_rate_preserves_other_ctrl_fields() {
        let mut device = connected_device(bus_with_device()).await;

        device.set_data_rate(OutputDataRate::R200Hz).await.unwrap();

        // Defaults: bdu on, auto-increment on, SMBus timeout enabled
        assert!(device.block_data_update().await.unwrap());
        assert!(device.auto_increment().await.unwrap());
        assert_eq!(
            SmbusTimeoutMode::Enabled,
            device.smbus_timeout_mode().await.unwrap()
        );
    }

    #[tokio::test]
    async fn stts22h_trigger_one_shot() {
        let mut device = connected_device(bus_with_device()).await;

        device.trigger_one_shot().await.unwrap();

        assert_eq!(OutputDataRate::OneShot, device.data_rate().await.unwrap());
    }

    #[tokio::test]
    async fn stts22h_temperature_raw_assembles_low_byte_first() {
        let mut bus = bus_with_device();
        bus.with_response::<TempLOut>(&[0x64]);
        bus.with_response::<TempHOut>(&[0x00]);
        let mut device = connected_device(bus).await;

        assert_eq!(100, device.temperature_raw().await.unwrap());
    }

    #[tokio::test]
    async fn stts22h_temperature_celsius_negative_reading() {
        let mut bus = bus_with_device();
        // 0xFC18 = -1000 LSB = -10.0 degrees
        bus.with_response::<TempLOut>(&[0x18]);
        bus.with_response::<TempHOut>(&[0xFC]);
        let mut device = connected_device(bus).await;

        assert_eq!(-10.0, device.temperature_celsius().await.unwrap());
    }

    #[tokio::test]
    async fn stts22h_temperature_raw_short_circuits_on_first_failure() {
        let mut bus = bus_with_device();
        bus.with_read_fault::<TempLOut>();
        // TEMP_H_OUT is deliberately unmocked; FakeBus panics if it is touched.
        let mut device = connected_device(bus).await;

        let result = device.temperature_raw().await;
        assert!(matches!(result, Err(Stts22hError::Bus(()))));
    }

    #[tokio::test]
    async fn stts22h_threshold_round_trips() {
        let mut device = connected_device(bus_with_device()).await;

        device.set_high_threshold(0x90).await.unwrap();
        device.set_low_threshold(0x21).await.unwrap();

        assert_eq!(0x90, device.high_threshold().await.unwrap());
        assert_eq!(0x21, device.low_threshold().await.unwrap());
    }

    #[tokio::test]
    async fn stts22h_status_threshold_flags() {
        let mut bus = bus_with_device();
        bus.with_response::<Status>(&[0b0000_0010]);
        let mut device = connected_device(bus).await;

        let status = device.status().await.unwrap();
        assert!(status.over_high_limit());
        assert!(!status.under_low_limit());
        assert!(!status.busy());
        assert!(device.new_data_ready().await.unwrap());
    }

    #[tokio::test]
    async fn stts22h_new_data_ready_is_inverse_of_busy() {
        let mut bus = bus_with_device();
        bus.with_response::<Status>(&[0b0000_0001]);
        let mut device = connected_device(bus).await;

        assert!(!device.new_data_ready().await.unwrap());
    }

    #[test]
    fn from_lsb_to_celsius_is_linear() {
        assert_eq!(0.0, from_lsb_to_celsius(0));
        assert_eq!(1.0, from_lsb_to_celsius(100));
        assert_eq!(-1.0, from_lsb_to_celsius(-100));
        assert_eq!(25.5, from_lsb_to_celsius(2550));
    }
}
