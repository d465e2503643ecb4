//! Bus abstraction for the STTS22H.
//!
//! The STTS22H only speaks I2C/SMBus, but the driver is written against the
//! [`Bus`] trait so that tests (and exotic transports, e.g. an I2C mux or a
//! remote bridge) can supply their own implementation.

use crate::error::Stts22hError;
use crate::register::{Readable, Writable};

/// Length of the largest register block transferred in one transaction.
pub const MAX_REG_BYTES: usize = 2;

/// A register-level transport for the STTS22H.
///
/// Implementations are responsible for addressing the device and moving
/// `R::N` bytes starting at `R::ADDR`. Encoding and decoding of register
/// contents is handled by the marker types in [`crate::register`].
pub trait Bus {
    type Error;

    /// Reads register `R` and decodes it into its typed value.
    async fn read<R: Readable>(&mut self) -> Result<R::Out, Stts22hError<Self::Error>>;

    /// Encodes `v` and writes it to register `W`.
    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Stts22hError<Self::Error>>;
}

/// [`Bus`] implementation for an I2C peripheral.
pub struct I2c<I2cType> {
    i2c: I2cType,
    address: u8,
}

impl<I2cType> I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    pub(crate) fn new(i2c: I2cType, address: u8) -> Self {
        Self { i2c, address }
    }
}

impl<I2cType> Bus for I2c<I2cType>
where
    I2cType: embedded_hal_async::i2c::I2c,
{
    type Error = <I2cType as embedded_hal_async::i2c::ErrorType>::Error;

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Stts22hError<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES];
        self.i2c
            .write_read(self.address, &[R::ADDR], &mut buf[..R::N])
            .await
            .map_err(Stts22hError::Bus)?;

        R::decode(&buf[..R::N]).map_err(Stts22hError::UnexpectedRegisterData)
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Stts22hError<Self::Error>> {
        let mut buf = [0u8; MAX_REG_BYTES + 1];
        buf[0] = W::ADDR;
        W::encode(v, &mut buf[1..1 + W::N]);

        self.i2c
            .write(self.address, &buf[..1 + W::N])
            .await
            .map_err(Stts22hError::Bus)?;

        Ok(())
    }
}
