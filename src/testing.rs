use crate::bus::{Bus, MAX_REG_BYTES};
use crate::error::Stts22hError;
use crate::register::{Readable, Writable};
use embedded_hal_async::delay::DelayNs;
use heapless::LinearMap;

#[derive(Debug)]
enum RegisterValue {
    Data { bytes: [u8; MAX_REG_BYTES], len: usize },
    Fault,
}

/// In-memory register fake keyed on (address, transfer length).
///
/// Writes are stored back into the map, so reads observe previous writes.
/// Reading a register that was neither primed nor written panics.
pub struct FakeBus<const N: usize> {
    regs: LinearMap<(u8, usize), RegisterValue, N>,
}

pub struct FakeDelay {}

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, _: u32) {}
}

impl<const N: usize> FakeBus<N> {
    pub fn new() -> Self {
        FakeBus {
            regs: LinearMap::new(),
        }
    }

    /// Primes register `R` with a response.
    pub fn with_response<R: Readable>(&mut self, data: &[u8]) {
        let mut bytes = [0u8; MAX_REG_BYTES];
        bytes[..data.len()].copy_from_slice(data);
        self.regs
            .insert((R::ADDR, R::N), RegisterValue::Data { bytes, len: data.len() })
            .unwrap();
    }

    /// Makes every read of register `R` fail with a bus error.
    pub fn with_read_fault<R: Readable>(&mut self) {
        self.regs.insert((R::ADDR, R::N), RegisterValue::Fault).unwrap();
    }
}

impl<const N: usize> Bus for FakeBus<N> {
    type Error = ();

    async fn read<R: Readable>(&mut self) -> Result<R::Out, Stts22hError<Self::Error>> {
        match self.regs.get(&(R::ADDR, R::N)) {
            Some(RegisterValue::Data { bytes, len }) if *len == R::N => {
                R::decode(&bytes[..R::N]).map_err(Stts22hError::UnexpectedRegisterData)
            }
            Some(RegisterValue::Fault) => Err(Stts22hError::Bus(())),
            _ => panic!("No mocked value for register 0x{:x} and length {}", R::ADDR, R::N),
        }
    }

    async fn write<W: Writable>(&mut self, v: &W::In) -> Result<(), Stts22hError<Self::Error>> {
        let mut bytes = [0u8; MAX_REG_BYTES];
        W::encode(v, &mut bytes[..W::N]);
        self.regs
            .insert((W::ADDR, W::N), RegisterValue::Data { bytes, len: W::N })
            .unwrap();

        Ok(())
    }
}
