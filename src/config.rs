//! Driver configuration, applied to the CTRL (0x04) register at construction.

use crate::register::ctrl::{OutputDataRate, SmbusTimeoutMode};

pub struct Configuration {
    pub(crate) data_rate: OutputDataRate,
    pub(crate) block_data_update: bool,
    pub(crate) auto_increment: bool,
    pub(crate) smbus_timeout: SmbusTimeoutMode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            data_rate: OutputDataRate::R25Hz,
            block_data_update: true,
            auto_increment: true,
            smbus_timeout: SmbusTimeoutMode::Enabled,
        }
    }
}

impl Configuration {
    pub fn data_rate(mut self, data_rate: OutputDataRate) -> Self {
        self.data_rate = data_rate;

        self
    }

    /// Enables or disables block data update.
    /// With block data update enabled, the TEMP_L_OUT/TEMP_H_OUT pair is not refreshed until
    /// both bytes have been read, so a reading can never mix bytes from two conversions.
    pub fn block_data_update(mut self, enable: bool) -> Self {
        self.block_data_update = enable;

        self
    }

    pub fn auto_increment(mut self, enable: bool) -> Self {
        self.auto_increment = enable;

        self
    }

    pub fn smbus_timeout(mut self, mode: SmbusTimeoutMode) -> Self {
        self.smbus_timeout = mode;

        self
    }
}
