use crate::bus::client::{address_assignable, I2cClient};
use crate::bus::SharedBus;
use crate::errors::{RegmapError, RegmapResult};

/// Flag OR'd into a register address to request that the peripheral
/// auto-increment its register pointer across a multi-byte transfer.
pub const MULTIREAD_FLAG: u8 = 0x80;

/// Register layout of one register-access context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegmapConfig {
    pub reg_bits: u8,
    pub val_bits: u8,
    pub read_flag_mask: Option<u8>,
}

/// 8-bit registers, 8-bit values, no read flag.
pub const I2C_REGMAP: RegmapConfig = RegmapConfig {
    reg_bits: 8,
    val_bits: 8,
    read_flag_mask: None,
};

/// Same layout with the multi-read flag asserted on read addresses.
pub const I2C_REGMAP_MULTIREAD: RegmapConfig = RegmapConfig {
    reg_bits: 8,
    val_bits: 8,
    read_flag_mask: Some(MULTIREAD_FLAG),
};

/// Selects the register layout for a device's multi-read capability.
pub fn config_for(multi_read_bit: bool) -> &'static RegmapConfig {
    if multi_read_bit {
        &I2C_REGMAP_MULTIREAD
    } else {
        &I2C_REGMAP
    }
}

/// Register-access context bound to one bus client. Turns logical register
/// reads and writes into transfers on the client's bus.
pub struct Regmap {
    config: RegmapConfig,
    address: u8,
    bus: SharedBus,
}

impl Regmap {
    /// Binds a register-access context to `client` with the given layout.
    ///
    /// Validates the layout and the client address without touching the
    /// bus. The bus handle is a shared clone; it is released when the last
    /// holder drops, so no explicit teardown exists here.
    pub fn init_i2c(client: &I2cClient, config: &RegmapConfig) -> RegmapResult<Self> {
        if config.reg_bits != 8 || config.val_bits != 8 {
            return Err(RegmapError::InvalidConfig {
                reason: format!(
                    "{}-bit registers with {}-bit values unsupported over SMBus",
                    config.reg_bits, config.val_bits
                ),
            });
        }
        if !address_assignable(client.address) {
            return Err(RegmapError::InvalidAddress {
                address: client.address,
            });
        }

        Ok(Self {
            config: *config,
            address: client.address,
            bus: client.bus.clone(),
        })
    }

    pub fn config(&self) -> &RegmapConfig {
        &self.config
    }

    /// Reads `buf.len()` bytes starting at `reg`, with the configured read
    /// flag merged into the register address.
    pub async fn read(&self, reg: u8, buf: &mut [u8]) -> RegmapResult<()> {
        let reg = reg | self.config.read_flag_mask.unwrap_or(0);
        let mut bus = self.bus.lock().await;
        bus.read_bytes(self.address, reg, buf).await?;
        Ok(())
    }

    /// Writes one byte to `reg`.
    pub async fn write(&self, reg: u8, value: u8) -> RegmapResult<()> {
        let mut bus = self.bus.lock().await;
        bus.write_byte(self.address, reg, value).await?;
        Ok(())
    }
}
