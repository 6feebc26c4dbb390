use super::{RegisterBus, SharedBus};
use crate::config::BusConfig;
use crate::errors::{BusError, BusResult, ConfigError, ConfigResult};
use async_trait::async_trait;
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// I2C bus backend over the Linux i2c-dev character device.
pub struct LinuxI2cBus {
    device: LinuxI2CDevice,
}

impl LinuxI2cBus {
    pub fn open(path: &str) -> BusResult<Self> {
        let device = LinuxI2CDevice::new(path, 0).map_err(|e| BusError::Open {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { device })
    }
}

#[async_trait]
impl RegisterBus for LinuxI2cBus {
    async fn read_bytes(&mut self, address: u8, reg: u8, buf: &mut [u8]) -> BusResult<()> {
        self.device.set_slave_address(address as u16)?;

        if buf.len() == 1 {
            // Single byte reads go through SMBus read byte data
            buf[0] = self.device.smbus_read_byte_data(reg)?;
        } else {
            // Multi-byte reads use SMBus block read
            let block = self.device.smbus_read_i2c_block_data(reg, buf.len() as u8)?;
            buf.copy_from_slice(&block);
        }

        Ok(())
    }

    async fn write_byte(&mut self, address: u8, reg: u8, value: u8) -> BusResult<()> {
        self.device.set_slave_address(address as u16)?;
        self.device.smbus_write_byte_data(reg, value)?;
        Ok(())
    }
}

/// Opens every declared bus into a shared handle, keyed by bus id.
pub fn open_buses(config: &BusConfig) -> ConfigResult<HashMap<String, SharedBus>> {
    let mut buses: HashMap<String, SharedBus> = HashMap::new();
    for entry in config.buses.iter() {
        let bus = LinuxI2cBus::open(&entry.path).map_err(|e| {
            error!("[bus] failed to open '{}': {}", entry.path, e);
            ConfigError::BusNotFound {
                bus: entry.id.clone(),
            }
        })?;
        info!("[bus] opened {} at {}", entry.id, entry.path);
        buses.insert(entry.id.clone(), Arc::new(Mutex::new(bus)));
    }
    Ok(buses)
}
