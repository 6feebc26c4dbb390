use super::SharedBus;
use crate::config::ClientConfig;
use crate::errors::{ConfigError, ConfigResult};
use std::collections::HashMap;
use tracing::debug;

/// Whether a 7-bit address can be assigned to a peripheral. The ends of the
/// range are reserved by the I2C specification.
pub fn address_assignable(address: u8) -> bool {
    (0x08..=0x77).contains(&address)
}

/// One peripheral's attachment point on an I2C bus.
pub struct I2cClient {
    pub address: u8,
    pub name: String,
    pub irq: Option<i32>,
    pub bus_id: String,
    pub bus: SharedBus,
}

impl I2cClient {
    pub fn new(bus_id: &str, bus: SharedBus, address: u8, name: &str, irq: Option<i32>) -> Self {
        Self {
            address,
            name: name.to_string(),
            irq,
            bus_id: bus_id.to_string(),
            bus,
        }
    }

    /// Canonical identifier of the client's own device node, `<bus>-<addr>`.
    pub fn device_id(&self) -> String {
        format!("{}-{:04x}", self.bus_id, self.address)
    }
}

/// Explicit association from a client's device node to the generic sensor
/// device attached to it, owned by the bus side. Callbacks keyed on a
/// client recover their sensor device through this map.
#[derive(Default)]
pub struct ClientRegistry {
    bindings: HashMap<String, String>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, client_device_id: String, sensor_id: String) {
        debug!("[client] {} -> {}", client_device_id, sensor_id);
        self.bindings.insert(client_device_id, sensor_id);
    }

    pub fn sensor_for(&self, client_device_id: &str) -> Option<&str> {
        self.bindings.get(client_device_id).map(String::as_str)
    }
}

/// Builds clients from validated declarations and the opened bus map.
pub fn clients_from_config(
    config: &ClientConfig,
    buses: &HashMap<String, SharedBus>,
) -> ConfigResult<Vec<I2cClient>> {
    let mut clients = Vec::new();
    for entry in config.clients.iter() {
        entry.validate()?;
        let bus = buses.get(&entry.bus).ok_or_else(|| ConfigError::BusNotFound {
            bus: entry.bus.clone(),
        })?;
        clients.push(I2cClient::new(
            &entry.bus,
            bus.clone(),
            entry.address,
            &entry.name,
            entry.irq,
        ));
    }
    Ok(clients)
}
