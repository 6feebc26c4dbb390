use crate::bus::client::{ClientRegistry, I2cClient};
use crate::device::SensorDevice;
use crate::errors::TransportResult;
use crate::regmap::{config_for, Regmap};
use tracing::{debug, error};

/// Configures the I2C transport for `device` against `client`.
///
/// Selects the register layout from the device's multi-read capability and
/// binds a register-access context to the client. On success the client's
/// device node becomes the sensor device's parent, the sensor device takes
/// the client's assigned name and IRQ line, and the registry learns the
/// client-to-device binding. On failure the device and registry are left
/// exactly as they were.
pub fn configure_i2c(
    device: &mut SensorDevice,
    client: &I2cClient,
    clients: &mut ClientRegistry,
) -> TransportResult<()> {
    let config = config_for(device.state.settings.multi_read_bit);

    let regmap = match Regmap::init_i2c(client, config) {
        Ok(regmap) => regmap,
        Err(e) => {
            error!(
                "[transport] failed to register i2c regmap for '{}': {}",
                client.name, e
            );
            return Err(e.into());
        }
    };

    debug_assert!(
        device.state.regmap.is_none(),
        "transport configured twice for {}",
        device.id
    );

    let client_device = client.device_id();
    device.state.regmap = Some(regmap);
    device.name = client.name.clone();
    device.parent = Some(client_device.clone());
    device.state.dev = Some(client_device.clone());
    device.state.irq = client.irq;
    clients.bind(client_device, device.id.clone());

    debug!("[transport] '{}' configured on {}", device.name, client.bus_id);
    Ok(())
}
