// Public modules
pub mod bus;
pub mod config;
pub mod device;
pub mod errors;
pub mod identity;
pub mod regmap;
pub mod transport;

// Re-export commonly used types
pub use bus::client::{clients_from_config, ClientRegistry, I2cClient};
pub use bus::{RegisterBus, SharedBus};
pub use config::{load_bus_config, load_client_config, BusConfig, ClientConfig};
pub use device::{SensorDevice, SensorSettings, SensorState};
pub use errors::{
    BusError, ConfigError, IdentityError, RegmapError, TransportError, TransportResult,
};
pub use identity::{resolve_identity, DriverData, IdentityEntry, IdentityProvider, IdentityTable};
pub use regmap::{config_for, Regmap, RegmapConfig, I2C_REGMAP, I2C_REGMAP_MULTIREAD};
pub use transport::configure_i2c;

use tracing_subscriber::EnvFilter;

/// Initialize tracing with default configuration
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();
}
