use thiserror::Error;

/// Bus-level I2C failures, unified across platform backends.
#[derive(Error, Debug)]
pub enum BusError {
    #[error("I2C transfer failed: {0}")]
    Transfer(String),

    #[error("Failed to open I2C bus '{path}': {reason}")]
    Open { path: String, reason: String },
}

#[cfg(feature = "linux-hal")]
impl From<i2cdev::linux::LinuxI2CError> for BusError {
    fn from(error: i2cdev::linux::LinuxI2CError) -> Self {
        BusError::Transfer(error.to_string())
    }
}

/// Register-access context errors
#[derive(Error, Debug)]
pub enum RegmapError {
    #[error("Unsupported register layout: {reason}")]
    InvalidConfig { reason: String },

    #[error("Client address {address:#04x} outside the assignable 7-bit range")]
    InvalidAddress { address: u8 },

    #[error("Register transfer failed: {0}")]
    Io(#[from] BusError),
}

/// Transport configuration errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to register i2c regmap: {0}")]
    RegmapInit(#[from] RegmapError),
}

/// Firmware-identity resolution errors
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No driver data for firmware identity '{token}'")]
    NoDriverData { token: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from '{path}': {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration format: {0}")]
    FormatError(#[from] toml::de::Error),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Bus '{bus}' not found or unavailable")]
    BusNotFound { bus: String },
}

/// Result type aliases for convenience
pub type BusResult<T> = Result<T, BusError>;
pub type RegmapResult<T> = Result<T, RegmapError>;
pub type TransportResult<T> = Result<T, TransportError>;
pub type IdentityResult<T> = Result<T, IdentityError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
