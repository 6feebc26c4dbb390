use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::fs;

/// Root configuration struct expecting `[[bus]]` TOML array format
#[derive(Debug, Deserialize)]
pub struct BusConfig {
    #[serde(rename = "bus")]
    pub buses: Vec<BusEntry>,
}

/// One bus entry, matching each `[[bus]]` section
#[derive(Debug, Deserialize)]
pub struct BusEntry {
    pub id: String,
    pub path: String,
}

/// Root configuration struct expecting `[[client]]` TOML array format
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "client")]
    pub clients: Vec<ClientEntry>,
}

/// One bus-client declaration, matching each `[[client]]` section
#[derive(Debug, Deserialize)]
pub struct ClientEntry {
    pub bus: String,
    pub address: u8,
    pub name: String,
    pub irq: Option<i32>,
}

impl ClientEntry {
    pub fn validate(&self) -> ConfigResult<()> {
        if !crate::bus::client::address_assignable(self.address) {
            return Err(ConfigError::InvalidValue {
                field: "address".to_string(),
                reason: format!(
                    "{:#04x} is outside the assignable 7-bit range for '{}'",
                    self.address, self.name
                ),
            });
        }
        Ok(())
    }
}

/// Loads bus declarations from a TOML file
pub fn load_bus_config(path: &str) -> ConfigResult<BusConfig> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadError {
        path: path.to_string(),
        source: e,
    })?;
    let parsed: BusConfig = toml::from_str(&content)?;
    Ok(parsed)
}

/// Loads and validates client declarations from a TOML file
pub fn load_client_config(path: &str) -> ConfigResult<ClientConfig> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadError {
        path: path.to_string(),
        source: e,
    })?;
    let parsed: ClientConfig = toml::from_str(&content)?;
    for client in parsed.clients.iter() {
        client.validate()?;
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_client_declarations() {
        let parsed: ClientConfig = toml::from_str(
            r#"
            [[client]]
            bus = "i2c-1"
            address = 0x6b
            name = "lsm6dsl"
            irq = 64

            [[client]]
            bus = "i2c-1"
            address = 0x1e
            name = "lis3mdl"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.clients.len(), 2);
        assert_eq!(parsed.clients[0].address, 0x6b);
        assert_eq!(parsed.clients[0].irq, Some(64));
        assert_eq!(parsed.clients[1].name, "lis3mdl");
        assert_eq!(parsed.clients[1].irq, None);
        assert!(parsed.clients[0].validate().is_ok());
    }

    #[test]
    fn rejects_reserved_addresses() {
        let entry = ClientEntry {
            bus: "i2c-1".to_string(),
            address: 0x03,
            name: "bogus".to_string(),
            irq: None,
        };
        assert!(matches!(
            entry.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn parses_bus_declarations() {
        let parsed: BusConfig = toml::from_str(
            r#"
            [[bus]]
            id = "i2c-1"
            path = "/dev/i2c-1"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.buses.len(), 1);
        assert_eq!(parsed.buses[0].path, "/dev/i2c-1");
    }
}
