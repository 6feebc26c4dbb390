use crate::device::SensorDevice;
use crate::errors::{IdentityError, IdentityResult};
use tracing::error;

/// Opaque driver-private value attached to a firmware identity match,
/// typically a variant or model selector. `0` doubles as the neutral
/// "no firmware description" result, so driver tables should not assign
/// meaning to it.
pub type DriverData = u64;

/// One firmware-identity binding declared by a concrete driver.
#[derive(Debug, Clone, Copy)]
pub struct IdentityEntry {
    pub id: &'static str,
    pub driver_data: DriverData,
}

/// Driver-declared identity table, consulted read-only.
pub type IdentityTable = [IdentityEntry];

/// Platform firmware-identity access, chosen at runtime per target
/// platform instead of compiling the resolver in and out.
pub enum IdentityProvider {
    /// The platform exposes no firmware identity for this device class.
    Absent,
    /// The platform can report a device's firmware identity token.
    Present(fn(&SensorDevice) -> Option<String>),
}

impl IdentityProvider {
    fn token(&self, device: &SensorDevice) -> Option<String> {
        match self {
            IdentityProvider::Absent => None,
            IdentityProvider::Present(lookup) => lookup(device),
        }
    }
}

/// Resolves `device`'s firmware identity against `table`.
///
/// Returns `0` when the platform reports no identity for the device (the
/// expected case on platforms without firmware description), the matching
/// entry's driver data on an exact token match, and `NoDriverData` when an
/// identity is present but matches no table entry.
pub fn resolve_identity(
    provider: &IdentityProvider,
    device: &SensorDevice,
    table: &IdentityTable,
) -> IdentityResult<DriverData> {
    let token = match provider.token(device) {
        Some(token) => token,
        None => return Ok(0),
    };

    match table.iter().find(|entry| entry.id == token) {
        Some(entry) => Ok(entry.driver_data),
        None => {
            error!("[identity] no driver data for '{}' on '{}'", token, device.id);
            Err(IdentityError::NoDriverData { token })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::SensorSettings;

    const TABLE: &IdentityTable = &[
        IdentityEntry {
            id: "ABC",
            driver_data: 1,
        },
        IdentityEntry {
            id: "XYZ123",
            driver_data: 7,
        },
    ];

    fn device() -> SensorDevice {
        SensorDevice::new(
            "mag0",
            SensorSettings {
                multi_read_bit: false,
            },
        )
    }

    #[test]
    fn absent_provider_yields_the_neutral_default() {
        let dev = device().with_firmware_id("XYZ123");
        assert_eq!(
            resolve_identity(&IdentityProvider::Absent, &dev, TABLE).unwrap(),
            0
        );
    }

    #[test]
    fn device_without_firmware_identity_yields_the_neutral_default() {
        let provider = IdentityProvider::Present(SensorDevice::firmware_token);
        assert_eq!(resolve_identity(&provider, &device(), TABLE).unwrap(), 0);
        // table contents are irrelevant without a token
        assert_eq!(resolve_identity(&provider, &device(), &[]).unwrap(), 0);
    }

    #[test]
    fn matching_token_returns_its_driver_data() {
        let provider = IdentityProvider::Present(SensorDevice::firmware_token);
        let dev = device().with_firmware_id("XYZ123");
        assert_eq!(resolve_identity(&provider, &dev, TABLE).unwrap(), 7);

        let dev = device().with_firmware_id("ABC");
        assert_eq!(resolve_identity(&provider, &dev, TABLE).unwrap(), 1);
    }

    #[test]
    fn unmatched_token_is_an_error() {
        let provider = IdentityProvider::Present(SensorDevice::firmware_token);
        let dev = device().with_firmware_id("UNKNOWN");
        assert!(matches!(
            resolve_identity(&provider, &dev, TABLE),
            Err(IdentityError::NoDriverData { token }) if token == "UNKNOWN"
        ));
    }
}
