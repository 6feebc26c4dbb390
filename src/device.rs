use crate::regmap::Regmap;

/// Static per-model capability entry, declared once by each concrete
/// driver and shared by every device of that model.
#[derive(Debug, Clone, Copy)]
pub struct SensorSettings {
    /// Whether the part wants the read flag asserted on register addresses
    /// so multi-byte reads auto-increment the register pointer.
    pub multi_read_bit: bool,
}

/// Per-device state owned by the sensor framework. Populated once during
/// attachment; the regmap slot is never reassigned afterwards.
pub struct SensorState {
    pub settings: SensorSettings,
    pub(crate) regmap: Option<Regmap>,
    pub irq: Option<i32>,
    /// Device node of the bus client this sensor sits behind.
    pub dev: Option<String>,
}

/// Generic sensor-device handle. `name` and `parent` are filled in by
/// transport configuration from the bus client's identity.
pub struct SensorDevice {
    pub id: String,
    pub name: String,
    pub parent: Option<String>,
    pub firmware_id: Option<String>,
    pub state: SensorState,
}

impl SensorDevice {
    pub fn new(id: impl Into<String>, settings: SensorSettings) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            parent: None,
            firmware_id: None,
            state: SensorState {
                settings,
                regmap: None,
                irq: None,
                dev: None,
            },
        }
    }

    pub fn with_firmware_id(mut self, token: impl Into<String>) -> Self {
        self.firmware_id = Some(token.into());
        self
    }

    /// Register-access context, present once transport configuration ran.
    pub fn regmap(&self) -> Option<&Regmap> {
        self.state.regmap.as_ref()
    }

    /// Stock lookup for `IdentityProvider::Present` on platforms that
    /// attach the firmware identity token directly to the device handle.
    pub fn firmware_token(device: &SensorDevice) -> Option<String> {
        device.firmware_id.clone()
    }
}
