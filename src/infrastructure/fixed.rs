use crate::domain::ports::DeviceIdentityProvider;

/// A device identity with values chosen by the caller.
///
/// Used in tests and whenever the device id comes from configuration rather
/// than from the host.
#[derive(Debug, Clone, Default)]
pub struct FixedDeviceIdentity {
    raw_device_id: Option<String>,
    package_identifier: String,
}

impl FixedDeviceIdentity {
    pub fn new(raw_device_id: impl Into<String>, package_identifier: impl Into<String>) -> Self {
        Self {
            raw_device_id: Some(raw_device_id.into()),
            package_identifier: package_identifier.into(),
        }
    }

    /// An identity for a device that exposes no identifier at all.
    pub fn without_device_id(package_identifier: impl Into<String>) -> Self {
        Self {
            raw_device_id: None,
            package_identifier: package_identifier.into(),
        }
    }
}

impl DeviceIdentityProvider for FixedDeviceIdentity {
    fn raw_device_id(&self) -> Option<String> {
        self.raw_device_id.clone()
    }

    fn package_identifier(&self) -> String {
        self.package_identifier.clone()
    }
}
