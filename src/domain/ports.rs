/// Source of the identifiers a device fingerprint is derived from.
///
/// Implementations must be cheap to call: the builder reads them once per
/// card payload.
pub trait DeviceIdentityProvider: Send + Sync {
    /// The persistent identifier of this device or install, if one is available.
    fn raw_device_id(&self) -> Option<String>;
    /// The identifier of the running application.
    fn package_identifier(&self) -> String;
}

pub type DeviceIdentityProviderBox = Box<dyn DeviceIdentityProvider>;
