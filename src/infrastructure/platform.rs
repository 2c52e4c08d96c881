use crate::domain::params::is_blank;
use crate::domain::ports::DeviceIdentityProvider;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of the persistent machine identifier, in lookup order.
pub const MACHINE_ID_PATHS: [&str; 2] = ["/etc/machine-id", "/var/lib/dbus/machine-id"];

/// Package identifier reported when none is configured.
pub const DEFAULT_PACKAGE_IDENTIFIER: &str = env!("CARGO_PKG_NAME");

/// Reads the device identity from the host.
///
/// The device id is the machine identifier kept by the operating system,
/// which survives reboots. The package identifier is configured by the
/// embedding application.
#[derive(Debug, Clone)]
pub struct PlatformDeviceIdentity {
    id_paths: Vec<PathBuf>,
    package_identifier: String,
}

impl PlatformDeviceIdentity {
    pub fn new(package_identifier: impl Into<String>) -> Self {
        Self {
            id_paths: MACHINE_ID_PATHS.iter().map(PathBuf::from).collect(),
            package_identifier: package_identifier.into(),
        }
    }

    /// Looks the device id up in `paths` instead of the system locations.
    pub fn with_id_paths<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        self.id_paths = paths.iter().map(|path| path.as_ref().to_path_buf()).collect();
        self
    }
}

impl Default for PlatformDeviceIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE_IDENTIFIER)
    }
}

impl DeviceIdentityProvider for PlatformDeviceIdentity {
    fn raw_device_id(&self) -> Option<String> {
        self.id_paths.iter().find_map(|path| match fs::read_to_string(path) {
            Ok(contents) if !is_blank(&contents) => Some(contents.trim().to_string()),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "machine id not readable");
                None
            }
        })
    }

    fn package_identifier(&self) -> String {
        self.package_identifier.clone()
    }
}
