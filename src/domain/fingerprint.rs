//! Device fingerprinting for fraud scoring.
//!
//! Two one-way identifiers are derived from the device identity:
//!
//! * `guid` is the SHA-256 of the raw device id.
//! * `muid` is the SHA-256 of the package identifier immediately followed by
//!   the raw device id, so it changes when the same device runs another app.
//!
//! Only the digests ever leave this module.

use super::params::{ParamMap, is_blank};
use super::ports::DeviceIdentityProvider;
use sha2::{Digest, Sha256};

pub const GUID: &str = "guid";
pub const MUID: &str = "muid";

/// Lowercase hex SHA-256 of the UTF-8 bytes of `input`.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The hashed identifier pair attached to card payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub guid: Option<String>,
    pub muid: Option<String>,
}

impl Fingerprint {
    /// Derives the fingerprint from `provider`.
    ///
    /// Returns `None` when the provider has no usable device id.
    pub fn compute(provider: &dyn DeviceIdentityProvider) -> Option<Self> {
        let raw_id = provider.raw_device_id().filter(|id| !is_blank(id))?;
        let combined = format!("{}{}", provider.package_identifier(), raw_id);

        Some(Self {
            guid: non_blank(sha256_hex(&raw_id)),
            muid: non_blank(sha256_hex(&combined)),
        })
    }

    /// Adds whichever of `guid` and `muid` are present to `params`.
    pub fn apply(self, params: ParamMap) -> ParamMap {
        let params = match self.guid {
            Some(guid) => params.with(GUID, guid),
            None => params,
        };
        match self.muid {
            Some(muid) => params.with(MUID, muid),
            None => params,
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if is_blank(&value) { None } else { Some(value) }
}

/// Attaches the device fingerprint to `params`, if one can be derived.
///
/// Fingerprinting is best effort: without a device id the map comes back
/// untouched.
pub fn enrich(params: ParamMap, provider: &dyn DeviceIdentityProvider) -> ParamMap {
    match Fingerprint::compute(provider) {
        Some(fingerprint) => fingerprint.apply(params),
        None => {
            tracing::debug!("device identifier unavailable, skipping fingerprint");
            params
        }
    }
}
