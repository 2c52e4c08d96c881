//! Domain types for building payment API parameters.
//!
//! Nothing in this layer performs I/O. The only outside input, the device
//! identity, is reached through [`ports::DeviceIdentityProvider`].

pub mod fingerprint;
pub mod params;
pub mod ports;
pub mod record;
