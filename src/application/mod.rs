//! Application layer turning payment records into request parameters.
//!
//! [`builder::ParamBuilder`] runs the build, prune and fingerprint steps for
//! each record and hands back a map ready for the transport.

pub mod builder;
