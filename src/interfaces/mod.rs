//! Adapters between the outside world and the builder: CSV in, JSON out.

pub mod csv;
pub mod json;
