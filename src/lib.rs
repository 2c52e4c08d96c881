//! Builds the request parameters a payment API expects for cards and bank
//! accounts, including the hashed device fingerprint sent with card tokens.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
