pub mod fixed;
pub mod platform;
