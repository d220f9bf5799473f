//! DeviceStore Core: device model, errors, configuration.

pub mod config;
pub mod device;
pub mod error;

pub use config::StoreConfig;
pub use device::{Category, Device, Variant};
pub use error::{Error, Result};
pub use rust_decimal::Decimal;
