//! DeviceStore Catalog: ordered in-memory device store with filtered lookups.

pub mod catalog;
pub mod sample;
pub mod seed;

pub use catalog::Catalog;
pub use sample::{sample_catalog, sample_devices};
pub use seed::load_seed;
