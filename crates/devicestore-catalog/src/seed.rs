//! Loading a catalog from a JSON seed file.
//!
//! A seed is a JSON array of devices, for example:
//!
//! ```json
//! [{"type": "Phone", "price": "750", "vendor": "Samsung",
//!   "year_of_release": 2023, "warranty": 2, "model": "Galaxy"}]
//! ```
//!
//! The file is only read; nothing is ever written back.

use std::path::Path;

use tracing::info;

use devicestore_core::{Device, Result};

use crate::catalog::Catalog;

/// Read `path` and build a catalog from its devices, keeping file order.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let devices: Vec<Device> = serde_json::from_str(&raw)?;
    let catalog = Catalog::from_devices(devices);
    info!("Loaded {} devices from {}", catalog.len(), path.display());
    Ok(catalog)
}
