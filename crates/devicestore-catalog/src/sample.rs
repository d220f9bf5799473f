//! Built-in sample catalog used by the demo and tests.

use rust_decimal_macros::dec;

use devicestore_core::Device;

use crate::catalog::Catalog;

/// The five sample devices, in insertion order.
pub fn sample_devices() -> Vec<Device> {
    vec![
        Device::laptop(dec!(1000), "Asus", 2024, 3, "Tuf"),
        Device::phone(dec!(750), "Samsung", 2023, 2, "Galaxy"),
        Device::tablet(dec!(299), "IPAD", 2022, 1, "10th"),
        Device::charger(dec!(50), "Aiccolo", 2024, 2, "Fast charger 20W"),
        Device::case(dec!(30), "OtterBox", 2023, 1, "Galaxy S23 Case"),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_devices(sample_devices())
}
