//! In-memory device catalog.
//!
//! Devices are kept in insertion order and every query is a full scan, so
//! results always come back in the order devices were added.

use regex::RegexBuilder;
use rust_decimal::Decimal;
use tracing::debug;

use devicestore_core::{Device, Result, Variant};

/// Ordered, append-only collection of devices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog holding `devices` in iteration order.
    pub fn from_devices(devices: impl IntoIterator<Item = Device>) -> Self {
        devices.into_iter().collect()
    }

    /// Append a device. Duplicate models are allowed.
    pub fn add_device(&mut self, device: Device) {
        debug!(model = device.model(), variant = %device.variant(), "Adding device");
        self.devices.push(device);
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }

    // ---------------------------------------------------------------
    // Filter queries
    // ---------------------------------------------------------------

    /// Devices priced within `[min, max]`, both ends inclusive.
    pub fn find_by_price_range(&self, min: Decimal, max: Decimal) -> Vec<&Device> {
        let hits: Vec<&Device> = self
            .devices
            .iter()
            .filter(|d| in_range(d, min, max))
            .collect();
        debug!(%min, %max, matched = hits.len(), "find_by_price_range");
        hits
    }

    /// Devices whose model contains a match for `pattern`.
    ///
    /// The pattern is a case-insensitive, unanchored regular expression
    /// tested against the model only (not the vendor). A pattern that does
    /// not compile yields [`devicestore_core::Error::InvalidPattern`].
    /// Patterns use `regex` crate syntax, which has no look-around or
    /// backreferences; such patterns are rejected as invalid.
    pub fn find_by_model(&self, pattern: &str) -> Result<Vec<&Device>> {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        let hits: Vec<&Device> = self
            .devices
            .iter()
            .filter(|d| re.is_match(d.model()))
            .collect();
        debug!(pattern, matched = hits.len(), "find_by_model");
        Ok(hits)
    }

    /// Devices released in `year`.
    pub fn find_by_year(&self, year: i32) -> Vec<&Device> {
        let hits: Vec<&Device> = self
            .devices
            .iter()
            .filter(|d| d.year_of_release() == year)
            .collect();
        debug!(year, matched = hits.len(), "find_by_year");
        hits
    }

    /// Devices constructed as `variant`, regardless of their current category.
    pub fn find_by_type(&self, variant: Variant) -> Vec<&Device> {
        let hits: Vec<&Device> = self
            .devices
            .iter()
            .filter(|d| d.variant() == variant)
            .collect();
        debug!(%variant, matched = hits.len(), "find_by_type");
        hits
    }

    // ---------------------------------------------------------------
    // First-match lookups
    // ---------------------------------------------------------------

    /// First device whose model equals `model`, ignoring case.
    pub fn get_by_model(&self, model: &str) -> Option<&Device> {
        let hit = self.devices.iter().find(|d| eq_ignore_case(d.model(), model));
        debug!(model, found = hit.is_some(), "get_by_model");
        hit
    }

    /// First device priced within `[min, max]`.
    pub fn first_in_price_range(&self, min: Decimal, max: Decimal) -> Option<&Device> {
        let hit = self.devices.iter().find(|d| in_range(d, min, max));
        debug!(%min, %max, found = hit.is_some(), "first_in_price_range");
        hit
    }
}

fn in_range(device: &Device, min: Decimal, max: Decimal) -> bool {
    device.price() >= min && device.price() <= max
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

impl FromIterator<Device> for Catalog {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<Device> for Catalog {
    fn extend<I: IntoIterator<Item = Device>>(&mut self, iter: I) {
        for device in iter {
            self.add_device(device);
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_catalog;
    use devicestore_core::{Category, Error};
    use rust_decimal_macros::dec;

    fn models<'a>(devices: &[&'a Device]) -> Vec<&'a str> {
        devices.iter().map(|d| d.model()).collect()
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.add_device(Device::phone(dec!(100), "A", 2020, 1, "X"));
        catalog.add_device(Device::phone(dec!(200), "B", 2021, 1, "X"));
        catalog.add_device(Device::tablet(dec!(300), "C", 2022, 1, "Y"));

        assert_eq!(catalog.len(), 3);
        let vendors: Vec<&str> = catalog.iter().map(|d| d.vendor()).collect();
        assert_eq!(vendors, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_price_range_sample() {
        let catalog = sample_catalog();
        let hits = catalog.find_by_price_range(dec!(25), dec!(100));
        assert_eq!(models(&hits), vec!["Fast charger 20W", "Galaxy S23 Case"]);
        assert_eq!(hits[0].price(), dec!(50));
        assert_eq!(hits[1].price(), dec!(30));
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let catalog = sample_catalog();
        let hits = catalog.find_by_price_range(dec!(30), dec!(50));
        assert_eq!(models(&hits), vec!["Fast charger 20W", "Galaxy S23 Case"]);

        let exact = catalog.find_by_price_range(dec!(1000), dec!(1000));
        assert_eq!(models(&exact), vec!["Tuf"]);
    }

    #[test]
    fn test_price_range_empty_and_inverted() {
        let catalog = sample_catalog();
        assert!(catalog.find_by_price_range(dec!(1), dec!(10)).is_empty());
        assert!(catalog.find_by_price_range(dec!(100), dec!(25)).is_empty());
    }

    #[test]
    fn test_find_by_model_searches_model_only() {
        let catalog = sample_catalog();
        // "Samsung" is a vendor, not a model.
        let hits = catalog.find_by_model("Samsung").unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_find_by_model_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let hits = catalog.find_by_model("galaxy").unwrap();
        assert_eq!(models(&hits), vec!["Galaxy", "Galaxy S23 Case"]);

        let hits = catalog.find_by_model("S23").unwrap();
        assert_eq!(models(&hits), vec!["Galaxy S23 Case"]);
    }

    #[test]
    fn test_find_by_model_uses_regex() {
        let catalog = sample_catalog();
        let anchored = catalog.find_by_model("^galaxy$").unwrap();
        assert_eq!(models(&anchored), vec!["Galaxy"]);

        let digits = catalog.find_by_model(r"\d+W").unwrap();
        assert_eq!(models(&digits), vec!["Fast charger 20W"]);

        let alt = catalog.find_by_model("tuf|10th").unwrap();
        assert_eq!(models(&alt), vec!["Tuf", "10th"]);
    }

    #[test]
    fn test_find_by_model_invalid_pattern() {
        let catalog = sample_catalog();
        let result = catalog.find_by_model("[abc");
        assert!(matches!(result, Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn test_find_by_model_rejects_lookaround_and_backrefs() {
        let catalog = sample_catalog();
        assert!(matches!(
            catalog.find_by_model("Galaxy(?= S23)"),
            Err(Error::InvalidPattern(_))
        ));
        assert!(matches!(
            catalog.find_by_model(r"(a)\1"),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_find_by_model_invalid_pattern_on_empty_catalog() {
        let catalog = Catalog::new();
        assert!(matches!(catalog.find_by_model("(unclosed"), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn test_find_by_year() {
        let catalog = sample_catalog();
        assert_eq!(models(&catalog.find_by_year(2022)), vec!["10th"]);
        assert_eq!(
            models(&catalog.find_by_year(2024)),
            vec!["Tuf", "Fast charger 20W"]
        );
        assert!(catalog.find_by_year(1999).is_empty());
    }

    #[test]
    fn test_find_by_type() {
        let catalog = sample_catalog();
        assert_eq!(models(&catalog.find_by_type(Variant::Laptop)), vec!["Tuf"]);
        assert_eq!(models(&catalog.find_by_type(Variant::Case)), vec!["Galaxy S23 Case"]);
        assert!(catalog.find_by_type(Variant::HeadPhone).is_empty());
    }

    #[test]
    fn test_find_by_type_ignores_category() {
        let mut laptop = Device::laptop(dec!(1000), "Asus", 2024, 3, "Tuf");
        laptop.set_category(Category::Phone);
        let catalog = Catalog::from_devices([
            laptop,
            Device::phone(dec!(750), "Samsung", 2023, 2, "Galaxy"),
        ]);

        assert_eq!(models(&catalog.find_by_type(Variant::Laptop)), vec!["Tuf"]);
        assert_eq!(models(&catalog.find_by_type(Variant::Phone)), vec!["Galaxy"]);
    }

    #[test]
    fn test_get_by_model() {
        let catalog = sample_catalog();
        let tablet = catalog.get_by_model("10th").unwrap();
        assert_eq!(tablet.variant(), Variant::Tablet);
        assert_eq!(tablet.vendor(), "IPAD");

        assert_eq!(catalog.get_by_model("TUF").unwrap().model(), "Tuf");
    }

    #[test]
    fn test_get_by_model_requires_full_match() {
        let catalog = sample_catalog();
        assert!(catalog.get_by_model("Galax").is_none());
        assert!(catalog.get_by_model("Galaxy S23").is_none());
        assert!(catalog.get_by_model("").is_none());
        // Regex syntax is taken literally.
        assert!(catalog.get_by_model("Galaxy.*").is_none());
    }

    #[test]
    fn test_get_by_model_returns_first_duplicate() {
        let catalog = Catalog::from_devices([
            Device::phone(dec!(100), "First", 2020, 1, "Pixel"),
            Device::phone(dec!(200), "Second", 2021, 1, "pixel"),
        ]);
        assert_eq!(catalog.get_by_model("PIXEL").unwrap().vendor(), "First");
    }

    #[test]
    fn test_first_in_price_range() {
        let catalog = sample_catalog();
        let phone = catalog.first_in_price_range(dec!(700), dec!(800)).unwrap();
        assert_eq!(phone.model(), "Galaxy");
        assert_eq!(phone.price(), dec!(750));

        let first_cheap = catalog.first_in_price_range(dec!(0), dec!(100)).unwrap();
        assert_eq!(first_cheap.model(), "Fast charger 20W");

        assert!(catalog.first_in_price_range(dec!(1001), dec!(5000)).is_none());
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let catalog = sample_catalog();
        let before = catalog.devices().to_vec();
        let _ = catalog.find_by_price_range(dec!(0), dec!(10000));
        let _ = catalog.find_by_model(".*").unwrap();
        let _ = catalog.find_by_year(2023);
        let _ = catalog.find_by_type(Variant::Phone);
        let _ = catalog.get_by_model("Tuf");
        let _ = catalog.first_in_price_range(dec!(0), dec!(10000));
        assert_eq!(catalog.devices(), before.as_slice());
    }

    #[test]
    fn test_eq_ignore_case_unicode() {
        assert!(eq_ignore_case("Ёлка", "ёЛКА"));
        assert!(!eq_ignore_case("abc", "abcd"));
    }
}
