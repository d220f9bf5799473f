//! Device model: categories, constructor variants and the device record.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of a device as shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Laptop,
    Phone,
    HeadPhones,
    Case,
    Tablet,
    Charger,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Laptop,
        Category::Phone,
        Category::HeadPhones,
        Category::Case,
        Category::Tablet,
        Category::Charger,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Phone => "Phone",
            Self::HeadPhones => "HeadPhones",
            Self::Case => "Case",
            Self::Tablet => "Tablet",
            Self::Charger => "Charger",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// The constructor a device was built with.
///
/// Type queries match on this tag rather than on [`Category`], which is
/// mutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Laptop,
    Phone,
    Tablet,
    Charger,
    Case,
    HeadPhone,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Laptop,
        Variant::Phone,
        Variant::Tablet,
        Variant::Charger,
        Variant::Case,
        Variant::HeadPhone,
    ];

    /// Category a device of this variant starts with.
    pub fn category(&self) -> Category {
        match self {
            Self::Laptop => Category::Laptop,
            Self::Phone => Category::Phone,
            Self::Tablet => Category::Tablet,
            Self::Charger => Category::Charger,
            Self::Case => Category::Case,
            Self::HeadPhone => Category::HeadPhones,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Laptop => "Laptop",
            Self::Phone => "Phone",
            Self::Tablet => "Tablet",
            Self::Charger => "Charger",
            Self::Case => "Case",
            Self::HeadPhone => "HeadPhone",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts the variant name or its category name, ignoring ASCII case,
    /// so both `headphone` and `headphones` resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| {
                v.name().eq_ignore_ascii_case(wanted)
                    || v.category().name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DeviceRecord")]
pub struct Device {
    #[serde(rename = "type")]
    variant: Variant,
    price: Decimal,
    vendor: String,
    category: Category,
    year_of_release: i32,
    warranty: i32,
    model: String,
}

/// Wire shape of a device. `category` may be omitted; when present it must
/// match the category the variant implies.
#[derive(Deserialize)]
struct DeviceRecord {
    #[serde(rename = "type")]
    variant: Variant,
    price: Decimal,
    vendor: String,
    #[serde(default)]
    category: Option<Category>,
    year_of_release: i32,
    warranty: i32,
    model: String,
}

impl TryFrom<DeviceRecord> for Device {
    type Error = Error;

    fn try_from(r: DeviceRecord) -> Result<Self, Self::Error> {
        let expected = r.variant.category();
        if let Some(category) = r.category {
            if category != expected {
                return Err(Error::CategoryMismatch {
                    variant: r.variant,
                    category,
                });
            }
        }
        Ok(Self {
            category: expected,
            variant: r.variant,
            price: r.price,
            vendor: r.vendor,
            year_of_release: r.year_of_release,
            warranty: r.warranty,
            model: r.model,
        })
    }
}

impl Device {
    /// Create a device of the given variant. The category follows the variant.
    pub fn new(
        variant: Variant,
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            price,
            vendor: vendor.into(),
            category: variant.category(),
            year_of_release,
            warranty,
            model: model.into(),
        }
    }

    pub fn laptop(
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self::new(Variant::Laptop, price, vendor, year_of_release, warranty, model)
    }

    pub fn phone(
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self::new(Variant::Phone, price, vendor, year_of_release, warranty, model)
    }

    pub fn tablet(
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self::new(Variant::Tablet, price, vendor, year_of_release, warranty, model)
    }

    pub fn charger(
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self::new(Variant::Charger, price, vendor, year_of_release, warranty, model)
    }

    pub fn case(
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self::new(Variant::Case, price, vendor, year_of_release, warranty, model)
    }

    pub fn headphone(
        price: Decimal,
        vendor: impl Into<String>,
        year_of_release: i32,
        warranty: i32,
        model: impl Into<String>,
    ) -> Self {
        Self::new(Variant::HeadPhone, price, vendor, year_of_release, warranty, model)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn set_vendor(&mut self, vendor: impl Into<String>) {
        self.vendor = vendor.into();
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Overwrite the category. The variant tag is left untouched.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    pub fn year_of_release(&self) -> i32 {
        self.year_of_release
    }

    pub fn set_year_of_release(&mut self, year: i32) {
        self.year_of_release = year;
    }

    pub fn warranty(&self) -> i32 {
        self.warranty
    }

    pub fn set_warranty(&mut self, warranty: i32) {
        self.warranty = warranty;
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}) - {}$",
            self.vendor, self.model, self.category, self.year_of_release, self.price
        )
    }
}
