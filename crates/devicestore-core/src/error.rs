//! Error types for DeviceStore.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown device type: {0}")]
    UnknownVariant(String),

    #[error("Category {category} does not match device type {variant}")]
    CategoryMismatch {
        variant: crate::device::Variant,
        category: crate::device::Category,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
