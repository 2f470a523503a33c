use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length for a product name.
pub const MIN_NAME_LEN: usize = 3;

/// Maximum length for a product description.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Minimum accepted price.
pub const MIN_PRICE: f64 = 0.01;

/// A catalog product as stored by the server and cached by the client.
///
/// `category`, `created_at` and `updated_at` are part of the wire shape but
/// are never populated by the server; they only appear in the payload when
/// some other producer filled them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PartialEq<Self> for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

/// The mutable fields of a product, as submitted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: u32,
}

/// A field constraint violation on submitted product data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at least {MIN_NAME_LEN} characters")]
    NameTooShort,
    #[error("description must be at most {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,
    #[error("price must be at least {MIN_PRICE}")]
    PriceNotPositive,
}

impl ProductData {
    /// Checks every field constraint and returns all violations at once, so
    /// callers can surface them per field.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < MIN_NAME_LEN {
            errors.push(ValidationError::NameTooShort);
        }

        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                errors.push(ValidationError::DescriptionTooLong);
            }
        }

        // `!(>=)` instead of `<` so a NaN price is rejected too.
        if !(self.price >= MIN_PRICE) {
            errors.push(ValidationError::PriceNotPositive);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
