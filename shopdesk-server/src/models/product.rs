//! Product schema
//!
//! `ProductPayload` is the raw JSON body; `NewProduct` is the validated form
//! the catalog accepts.

use serde::{Deserialize, Serialize};

use super::validation::{bounded_text, ValidationError};

/// Maximum length for product names
const MAX_NAME_LEN: usize = 128;

/// Maximum length for product descriptions
const MAX_DESCRIPTION_LEN: usize = 1024;

/// Incoming product body
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: i64,
    #[serde(alias = "desc")]
    pub description: String,
}

/// Validated product fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    price: i64,
    description: String,
}

impl NewProduct {
    /// Validate a product.
    ///
    /// # Rules
    /// - Name: non-empty after trimming, max 128 characters
    /// - Price: zero or positive
    /// - Description: may be empty, max 1024 characters
    pub fn new(name: &str, price: i64, description: &str) -> Result<Self, ValidationError> {
        let name = bounded_text("name", name, MAX_NAME_LEN)?;

        if price < 0 {
            return Err(ValidationError::OutOfRange {
                field: "price",
                min: 0,
                max: i64::MAX,
            });
        }

        let description = description.trim();
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }

        Ok(Self {
            name,
            price,
            description: description.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<ProductPayload> for NewProduct {
    type Error = ValidationError;

    fn try_from(p: ProductPayload) -> Result<Self, Self::Error> {
        Self::new(&p.name, p.price, &p.description)
    }
}

/// Product record held by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: i64,
    pub description: String,
}

impl Product {
    pub(crate) fn from_new(id: u64, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            price: new.price,
            description: new.description,
        }
    }

    /// Overwrite every field except the id.
    pub(crate) fn replace_with(&mut self, new: NewProduct) {
        self.name = new.name;
        self.price = new.price;
        self.description = new.description;
    }
}
