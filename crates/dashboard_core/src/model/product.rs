//! Inventory product record.

use crate::form::coerce::{self, parse_integer, parse_number};
use crate::form::{FieldError, FormRecord};
use crate::model::entity::{Entity, RecordId, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl ProductStatus {
    /// Availability implied by a stock quantity.
    pub fn for_stock(stock: Option<i64>) -> Self {
        match stock {
            Some(quantity) if quantity > 0 => Self::InStock,
            _ => Self::OutOfStock,
        }
    }
}

impl Status for ProductStatus {
    const ALL: &'static [Self] = &[Self::InStock, Self::OutOfStock];

    fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    #[serde(deserialize_with = "coerce::deserialize_number")]
    pub price: Option<f64>,
    #[serde(deserialize_with = "coerce::deserialize_integer")]
    pub stock: Option<i64>,
    pub status: ProductStatus,
    /// ISO `YYYY-MM-DD`.
    pub date_added: String,
}

impl Entity for Product {
    type Status = ProductStatus;

    const STORAGE_KEY: &'static str = "products";
    const EMPTY_MESSAGE: &'static str = "No products found. Click 'Add Product' to create one.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> ProductStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        vec![
            seed_product(
                1,
                "Wireless Headphones",
                "Electronics",
                79.99,
                45,
                "2026-01-15",
            ),
            seed_product(
                2,
                "Smart Watch",
                "Electronics",
                199.99,
                0,
                "2026-01-20",
            ),
            seed_product(
                3,
                "Coffee Maker",
                "Home Appliances",
                89.99,
                23,
                "2026-01-25",
            ),
        ]
    }
}

impl FormRecord for Product {
    const FIELDS: &'static [&'static str] =
        &["name", "category", "price", "stock", "status", "dateAdded"];

    fn blank(today: NaiveDate) -> Self {
        Self {
            date_added: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Setting `stock` also rewrites `status`; an explicit `status` set
    /// afterwards still wins.
    fn apply_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_string(),
            "category" => self.category = value.to_string(),
            "price" => self.price = parse_number(value),
            "stock" => {
                self.stock = parse_integer(value);
                self.status = ProductStatus::for_stock(self.stock);
            }
            "status" => self.status = FieldError::parse_status(name, value)?,
            "dateAdded" => self.date_added = value.to_string(),
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}

fn seed_product(
    id: RecordId,
    name: &str,
    category: &str,
    price: f64,
    stock: i64,
    date_added: &str,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price: Some(price),
        stock: Some(stock),
        status: ProductStatus::for_stock(Some(stock)),
        date_added: date_added.to_string(),
    }
}
