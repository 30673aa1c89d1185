//! Customer order record.

use crate::form::coerce::{self, parse_number};
use crate::form::{FieldError, FormRecord};
use crate::model::entity::{Entity, RecordId, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Delivered,
    Cancelled,
}

impl Status for OrderStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::Processing,
        Self::Delivered,
        Self::Cancelled,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    pub customer_name: String,
    /// ISO `YYYY-MM-DD`.
    pub order_date: String,
    pub status: OrderStatus,
    /// `None` when the entered total was not a number.
    #[serde(deserialize_with = "coerce::deserialize_number")]
    pub total: Option<f64>,
    /// Free-text line items, e.g. `Coffee Maker x1`.
    pub items: String,
}

impl Entity for Order {
    type Status = OrderStatus;

    const STORAGE_KEY: &'static str = "orders";
    const EMPTY_MESSAGE: &'static str = "No orders found. Click 'Add Order' to create one.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> OrderStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str(), self.items.as_str()]
    }

    fn display_name(&self) -> &str {
        &self.customer_name
    }

    fn seed() -> Vec<Self> {
        vec![
            seed_order(
                1,
                "John Doe",
                "2026-02-01",
                OrderStatus::Delivered,
                249.99,
                "Wireless Headphones x2",
            ),
            seed_order(
                2,
                "Jane Smith",
                "2026-02-02",
                OrderStatus::Processing,
                89.99,
                "Coffee Maker x1",
            ),
            seed_order(
                3,
                "Mike Johnson",
                "2026-01-30",
                OrderStatus::Pending,
                199.99,
                "Smart Watch x1",
            ),
        ]
    }
}

impl FormRecord for Order {
    const FIELDS: &'static [&'static str] =
        &["customerName", "orderDate", "status", "total", "items"];

    fn blank(today: NaiveDate) -> Self {
        Self {
            order_date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    fn apply_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "customerName" => self.customer_name = value.to_string(),
            "orderDate" => self.order_date = value.to_string(),
            "status" => self.status = FieldError::parse_status(name, value)?,
            "total" => self.total = parse_number(value),
            "items" => self.items = value.to_string(),
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}

fn seed_order(
    id: RecordId,
    customer_name: &str,
    order_date: &str,
    status: OrderStatus,
    total: f64,
    items: &str,
) -> Order {
    Order {
        id,
        customer_name: customer_name.to_string(),
        order_date: order_date.to_string(),
        status,
        total: Some(total),
        items: items.to_string(),
    }
}
