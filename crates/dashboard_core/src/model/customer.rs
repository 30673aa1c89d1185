//! Customer directory record.

use crate::form::coerce::{self, parse_integer};
use crate::form::{FieldError, FormRecord};
use crate::model::entity::{Entity, RecordId, Status};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

impl Status for CustomerStatus {
    const ALL: &'static [Self] = &[Self::Active, Self::Inactive];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(deserialize_with = "coerce::deserialize_integer")]
    pub total_orders: Option<i64>,
    pub status: CustomerStatus,
    /// ISO `YYYY-MM-DD`.
    pub joined_date: String,
}

impl Entity for Customer {
    type Status = CustomerStatus;

    const STORAGE_KEY: &'static str = "customers";
    const EMPTY_MESSAGE: &'static str = "No customers found. Click 'Add Customer' to create one.";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn status(&self) -> CustomerStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.location.as_str(),
        ]
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn seed() -> Vec<Self> {
        vec![
            Customer {
                id: 1,
                name: "John Doe".to_string(),
                email: "john.doe@email.com".to_string(),
                phone: "+1 234-567-8901".to_string(),
                location: "New York, USA".to_string(),
                total_orders: Some(12),
                status: CustomerStatus::Active,
                joined_date: "2025-06-15".to_string(),
            },
            Customer {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane.smith@email.com".to_string(),
                phone: "+1 234-567-8902".to_string(),
                location: "Los Angeles, USA".to_string(),
                total_orders: Some(8),
                status: CustomerStatus::Active,
                joined_date: "2025-08-20".to_string(),
            },
            Customer {
                id: 3,
                name: "Mike Johnson".to_string(),
                email: "mike.j@email.com".to_string(),
                phone: "+1 234-567-8903".to_string(),
                location: "Chicago, USA".to_string(),
                total_orders: Some(0),
                status: CustomerStatus::Inactive,
                joined_date: "2025-12-10".to_string(),
            },
        ]
    }
}

impl FormRecord for Customer {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "location",
        "totalOrders",
        "status",
        "joinedDate",
    ];

    fn blank(today: NaiveDate) -> Self {
        Self {
            total_orders: Some(0),
            joined_date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    fn apply_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        match name {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "location" => self.location = value.to_string(),
            "totalOrders" => self.total_orders = parse_integer(value),
            "status" => self.status = FieldError::parse_status(name, value)?,
            "joinedDate" => self.joined_date = value.to_string(),
            _ => return Err(FieldError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}
