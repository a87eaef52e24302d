use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: bool,
}

/// Partial update of a product. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub quantity: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: props.name,
            quantity: props.quantity,
            price: props.price,
            status: props.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        quantity: i32,
        price: f64,
        status: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            quantity,
            price,
            status,
            created_at,
            updated_at,
        }
    }

    pub fn apply(&mut self, changes: ProductChanges) {
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = changes.updated_at;
    }
}
