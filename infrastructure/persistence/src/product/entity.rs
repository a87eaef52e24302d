use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: BigDecimal,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let price = self.price.to_f64().ok_or(RepositoryError::Persistence)?;
        Ok(Product::from_repository(
            self.id,
            self.name,
            self.quantity,
            price,
            self.status,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Converts a domain price into the NUMERIC column representation.
pub fn price_to_decimal(price: f64) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_f64(price).ok_or(RepositoryError::Persistence)
}
