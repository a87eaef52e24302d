use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::use_cases::create::CreateProductParams;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
    /// Whether the product is available for sale
    pub status: bool,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            quantity: body.quantity,
            price: body.price,
            status: body.status,
        }
    }
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Units in stock
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
    /// Unit price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Whether the product is available for sale
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<bool>,
    /// Ignored: the server stamps the update time itself
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UpdateProductRequest {
    /// Builds the domain changes, stamping them with `now` whatever the client sent.
    pub fn into_changes(self, now: DateTime<Utc>) -> ProductChanges {
        ProductChanges {
            quantity: self.quantity,
            price: self.price,
            status: self.status,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: i32,
    /// Unit price
    pub price: f64,
    /// Whether the product is available for sale
    pub status: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductUpdateResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductUpdateResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            price: product.price,
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
