use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Inclusive price bounds.
pub struct PriceRangeParams {
    pub min_price: f64,
    pub max_price: f64,
}

#[async_trait]
pub trait GetProductsInPriceRangeUseCase: Send + Sync {
    async fn execute(&self, params: PriceRangeParams) -> Result<Vec<Product>, ProductError>;
}
