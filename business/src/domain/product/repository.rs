use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    /// Products whose price lies in `[min_price, max_price]`, bounds included.
    async fn get_by_price_range(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when no row was removed.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
