use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_price_range::{
    GetProductsInPriceRangeUseCase, PriceRangeParams,
};

pub struct GetProductsInPriceRangeUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsInPriceRangeUseCase for GetProductsInPriceRangeUseCaseImpl {
    async fn execute(&self, params: PriceRangeParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Fetching products priced between {} and {}",
            params.min_price, params.max_price
        ));
        // No price compares with NaN, and infinite bounds are open ends.
        if params.min_price.is_nan() || params.max_price.is_nan() {
            return Ok(Vec::new());
        }
        let min_price = params.min_price.max(f64::MIN);
        let max_price = params.max_price.min(f64::MAX);

        let products = self
            .repository
            .get_by_price_range(min_price, max_price)
            .await?;
        self.logger
            .debug(&format!("Found {} products in price range", products.len()));
        Ok(products)
    }
}
