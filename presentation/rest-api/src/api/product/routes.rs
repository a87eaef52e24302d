use std::sync::Arc;

use chrono::Utc;
use poem::http::StatusCode;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_by_price_range::{
    GetProductsInPriceRangeUseCase, PriceRangeParams,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductRequest, ProductResponse, ProductUpdateResponse, UpdateProductRequest,
};
use crate::api::tags::ApiTags;

/// Detail returned when a PATCH targets an unknown product.
pub const UPDATE_NOT_FOUND_DETAIL: &str = "Produto não encontrado. Por favor, tente novamente.";

/// Failures an endpoint does not translate end up as a bare 500.
fn unhandled(operation: &str, err: impl std::fmt::Display) -> poem::Error {
    tracing::error!(operation, error = %err, "unhandled product failure");
    poem::Error::from_status(StatusCode::INTERNAL_SERVER_ERROR)
}

fn into_responses(products: Vec<Product>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_by_price_range_use_case: Arc<dyn GetProductsInPriceRangeUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_by_price_range_use_case: Arc<dyn GetProductsInPriceRangeUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_price_range_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product management API
///
/// Endpoints for creating, reading, updating, and deleting store products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Any failure while creating is reported as a 500 carrying its message.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<CreateProductRequest>) -> CreateProductResponse {
        match self.create_use_case.execute(body.0.into()).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                if status != StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::warn!(%status, "create failure reported as 500");
                }
                CreateProductResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<Uuid>) -> poem::Result<GetProductByIdResponse> {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => Ok(GetProductByIdResponse::Ok(Json(product.into()))),
            Err(err) => match err.into_error_response() {
                (StatusCode::NOT_FOUND, json) => Ok(GetProductByIdResponse::NotFound(json)),
                (_, json) => Err(unhandled("get_product_by_id", json.0.detail)),
            },
        }
    }

    /// List all products
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> poem::Result<Json<Vec<ProductResponse>>> {
        let products = self
            .get_all_use_case
            .execute()
            .await
            .map_err(|err| unhandled("get_all_products", err))?;
        Ok(Json(into_responses(products)))
    }

    /// List products within a price range
    ///
    /// Returns the products whose price lies between `minimum_price` and
    /// `maximum_price`, bounds included.
    #[oai(
        path = "/products/products/price-range",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_products_by_price_range(
        &self,
        minimum_price: Query<f64>,
        maximum_price: Query<f64>,
    ) -> poem::Result<Json<Vec<ProductResponse>>> {
        let products = self
            .get_by_price_range_use_case
            .execute(PriceRangeParams {
                min_price: minimum_price.0,
                max_price: maximum_price.0,
            })
            .await
            .map_err(|err| unhandled("get_products_by_price_range", err))?;
        Ok(Json(into_responses(products)))
    }

    /// Update a product
    ///
    /// Applies a partial update. The update timestamp is always set by the server.
    #[oai(path = "/products/:id", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<Uuid>,
        body: Json<UpdateProductRequest>,
    ) -> poem::Result<UpdateProductResponse> {
        let params = UpdateProductParams {
            id: id.0,
            changes: body.0.into_changes(Utc::now()),
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => Ok(UpdateProductResponse::Ok(Json(product.into()))),
            Err(ProductError::NotFound(_)) => Ok(UpdateProductResponse::NotFound(Json(
                ErrorResponse::new(UPDATE_NOT_FOUND_DETAIL),
            ))),
            Err(err) => Err(unhandled("update_product", err)),
        }
    }

    /// Delete a product
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<Uuid>) -> poem::Result<DeleteProductResponse> {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => Ok(DeleteProductResponse::NoContent),
            Err(err) => match err.into_error_response() {
                (StatusCode::NOT_FOUND, json) => Ok(DeleteProductResponse::NotFound(json)),
                (_, json) => Err(unhandled("delete_product", json.0.detail)),
            },
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductUpdateResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
