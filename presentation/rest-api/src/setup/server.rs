use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::validation::reject_invalid_input;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Builds the routed application: product and health APIs behind the
    /// validation stage, plus Swagger UI and the OpenAPI document.
    pub fn app(container: DependencyContainer, public_url: String) -> impl Endpoint {
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Store API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest("/", reject_invalid_input(api_service))
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let public_url = format!("http://{}", addr);
        let app = Self::app(container, public_url.clone())
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at {}", public_url);
        tracing::info!("Swagger UI at {}/docs", public_url);
        tracing::info!("OpenAPI JSON at {}/openapi.json", public_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use business::domain::product::model::Product;
    use business::domain::product::repository::ProductRepository;
    use chrono::Utc;
    use mockall::mock;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use serde_json::{Value, json};
    use uuid::Uuid;

    mock! {
        pub Repo {}

        #[async_trait]
        impl ProductRepository for Repo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_price_range(
                &self,
                min_price: f64,
                max_price: f64,
            ) -> Result<Vec<Product>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    fn client(repo: MockRepo) -> TestClient<impl Endpoint> {
        let container = DependencyContainer::with_repository(Arc::new(repo));
        TestClient::new(Server::app(container, "http://127.0.0.1:8080".to_string()))
    }

    #[tokio::test]
    async fn should_serve_health_and_openapi_document() {
        let cli = client(MockRepo::new());

        cli.get("/health").send().await.assert_status_is_ok();
        cli.get("/openapi.json").send().await.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_create_through_wired_use_case_and_repository() {
        let mut repo = MockRepo::new();
        repo.expect_save()
            .withf(|p| p.name == "Galaxy S23" && p.quantity == 3)
            .times(1)
            .returning(|_| Ok(()));
        let cli = client(repo);

        let resp = cli
            .post("/products")
            .body_json(&json!({ "name": "Galaxy S23", "quantity": 3, "price": 5200.0, "status": true }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn should_return_404_when_repository_has_no_such_product() {
        let mut repo = MockRepo::new();
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));
        let cli = client(repo);
        let id = Uuid::new_v4();

        let resp = cli.delete(format!("/products/{id}")).send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["detail"], format!("Product not found with filter: {id}"));
    }

    #[tokio::test]
    async fn should_keep_untouched_fields_when_patching_through_stack() {
        let id = Uuid::new_v4();
        let created = Utc::now() - chrono::Duration::days(1);
        let mut repo = MockRepo::new();
        repo.expect_get_by_id().returning(move |_| {
            Ok(Product::from_repository(
                id,
                "Pixel 8".to_string(),
                7,
                4_100.0,
                true,
                created,
                created,
            ))
        });
        repo.expect_save()
            .withf(move |p| p.quantity == 7 && p.price == 3_999.0 && p.updated_at > created)
            .times(1)
            .returning(|_| Ok(()));
        let cli = client(repo);

        let resp = cli
            .patch(format!("/products/{id}"))
            .body_json(&json!({ "price": 3999.0 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let body: Value = resp.0.into_body().into_json().await.unwrap();
        assert_eq!(body["price"], 3999.0);
        assert_eq!(body["quantity"], 7);
        assert_eq!(body["name"], "Pixel 8");
    }
}
