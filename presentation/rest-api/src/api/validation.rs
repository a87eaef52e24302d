use poem::http::StatusCode;
use poem::web::Json;
use poem::{Endpoint, EndpointExt, IntoEndpoint, IntoResponse, Response};
use poem_openapi::error::{ParseParamError, ParsePathError, ParseRequestPayloadError};

use crate::api::error::ErrorResponse;

fn unprocessable(detail: String) -> Response {
    tracing::debug!(detail = %detail, "rejecting request that failed validation");
    (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorResponse::new(detail))).into_response()
}

/// Turns request validation failures into `422 Unprocessable Entity`.
///
/// Path, query and body extraction happens before a handler runs, so a
/// malformed identifier or payload never reaches the use cases.
pub fn reject_invalid_input<E: IntoEndpoint>(ep: E) -> impl Endpoint<Output = Response> {
    ep.into_endpoint()
        .catch_error(|err: ParsePathError| async move { unprocessable(err.to_string()) })
        .catch_error(|err: ParseParamError| async move { unprocessable(err.to_string()) })
        .catch_error(|err: ParseRequestPayloadError| async move {
            unprocessable(err.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::test::TestClient;
    use poem_openapi::{OpenApi, OpenApiService, param::Path, payload::PlainText};
    use uuid::Uuid;

    struct EchoApi;

    #[OpenApi]
    impl EchoApi {
        #[oai(path = "/echo/:id", method = "get")]
        async fn echo(&self, id: Path<Uuid>) -> PlainText<String> {
            PlainText(id.0.to_string())
        }
    }

    fn client() -> TestClient<impl Endpoint<Output = Response>> {
        TestClient::new(reject_invalid_input(OpenApiService::new(
            EchoApi, "Echo", "test",
        )))
    }

    #[tokio::test]
    async fn should_reject_malformed_path_uuid_with_422() {
        let resp = client().get("/echo/not-a-uuid").send().await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: serde_json::Value = resp.0.into_body().into_json().await.unwrap();
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .starts_with("failed to parse path")
        );
    }

    #[tokio::test]
    async fn should_pass_well_formed_uuid_through() {
        let id = Uuid::new_v4();

        let resp = client().get(format!("/echo/{id}")).send().await;

        resp.assert_status_is_ok();
        resp.assert_text(id.to_string()).await;
    }
}
