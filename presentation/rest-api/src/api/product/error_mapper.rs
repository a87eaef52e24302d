use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Insertion(_) | ProductError::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use uuid::Uuid;

    #[test]
    fn should_map_not_found_to_404_with_message() {
        let id = Uuid::new_v4();

        let (status, json) = ProductError::NotFound(id).into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.detail, format!("Product not found with filter: {id}"));
    }

    #[test]
    fn should_map_insertion_failure_to_500_with_message() {
        let (status, json) =
            ProductError::Insertion(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json.0.detail,
            "Error inserting product: repository.database_error"
        );
    }
}
