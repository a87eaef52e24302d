use uuid::Uuid;

use crate::domain::errors::RepositoryError;

/// Failures raised by the product use cases.
///
/// Every variant renders a human readable message; the REST layer surfaces
/// it as the `detail` of error responses.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product not found with filter: {0}")]
    NotFound(Uuid),
    #[error("Error inserting product: {0}")]
    Insertion(#[source] RepositoryError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps a repository failure for a lookup by `id`, turning a missing row into `NotFound`.
    pub fn lookup(id: Uuid, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound(id),
            other => ProductError::Repository(other),
        }
    }
}
