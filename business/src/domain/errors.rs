/// Failures surfaced by repository adapters.
/// Messages are code-style identifiers so they can be translated downstream.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No row matched the requested identifier.
    #[error("repository.not_found")]
    NotFound,
    /// A stored value could not be mapped to or from the domain model.
    #[error("repository.persistence")]
    Persistence,
    /// The database rejected or failed the query.
    #[error("repository.database_error")]
    DatabaseError,
}
