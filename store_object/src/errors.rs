use crate::validation::IdentifierError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Bad arguments, unknown columns, missing required or audit fields, malformed sort directives
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The store does not hold what the caller claimed it holds (e.g. a batch of ids)
    #[error("Consistency error: {0}")]
    Consistency(String),

    #[error("Database error in {table}.{operation}: {source}")]
    Database {
        table: String,
        operation: String,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        StoreError::NotFound(message.into())
    }

    pub fn consistency(message: impl Into<String>) -> Self {
        StoreError::Consistency(message.into())
    }

    pub fn database_operation(table: &str, operation: &str, source: sqlx::Error) -> Self {
        StoreError::Database {
            table: table.to_string(),
            operation: operation.to_string(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    pub fn is_consistency(&self) -> bool {
        matches!(self, StoreError::Consistency(_))
    }

    pub fn is_database(&self) -> bool {
        matches!(self, StoreError::Database { .. })
    }
}

impl From<IdentifierError> for StoreError {
    fn from(err: IdentifierError) -> Self {
        StoreError::Validation(err.to_string())
    }
}
