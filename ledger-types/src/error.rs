//! Error types for the ledger service.

use crate::domain::TransactionId;

/// Domain-level errors (business rule violations).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Updates to the {0} field are not allowed.")]
    FieldNotAllowed(String),

    #[error("Invalid Method Name: {0}")]
    InvalidMethodName(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}

/// Record store errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Application-level errors returned by the service.
///
/// Each variant carries a stable code that the transport layer exposes to clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Updates to the {0} field are not allowed.")]
    FieldNotAllowed(String),

    #[error("Invalid Method Name: {0}")]
    InvalidMethodName(String),

    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::FieldNotAllowed(_) => "FIELD_NOT_ALLOWED",
            AppError::InvalidMethodName(_) => "INVALID_METHOD_NAME",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Store(_) => "STORE_ERROR",
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(msg) => AppError::Validation(msg),
            DomainError::FieldNotAllowed(field) => AppError::FieldNotAllowed(field),
            DomainError::InvalidMethodName(name) => AppError::InvalidMethodName(name),
            DomainError::TransactionNotFound(id) => AppError::NotFound(id),
        }
    }
}
