//! Service error taxonomy.
//!
//! Every failure that leaves a service is one of three kinds. Callers classify
//! them by variant, never by inspecting message text.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

/// Failure signalled by a storage collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found")]
    NotFound,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        if matches!(error, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Caller supplied input that violates a field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error on field '{field}': {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    pub const fn required(field: &'static str) -> Self {
        Self::new(field, "required")
    }

    pub const fn invalid_format(field: &'static str) -> Self {
        Self::new(field, "invalid format")
    }
}

/// Kind of resource a [`NotFoundError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Product,
    SubscriptionPlan,
}

impl ResourceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::SubscriptionPlan => "SubscriptionPlan",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A referenced resource is absent or tombstoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource} with ID '{id}' not found")]
pub struct NotFoundError {
    pub resource: ResourceKind,
    pub id: String,
}

impl NotFoundError {
    pub fn new(resource: ResourceKind, id: impl Display) -> Self {
        Self {
            resource,
            id: id.to_string(),
        }
    }
}

/// The storage collaborator failed while performing `operation`.
///
/// The display text names the operation only; the collaborator's error stays
/// reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("database operation '{operation}' failed")]
pub struct DatabaseError {
    pub operation: &'static str,

    #[source]
    pub source: StorageError,
}

impl DatabaseError {
    pub fn new(operation: &'static str, source: impl Into<StorageError>) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }
}

/// Wrap a storage failure with the operation that was being attempted.
pub(crate) fn storage_failure(operation: &'static str) -> impl FnOnce(StorageError) -> ServiceError {
    move |source| {
        tracing::warn!(operation, error = ?source, "storage operation failed");

        DatabaseError::new(operation, source).into()
    }
}

/// Error returned by every service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// Field name carried by a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(error) => Some(error.field),
            Self::NotFound(_) | Self::Database(_) => None,
        }
    }
}
