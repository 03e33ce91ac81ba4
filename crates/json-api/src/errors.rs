//! API error responses.
//!
//! Service failures are classified by variant into an [`ErrorCode`] and
//! rendered as a JSON [`ErrorResponse`].

use salvo::{
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use catalog_app::errors::ServiceError;

use crate::observability::observe_api_error;

/// Status reported to callers when an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ErrorCode {
    /// The request carried input that failed validation.
    InvalidArgument,

    /// A referenced resource does not exist.
    NotFound,

    /// The service could not complete the request.
    Internal,
}

impl ErrorCode {
    /// Classify a service failure by its variant.
    pub(crate) fn of(error: &ServiceError) -> Self {
        match error {
            ServiceError::Validation(_) => Self::InvalidArgument,
            ServiceError::NotFound(_) => Self::NotFound,
            ServiceError::Database(_) => Self::Internal,
        }
    }

    pub(crate) const fn http_status(self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid-argument",
            Self::NotFound => "not-found",
            Self::Internal => "internal",
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable description
    pub message: String,
}

/// A failed request, rendered as an [`ErrorResponse`].
#[derive(Debug)]
pub(crate) struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// A failure outside the service taxonomy, such as missing server state.
    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: message.into(),
        }
    }

    /// A request the service never saw, such as an unreadable body.
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidArgument,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn code(&self) -> ErrorCode {
        self.code
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        let code = ErrorCode::of(&error);

        if let ServiceError::Database(ref database) = error {
            error!(
                operation = database.operation,
                cause = ?database.source,
                "request failed in storage"
            );
        } else {
            debug!(code = code.as_str(), "request rejected: {error}");
        }

        Self {
            code,
            message: error.to_string(),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        observe_api_error(self.code.as_str());

        res.status_code(self.code.http_status());
        res.render(Json(ErrorResponse {
            code: self.code,
            message: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (ErrorCode::InvalidArgument, "Invalid argument"),
            (ErrorCode::NotFound, "Not found"),
            (ErrorCode::Internal, "Internal error"),
        ] {
            operation.responses.insert(
                status.http_status().as_str(),
                oapi::Response::new(description).add_content(
                    "application/json",
                    oapi::Content::new(ErrorResponse::to_schema(components)),
                ),
            );
        }
    }
}
