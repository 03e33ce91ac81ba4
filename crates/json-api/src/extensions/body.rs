//! Request body extensions.

use salvo::Request;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ApiError;

/// Parse a JSON request body, rejecting unreadable bodies as invalid arguments.
pub(crate) trait RequestBodyExt {
    async fn json_body<T: DeserializeOwned + Send>(&mut self) -> Result<T, ApiError>;
}

impl RequestBodyExt for Request {
    async fn json_body<T: DeserializeOwned + Send>(&mut self) -> Result<T, ApiError> {
        self.parse_json::<T>().await.map_err(|error| {
            debug!(error = %error, "rejected request body");

            ApiError::invalid_argument(format!("invalid request body: {error}"))
        })
    }
}
