//! Response bodies shared across resources.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a delete request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeleteResponse {
    /// Always `true`; failures are reported as errors instead
    pub success: bool,

    /// Confirmation message
    pub message: String,
}

impl DeleteResponse {
    pub(crate) fn deleted(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
