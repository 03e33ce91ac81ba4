//! Catalog JSON API health endpoints.
//!
//! `/healthcheck` answers while the process is up. `/healthcheck/ready`
//! additionally reads one product page, so it fails while storage is
//! unreachable.

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::data::ListProductsQuery;

use crate::{errors::ApiError, extensions::*, state::State};

/// Health response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness handler
#[endpoint(tags("health"), summary = "Liveness check")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness handler
///
/// Reports ready once the catalog store answers a product listing.
#[endpoint(tags("health"), summary = "Readiness check")]
pub(crate) async fn ready(depot: &mut Depot) -> Result<Json<HealthResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .products
        .list_products(ListProductsQuery {
            product_type: None,
            page: 1,
            page_size: 1,
        })
        .await?;

    Ok(Json(HealthResponse::ok()))
}
