//! Update Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    products::{ProductRequest, ProductResponse},
    state::State,
};

/// Update Product Handler
///
/// Replaces every caller-supplied field and returns the stored product.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    request_body = ProductRequest,
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: ProductRequest = req.json_body().await?;

    let product = state
        .app
        .products
        .update_product(id.into_inner(), request.into())
        .await?;

    Ok(Json(product.into()))
}
