//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, responses::DeleteResponse, state::State};

/// Delete Product Handler
///
/// Tombstones the product together with its subscription plans.
#[endpoint(tags("products"), summary = "Delete Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeleteResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.app.products.delete_product(id.into_inner()).await?;

    Ok(Json(DeleteResponse::deleted("Product deleted successfully")))
}
