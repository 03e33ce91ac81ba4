//! Delete Subscription Plan Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, responses::DeleteResponse, state::State};

/// Delete Subscription Plan Handler
#[endpoint(tags("subscription-plans"), summary = "Delete Subscription Plan")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DeleteResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .subscriptions
        .delete_subscription_plan(id.into_inner())
        .await?;

    Ok(Json(DeleteResponse::deleted(
        "Subscription plan deleted successfully",
    )))
}
