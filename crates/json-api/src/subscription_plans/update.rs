//! Update Subscription Plan Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    subscription_plans::{SubscriptionPlanRequest, SubscriptionPlanResponse},
};

/// Update Subscription Plan Handler
///
/// Every field is replaced; the plan may move to another live product.
#[endpoint(
    tags("subscription-plans"),
    summary = "Update Subscription Plan",
    request_body = SubscriptionPlanRequest,
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<SubscriptionPlanResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: SubscriptionPlanRequest = req.json_body().await?;

    let plan = state
        .app
        .subscriptions
        .update_subscription_plan(id.into_inner(), request.into())
        .await?;

    Ok(Json(plan.into()))
}
