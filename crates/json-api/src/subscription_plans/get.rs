//! Get Subscription Plan Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    errors::ApiError, extensions::*, state::State,
    subscription_plans::SubscriptionPlanResponse,
};

/// Get Subscription Plan Handler
#[endpoint(tags("subscription-plans"), summary = "Get Subscription Plan")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SubscriptionPlanResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let plan = state
        .app
        .subscriptions
        .get_subscription_plan(id.into_inner())
        .await?;

    Ok(Json(plan.into()))
}
