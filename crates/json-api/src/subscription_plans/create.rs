//! Create Subscription Plan Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{
    errors::ApiError,
    extensions::*,
    state::State,
    subscription_plans::{SubscriptionPlanRequest, SubscriptionPlanResponse},
};

/// Create Subscription Plan Handler
///
/// The referenced product must exist and not be deleted.
#[endpoint(
    tags("subscription-plans"),
    summary = "Create Subscription Plan",
    request_body = SubscriptionPlanRequest,
    responses(
        (status_code = StatusCode::CREATED, description = "Subscription plan created"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubscriptionPlanResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request: SubscriptionPlanRequest = req.json_body().await?;

    let plan = state
        .app
        .subscriptions
        .create_subscription_plan(request.into())
        .await?;

    res.add_header(LOCATION, format!("/subscription-plans/{}", plan.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(plan.into()))
}
