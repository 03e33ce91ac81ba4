//! Subscription Plan Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    errors::ApiError, extensions::*, state::State,
    subscription_plans::SubscriptionPlanResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionPlansResponse {
    /// Live plans of the product, oldest first
    pub subscription_plans: Vec<SubscriptionPlanResponse>,
}

/// Subscription Plan Index Handler
///
/// Lists a product's plans. An unknown product yields an empty list.
#[endpoint(tags("subscription-plans"), summary = "List Subscription Plans")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<SubscriptionPlansResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let plans = state
        .app
        .subscriptions
        .list_subscription_plans(id.into_inner())
        .await?;

    Ok(Json(SubscriptionPlansResponse {
        subscription_plans: plans.into_iter().map(Into::into).collect(),
    }))
}
