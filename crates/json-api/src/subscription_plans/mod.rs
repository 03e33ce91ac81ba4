//! Subscription Plan Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::domain::subscriptions::{
    data::SubscriptionPlanInput, records::SubscriptionPlanRecord,
};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Subscription plan fields supplied on create and update.
///
/// Omitted fields take their zero value, so a missing required field is
/// reported by validation rather than by the body parser.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SubscriptionPlanRequest {
    /// Identifier of a live product
    pub product_id: String,

    /// Display name, at most 255 characters
    pub plan_name: String,

    /// Length of the plan in days
    pub duration: i32,

    /// Non-negative price
    pub price: f64,
}

impl From<SubscriptionPlanRequest> for SubscriptionPlanInput {
    fn from(request: SubscriptionPlanRequest) -> Self {
        SubscriptionPlanInput {
            product_id: request.product_id,
            plan_name: request.plan_name,
            duration: request.duration,
            price: request.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionPlanResponse {
    /// The unique identifier of the subscription plan
    pub id: Uuid,

    /// The product this plan belongs to
    pub product_id: Uuid,

    pub plan_name: String,

    pub duration: i32,

    pub price: f64,

    /// The date and time the plan was created
    pub created_at: String,

    /// The date and time the plan was last updated
    pub updated_at: String,
}

impl From<SubscriptionPlanRecord> for SubscriptionPlanResponse {
    fn from(plan: SubscriptionPlanRecord) -> Self {
        SubscriptionPlanResponse {
            id: plan.uuid.into(),
            product_id: plan.product_uuid.into(),
            plan_name: plan.plan_name,
            duration: plan.duration,
            price: plan.price,
            created_at: plan.created_at.to_string(),
            updated_at: plan.updated_at.to_string(),
        }
    }
}
