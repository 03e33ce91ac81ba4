//! Subscription Plans Data

use crate::domain::products::records::ProductUuid;

/// Caller supplied plan fields, with the owning product still in external form.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlanInput {
    pub product_id: String,
    pub plan_name: String,
    pub duration: i32,
    pub price: f64,
}

/// Validated plan fields handed to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlanData {
    pub product_uuid: ProductUuid,
    pub plan_name: String,
    pub duration: i32,
    pub price: f64,
}
