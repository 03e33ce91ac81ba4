//! Subscription Plan Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Subscription Plan UUID
pub type SubscriptionPlanUuid = TypedUuid<SubscriptionPlanRecord>;

/// Subscription Plan Record
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlanRecord {
    pub uuid: SubscriptionPlanUuid,
    pub product_uuid: ProductUuid,
    pub plan_name: String,

    /// Length of the plan in days.
    pub duration: i32,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}
