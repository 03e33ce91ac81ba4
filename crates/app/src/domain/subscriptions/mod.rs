//! Subscription Plans

pub mod data;
pub mod records;
pub mod repository;
pub mod service;

pub use repository::{
    MockSubscriptionPlansRepository, PgSubscriptionPlansRepository, SubscriptionPlansRepository,
};
pub use service::*;
