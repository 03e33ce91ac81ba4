//! Real services over an isolated database, for service-level tests.

use crate::{
    context::AppContext,
    domain::{
        products::{data::ProductData, records::ProductRecord},
        subscriptions::{data::SubscriptionPlanInput, records::SubscriptionPlanRecord},
    },
};

use super::db::TestDb;

#[derive(Debug)]
pub struct TestContext {
    pub db: TestDb,
    pub app: AppContext,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let app = AppContext::from_pool(db.pool().clone());

        Self { db, app }
    }

    /// Store a product through the products service.
    pub async fn create_product(&self, name: &str, product_type: &str) -> ProductRecord {
        self.app
            .products
            .create_product(ProductData {
                name: name.to_string(),
                description: format!("{name} description"),
                price: 9.99,
                product_type: product_type.to_string(),
            })
            .await
            .expect("Failed to create test product")
    }

    /// Store a 30 day plan for `product` through the subscriptions service.
    pub async fn create_plan(&self, product: &ProductRecord, name: &str) -> SubscriptionPlanRecord {
        self.app
            .subscriptions
            .create_subscription_plan(SubscriptionPlanInput {
                product_id: product.uuid.to_string(),
                plan_name: name.to_string(),
                duration: 30,
                price: 4.99,
            })
            .await
            .expect("Failed to create test subscription plan")
    }
}
