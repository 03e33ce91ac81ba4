//! Subscription plans service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    domain::{
        products::{PgProductsRepository, ProductsRepository, records::ProductUuid, service::find_product},
        subscriptions::{
            data::{SubscriptionPlanData, SubscriptionPlanInput},
            records::{SubscriptionPlanRecord, SubscriptionPlanUuid},
            repository::{PgSubscriptionPlansRepository, SubscriptionPlansRepository},
        },
    },
    errors::{NotFoundError, ResourceKind, ServiceError, storage_failure},
    uuids::PRODUCT_ID_FIELD,
    validation::validate_subscription,
};

/// Subscription plans service.
///
/// Holds the product repository as well, since every write resolves the
/// owning product first.
#[derive(Clone)]
pub struct DefaultSubscriptionPlansService {
    plans: Arc<dyn SubscriptionPlansRepository>,
    products: Arc<dyn ProductsRepository>,
}

impl DefaultSubscriptionPlansService {
    #[must_use]
    pub fn new(
        plans: Arc<dyn SubscriptionPlansRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self { plans, products }
    }

    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgSubscriptionPlansRepository::new(pool.clone())),
            Arc::new(PgProductsRepository::new(pool)),
        )
    }

    async fn find_plan(
        &self,
        plan: SubscriptionPlanUuid,
    ) -> Result<SubscriptionPlanRecord, ServiceError> {
        self.plans.get_plan(plan).await.map_err(|source| {
            if source.is_not_found() {
                NotFoundError::new(ResourceKind::SubscriptionPlan, plan).into()
            } else {
                storage_failure("get subscription plan")(source)
            }
        })
    }

    /// Validate the input and resolve its owning product.
    async fn prepare(&self, input: SubscriptionPlanInput) -> Result<SubscriptionPlanData, ServiceError> {
        validate_subscription(&input.plan_name, input.duration, input.price)?;

        let product = ProductUuid::parse_field(PRODUCT_ID_FIELD, &input.product_id)?;

        find_product(self.products.as_ref(), product).await?;

        Ok(SubscriptionPlanData {
            product_uuid: product,
            plan_name: input.plan_name,
            duration: input.duration,
            price: input.price,
        })
    }
}

impl Debug for DefaultSubscriptionPlansService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DefaultSubscriptionPlansService")
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl SubscriptionPlansService for DefaultSubscriptionPlansService {
    async fn create_subscription_plan(
        &self,
        input: SubscriptionPlanInput,
    ) -> Result<SubscriptionPlanRecord, ServiceError> {
        let plan = self.prepare(input).await?;

        let created = self
            .plans
            .create_plan(plan)
            .await
            .map_err(storage_failure("create subscription plan"))?;

        info!(
            subscription_plan_uuid = %created.uuid,
            product_uuid = %created.product_uuid,
            "created subscription plan"
        );

        Ok(created)
    }

    async fn get_subscription_plan(
        &self,
        id: String,
    ) -> Result<SubscriptionPlanRecord, ServiceError> {
        let plan = SubscriptionPlanUuid::parse(&id)?;

        debug!(subscription_plan_uuid = %plan, "fetching subscription plan");

        self.find_plan(plan).await
    }

    async fn update_subscription_plan(
        &self,
        id: String,
        input: SubscriptionPlanInput,
    ) -> Result<SubscriptionPlanRecord, ServiceError> {
        let plan = SubscriptionPlanUuid::parse(&id)?;

        self.find_plan(plan).await?;

        let update = self.prepare(input).await?;

        self.plans
            .update_plan(plan, update)
            .await
            .map_err(storage_failure("update subscription plan"))?;

        info!(subscription_plan_uuid = %plan, "updated subscription plan");

        self.find_plan(plan).await
    }

    async fn delete_subscription_plan(&self, id: String) -> Result<(), ServiceError> {
        let plan = SubscriptionPlanUuid::parse(&id)?;

        self.find_plan(plan).await?;

        self.plans
            .delete_plan(plan)
            .await
            .map_err(storage_failure("delete subscription plan"))?;

        info!(subscription_plan_uuid = %plan, "deleted subscription plan");

        Ok(())
    }

    async fn list_subscription_plans(
        &self,
        product_id: String,
    ) -> Result<Vec<SubscriptionPlanRecord>, ServiceError> {
        // Only the format is checked; an unknown product lists as empty.
        let product = ProductUuid::parse_field(PRODUCT_ID_FIELD, &product_id)?;

        debug!(product_uuid = %product, "listing subscription plans");

        self.plans
            .list_plans_by_product(product)
            .await
            .map_err(storage_failure("list subscription plans"))
    }
}

#[automock]
#[async_trait]
pub trait SubscriptionPlansService: Send + Sync {
    /// Validates a plan, checks its product is live, and stores it.
    async fn create_subscription_plan(
        &self,
        input: SubscriptionPlanInput,
    ) -> Result<SubscriptionPlanRecord, ServiceError>;

    async fn get_subscription_plan(&self, id: String)
    -> Result<SubscriptionPlanRecord, ServiceError>;

    /// Replaces every field of an existing plan, including its product.
    async fn update_subscription_plan(
        &self,
        id: String,
        input: SubscriptionPlanInput,
    ) -> Result<SubscriptionPlanRecord, ServiceError>;

    async fn delete_subscription_plan(&self, id: String) -> Result<(), ServiceError>;

    /// Lists the live plans of a product, oldest first.
    async fn list_subscription_plans(
        &self,
        product_id: String,
    ) -> Result<Vec<SubscriptionPlanRecord>, ServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::{
        domain::{
            products::{MockProductsRepository, records::ProductRecord},
            subscriptions::repository::MockSubscriptionPlansRepository,
        },
        errors::{ResourceKind, StorageError, ValidationError},
        test::TestContext,
    };

    use super::*;

    fn monthly(product: ProductUuid) -> SubscriptionPlanInput {
        SubscriptionPlanInput {
            product_id: product.to_string(),
            plan_name: "Monthly".to_string(),
            duration: 30,
            price: 9.99,
        }
    }

    fn product_record(uuid: ProductUuid) -> ProductRecord {
        ProductRecord {
            uuid,
            name: "Widget".to_string(),
            description: "d".to_string(),
            price: 9.99,
            product_type: "digital".to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    fn plan_record(uuid: SubscriptionPlanUuid, data: SubscriptionPlanData) -> SubscriptionPlanRecord {
        SubscriptionPlanRecord {
            uuid,
            product_uuid: data.product_uuid,
            plan_name: data.plan_name,
            duration: data.duration,
            price: data.price,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            deleted_at: None,
        }
    }

    fn live_products() -> MockProductsRepository {
        let mut products = MockProductsRepository::new();

        products
            .expect_get_product()
            .returning(|u| Ok(product_record(u)));

        products
    }

    fn service(
        plans: MockSubscriptionPlansRepository,
        products: MockProductsRepository,
    ) -> DefaultSubscriptionPlansService {
        DefaultSubscriptionPlansService::new(Arc::new(plans), Arc::new(products))
    }

    fn expect_validation(result: Result<impl Debug, ServiceError>, field: &str) {
        match result {
            Err(ServiceError::Validation(error)) => assert_eq!(error.field, field),
            other => panic!("expected validation error on {field}, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_plan_references_resolved_product() -> TestResult {
        let product = ProductUuid::new();
        let plan = SubscriptionPlanUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == product)
            .returning(|u| Ok(product_record(u)));

        plans
            .expect_create_plan()
            .once()
            .withf(move |data| data.product_uuid == product && data.duration == 30)
            .returning(move |data| Ok(plan_record(plan, data)));

        let created = service(plans, products)
            .create_subscription_plan(monthly(product))
            .await?;

        assert_eq!(created.uuid, plan);
        assert_eq!(created.product_uuid, product);
        assert_eq!(created.plan_name, "Monthly");

        Ok(())
    }

    #[tokio::test]
    async fn create_plan_for_unknown_product_is_not_found() {
        let product = ProductUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        products
            .expect_get_product()
            .once()
            .returning(|_| Err(StorageError::NotFound));

        plans.expect_create_plan().never();

        let result = service(plans, products)
            .create_subscription_plan(monthly(product))
            .await;

        match result {
            Err(ServiceError::NotFound(error)) => {
                assert_eq!(error, NotFoundError::new(ResourceKind::Product, product));
            }
            other => panic!("expected product not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_plan_rejects_invalid_fields_before_storage() {
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        plans.expect_create_plan().never();
        products.expect_get_product().never();

        let service = service(plans, products);
        let product = ProductUuid::new();

        let empty_name = service
            .create_subscription_plan(SubscriptionPlanInput {
                plan_name: String::new(),
                ..monthly(product)
            })
            .await;

        let zero_duration = service
            .create_subscription_plan(SubscriptionPlanInput {
                duration: 0,
                ..monthly(product)
            })
            .await;

        let too_long = service
            .create_subscription_plan(SubscriptionPlanInput {
                duration: 3651,
                ..monthly(product)
            })
            .await;

        let negative_price = service
            .create_subscription_plan(SubscriptionPlanInput {
                price: -0.01,
                ..monthly(product)
            })
            .await;

        expect_validation(empty_name, "planName");
        expect_validation(zero_duration, "duration");
        expect_validation(too_long, "duration");
        expect_validation(negative_price, "price");
    }

    #[tokio::test]
    async fn create_plan_rejects_malformed_product_id() {
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        plans.expect_create_plan().never();
        products.expect_get_product().never();

        let service = service(plans, products);

        let missing = service
            .create_subscription_plan(SubscriptionPlanInput {
                product_id: String::new(),
                ..monthly(ProductUuid::new())
            })
            .await;

        let malformed = service
            .create_subscription_plan(SubscriptionPlanInput {
                product_id: "not-a-uuid".to_string(),
                ..monthly(ProductUuid::new())
            })
            .await;

        assert!(
            matches!(missing, Err(ServiceError::Validation(ref e)) if *e == ValidationError::required("productId")),
            "expected required productId, got {missing:?}"
        );
        assert!(
            matches!(malformed, Err(ServiceError::Validation(ref e)) if *e == ValidationError::invalid_format("productId")),
            "expected invalid productId format, got {malformed:?}"
        );
    }

    #[tokio::test]
    async fn create_plan_product_lookup_failure_is_database_error() {
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        products
            .expect_get_product()
            .once()
            .returning(|_| Err(StorageError::Sql(sqlx::Error::PoolTimedOut)));

        plans.expect_create_plan().never();

        let result = service(plans, products)
            .create_subscription_plan(monthly(ProductUuid::new()))
            .await;

        assert!(
            matches!(result, Err(ServiceError::Database(ref e)) if e.operation == "get product"),
            "expected database error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn create_plan_wraps_storage_failure() {
        let mut plans = MockSubscriptionPlansRepository::new();

        plans
            .expect_create_plan()
            .once()
            .returning(|_| Err(StorageError::Sql(sqlx::Error::PoolClosed)));

        let result = service(plans, live_products())
            .create_subscription_plan(monthly(ProductUuid::new()))
            .await;

        assert!(
            matches!(result, Err(ServiceError::Database(ref e)) if e.operation == "create subscription plan"),
            "expected database error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_plan_missing_is_not_found() {
        let plan = SubscriptionPlanUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();

        plans
            .expect_get_plan()
            .once()
            .withf(move |u| *u == plan)
            .returning(|_| Err(StorageError::NotFound));

        let result = service(plans, MockProductsRepository::new())
            .get_subscription_plan(plan.to_string())
            .await;

        match result {
            Err(ServiceError::NotFound(error)) => {
                assert_eq!(
                    error,
                    NotFoundError::new(ResourceKind::SubscriptionPlan, plan)
                );
            }
            other => panic!("expected plan not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_plan_rejects_malformed_id() {
        let mut plans = MockSubscriptionPlansRepository::new();

        plans.expect_get_plan().never();

        let result = service(plans, MockProductsRepository::new())
            .get_subscription_plan("42".to_string())
            .await;

        assert!(
            matches!(result, Err(ServiceError::Validation(ref e)) if *e == ValidationError::invalid_format("id")),
            "expected invalid id format, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_plan_can_move_to_another_product() -> TestResult {
        let plan = SubscriptionPlanUuid::new();
        let original = ProductUuid::new();
        let target = ProductUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        let mut fetches = 0;

        plans
            .expect_get_plan()
            .times(2)
            .withf(move |u| *u == plan)
            .returning(move |u| {
                fetches += 1;

                let product_uuid = if fetches == 1 { original } else { target };

                Ok(plan_record(
                    u,
                    SubscriptionPlanData {
                        product_uuid,
                        plan_name: "Yearly".to_string(),
                        duration: 365,
                        price: 99.0,
                    },
                ))
            });

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == target)
            .returning(|u| Ok(product_record(u)));

        plans
            .expect_update_plan()
            .once()
            .withf(move |u, data| *u == plan && data.product_uuid == target)
            .returning(|_, _| Ok(()));

        let updated = service(plans, products)
            .update_subscription_plan(
                plan.to_string(),
                SubscriptionPlanInput {
                    plan_name: "Yearly".to_string(),
                    duration: 365,
                    price: 99.0,
                    ..monthly(target)
                },
            )
            .await?;

        assert_eq!(updated.product_uuid, target);
        assert_eq!(updated.duration, 365);

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_plan_is_not_found_before_product_check() {
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        plans
            .expect_get_plan()
            .once()
            .returning(|_| Err(StorageError::NotFound));

        plans.expect_update_plan().never();
        products.expect_get_product().never();

        let result = service(plans, products)
            .update_subscription_plan(
                SubscriptionPlanUuid::new().to_string(),
                monthly(ProductUuid::new()),
            )
            .await;

        assert!(
            matches!(result, Err(ServiceError::NotFound(ref e)) if e.resource == ResourceKind::SubscriptionPlan),
            "expected plan not found, got {result:?}"
        );
    }

    #[tokio::test]
    async fn update_plan_to_unknown_product_is_not_found() {
        let target = ProductUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        plans.expect_get_plan().once().returning(|u| {
            Ok(plan_record(
                u,
                SubscriptionPlanData {
                    product_uuid: ProductUuid::new(),
                    plan_name: "Monthly".to_string(),
                    duration: 30,
                    price: 9.99,
                },
            ))
        });

        products
            .expect_get_product()
            .once()
            .returning(|_| Err(StorageError::NotFound));

        plans.expect_update_plan().never();

        let result = service(plans, products)
            .update_subscription_plan(SubscriptionPlanUuid::new().to_string(), monthly(target))
            .await;

        match result {
            Err(ServiceError::NotFound(error)) => {
                assert_eq!(error, NotFoundError::new(ResourceKind::Product, target));
            }
            other => panic!("expected product not found, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_plan_race_surfaces_as_database_error() {
        let mut plans = MockSubscriptionPlansRepository::new();

        plans.expect_get_plan().once().returning(|u| {
            Ok(plan_record(
                u,
                SubscriptionPlanData {
                    product_uuid: ProductUuid::new(),
                    plan_name: "Monthly".to_string(),
                    duration: 30,
                    price: 9.99,
                },
            ))
        });

        plans
            .expect_update_plan()
            .once()
            .returning(|_, _| Err(StorageError::NotFound));

        let result = service(plans, live_products())
            .update_subscription_plan(
                SubscriptionPlanUuid::new().to_string(),
                monthly(ProductUuid::new()),
            )
            .await;

        assert!(
            matches!(result, Err(ServiceError::Database(ref e)) if e.operation == "update subscription plan"),
            "expected database error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_plan_missing_is_not_found() {
        let mut plans = MockSubscriptionPlansRepository::new();

        plans
            .expect_get_plan()
            .once()
            .returning(|_| Err(StorageError::NotFound));

        plans.expect_delete_plan().never();

        let result = service(plans, MockProductsRepository::new())
            .delete_subscription_plan(SubscriptionPlanUuid::new().to_string())
            .await;

        assert!(
            matches!(result, Err(ServiceError::NotFound(_))),
            "expected not found, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_plan_tombstones_existing_plan() -> TestResult {
        let plan = SubscriptionPlanUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();

        plans.expect_get_plan().once().returning(|u| {
            Ok(plan_record(
                u,
                SubscriptionPlanData {
                    product_uuid: ProductUuid::new(),
                    plan_name: "Monthly".to_string(),
                    duration: 30,
                    price: 9.99,
                },
            ))
        });

        plans
            .expect_delete_plan()
            .once()
            .withf(move |u| *u == plan)
            .returning(|_| Ok(()));

        service(plans, MockProductsRepository::new())
            .delete_subscription_plan(plan.to_string())
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn list_plans_does_not_require_live_product() -> TestResult {
        let product = ProductUuid::new();
        let mut plans = MockSubscriptionPlansRepository::new();
        let mut products = MockProductsRepository::new();

        products.expect_get_product().never();

        plans
            .expect_list_plans_by_product()
            .once()
            .withf(move |u| *u == product)
            .returning(|_| Ok(Vec::new()));

        let listed = service(plans, products)
            .list_subscription_plans(product.to_string())
            .await?;

        assert!(listed.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn list_plans_rejects_malformed_product_id() {
        let mut plans = MockSubscriptionPlansRepository::new();

        plans.expect_list_plans_by_product().never();

        let result = service(plans, MockProductsRepository::new())
            .list_subscription_plans("abc".to_string())
            .await;

        expect_validation(result, "productId");
    }

    #[tokio::test]
    async fn list_plans_wraps_storage_failure() {
        let mut plans = MockSubscriptionPlansRepository::new();

        plans
            .expect_list_plans_by_product()
            .once()
            .returning(|_| Err(StorageError::Sql(sqlx::Error::PoolTimedOut)));

        let result = service(plans, MockProductsRepository::new())
            .list_subscription_plans(ProductUuid::new().to_string())
            .await;

        assert!(
            matches!(result, Err(ServiceError::Database(ref e)) if e.operation == "list subscription plans"),
            "expected database error, got {result:?}"
        );
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn plan_for_unknown_product_is_not_found_in_store() {
        let ctx = TestContext::new().await;
        let missing = ProductUuid::new();

        let result = ctx
            .app
            .subscriptions
            .create_subscription_plan(monthly(missing))
            .await;

        match result {
            Err(ServiceError::NotFound(error)) => {
                assert_eq!(error.resource, ResourceKind::Product);
                assert_eq!(error.id, missing.to_string());
            }
            other => panic!("expected product NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn plan_round_trips_and_moves_between_products() -> TestResult {
        let ctx = TestContext::new().await;
        let original = ctx.create_product("Widget", "digital").await;
        let target = ctx.create_product("Gadget", "digital").await;
        let plan = ctx.create_plan(&original, "Monthly").await;

        let fetched = ctx
            .app
            .subscriptions
            .get_subscription_plan(plan.uuid.to_string())
            .await?;

        assert_eq!(fetched, plan);

        let moved = ctx
            .app
            .subscriptions
            .update_subscription_plan(
                plan.uuid.to_string(),
                SubscriptionPlanInput {
                    plan_name: "Yearly".to_string(),
                    duration: 365,
                    ..monthly(target.uuid)
                },
            )
            .await?;

        assert_eq!(moved.uuid, plan.uuid);
        assert_eq!(moved.product_uuid, target.uuid);
        assert_eq!(moved.plan_name, "Yearly");
        assert_eq!(moved.duration, 365);

        let remaining = ctx
            .app
            .subscriptions
            .list_subscription_plans(original.uuid.to_string())
            .await?;

        assert!(remaining.is_empty(), "plan should have left its original product");

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a container runtime"]
    async fn deleted_plan_stays_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        let product = ctx.create_product("Widget", "digital").await;
        let id = ctx.create_plan(&product, "Monthly").await.uuid.to_string();

        ctx.app.subscriptions.delete_subscription_plan(id.clone()).await?;

        for _ in 0..3 {
            let result = ctx.app.subscriptions.get_subscription_plan(id.clone()).await;

            assert!(
                matches!(result, Err(ServiceError::NotFound(ref e)) if e.resource == ResourceKind::SubscriptionPlan),
                "expected NotFound after deletion, got {result:?}"
            );
        }

        Ok(())
    }
}
