//! Subscription Plans Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    domain::{
        products::records::ProductUuid,
        subscriptions::{
            data::SubscriptionPlanData,
            records::{SubscriptionPlanRecord, SubscriptionPlanUuid},
        },
    },
    errors::StorageError,
};

const LIST_SUBSCRIPTION_PLANS_SQL: &str = include_str!("sql/list_subscription_plans.sql");
const GET_SUBSCRIPTION_PLAN_SQL: &str = include_str!("sql/get_subscription_plan.sql");
const CREATE_SUBSCRIPTION_PLAN_SQL: &str = include_str!("sql/create_subscription_plan.sql");
const UPDATE_SUBSCRIPTION_PLAN_SQL: &str = include_str!("sql/update_subscription_plan.sql");
const DELETE_SUBSCRIPTION_PLAN_SQL: &str = include_str!("sql/delete_subscription_plan.sql");

/// Subscription plan storage collaborator.
///
/// The owning product is not checked here; callers resolve it first.
#[automock]
#[async_trait]
pub trait SubscriptionPlansRepository: Send + Sync {
    /// Insert a plan, assigning its identifier.
    async fn create_plan(
        &self,
        plan: SubscriptionPlanData,
    ) -> Result<SubscriptionPlanRecord, StorageError>;

    /// Fetch a live plan.
    async fn get_plan(
        &self,
        plan: SubscriptionPlanUuid,
    ) -> Result<SubscriptionPlanRecord, StorageError>;

    /// Overwrite the fields of a live plan.
    async fn update_plan(
        &self,
        plan: SubscriptionPlanUuid,
        update: SubscriptionPlanData,
    ) -> Result<(), StorageError>;

    /// Tombstone a plan.
    async fn delete_plan(&self, plan: SubscriptionPlanUuid) -> Result<(), StorageError>;

    /// All live plans of a product, oldest first.
    async fn list_plans_by_product(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<SubscriptionPlanRecord>, StorageError>;
}

/// PostgreSQL-backed subscription plans repository.
#[derive(Debug, Clone)]
pub struct PgSubscriptionPlansRepository {
    pool: PgPool,
}

impl PgSubscriptionPlansRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionPlansRepository for PgSubscriptionPlansRepository {
    async fn create_plan(
        &self,
        plan: SubscriptionPlanData,
    ) -> Result<SubscriptionPlanRecord, StorageError> {
        let created = query_as::<Postgres, SubscriptionPlanRecord>(CREATE_SUBSCRIPTION_PLAN_SQL)
            .bind(SubscriptionPlanUuid::new().into_uuid())
            .bind(plan.product_uuid.into_uuid())
            .bind(plan.plan_name)
            .bind(plan.duration)
            .bind(plan.price)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn get_plan(
        &self,
        plan: SubscriptionPlanUuid,
    ) -> Result<SubscriptionPlanRecord, StorageError> {
        let plan = query_as::<Postgres, SubscriptionPlanRecord>(GET_SUBSCRIPTION_PLAN_SQL)
            .bind(plan.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(plan)
    }

    async fn update_plan(
        &self,
        plan: SubscriptionPlanUuid,
        update: SubscriptionPlanData,
    ) -> Result<(), StorageError> {
        let rows_affected = query(UPDATE_SUBSCRIPTION_PLAN_SQL)
            .bind(plan.into_uuid())
            .bind(update.product_uuid.into_uuid())
            .bind(update.plan_name)
            .bind(update.duration)
            .bind(update.price)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete_plan(&self, plan: SubscriptionPlanUuid) -> Result<(), StorageError> {
        let rows_affected = query(DELETE_SUBSCRIPTION_PLAN_SQL)
            .bind(plan.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn list_plans_by_product(
        &self,
        product: ProductUuid,
    ) -> Result<Vec<SubscriptionPlanRecord>, StorageError> {
        let plans = query_as::<Postgres, SubscriptionPlanRecord>(LIST_SUBSCRIPTION_PLANS_SQL)
            .bind(product.into_uuid())
            .fetch_all(&self.pool)
            .await?;

        Ok(plans)
    }
}

impl<'r> FromRow<'r, PgRow> for SubscriptionPlanRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubscriptionPlanUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            plan_name: row.try_get("plan_name")?,
            duration: row.try_get("duration")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
