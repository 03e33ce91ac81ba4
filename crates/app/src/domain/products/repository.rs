//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    domain::products::{
        data::{ProductData, ProductFilter},
        records::{ProductPage, ProductRecord, ProductUuid},
    },
    errors::StorageError,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");
const DELETE_PRODUCT_PLANS_SQL: &str = include_str!("sql/delete_product_plans.sql");

/// Product storage collaborator.
///
/// Reads never return tombstoned products, and mutations of a tombstoned or
/// unknown product report [`StorageError::NotFound`].
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Insert a product, assigning its identifier.
    async fn create_product(&self, product: ProductData) -> Result<ProductRecord, StorageError>;

    /// Fetch a live product.
    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, StorageError>;

    /// Overwrite the caller-supplied fields of a live product.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductData,
    ) -> Result<(), StorageError>;

    /// Tombstone a product together with its subscription plans.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), StorageError>;

    /// List one page of live products.
    async fn list_products(&self, filter: ProductFilter) -> Result<ProductPage, StorageError>;
}

/// PostgreSQL-backed products repository.
#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn create_product(&self, product: ProductData) -> Result<ProductRecord, StorageError> {
        let created = query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(ProductUuid::new().into_uuid())
            .bind(product.name)
            .bind(product.description)
            .bind(product.price)
            .bind(product.product_type)
            .fetch_one(&self.pool)
            .await?;

        Ok(created)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<ProductRecord, StorageError> {
        let product = query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&self.pool)
            .await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductData,
    ) -> Result<(), StorageError> {
        let rows_affected = query(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(update.name)
            .bind(update.description)
            .bind(update.price)
            .bind(update.product_type)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StorageError::NotFound);
        }

        query(DELETE_PRODUCT_PLANS_SQL)
            .bind(product.into_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_products(&self, filter: ProductFilter) -> Result<ProductPage, StorageError> {
        let limit = i64::from(filter.page_size);
        let offset = i64::from(filter.page.saturating_sub(1)) * limit;

        let total: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(filter.product_type.as_deref())
            .fetch_one(&self.pool)
            .await?;

        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .bind(filter.product_type.as_deref())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total = u64::try_from(total).map_err(|e| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(e),
        })?;

        Ok(ProductPage { products, total })
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            product_type: row.try_get("product_type")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            deleted_at: row
                .try_get::<Option<SqlxTimestamp>, _>("deleted_at")?
                .map(SqlxTimestamp::to_jiff),
        })
    }
}
