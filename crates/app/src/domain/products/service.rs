//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    domain::products::{
        data::{ListProductsQuery, ProductData, ProductFilter},
        records::{ProductPage, ProductRecord, ProductUuid},
        repository::{PgProductsRepository, ProductsRepository},
    },
    errors::{NotFoundError, ResourceKind, ServiceError, storage_failure},
    validation::{normalize_page, normalize_page_size, validate_product},
};

/// Products service backed by a [`ProductsRepository`].
#[derive(Clone)]
pub struct DefaultProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl DefaultProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgProductsRepository::new(pool)))
    }
}

impl Debug for DefaultProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DefaultProductsService").finish_non_exhaustive()
    }
}

/// Fetch a live product, translating a storage miss into [`NotFoundError`].
pub(crate) async fn find_product(
    repository: &dyn ProductsRepository,
    product: ProductUuid,
) -> Result<ProductRecord, ServiceError> {
    repository.get_product(product).await.map_err(|source| {
        if source.is_not_found() {
            NotFoundError::new(ResourceKind::Product, product).into()
        } else {
            storage_failure("get product")(source)
        }
    })
}

#[async_trait]
impl ProductsService for DefaultProductsService {
    async fn create_product(&self, product: ProductData) -> Result<ProductRecord, ServiceError> {
        validate_product(&product.name, product.price, &product.product_type)?;

        let created = self
            .repository
            .create_product(product)
            .await
            .map_err(storage_failure("create product"))?;

        info!(product_uuid = %created.uuid, "created product");

        Ok(created)
    }

    async fn get_product(&self, id: String) -> Result<ProductRecord, ServiceError> {
        let product = ProductUuid::parse(&id)?;

        debug!(product_uuid = %product, "fetching product");

        find_product(self.repository.as_ref(), product).await
    }

    async fn update_product(
        &self,
        id: String,
        update: ProductData,
    ) -> Result<ProductRecord, ServiceError> {
        let product = ProductUuid::parse(&id)?;

        find_product(self.repository.as_ref(), product).await?;

        validate_product(&update.name, update.price, &update.product_type)?;

        self.repository
            .update_product(product, update)
            .await
            .map_err(storage_failure("update product"))?;

        info!(product_uuid = %product, "updated product");

        find_product(self.repository.as_ref(), product).await
    }

    async fn delete_product(&self, id: String) -> Result<(), ServiceError> {
        let product = ProductUuid::parse(&id)?;

        find_product(self.repository.as_ref(), product).await?;

        self.repository
            .delete_product(product)
            .await
            .map_err(storage_failure("delete product"))?;

        info!(product_uuid = %product, "deleted product");

        Ok(())
    }

    async fn list_products(&self, query: ListProductsQuery) -> Result<ProductPage, ServiceError> {
        let filter = ProductFilter {
            product_type: query.product_type.filter(|value| !value.is_empty()),
            page: normalize_page(query.page),
            page_size: normalize_page_size(query.page_size),
        };

        debug!(
            product_type = filter.product_type.as_deref(),
            page = filter.page,
            page_size = filter.page_size,
            "listing products"
        );

        self.repository
            .list_products(filter)
            .await
            .map_err(storage_failure("list products"))
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Validates and stores a new product.
    async fn create_product(&self, product: ProductData) -> Result<ProductRecord, ServiceError>;

    /// Retrieve a single product by its external identifier.
    async fn get_product(&self, id: String) -> Result<ProductRecord, ServiceError>;

    /// Replaces the fields of an existing product and returns the stored result.
    async fn update_product(
        &self,
        id: String,
        update: ProductData,
    ) -> Result<ProductRecord, ServiceError>;

    /// Tombstones a product and its subscription plans.
    async fn delete_product(&self, id: String) -> Result<(), ServiceError>;

    /// Lists one page of products, optionally filtered by type.
    async fn list_products(&self, query: ListProductsQuery) -> Result<ProductPage, ServiceError>;
}
