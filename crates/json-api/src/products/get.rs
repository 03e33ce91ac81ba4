//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{errors::ApiError, extensions::*, products::ProductResponse, state::State};

/// Get Product Handler
///
/// Returns a live product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state.app.products.get_product(id.into_inner()).await?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use catalog_app::{
        domain::products::{MockProductsService, records::ProductUuid},
        errors::{NotFoundError, ResourceKind, ValidationError},
    };

    use crate::{
        errors::{ErrorCode, ErrorResponse},
        test_helpers::{make_product, products_service},
    };

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_200() -> TestResult {
        let mut products = MockProductsService::new();
        let uuid = ProductUuid::new();

        products
            .expect_get_product()
            .once()
            .withf(move |id| *id == uuid.to_string())
            .return_once(move |_| Ok(make_product(uuid)));

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.name, "Widget");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let mut products = MockProductsService::new();
        let uuid = ProductUuid::new();

        products
            .expect_get_product()
            .once()
            .return_once(move |_| Err(NotFoundError::new(ResourceKind::Product, uuid).into()));

        let mut res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.code, ErrorCode::NotFound);
        assert_eq!(body.message, format!("Product with ID '{uuid}' not found"));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_passed_through_and_returns_400() {
        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(|id| id == "123")
            .return_once(|_| Err(ValidationError::invalid_format("id").into()));

        let res = TestClient::get("http://example.com/products/123")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
