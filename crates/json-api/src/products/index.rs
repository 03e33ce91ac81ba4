//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToParameters, prelude::*};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::data::ListProductsQuery;

use crate::{errors::ApiError, extensions::*, products::ProductResponse, state::State};

/// Product listing filters.
#[derive(Debug, Default, Deserialize, ToParameters)]
#[serde(rename_all = "camelCase")]
#[salvo(parameters(default_parameter_in = Query, rename_all = "camelCase"))]
pub(crate) struct ListProductsParams {
    /// Only return products of this type
    pub product_type: Option<String>,

    /// One-based page number, defaults to 1
    pub page: Option<i64>,

    /// Page size between 1 and 100, defaults to 10
    pub page_size: Option<i64>,
}

impl From<ListProductsParams> for ListProductsQuery {
    fn from(params: ListProductsParams) -> Self {
        ListProductsQuery {
            product_type: params.product_type,
            page: params.page.unwrap_or_default(),
            page_size: params.page_size.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// One page of products
    pub products: Vec<ProductResponse>,

    /// Number of products matching the filter across all pages
    pub total: u64,
}

/// Product Index Handler
///
/// Returns one page of products, optionally filtered by type.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    params: ListProductsParams,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state.app.products.list_products(params.into()).await?;

    Ok(Json(ProductsResponse {
        products: page.products.into_iter().map(Into::into).collect(),
        total: page.total,
    }))
}
