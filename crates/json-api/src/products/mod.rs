//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use catalog_app::domain::products::{data::ProductData, records::ProductRecord};

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

/// Product fields supplied on create and update.
///
/// Omitted fields take their zero value, so a missing required field is
/// reported by validation rather than by the body parser.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    /// Display name, at most 255 characters
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Non-negative price
    pub price: f64,

    /// Category used for filtering
    pub product_type: String,
}

impl From<ProductRequest> for ProductData {
    fn from(request: ProductRequest) -> Self {
        ProductData {
            name: request.name,
            description: request.description,
            price: request.price,
            product_type: request.product_type,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: Uuid,

    pub name: String,

    pub description: String,

    pub price: f64,

    pub product_type: String,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.uuid.into(),
            name: product.name,
            description: product.description,
            price: product.price,
            product_type: product.product_type,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}
