//! Products Data

/// Caller supplied product fields, used for both creation and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub product_type: String,
}

/// Raw listing parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsQuery {
    /// Exact product type to filter by; empty means no filter.
    pub product_type: Option<String>,
    pub page: i64,
    pub page_size: i64,
}

/// Normalized listing parameters handed to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub product_type: Option<String>,
    pub page: u32,
    pub page_size: u32,
}
