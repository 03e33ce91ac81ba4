//! Field-level input validation.
//!
//! Rules are checked in a fixed order and the first failure is returned.

use crate::errors::ValidationError;

/// Maximum length, in characters, of product and plan names.
pub const MAX_NAME_LENGTH: usize = 255;

/// Upper bound for a plan duration, in days.
pub const MAX_DURATION_DAYS: i32 = 3650;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validate product fields.
pub fn validate_product(name: &str, price: f64, product_type: &str) -> Result<(), ValidationError> {
    validate_name("name", name)?;
    validate_price(price)?;

    if product_type.is_empty() {
        return Err(ValidationError::required("productType"));
    }

    Ok(())
}

/// Validate subscription plan fields.
pub fn validate_subscription(
    plan_name: &str,
    duration: i32,
    price: f64,
) -> Result<(), ValidationError> {
    validate_name("planName", plan_name)?;

    if duration <= 0 {
        return Err(ValidationError::new("duration", "must be positive"));
    }

    if duration > MAX_DURATION_DAYS {
        return Err(ValidationError::new("duration", "exceeds maximum"));
    }

    validate_price(price)
}

/// Clamp a requested page number to the first page when below the minimum.
pub fn normalize_page(page: i64) -> u32 {
    if page < i64::from(MIN_PAGE_SIZE) {
        return DEFAULT_PAGE;
    }

    u32::try_from(page).unwrap_or(u32::MAX)
}

/// Default undersized page sizes and clamp oversized ones.
pub fn normalize_page_size(page_size: i64) -> u32 {
    if page_size < i64::from(MIN_PAGE_SIZE) {
        return DEFAULT_PAGE_SIZE;
    }

    if page_size > i64::from(MAX_PAGE_SIZE) {
        return MAX_PAGE_SIZE;
    }

    u32::try_from(page_size).unwrap_or(MAX_PAGE_SIZE)
}

fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }

    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new(field, "too long"));
    }

    Ok(())
}

fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price < 0.0 {
        return Err(ValidationError::new("price", "negative"));
    }

    if !price.is_finite() {
        return Err(ValidationError::new("price", "not a finite number"));
    }

    Ok(())
}
