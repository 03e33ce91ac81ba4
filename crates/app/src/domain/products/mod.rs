//! Products

pub mod data;
pub mod records;
pub mod repository;
pub mod service;

pub use repository::{MockProductsRepository, PgProductsRepository, ProductsRepository};
pub use service::*;
