//! Shared application domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod errors;
pub mod uuids;
pub mod validation;

#[cfg(test)]
mod test;
