//! Test support shared by repository and service tests.

mod context;

pub use context::TestContext;
pub use db::TestDb;
