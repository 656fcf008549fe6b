//! Dashboard Data Layer
//!
//! Read-only records shown on the dashboard pages and served by the JSON API:
//!
//! - **types**: Record types (Customer, Order, Valet, ReportsSummary)
//! - **provider**: The `DataProvider` trait that routes and pages read through
//! - **fixtures**: `FixtureStore`, the fixed in-memory dataset
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use swash_admin::data::{DataProvider, FixtureStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FixtureStore::new();
//!     let orders = store.orders().await?;
//!
//!     println!("{} orders on file", orders.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod fixtures;
pub mod provider;
pub mod types;

pub use error::{DataError, DataResult};
pub use fixtures::FixtureStore;
pub use provider::DataProvider;
pub use types::{Customer, Order, ReportsSummary, Valet};
