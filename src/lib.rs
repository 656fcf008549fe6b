//! # SWASH Admin
//!
//! Internal admin dashboard for the SWASH valet laundry service: server-rendered
//! pages for customers, orders, valets and reports, a JSON API over the same
//! records, and placeholder pages for every other portal section.
//!
//! ## Modules
//!
//! - [`data`]: Record types, the `DataProvider` trait and the fixed dataset
//! - [`web`]: Axum router, page templates and JSON endpoints
//! - [`config`]: TOML and environment configuration
//!
//! Browser behavior (navigation highlighting, table search, notifications,
//! counter refresh) lives in the `swash-ui` WebAssembly crate, whose build
//! output is served from the static directory under `/pkg`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swash_admin::{AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (config, _report) = Config::load_default();
//!     swash_admin::serve(AppState::with_fixtures(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod web;

// Re-export top-level types for convenience
pub use config::{Config, ConfigError, LoadReport, LoggingConfig, PortalConfig, ServerConfig};

pub use data::{
    Customer, DataError, DataProvider, DataResult, FixtureStore, Order, ReportsSummary, Valet,
};

pub use web::{build_app, build_router, serve, ApiError, AppState, PageError};
