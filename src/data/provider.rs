//! Data Provider Interface
//!
//! Pages and API handlers read records only through [`DataProvider`], so a
//! persistent backend can replace [`FixtureStore`](super::FixtureStore)
//! without touching routing or rendering.

use async_trait::async_trait;

use super::error::DataResult;
use super::types::{Customer, Order, ReportsSummary, Valet};

/// Read-only source of dashboard records
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// All customers
    async fn customers(&self) -> DataResult<Vec<Customer>>;

    /// All orders
    async fn orders(&self) -> DataResult<Vec<Order>>;

    /// All valets
    async fn valets(&self) -> DataResult<Vec<Valet>>;

    /// Current summary counters
    async fn reports(&self) -> DataResult<ReportsSummary>;
}
