//! Fixed in-memory dataset
//!
//! The demo records the portal ships with. They live for the lifetime of the
//! process and reset on restart.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::DataResult;
use super::provider::DataProvider;
use super::types::{Customer, Order, ReportsSummary, Valet};

/// Provider backed by a hardcoded dataset
#[derive(Debug, Clone)]
pub struct FixtureStore {
    customers: Vec<Customer>,
    orders: Vec<Order>,
    valets: Vec<Valet>,
    reports: ReportsSummary,
}

impl FixtureStore {
    /// Create the store with the built-in demo records
    pub fn new() -> Self {
        Self {
            customers: vec![
                Customer::new(1, "John Doe", "john@example.com", "555-0123", 5),
                Customer::new(2, "Jane Smith", "jane@example.com", "555-0124", 3),
                Customer::new(3, "Bob Johnson", "bob@example.com", "555-0125", 8),
            ],
            orders: vec![
                Order::new(1, "John Doe", "Dry Cleaning", "In Progress", date(2024, 1, 15)),
                Order::new(2, "Jane Smith", "Laundry", "Completed", date(2024, 1, 14)),
                Order::new(3, "Bob Johnson", "Alterations", "Pending", date(2024, 1, 16)),
            ],
            valets: vec![
                Valet::new(1, "Mike Wilson", "Downtown", "Active", 12),
                Valet::new(2, "Sarah Davis", "Uptown", "Active", 8),
                Valet::new(3, "Tom Brown", "Suburbs", "Off Duty", 15),
            ],
            reports: ReportsSummary {
                daily_orders: 45,
                monthly_revenue: 12_500,
                active_customers: 234,
                pending_issues: 3,
            },
        }
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataProvider for FixtureStore {
    fn name(&self) -> &str {
        "fixtures"
    }

    async fn customers(&self) -> DataResult<Vec<Customer>> {
        Ok(self.customers.clone())
    }

    async fn orders(&self) -> DataResult<Vec<Order>> {
        Ok(self.orders.clone())
    }

    async fn valets(&self) -> DataResult<Vec<Valet>> {
        Ok(self.valets.clone())
    }

    async fn reports(&self) -> DataResult<ReportsSummary> {
        Ok(self.reports)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_collections() {
        let store = FixtureStore::new();

        assert_eq!(store.customers().await.unwrap().len(), 3);
        assert_eq!(store.orders().await.unwrap().len(), 3);
        assert_eq!(store.valets().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_fixture_reports() {
        let store = FixtureStore::new();
        let reports = store.reports().await.unwrap();

        assert_eq!(reports.daily_orders, 45);
        assert_eq!(reports.monthly_revenue, 12_500);
        assert_eq!(reports.active_customers, 234);
        assert_eq!(reports.pending_issues, 3);
    }

    #[tokio::test]
    async fn test_orders_reference_customers_by_name() {
        let store = FixtureStore::new();
        let orders = store.orders().await.unwrap();

        let pairs: Vec<(&str, &str)> = orders
            .iter()
            .map(|o| (o.customer.as_str(), o.service.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("John Doe", "Dry Cleaning"),
                ("Jane Smith", "Laundry"),
                ("Bob Johnson", "Alterations"),
            ]
        );
        assert_eq!(orders[2].date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[tokio::test]
    async fn test_reads_are_stable() {
        let store = FixtureStore::new();

        assert_eq!(store.valets().await.unwrap(), store.valets().await.unwrap());
        assert_eq!(store.reports().await.unwrap(), store.reports().await.unwrap());
    }
}
