//! Record types for the dashboard
//!
//! All records are read-only snapshots. Field names match the JSON the API
//! serves, so the same types back both the HTML pages and `/api/*`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: u32,
    /// Display name
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Number of orders placed
    pub orders: u32,
}

impl Customer {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        orders: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            orders,
        }
    }
}

/// A service order
///
/// `customer` holds the customer's display name, not an id. Nothing checks
/// that a matching `Customer` exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub customer: String,
    /// Service type, e.g. "Dry Cleaning"
    pub service: String,
    /// Free-form status label
    pub status: String,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl Order {
    pub fn new(
        id: u32,
        customer: impl Into<String>,
        service: impl Into<String>,
        status: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            customer: customer.into(),
            service: service.into(),
            status: status.into(),
            date,
        }
    }
}

/// A delivery valet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Valet {
    pub id: u32,
    pub name: String,
    /// Assigned route name
    pub route: String,
    pub status: String,
    /// Completed deliveries
    pub deliveries: u32,
}

impl Valet {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        route: impl Into<String>,
        status: impl Into<String>,
        deliveries: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            route: route.into(),
            status: status.into(),
            deliveries,
        }
    }
}

/// Aggregate counters shown on the dashboard and reports pages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportsSummary {
    pub daily_orders: u32,
    /// Whole dollars
    pub monthly_revenue: u64,
    pub active_customers: u32,
    pub pending_issues: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_date_serializes_as_plain_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let order = Order::new(1, "John Doe", "Dry Cleaning", "In Progress", date);

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["date"], json!("2024-01-15"));
        assert_eq!(value["customer"], json!("John Doe"));
    }

    #[test]
    fn test_reports_summary_uses_camel_case_keys() {
        let summary = ReportsSummary {
            daily_orders: 1,
            monthly_revenue: 2,
            active_customers: 3,
            pending_issues: 4,
        };

        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            json!({
                "dailyOrders": 1,
                "monthlyRevenue": 2,
                "activeCustomers": 3,
                "pendingIssues": 4
            })
        );
    }

    #[test]
    fn test_customer_field_names() {
        let customer = Customer::new(7, "Ada", "ada@example.com", "555-0000", 2);
        let value = serde_json::to_value(&customer).unwrap();

        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["email", "id", "name", "orders", "phone"]);
    }
}
