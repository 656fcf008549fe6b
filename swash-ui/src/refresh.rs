//! Dashboard counter refresh
//!
//! While the dashboard is open, `/api/reports` is polled and each counter is
//! rewritten in place. Counters are found by their `data-stat` attribute,
//! whose value is the JSON key.

use gloo_timers::callback::Interval;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;

use crate::api::api_call;
use crate::dom;

pub const AUTO_REFRESH_INTERVAL_MS: u32 = 30_000;

pub const REPORTS_ENDPOINT: &str = "/api/reports";

/// Path of the page that shows the counters
const DASHBOARD_PATH: &str = "/";

/// Report counters as served by `/api/reports`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsSummary {
    pub daily_orders: u64,
    pub monthly_revenue: u64,
    pub active_customers: u64,
    pub pending_issues: u64,
}

impl ReportsSummary {
    /// `(data-stat key, display text)` for every counter
    pub fn card_values(&self) -> [(&'static str, String); 4] {
        [
            ("dailyOrders", self.daily_orders.to_string()),
            ("monthlyRevenue", format_currency(self.monthly_revenue)),
            ("activeCustomers", self.active_customers.to_string()),
            ("pendingIssues", self.pending_issues.to_string()),
        ]
    }
}

/// Whole dollars with thousands separators, e.g. `$12,500`
pub fn format_currency(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut out = String::from("$");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Start polling when the page is the dashboard
pub fn start() {
    if dom::current_path() != DASHBOARD_PATH {
        return;
    }

    Interval::new(AUTO_REFRESH_INTERVAL_MS, || {
        if dom::current_path() != DASHBOARD_PATH {
            return;
        }
        spawn_local(async {
            if let Err(e) = refresh_now().await {
                dom::log_error(&format!("Auto-refresh failed: {}", e));
            }
        });
    })
    .forget();
}

/// Fetch the counters once and update the page
pub async fn refresh_now() -> Result<usize, String> {
    let reports: ReportsSummary = api_call(REPORTS_ENDPOINT).await?;
    Ok(update_cards(&reports))
}

/// Write every counter into its `data-stat` elements
///
/// Returns the number of elements updated.
pub fn update_cards(reports: &ReportsSummary) -> usize {
    let mut updated = 0;

    for (key, value) in reports.card_values() {
        for element in dom::query_all(&format!(r#"[data-stat="{}"]"#, key)) {
            element.set_text_content(Some(&value));
            updated += 1;
        }
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(7), "$7");
        assert_eq!(format_currency(12_500), "$12,500");
        assert_eq!(format_currency(100_000), "$100,000");
        assert_eq!(format_currency(2_000_000), "$2,000,000");
    }

    #[test]
    fn test_decode_reports_payload() {
        let reports: ReportsSummary = serde_json::from_str(
            r#"{"dailyOrders":45,"monthlyRevenue":12500,"activeCustomers":234,"pendingIssues":3}"#,
        )
        .unwrap();

        assert_eq!(
            reports.card_values(),
            [
                ("dailyOrders", "45".to_string()),
                ("monthlyRevenue", "$12,500".to_string()),
                ("activeCustomers", "234".to_string()),
                ("pendingIssues", "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_counters_are_still_written() {
        let reports = ReportsSummary {
            daily_orders: 0,
            monthly_revenue: 0,
            active_customers: 0,
            pending_issues: 0,
        };

        assert_eq!(reports.card_values()[3], ("pendingIssues", "0".to_string()));
    }
}
