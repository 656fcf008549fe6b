//! Page Templates
//!
//! One askama template per page. Every page template extends `layout.html`
//! and fills its `content` block, so the shared chrome and the page body are
//! rendered in a single pass.

use askama::Template;
use axum::response::Html;

use crate::data::{Customer, Order, ReportsSummary, Valet};
use crate::web::error::PageResult;
use crate::web::sections::{Section, SECTIONS};

/// Context shared by every page through the layout
#[derive(Debug, Clone)]
pub struct Chrome {
    /// Page title, used in `<title>` and the header
    pub title: String,
    /// Signed-in user shown in the header
    pub user: String,
    pub nav: Vec<NavLink>,
}

/// Sidebar navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    pub icon: &'static str,
}

impl NavLink {
    fn new(href: impl Into<String>, label: impl Into<String>, icon: &'static str) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            icon,
        }
    }
}

impl From<&Section> for NavLink {
    fn from(section: &Section) -> Self {
        NavLink::new(section.path(), section.title(), section.icon)
    }
}

/// The five data pages
fn primary_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "Dashboard", "bi-speedometer2"),
        NavLink::new("/customers", "Customers", "bi-person-lines-fill"),
        NavLink::new("/orders", "Orders", "bi-bag-check"),
        NavLink::new("/valets", "Valets", "bi-person-badge"),
        NavLink::new("/reports", "Reports", "bi-bar-chart"),
    ]
}

/// Sidebar entries: data pages first, then every placeholder section
pub fn nav_links() -> Vec<NavLink> {
    let mut links = primary_links();
    links.extend(SECTIONS.iter().map(NavLink::from));
    links
}

/// Dashboard counter card
///
/// `key` is the JSON field in `/api/reports`; the template writes it to a
/// `data-stat` attribute so the browser can refresh the value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    /// Bootstrap contextual color
    pub accent: &'static str,
}

impl StatCard {
    /// Cards for the four report counters, in display order
    pub fn from_reports(reports: &ReportsSummary) -> Vec<StatCard> {
        vec![
            StatCard {
                key: "dailyOrders",
                label: "Daily Orders",
                value: reports.daily_orders.to_string(),
                icon: "bi-bag",
                accent: "primary",
            },
            StatCard {
                key: "monthlyRevenue",
                label: "Monthly Revenue",
                value: format_currency(reports.monthly_revenue),
                icon: "bi-currency-dollar",
                accent: "success",
            },
            StatCard {
                key: "activeCustomers",
                label: "Active Customers",
                value: reports.active_customers.to_string(),
                icon: "bi-people",
                accent: "info",
            },
            StatCard {
                key: "pendingIssues",
                label: "Pending Issues",
                value: reports.pending_issues.to_string(),
                icon: "bi-exclamation-circle",
                accent: "warning",
            },
        ]
    }
}

/// Whole dollars with thousands separators, e.g. `$12,500`
pub fn format_currency(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a template into an HTML response body
pub fn render<T: Template>(page: &T) -> PageResult<Html<String>> {
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub chrome: Chrome,
    pub cards: Vec<StatCard>,
    /// Quick-access tiles, one per sidebar entry except the dashboard itself
    pub tiles: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "customers.html")]
pub struct CustomersPage {
    pub chrome: Chrome,
    pub customers: Vec<Customer>,
}

#[derive(Template)]
#[template(path = "orders.html")]
pub struct OrdersPage {
    pub chrome: Chrome,
    pub orders: Vec<Order>,
}

#[derive(Template)]
#[template(path = "valets.html")]
pub struct ValetsPage {
    pub chrome: Chrome,
    pub valets: Vec<Valet>,
}

#[derive(Template)]
#[template(path = "reports.html")]
pub struct ReportsPage {
    pub chrome: Chrome,
    pub cards: Vec<StatCard>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
}

#[derive(Template)]
#[template(path = "section.html")]
pub struct SectionPage {
    pub chrome: Chrome,
    pub slug: &'static str,
    pub icon: &'static str,
}

/// Standalone 404 page; it does not extend the layout
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {}
