//! Page Routes
//!
//! Server-rendered HTML pages. Each handler reads a fixed slice of data and
//! renders one template inside the shared layout.
//!
//! - GET / - Dashboard with counters and quick-access tiles
//! - GET /customers - Customer table
//! - GET /orders - Order table
//! - GET /valets - Valet table
//! - GET /reports - Counters plus customer and order tables
//! - GET /<section> - Placeholder for each portal section

use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

use crate::web::error::PageResult;
use crate::web::sections::Section;
use crate::web::state::AppState;
use crate::web::views::{
    nav_links, render, CustomersPage, DashboardPage, NotFoundPage, OrdersPage, ReportsPage,
    SectionPage, StatCard, ValetsPage,
};

/// GET /
pub async fn dashboard(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let reports = state.data.reports().await?;

    let page = DashboardPage {
        chrome: state.chrome(state.config.portal.title.clone()),
        cards: StatCard::from_reports(&reports),
        tiles: nav_links().into_iter().skip(1).collect(),
    };

    render(&page)
}

/// GET /customers
pub async fn customers(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let page = CustomersPage {
        chrome: state.chrome("Customers"),
        customers: state.data.customers().await?,
    };

    render(&page)
}

/// GET /orders
pub async fn orders(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let page = OrdersPage {
        chrome: state.chrome("Orders"),
        orders: state.data.orders().await?,
    };

    render(&page)
}

/// GET /valets
pub async fn valets(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let page = ValetsPage {
        chrome: state.chrome("Valets"),
        valets: state.data.valets().await?,
    };

    render(&page)
}

/// GET /reports
pub async fn reports(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let reports = state.data.reports().await?;

    let page = ReportsPage {
        chrome: state.chrome("Reports"),
        cards: StatCard::from_reports(&reports),
        customers: state.data.customers().await?,
        orders: state.data.orders().await?,
    };

    render(&page)
}

/// GET /<section>
///
/// Registered once per entry in [`SECTIONS`](crate::web::sections::SECTIONS).
pub async fn section(
    State(state): State<Arc<AppState>>,
    section: &'static Section,
) -> PageResult<Html<String>> {
    let page = SectionPage {
        chrome: state.chrome(section.title()),
        slug: section.slug,
        icon: section.icon,
    };

    render(&page)
}

/// Fallback for any path that is neither a route nor a static file
pub async fn not_found() -> (StatusCode, PageResult<Html<String>>) {
    (StatusCode::NOT_FOUND, render(&NotFoundPage {}))
}
