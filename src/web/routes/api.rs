//! JSON API Routes
//!
//! Read-only endpoints returning whole collections. No query parameters.
//!
//! - GET /api/customers
//! - GET /api/orders
//! - GET /api/valets
//! - GET /api/reports

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::data::{Customer, Order, ReportsSummary, Valet};
use crate::web::error::ApiResult;
use crate::web::state::AppState;

/// GET /api/customers
pub async fn list_customers(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Customer>>> {
    Ok(Json(state.data.customers().await?))
}

/// GET /api/orders
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.data.orders().await?))
}

/// GET /api/valets
pub async fn list_valets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Valet>>> {
    Ok(Json(state.data.valets().await?))
}

/// GET /api/reports
pub async fn get_reports(State(state): State<Arc<AppState>>) -> ApiResult<Json<ReportsSummary>> {
    Ok(Json(state.data.reports().await?))
}
