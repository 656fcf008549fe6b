//! SWASH Web Server
//!
//! HTML pages and the JSON API, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Dashboard
//! - `GET /customers`, `/orders`, `/valets`, `/reports` - Data pages
//! - `GET /<section>` - Placeholder page for each portal section
//!
//! ## API
//! - `GET /api/customers` - All customers
//! - `GET /api/orders` - All orders
//! - `GET /api/valets` - All valets
//! - `GET /api/reports` - Summary counters
//!
//! ## Health
//! - `GET /health` - Liveness, uptime and version
//!
//! Page, API and health paths match with or without a trailing slash and in
//! any letter case. Any other path is looked up in the static asset directory
//! and answers 404 when no file matches.
//!
//! # Example
//!
//! ```rust,no_run
//! use swash_admin::config::Config;
//! use swash_admin::web::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::with_fixtures(Config::default());
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod sections;
pub mod state;
pub mod views;

pub use error::{ApiError, ApiResult, PageError, PageResult};
pub use state::AppState;

use axum::{
    extract::{Request, State},
    handler::HandlerWithoutStateExt,
    http::{uri::PathAndQuery, HeaderValue, Method, Uri},
    routing::get,
    Router, ServiceExt,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::{util::MapRequestLayer, Layer};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use self::sections::SECTIONS;

/// Paths of the data pages
pub const DATA_PAGE_PATHS: &[&str] = &["/", "/customers", "/orders", "/valets", "/reports"];

/// Path of the health check
pub const HEALTH_PATH: &str = "/health";

/// Paths of the JSON API
pub const API_PATHS: &[&str] = &[
    "/api/customers",
    "/api/orders",
    "/api/valets",
    "/api/reports",
];

/// Paths of every HTML page, data pages first
pub fn page_paths() -> Vec<String> {
    let mut paths: Vec<String> = DATA_PAGE_PATHS.iter().map(|p| p.to_string()).collect();
    paths.extend(SECTIONS.iter().map(|s| s.path()));
    paths
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/customers", get(routes::api::list_customers))
        .route("/orders", get(routes::api::list_orders))
        .route("/valets", get(routes::api::list_valets))
        .route("/reports", get(routes::api::get_reports));

    let mut page_routes: Router<Arc<AppState>> = Router::new()
        .route("/", get(routes::pages::dashboard))
        .route("/customers", get(routes::pages::customers))
        .route("/orders", get(routes::pages::orders))
        .route("/valets", get(routes::pages::valets))
        .route("/reports", get(routes::pages::reports));

    for section in SECTIONS {
        page_routes = page_routes.route(
            &section.path(),
            get(move |state: State<Arc<AppState>>| routes::pages::section(state, section)),
        );
    }

    let static_files = ServeDir::new(&state.config.server.static_dir)
        .not_found_service(routes::pages::not_found.into_service());

    let cors = cors_layer(&state.config.server.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        .route(HEALTH_PATH, get(routes::health::health))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Router wrapped in the path canonicalization applied before routing
pub type App = NormalizePath<CaseFolded<Router>>;

pub type CaseFolded<S> = tower::util::MapRequest<S, fn(Request) -> Request>;

/// Build the full service: trailing slashes are trimmed and route paths are
/// matched without regard to case before the router sees the request.
///
/// Path rewriting has to wrap the router, since layers added with
/// `Router::layer` only run after a route has been picked.
pub fn build_app(state: AppState) -> App {
    let router = build_router(state);
    let folded = MapRequestLayer::new(fold_route_case as fn(Request) -> Request).layer(router);
    NormalizePathLayer::trim_trailing_slash().layer(folded)
}

/// True for every page, API and health path, given in lowercase
fn is_route_path(path: &str) -> bool {
    DATA_PAGE_PATHS.contains(&path)
        || API_PATHS.contains(&path)
        || path == HEALTH_PATH
        || path.strip_prefix('/').and_then(sections::find).is_some()
}

/// Lowercase the path when that names a route; static file paths keep their case
fn fold_route_case(mut req: Request) -> Request {
    let path = req.uri().path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let lowered = path.to_ascii_lowercase();
    if !is_route_path(&lowered) {
        return req;
    }

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{}?{}", lowered, query),
        None => lowered,
    };

    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = path_and_query.parse::<PathAndQuery>().ok();
    if let Ok(uri) = Uri::from_parts(parts) {
        *req.uri_mut() = uri;
    }
    req
}

/// Permissive when no origins are configured, otherwise an explicit allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::HEAD])
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let (listener, local_addr) = bind(&state.config.server).await?;
    let app = build_app(state);

    tracing::info!("SWASH Admin Dashboard listening on {}", local_addr);
    tracing::info!("Dashboard available at http://localhost:{}", local_addr.port());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("SWASH Admin Dashboard shut down gracefully");
    Ok(())
}

/// Bind the configured address and report the one actually bound
async fn bind(server: &ServerConfig) -> Result<(TcpListener, SocketAddr), ApiError> {
    let listener = TcpListener::bind(server.addr()).await?;
    let local_addr = listener.local_addr()?;
    Ok((listener, local_addr))
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
