//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::data::{DataProvider, FixtureStore};
use crate::web::views::{nav_links, Chrome};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Source of customers, orders, valets and report counters
    pub data: Arc<dyn DataProvider>,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around any data provider
    pub fn new(data: Arc<dyn DataProvider>, config: Config) -> Self {
        Self {
            data,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Create state backed by the built-in demo dataset
    pub fn with_fixtures(config: Config) -> Self {
        Self::new(Arc::new(FixtureStore::new()), config)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Shared layout context for a page with the given title
    pub fn chrome(&self, title: impl Into<String>) -> Chrome {
        Chrome {
            title: title.into(),
            user: self.config.portal.user.clone(),
            nav: nav_links(),
        }
    }
}
