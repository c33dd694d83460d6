//! Application state management
//!
//! Author: hephaex@gmail.com

use nef_core::AppConfig;
use nef_extractor::{NamedEntityClient, NerModel};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Model handle shared by all request tasks
pub type SharedModel = Arc<dyn NerModel>;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// Entity client wrapping the configured model
    pub client: NamedEntityClient<SharedModel>,
}

impl AppState {
    /// Create new application state with config and model
    pub fn new(config: AppConfig, model: SharedModel) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            client: NamedEntityClient::new(model),
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Name of the configured model
    pub fn model_name(&self) -> &str {
        self.client.model().name()
    }
}
