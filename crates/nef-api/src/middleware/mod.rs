//! HTTP middleware
//!
//! Author: hephaex@gmail.com

pub mod metrics;
pub mod security_headers;

pub use metrics::request_metrics_middleware;
pub use security_headers::security_headers_middleware;
