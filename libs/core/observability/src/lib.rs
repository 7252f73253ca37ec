//! Prometheus metrics for the workspace services.
//!
//! - recorder installation and the `/metrics` handler
//! - HTTP request metrics middleware
//! - user directory counters
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, middleware::metrics_middleware};
//!
//! init_metrics()?;
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler))
//!     .layer(axum::middleware::from_fn(metrics_middleware));
//! ```

pub mod middleware;
pub mod users;

pub use users::UserMetrics;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder.
///
/// Idempotent: later calls return the handle from the first successful one.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        register_metric_descriptions();
        info!("Prometheus metrics recorder initialized");
        Ok(handle)
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for `/metrics`
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP requests answered with 4xx or 5xx"
    );

    describe_counter!("users_created_total", "Users persisted");
    describe_counter!(
        "users_rejected_total",
        "User create requests rejected by validation, by field"
    );
    describe_counter!("users_listed_total", "User list requests served");
}
