//! Metrics for the user directory.

use metrics::counter;

/// User operation metrics recorder
pub struct UserMetrics;

impl UserMetrics {
    /// A user was persisted
    pub fn record_created() {
        counter!("users_created_total").increment(1);
    }

    /// A create request was rejected before reaching storage
    pub fn record_rejected(field: &str) {
        counter!("users_rejected_total", "field" => field.to_string()).increment(1);
    }

    /// A full listing was served
    pub fn record_listed(returned: usize) {
        counter!("users_listed_total").increment(1);
        tracing::trace!(returned, "User list served");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_user_counters_render() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            UserMetrics::record_created();
            UserMetrics::record_created();
            UserMetrics::record_rejected("login");
            UserMetrics::record_listed(2);
        });

        let rendered = handle.render();
        assert!(rendered.contains("users_created_total 2"));
        assert!(rendered.contains("users_rejected_total{field=\"login\"} 1"));
        assert!(rendered.contains("users_listed_total 1"));
    }
}
