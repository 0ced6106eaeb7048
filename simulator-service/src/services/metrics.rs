use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{IntCounterVec, Opts, Registry};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static CHECKOUT_TRANSACTIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    let handle = builder
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("failed to set metrics handle: already initialized");
    }

    // Registry for custom labeled counters
    let registry = Registry::new();

    let checkout_counter = IntCounterVec::new(
        Opts::new(
            "checkout_transactions_total",
            "Simulated checkout outcomes by payment method and status",
        ),
        &["payment_method", "status"],
    )
    .expect("Failed to create checkout_transactions_total metric");

    registry
        .register(Box::new(checkout_counter.clone()))
        .expect("Failed to register checkout_transactions_total");

    PROMETHEUS_REGISTRY
        .set(registry)
        .expect("Failed to set prometheus registry");
    CHECKOUT_TRANSACTIONS_TOTAL
        .set(checkout_counter)
        .expect("Failed to set checkout_transactions_total");
}

pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    // Append custom prometheus metrics
    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Record one simulated checkout outcome. A no-op until metrics are
/// initialized, so the counter never sits on the decision path.
pub fn record_checkout(payment_method: &str, status: &str) {
    if let Some(counter) = CHECKOUT_TRANSACTIONS_TOTAL.get() {
        counter.with_label_values(&[payment_method, status]).inc();
    }
}
