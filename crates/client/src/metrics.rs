use lazy_static::lazy_static;
use prometheus::{register_int_counter, Encoder, IntCounter, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref QUERIES_TOTAL: IntCounter =
        register_int_counter!(
            "alarminventory_queries_total",
            "Total number of alarm inventory queries issued."
        ).unwrap();
    pub static ref DROPPED_RECORDS_TOTAL: IntCounter =
        register_int_counter!(
            "alarminventory_dropped_records_total",
            "Total number of malformed alarm records dropped."
        ).unwrap();
}

pub fn register_metrics() {
    REGISTRY
        .register(Box::new(QUERIES_TOTAL.clone()))
        .expect("Failed to register QUERIES_TOTAL");
    REGISTRY
        .register(Box::new(DROPPED_RECORDS_TOTAL.clone()))
        .expect("Failed to register DROPPED_RECORDS_TOTAL");
}

// Function to gather metrics for exposition
pub fn gather_metrics() -> String {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .expect("Failed to encode metrics");
    String::from_utf8(buffer).expect("Failed to convert metrics to string")
}
