use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use alarm_inventory_client::{
    client::{AlarmQueryClient, DescribeAlarmsOptions},
    config::Config,
    metrics,
    transport::HttpTransport,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load()?;
    info!("Loaded configuration: {:?}", config);

    metrics::register_metrics();

    // Initialize transport
    let mut transport = HttpTransport::new()
        .with_timeout(Duration::from_secs(config.transport.timeout_secs));
    if let Some(token) = config.transport.auth_token.clone() {
        transport = transport.with_auth_token(token);
    }

    let client = AlarmQueryClient::new(Arc::new(transport));

    let options = DescribeAlarmsOptions {
        max_records: config.query.max_records,
        ..Default::default()
    };

    let result = client
        .describe_alarms_with(&config.query.region, &options)
        .await?;

    info!(
        "Fetched {} alarms from {}",
        result.alarms.len(),
        result.endpoint_url
    );
    for alarm in &result.alarms {
        println!(
            "{} [{}] {}",
            alarm.name,
            alarm.state.as_wire_str(),
            alarm.state_reason.as_deref().unwrap_or("-")
        );
    }
    if result.dropped_records > 0 {
        info!("Dropped {} malformed records", result.dropped_records);
    }

    Ok(())
}
