//! Alarm inventory query client.
//!
//! Queries a monitoring backend for configured alarms and normalizes the
//! response into [`AlarmDescriptor`] records. Malformed records are dropped,
//! never fatal; transport failures surface unchanged.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    metrics,
    model::{AlarmDescriptor, AlarmState, QueryResult},
    transport::{QueryRequest, Transport, DESCRIBE_ALARMS},
    Error, Result,
};

/// Filters forwarded to the backend with a describe-alarms query.
#[derive(Debug, Clone, Default)]
pub struct DescribeAlarmsOptions {
    pub state: Option<AlarmState>,
    pub alarm_name_prefix: Option<String>,
    pub max_records: Option<u32>,
}

pub struct AlarmQueryClient {
    transport: Arc<dyn Transport>,
}

// Response document shape for DescribeAlarms. Elements of MetricAlarms are
// decoded one at a time so a malformed record cannot poison its siblings.
#[derive(Debug, Default, Deserialize)]
struct DescribeAlarmsPage {
    #[serde(rename = "MetricAlarms", default)]
    metric_alarms: Vec<Value>,
    #[serde(rename = "NextToken", default)]
    next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMetricAlarm {
    #[serde(rename = "AlarmName")]
    alarm_name: String,
    #[serde(rename = "StateValue")]
    state_value: AlarmState,
    #[serde(rename = "StateReason", default)]
    state_reason: Option<String>,
    #[serde(rename = "StateUpdatedTimestamp", default)]
    state_updated_timestamp: Option<DateTime<Utc>>,
}

impl AlarmQueryClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Endpoint serving a given region.
    pub fn endpoint_url(region: &str) -> String {
        format!("https://monitoring.{}.amazonaws.com", region)
    }

    /// List every alarm configured in a region.
    pub async fn describe_alarms(&self, region: &str) -> Result<QueryResult> {
        self.describe_alarms_with(region, &DescribeAlarmsOptions::default())
            .await
    }

    /// List alarms in a region, narrowed by the given filters.
    ///
    /// Follows `NextToken` pagination until the backend reports no further
    /// pages, preserving backend order across pages.
    pub async fn describe_alarms_with(
        &self,
        region: &str,
        options: &DescribeAlarmsOptions,
    ) -> Result<QueryResult> {
        if region.is_empty() {
            return Err(Error::Config("region must not be empty".to_string()));
        }

        let endpoint_url = Self::endpoint_url(region);
        info!("Describing alarms in {} via {}", region, endpoint_url);
        metrics::QUERIES_TOTAL.inc();

        let mut alarms = Vec::new();
        let mut dropped_records = 0usize;
        let mut next_token: Option<String> = None;

        loop {
            let request = self.build_request(&endpoint_url, options, next_token.as_deref());
            let raw = self.transport.send(&request).await?;

            let page = match serde_json::from_value::<DescribeAlarmsPage>(raw) {
                Ok(page) => page,
                Err(e) => {
                    // A body that is not a describe-alarms document counts as
                    // zero records, not a failed call.
                    warn!("Response is not a DescribeAlarms document ({}), treating as empty", e);
                    DescribeAlarmsPage::default()
                }
            };

            for value in page.metric_alarms {
                match parse_record(value, region) {
                    Ok(descriptor) => alarms.push(descriptor),
                    Err(e) => {
                        warn!("Dropping malformed alarm record: {}", e);
                        metrics::DROPPED_RECORDS_TOTAL.inc();
                        dropped_records += 1;
                    }
                }
            }

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        info!(
            "Described {} alarms in {} ({} malformed records dropped)",
            alarms.len(),
            region,
            dropped_records
        );

        Ok(QueryResult {
            alarms,
            endpoint_url,
            dropped_records,
        })
    }

    fn build_request(
        &self,
        endpoint_url: &str,
        options: &DescribeAlarmsOptions,
        next_token: Option<&str>,
    ) -> QueryRequest {
        let mut request = QueryRequest::new(DESCRIBE_ALARMS, endpoint_url);
        if let Some(state) = options.state {
            request = request.with_param("StateValue", state.as_wire_str());
        }
        if let Some(prefix) = &options.alarm_name_prefix {
            request = request.with_param("AlarmNamePrefix", prefix.clone());
        }
        if let Some(max) = options.max_records {
            request = request.with_param("MaxRecords", max.to_string());
        }
        if let Some(token) = next_token {
            request = request.with_param("NextToken", token);
        }
        request
    }
}

fn parse_record(value: Value, region: &str) -> Result<AlarmDescriptor> {
    let raw: RawMetricAlarm =
        serde_json::from_value(value).map_err(|e| Error::MalformedResponse(e.to_string()))?;

    if raw.alarm_name.is_empty() {
        return Err(Error::MalformedResponse(
            "alarm record has an empty AlarmName".to_string(),
        ));
    }

    Ok(AlarmDescriptor {
        name: raw.alarm_name,
        state: raw.state_value,
        region: region.to_string(),
        state_reason: raw.state_reason,
        state_updated_at: raw.state_updated_timestamp,
    })
}
