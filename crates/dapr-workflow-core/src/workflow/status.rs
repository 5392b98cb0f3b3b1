//! Workflow status record and the normalizer that builds it from a raw payload.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, WorkflowError};
use crate::transport::ApiPayload;

/// Status of a remote workflow instance, as reported by a single get-status call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStatus {
    #[serde(rename = "instanceID")]
    pub instance_id: String,
    pub workflow_name: String,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
    /// Free-form status tag from the orchestrator (e.g. "RUNNING", "COMPLETED")
    pub runtime_status: String,
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

/// Convert a get-status payload into a `WorkflowStatus`.
///
/// Anything other than a JSON object is rejected. Missing fields are filled in
/// leniently: timestamps become "now", strings become empty, properties an empty map.
/// A timestamp that is present but unparseable is rejected.
pub fn normalize_status(payload: ApiPayload) -> Result<WorkflowStatus> {
    let record = match payload {
        ApiPayload::Json(Value::Object(record)) => record,
        ApiPayload::Json(other) => {
            return Err(WorkflowError::UnexpectedResponse(format!(
                "Error getting workflow instance: expected an object, got {}",
                other
            )))
        }
        ApiPayload::Text(text) => {
            return Err(WorkflowError::UnexpectedResponse(format!(
                "Error getting workflow instance: {}",
                text
            )))
        }
    };

    Ok(WorkflowStatus {
        instance_id: string_field(&record, "instanceID"),
        workflow_name: string_field(&record, "workflowName"),
        created_at: timestamp_field(&record, "createdAt")?,
        last_updated_at: timestamp_field(&record, "lastUpdatedAt")?,
        runtime_status: string_field(&record, "runtimeStatus"),
        properties: properties_field(&record),
    })
}

fn string_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn properties_field(record: &Map<String, Value>) -> HashMap<String, Value> {
    match record.get("properties") {
        Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        _ => HashMap::new(),
    }
}

fn timestamp_field(record: &Map<String, Value>, key: &str) -> Result<DateTime<Utc>> {
    let parsed = match record.get(key) {
        None | Some(Value::Null) => return Ok(Utc::now()),
        Some(Value::String(s)) if s.is_empty() => return Ok(Utc::now()),
        Some(Value::String(s)) => parse_timestamp(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        Some(_) => None,
    };

    parsed.ok_or_else(|| {
        WorkflowError::UnexpectedResponse(format!(
            "Error getting workflow instance: invalid timestamp in '{}': {}",
            key,
            record.get(key).map(Value::to_string).unwrap_or_default()
        ))
    })
}

/// RFC 3339 first, then the looser ISO-8601 forms sidecars emit: a numeric offset
/// without a colon, no offset at all (read as UTC), or a bare date (midnight UTC).
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
