//! Integration tests for the dapr-workflow CLI commands.
//!
//! These tests drive the same command handlers as the binary, with a
//! recording executor standing in for the sidecar.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dapr_workflow_cli::commands;
use dapr_workflow_core::{
    ApiPayload, HttpMethod, RequestExecutor, RequestOptions, TransportError, WorkflowClient,
};

/// Records (method, path) pairs and replies with a fixed payload.
struct RecordingExecutor {
    requests: Mutex<Vec<(HttpMethod, String)>>,
    reply: Result<ApiPayload, (u16, String)>,
}

impl RecordingExecutor {
    fn new(reply: Result<ApiPayload, (u16, String)>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn requests(&self) -> Vec<(HttpMethod, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    async fn execute(
        &self,
        api_version: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiPayload, TransportError> {
        assert_eq!(api_version, "v1.0-alpha1");
        assert!(options.body.is_none());
        self.requests
            .lock()
            .unwrap()
            .push((options.method, path.to_string()));
        self.reply
            .clone()
            .map_err(|(status, body)| TransportError::Status { status, body })
    }
}

fn status_payload() -> ApiPayload {
    ApiPayload::Json(serde_json::json!({
        "instanceID": "order-42",
        "workflowName": "OrderProcessing",
        "createdAt": "2023-01-01T00:00:00Z",
        "lastUpdatedAt": "2023-01-02T00:00:00Z",
        "runtimeStatus": "RUNNING",
        "properties": { "dapr.workflow.input": "{}" }
    }))
}

#[tokio::test]
async fn test_get_prints_status() {
    let executor = RecordingExecutor::new(Ok(status_payload()));
    let client = WorkflowClient::new(executor.clone());

    commands::workflow::get(&client, "order-42", None)
        .await
        .expect("get should succeed");

    assert_eq!(
        executor.requests(),
        vec![(HttpMethod::Get, "/workflows/dapr/order-42".to_string())]
    );
}

#[tokio::test]
async fn test_lifecycle_commands_use_component() {
    let executor = RecordingExecutor::new(Ok(ApiPayload::Text(String::new())));
    let client = WorkflowClient::new(executor.clone());

    commands::workflow::pause(&client, "order-42", Some("custom")).await.unwrap();
    commands::workflow::resume(&client, "order-42", Some("custom")).await.unwrap();
    commands::workflow::terminate(&client, "order-42", None).await.unwrap();
    commands::workflow::purge(&client, "order-42", None).await.unwrap();

    assert_eq!(
        executor.requests(),
        vec![
            (HttpMethod::Post, "/workflows/custom/order-42/pause".to_string()),
            (HttpMethod::Post, "/workflows/custom/order-42/resume".to_string()),
            (HttpMethod::Post, "/workflows/dapr/order-42/terminate".to_string()),
            (HttpMethod::Post, "/workflows/dapr/order-42/purge".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_sidecar_error_surfaces_as_message() {
    let executor = RecordingExecutor::new(Err((500, "no such instance".to_string())));
    let client = WorkflowClient::new(executor.clone());

    let err = commands::workflow::terminate(&client, "order-42", None)
        .await
        .unwrap_err();
    assert!(err.contains("500"));
    assert!(err.contains("no such instance"));
    assert_eq!(executor.requests().len(), 1);
}

#[tokio::test]
async fn test_empty_instance_id_rejected_before_request() {
    let executor = RecordingExecutor::new(Ok(status_payload()));
    let client = WorkflowClient::new(executor.clone());

    let err = commands::workflow::get(&client, "", None).await.unwrap_err();
    assert!(err.contains("instanceID is required"));
    assert!(executor.requests().is_empty());
}

#[tokio::test]
async fn test_start_and_raise_event_report_not_implemented() {
    let executor = RecordingExecutor::new(Ok(status_payload()));
    let client = WorkflowClient::new(executor.clone());

    let input = commands::parse_input(Some(r#"{"orderId": 42}"#)).unwrap();
    let err = commands::workflow::start(&client, "OrderProcessing", input, None, None)
        .await
        .unwrap_err();
    assert!(err.contains("Not implemented"));

    let err = commands::workflow::raise_event(&client, "order-42", "approved", None, None)
        .await
        .unwrap_err();
    assert!(err.contains("Not implemented"));
    assert!(executor.requests().is_empty());
}

#[test]
fn test_parse_input() {
    assert_eq!(commands::parse_input(None).unwrap(), None);
    assert_eq!(
        commands::parse_input(Some("[1,2]")).unwrap(),
        Some(serde_json::json!([1, 2]))
    );
    assert!(commands::parse_input(Some("{not json")).is_err());
}
