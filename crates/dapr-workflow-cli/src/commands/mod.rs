pub mod workflow;

use dapr_workflow_core::{ClientOptions, WorkflowClient};

/// Build a workflow client against the configured sidecar.
pub fn init_client(options: &ClientOptions) -> Result<WorkflowClient, String> {
    WorkflowClient::from_options(options)
        .map_err(|e| format!("Failed to create workflow client: {}", e))
}

/// Parse an optional `--input` argument as JSON.
pub fn parse_input(input: Option<&str>) -> Result<Option<serde_json::Value>, String> {
    input
        .map(|raw| {
            serde_json::from_str(raw).map_err(|e| format!("Invalid JSON input: {}", e))
        })
        .transpose()
}
