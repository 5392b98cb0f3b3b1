//! `dapr-workflow <action>`: lifecycle commands against a running sidecar.

use dapr_workflow_core::WorkflowClient;

/// Print the status of a workflow instance as JSON.
pub async fn get(
    client: &WorkflowClient,
    instance_id: &str,
    component: Option<&str>,
) -> Result<(), String> {
    let status = client
        .get_status(instance_id, component)
        .await
        .map_err(|e| e.to_string())?;

    let rendered = serde_json::to_string_pretty(&status).map_err(|e| e.to_string())?;
    println!("{}", rendered);
    Ok(())
}

pub async fn terminate(
    client: &WorkflowClient,
    instance_id: &str,
    component: Option<&str>,
) -> Result<(), String> {
    client
        .terminate(instance_id, component)
        .await
        .map_err(|e| e.to_string())?;
    println!("Terminated workflow instance {}", instance_id);
    Ok(())
}

pub async fn pause(
    client: &WorkflowClient,
    instance_id: &str,
    component: Option<&str>,
) -> Result<(), String> {
    client
        .pause(instance_id, component)
        .await
        .map_err(|e| e.to_string())?;
    println!("Paused workflow instance {}", instance_id);
    Ok(())
}

pub async fn resume(
    client: &WorkflowClient,
    instance_id: &str,
    component: Option<&str>,
) -> Result<(), String> {
    client
        .resume(instance_id, component)
        .await
        .map_err(|e| e.to_string())?;
    println!("Resumed workflow instance {}", instance_id);
    Ok(())
}

pub async fn purge(
    client: &WorkflowClient,
    instance_id: &str,
    component: Option<&str>,
) -> Result<(), String> {
    client
        .purge(instance_id, component)
        .await
        .map_err(|e| e.to_string())?;
    println!("Purged workflow instance {}", instance_id);
    Ok(())
}

pub async fn start(
    client: &WorkflowClient,
    workflow_name: &str,
    input: Option<serde_json::Value>,
    instance_id: Option<&str>,
    component: Option<&str>,
) -> Result<(), String> {
    let id = client
        .start(workflow_name, input, instance_id, component)
        .await
        .map_err(|e| e.to_string())?;
    println!("Started workflow instance {}", id);
    Ok(())
}

pub async fn raise_event(
    client: &WorkflowClient,
    instance_id: &str,
    event_name: &str,
    input: Option<serde_json::Value>,
    component: Option<&str>,
) -> Result<(), String> {
    let result = client
        .raise_event(instance_id, event_name, input, component)
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", result);
    Ok(())
}
