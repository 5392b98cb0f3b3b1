//! Lifecycle request builder: turns an operation plus identifiers into method and path.
//!
//! Pure and synchronous. All validation that can fail without touching the network
//! happens here, so a bad identifier never reaches the executor.

use crate::config::DEFAULT_WORKFLOW_COMPONENT;
use crate::error::{Result, WorkflowError};
use crate::transport::HttpMethod;

const WORKFLOWS_ROOT: &str = "/workflows";

/// The closed set of lifecycle verbs understood by the workflow API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleOperation {
    GetStatus,
    Terminate,
    Pause,
    Resume,
    Purge,
    Start { workflow_name: String },
    RaiseEvent { event_name: String },
}

impl LifecycleOperation {
    pub fn method(&self) -> HttpMethod {
        match self {
            Self::GetStatus => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }

    /// Path token naming the sub-action; `None` for a plain status read.
    pub fn verb_token(&self) -> Option<&'static str> {
        match self {
            Self::GetStatus => None,
            Self::Terminate => Some("terminate"),
            Self::Pause => Some("pause"),
            Self::Resume => Some("resume"),
            Self::Purge => Some("purge"),
            Self::Start { .. } => Some("start"),
            Self::RaiseEvent { .. } => Some("raiseEvent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleRequest {
    pub method: HttpMethod,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct RequestBuilder {
    default_component: String,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_WORKFLOW_COMPONENT)
    }
}

impl RequestBuilder {
    pub fn new(default_component: impl Into<String>) -> Self {
        Self {
            default_component: default_component.into(),
        }
    }

    pub fn default_component(&self) -> &str {
        &self.default_component
    }

    /// Resolve the component an operation targets; absent or empty means the default.
    pub fn resolve_component<'a>(&'a self, component: Option<&'a str>) -> &'a str {
        match component {
            Some(c) if !c.is_empty() => c,
            _ => &self.default_component,
        }
    }

    /// Build the request for `operation` on `instance_id`.
    ///
    /// `Start` addresses a workflow definition rather than an instance, so
    /// `instance_id` is not consulted for it.
    pub fn build(
        &self,
        operation: &LifecycleOperation,
        instance_id: &str,
        component: Option<&str>,
    ) -> Result<LifecycleRequest> {
        let component = encode(self.resolve_component(component));

        let path = match operation {
            LifecycleOperation::Start { workflow_name } => {
                require(workflow_name, "workflowName")?;
                format!("{}/{}/start/{}", WORKFLOWS_ROOT, component, encode(workflow_name))
            }
            LifecycleOperation::GetStatus => {
                require(instance_id, "instanceID")?;
                format!("{}/{}/{}", WORKFLOWS_ROOT, component, encode(instance_id))
            }
            LifecycleOperation::RaiseEvent { event_name } => {
                require(instance_id, "instanceID")?;
                require(event_name, "eventName")?;
                format!(
                    "{}/{}/{}/raiseEvent/{}",
                    WORKFLOWS_ROOT,
                    component,
                    encode(instance_id),
                    encode(event_name)
                )
            }
            LifecycleOperation::Terminate
            | LifecycleOperation::Pause
            | LifecycleOperation::Resume
            | LifecycleOperation::Purge => {
                require(instance_id, "instanceID")?;
                let verb = operation.verb_token().unwrap_or_default();
                require(verb, "method")?;
                format!("{}/{}/{}/{}", WORKFLOWS_ROOT, component, encode(instance_id), verb)
            }
        };

        Ok(LifecycleRequest {
            method: operation.method(),
            path,
        })
    }
}

fn require(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(WorkflowError::InvalidArgument(format!("{} is required", name)));
    }
    Ok(())
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<LifecycleRequest>, expected: &str) {
        match result {
            Err(WorkflowError::InvalidArgument(msg)) => assert!(msg.contains(expected), "{}", msg),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_get_status_path() {
        let builder = RequestBuilder::default();
        let request = builder.build(&LifecycleOperation::GetStatus, "abc", None).unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/workflows/dapr/abc");
    }

    #[test]
    fn test_commands_use_default_component() {
        let builder = RequestBuilder::default();
        for (op, verb) in [
            (LifecycleOperation::Terminate, "terminate"),
            (LifecycleOperation::Pause, "pause"),
            (LifecycleOperation::Resume, "resume"),
            (LifecycleOperation::Purge, "purge"),
        ] {
            let request = builder.build(&op, "abc", None).unwrap();
            assert_eq!(request.method, HttpMethod::Post);
            assert_eq!(request.path, format!("/workflows/dapr/abc/{}", verb));
        }
    }

    #[test]
    fn test_explicit_component_used_verbatim() {
        let builder = RequestBuilder::default();
        let request = builder
            .build(&LifecycleOperation::Pause, "abc", Some("custom"))
            .unwrap();
        assert_eq!(request.path, "/workflows/custom/abc/pause");

        let request = builder
            .build(&LifecycleOperation::GetStatus, "abc", Some("custom"))
            .unwrap();
        assert_eq!(request.path, "/workflows/custom/abc");
    }

    #[test]
    fn test_empty_component_falls_back_to_default() {
        let builder = RequestBuilder::new("temporal");
        let request = builder.build(&LifecycleOperation::Resume, "abc", Some("")).unwrap();
        assert_eq!(request.path, "/workflows/temporal/abc/resume");
    }

    #[test]
    fn test_empty_instance_id_rejected() {
        let builder = RequestBuilder::default();
        assert_invalid(builder.build(&LifecycleOperation::GetStatus, "", None), "instanceID");
        assert_invalid(builder.build(&LifecycleOperation::Purge, "", None), "instanceID");
        assert_invalid(
            builder.build(
                &LifecycleOperation::RaiseEvent {
                    event_name: "approved".to_string(),
                },
                "",
                None,
            ),
            "instanceID",
        );
    }

    #[test]
    fn test_raise_event_path() {
        let builder = RequestBuilder::default();
        let op = LifecycleOperation::RaiseEvent {
            event_name: "approved".to_string(),
        };
        let request = builder.build(&op, "order-1", None).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/workflows/dapr/order-1/raiseEvent/approved");

        let op = LifecycleOperation::RaiseEvent {
            event_name: String::new(),
        };
        assert_invalid(builder.build(&op, "order-1", None), "eventName");
    }

    #[test]
    fn test_start_path() {
        let builder = RequestBuilder::default();
        let op = LifecycleOperation::Start {
            workflow_name: "OrderProcessing".to_string(),
        };
        let request = builder.build(&op, "", Some("custom")).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/workflows/custom/start/OrderProcessing");

        let op = LifecycleOperation::Start {
            workflow_name: String::new(),
        };
        assert_invalid(builder.build(&op, "abc", None), "workflowName");
    }

    #[test]
    fn test_segments_are_encoded() {
        let builder = RequestBuilder::default();
        let request = builder
            .build(&LifecycleOperation::Terminate, "a/b c", None)
            .unwrap();
        assert_eq!(request.path, "/workflows/dapr/a%2Fb%20c/terminate");
    }
}
