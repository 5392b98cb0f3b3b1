//! Workflow lifecycle client: the public surface for controlling remote workflow instances.
//!
//! Each operation validates its inputs, builds one request, executes it through the
//! injected `RequestExecutor`, and (for `get_status`) normalizes the reply. Failures
//! after validation are logged once and returned to the caller as-is.

use std::sync::Arc;

use crate::config::{ClientOptions, WORKFLOW_API_VERSION};
use crate::error::{Result, WorkflowError};
use crate::logger::{TracingLogger, WorkflowLogger};
use crate::transport::{HttpRequestExecutor, RequestExecutor, RequestOptions};
use crate::workflow::request::{LifecycleOperation, RequestBuilder};
use crate::workflow::status::{normalize_status, WorkflowStatus};

pub struct WorkflowClient {
    executor: Arc<dyn RequestExecutor>,
    logger: Arc<dyn WorkflowLogger>,
    builder: RequestBuilder,
}

impl WorkflowClient {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self {
            executor,
            logger: Arc::new(TracingLogger::default()),
            builder: RequestBuilder::default(),
        }
    }

    /// Create a client backed by the sidecar's HTTP API.
    pub fn from_options(options: &ClientOptions) -> Result<Self> {
        let executor = HttpRequestExecutor::new(options)?;
        Ok(Self::new(Arc::new(executor)).with_default_component(options.default_component.clone()))
    }

    pub fn with_logger(mut self, logger: Arc<dyn WorkflowLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_default_component(mut self, component: impl Into<String>) -> Self {
        self.builder = RequestBuilder::new(component);
        self
    }

    pub fn default_component(&self) -> &str {
        self.builder.default_component()
    }

    /// Fetch the current status of a workflow instance.
    pub async fn get_status(
        &self,
        instance_id: &str,
        component: Option<&str>,
    ) -> Result<WorkflowStatus> {
        let request = self
            .builder
            .build(&LifecycleOperation::GetStatus, instance_id, component)?;

        self.logger
            .debug(&format!("Getting workflow instance {} ({})", instance_id, request.path));

        let result = match self
            .executor
            .execute(WORKFLOW_API_VERSION, &request.path, RequestOptions::new(request.method))
            .await
        {
            Ok(payload) => normalize_status(payload),
            Err(e) => Err(WorkflowError::from(e)),
        };

        result.inspect_err(|e| {
            self.logger
                .error(&format!("Error getting workflow instance: {}", e));
        })
    }

    /// Start a new workflow instance.
    ///
    /// Not wired to the sidecar yet; always fails with `NotImplemented`.
    pub async fn start(
        &self,
        _workflow_name: &str,
        _input: Option<serde_json::Value>,
        _instance_id: Option<&str>,
        _component: Option<&str>,
    ) -> Result<String> {
        Err(WorkflowError::NotImplemented("start"))
    }

    pub async fn terminate(&self, instance_id: &str, component: Option<&str>) -> Result<()> {
        self.invoke_method(instance_id, LifecycleOperation::Terminate, component)
            .await
    }

    pub async fn pause(&self, instance_id: &str, component: Option<&str>) -> Result<()> {
        self.invoke_method(instance_id, LifecycleOperation::Pause, component)
            .await
    }

    pub async fn resume(&self, instance_id: &str, component: Option<&str>) -> Result<()> {
        self.invoke_method(instance_id, LifecycleOperation::Resume, component)
            .await
    }

    pub async fn purge(&self, instance_id: &str, component: Option<&str>) -> Result<()> {
        self.invoke_method(instance_id, LifecycleOperation::Purge, component)
            .await
    }

    /// Raise an external event on a running instance.
    ///
    /// Not wired to the sidecar yet; always fails with `NotImplemented`.
    pub async fn raise_event(
        &self,
        _instance_id: &str,
        _event_name: &str,
        _input: Option<serde_json::Value>,
        _component: Option<&str>,
    ) -> Result<serde_json::Value> {
        Err(WorkflowError::NotImplemented("raise_event"))
    }

    /// Shared path for body-less POST commands. Any payload is discarded.
    async fn invoke_method(
        &self,
        instance_id: &str,
        operation: LifecycleOperation,
        component: Option<&str>,
    ) -> Result<()> {
        let request = self.builder.build(&operation, instance_id, component)?;
        let verb = operation.verb_token().unwrap_or_default();

        self.logger
            .debug(&format!("Invoking '{}' on workflow instance {}", verb, instance_id));

        if let Err(e) = self
            .executor
            .execute(WORKFLOW_API_VERSION, &request.path, RequestOptions::new(request.method))
            .await
        {
            self.logger.error(&format!(
                "Error invoking '{}' on workflow instance {}: {}",
                verb, instance_id, e
            ));
            return Err(e.into());
        }

        Ok(())
    }
}
