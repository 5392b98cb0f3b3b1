//! Leveled logging capability used by the workflow client.
//!
//! The client never talks to `tracing` directly; it logs through a `WorkflowLogger`
//! so hosts can route messages elsewhere and tests can count them.

pub trait WorkflowLogger: Send + Sync {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    fn info(&self, message: &str);
    fn verbose(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Forwards to `tracing`, prefixing each message with `[area]`.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    area: String,
}

impl TracingLogger {
    pub fn new(area: impl Into<String>) -> Self {
        Self { area: area.into() }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("Workflow")
    }
}

impl WorkflowLogger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("[{}] {}", self.area, message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("[{}] {}", self.area, message);
    }

    fn info(&self, message: &str) {
        tracing::info!("[{}] {}", self.area, message);
    }

    fn verbose(&self, message: &str) {
        tracing::trace!("[{}] {}", self.area, message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!("[{}] {}", self.area, message);
    }
}
