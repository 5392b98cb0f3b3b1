//! Dapr Workflow Core: client-side control of workflow instances hosted by a Dapr sidecar.
//!
//! This crate issues lifecycle commands (get status, terminate, pause, resume, purge)
//! against the sidecar's versioned workflow API and normalizes what comes back.
//! It holds no state between calls; every operation is a single request/response.
//!
//! ```text
//! WorkflowClient ──► RequestBuilder ──► RequestExecutor ──► sidecar
//!       ▲                                     │
//!       └──────── normalize_status ◄──────────┘
//! ```
//!
//! The executor and the logger are injected capabilities, so callers can plug in
//! their own transport or log sink and tests can substitute spies.

pub mod config;
pub mod error;
pub mod logger;
pub mod transport;
pub mod workflow;

// Convenience re-exports
pub use config::{ClientOptions, Protocol, DEFAULT_WORKFLOW_COMPONENT, WORKFLOW_API_VERSION};
pub use error::{Result, TransportError, WorkflowError};
pub use logger::{TracingLogger, WorkflowLogger};
pub use transport::{ApiPayload, HttpMethod, HttpRequestExecutor, RequestExecutor, RequestOptions};
pub use workflow::{WorkflowClient, WorkflowStatus};
