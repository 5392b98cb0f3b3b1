//! Workflow lifecycle control.
//!
//! # Architecture
//!
//! ```text
//! caller ──► WorkflowClient ──► RequestBuilder ──► RequestExecutor
//!                  ▲                                     │
//!                  └──────── normalize_status ◄──────────┘
//! ```

pub mod client;
pub mod request;
pub mod status;

pub use client::WorkflowClient;
pub use request::{LifecycleOperation, LifecycleRequest, RequestBuilder};
pub use status::{normalize_status, WorkflowStatus};
