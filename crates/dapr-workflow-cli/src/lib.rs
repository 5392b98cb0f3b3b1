//! Dapr workflow CLI: command handlers shared by the `dapr-workflow` binary and its tests.

pub mod commands;
