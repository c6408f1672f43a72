//! Structured logging helpers for the identity mock harness.
//!
//! Thin wrappers around `tracing` so that events carry the same field
//! names everywhere.

use serde_json::Value;

/// Log a mocked contract call.
pub fn log_invocation(operation: &str, args: usize, returned: &Value) {
    tracing::debug!(operation, args, returned = %returned, "Mocked call");
}

/// Log a registry reset.
pub fn log_reset(defaults: usize) {
    tracing::debug!(defaults, "Mocks reset");
}

pub fn log_loading_scenario(path: &str) {
    tracing::info!(scenario = path, "Loading scenario");
}

pub fn log_scenario_case(name: &str, calls: usize) {
    tracing::info!(case = name, calls, "Running scenario case");
}

pub fn log_case_failed(name: &str, reason: &str) {
    tracing::warn!(case = name, reason, "Scenario case failed");
}

/// Log scenario completion.
pub fn log_scenario_complete(passed: usize, failed: usize) {
    tracing::info!(passed, failed, "Scenario completed");
}

pub fn log_mock_override(operation: &str) {
    tracing::debug!(operation, "Mock override applied");
}
