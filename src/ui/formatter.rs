use crate::identity::{ContractResponse, IdentityRecord};
use crossterm::style::Stylize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pretty printing utilities for harness output
pub struct Formatter;

impl Formatter {
    /// Format an operation call, e.g. `create-identity("Test metadata")`.
    pub fn format_call(operation: &str, args: &[Value]) -> String {
        let args = args
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", operation, args)
    }

    /// Format a mocked return value, recognising the fixture shapes.
    pub fn format_result(value: &Value) -> String {
        if value.is_null() {
            return "none".to_string();
        }
        if let Some(record) = IdentityRecord::from_value(value) {
            return format!(
                "identity #{} owner={} created-at={} active={} metadata={:?}",
                record.id, record.owner, record.created_at, record.active, record.metadata
            );
        }
        match ContractResponse::from_value(value) {
            Some(ContractResponse::Value(inner)) => format!("(ok {})", inner),
            Some(ContractResponse::Error(code)) => format!("(err u{})", code),
            None => value.to_string(),
        }
    }

    /// Format a pass/fail summary line.
    pub fn format_summary(passed: usize, failed: usize) -> String {
        let line = format!("{} passed, {} failed", passed, failed);
        if failed == 0 {
            Self::success(line)
        } else {
            Self::error(line)
        }
    }

    /// Format an informational message in blue.
    pub fn info(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Info)
    }

    /// Format a success message in green.
    pub fn success(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Success)
    }

    /// Format a warning message in yellow.
    pub fn warning(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Warning)
    }

    /// Format an error message in red.
    pub fn error(message: impl AsRef<str>) -> String {
        Self::apply_color(message.as_ref(), ColorKind::Error)
    }

    /// Disable ANSI colors when `NO_COLOR` is set.
    pub fn configure_colors_from_env() {
        let enable = std::env::var_os("NO_COLOR").is_none();
        COLOR_ENABLED.store(enable, Ordering::Relaxed);
    }

    fn apply_color(message: &str, kind: ColorKind) -> String {
        if !COLOR_ENABLED.load(Ordering::Relaxed) {
            return message.to_string();
        }

        match kind {
            ColorKind::Info => format!("{}", message.blue()),
            ColorKind::Success => format!("{}", message.green()),
            ColorKind::Warning => format!("{}", message.yellow()),
            ColorKind::Error => format!("{}", message.red()),
        }
    }
}

#[derive(Copy, Clone)]
enum ColorKind {
    Info,
    Success,
    Warning,
    Error,
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);
