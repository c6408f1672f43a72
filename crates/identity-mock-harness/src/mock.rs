use crate::HarnessError;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::debug;

/// Configured behavior and recorded invocations for a single operation.
#[derive(Clone, Debug, Default)]
pub struct MockEntry {
    return_value: Option<Value>,
    once: VecDeque<Value>,
    calls: Vec<Vec<Value>>,
}

impl MockEntry {
    pub fn return_value(&self) -> Option<&Value> {
        self.return_value.as_ref()
    }

    pub fn calls(&self) -> &[Vec<Value>] {
        &self.calls
    }

    fn next_value(&mut self) -> Value {
        if let Some(value) = self.once.pop_front() {
            return value;
        }
        self.return_value.clone().unwrap_or(Value::Null)
    }
}

/// One invocation in the global call history.
#[derive(Clone, Debug, PartialEq)]
pub struct CallRecord {
    pub operation: String,
    pub args: Vec<Value>,
    pub returned: Value,
}

/// Registry of mocked operations keyed by operation name.
///
/// Every invocation is recorded, whether or not a return value was
/// configured. Unconfigured operations return `null`.
#[derive(Clone, Debug, Default)]
pub struct MockRegistry {
    entries: HashMap<String, MockEntry>,
    history: Vec<CallRecord>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value returned by every following invocation of `operation`.
    pub fn configure_return(&mut self, operation: &str, value: Value) {
        debug!(operation, value = %value, "Configured mock return");
        self.entry_mut(operation).return_value = Some(value);
    }

    /// Queues a value returned by exactly one invocation, ahead of the
    /// persistent return value.
    pub fn configure_return_once(&mut self, operation: &str, value: Value) {
        debug!(operation, value = %value, "Queued one-shot mock return");
        self.entry_mut(operation).once.push_back(value);
    }

    /// Configures returns from an object of the form `{"operation": value}`.
    pub fn configure_from_json(&mut self, json: &Value) -> Result<(), HarnessError> {
        let map = json
            .as_object()
            .ok_or_else(|| HarnessError::NotAnObject(json.to_string()))?;
        for (operation, value) in map {
            self.configure_return(operation, value.clone());
        }
        Ok(())
    }

    /// Records `args` and returns the value configured for `operation`.
    pub fn invoke(&mut self, operation: &str, args: &[Value]) -> Value {
        let entry = self.entry_mut(operation);
        entry.calls.push(args.to_vec());
        let returned = entry.next_value();
        debug!(
            operation,
            args = args.len(),
            returned = %returned,
            "Mock invoked"
        );
        self.history.push(CallRecord {
            operation: operation.to_string(),
            args: args.to_vec(),
            returned: returned.clone(),
        });
        returned
    }

    /// Clears configured values and recorded calls for every operation.
    pub fn reset(&mut self) {
        debug!(operations = self.entries.len(), "Mock registry reset");
        self.entries.clear();
        self.history.clear();
    }

    pub fn was_called_with(&self, operation: &str, args: &[Value]) -> bool {
        self.calls(operation).iter().any(|call| call.as_slice() == args)
    }

    pub fn calls(&self, operation: &str) -> &[Vec<Value>] {
        self.entries
            .get(operation)
            .map(|entry| entry.calls())
            .unwrap_or(&[])
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls(operation).len()
    }

    pub fn last_call(&self, operation: &str) -> Option<&[Value]> {
        self.calls(operation).last().map(Vec::as_slice)
    }

    pub fn history(&self) -> &[CallRecord] {
        &self.history
    }

    pub fn entry(&self, operation: &str) -> Option<&MockEntry> {
        self.entries.get(operation)
    }

    /// Names of all operations configured or invoked since the last reset.
    pub fn operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Snapshot of the persistent return values, ordered by operation name.
    pub fn configured_returns(&self) -> BTreeMap<&str, &Value> {
        self.entries
            .iter()
            .filter_map(|(name, entry)| entry.return_value().map(|v| (name.as_str(), v)))
            .collect()
    }

    /// Parses a mock override of the form `operation=<json>`.
    pub fn parse_spec(spec: &str) -> Result<(String, Value), HarnessError> {
        let invalid = |reason: &str| HarnessError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };
        let (operation, raw) = spec
            .split_once('=')
            .ok_or_else(|| invalid("expected OPERATION=json_value"))?;
        let operation = operation.trim();
        let raw = raw.trim();
        if operation.is_empty() || raw.is_empty() {
            return Err(invalid("operation and return value are required"));
        }
        let value = serde_json::from_str(raw)
            .map_err(|e| invalid(&format!("return value is not valid JSON ({e})")))?;
        Ok((operation.to_string(), value))
    }

    fn entry_mut(&mut self, operation: &str) -> &mut MockEntry {
        self.entries.entry(operation.to_string()).or_default()
    }
}
