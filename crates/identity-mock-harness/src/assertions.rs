use crate::mock::MockRegistry;
use serde_json::Value;

/// Panicking assertions over a registry's recorded calls, for use inside
/// `#[test]` functions.
pub struct CallAssertions<'a> {
    registry: &'a MockRegistry,
}

impl<'a> CallAssertions<'a> {
    pub fn new(registry: &'a MockRegistry) -> Self {
        Self { registry }
    }

    pub fn assert_called_with(&self, operation: &str, args: &[Value]) {
        assert!(
            self.registry.was_called_with(operation, args),
            "expected `{operation}` to have been called with {}, recorded calls: {}",
            render(args),
            self.render_calls(operation)
        );
    }

    pub fn assert_not_called(&self, operation: &str) {
        assert_eq!(
            self.registry.call_count(operation),
            0,
            "expected `{operation}` not to be called, recorded calls: {}",
            self.render_calls(operation)
        );
    }

    pub fn assert_call_count(&self, operation: &str, expected: usize) {
        assert_eq!(
            self.registry.call_count(operation),
            expected,
            "unexpected number of calls to `{operation}`, recorded calls: {}",
            self.render_calls(operation)
        );
    }

    /// Asserts the most recent call to `operation` returned `expected`.
    pub fn assert_returned(&self, operation: &str, expected: &Value) {
        let last = self
            .registry
            .history()
            .iter()
            .rev()
            .find(|record| record.operation == operation);
        match last {
            Some(record) => assert_eq!(
                &record.returned, expected,
                "`{operation}` returned an unexpected value"
            ),
            None => panic!("`{operation}` was never called"),
        }
    }

    fn render_calls(&self, operation: &str) -> String {
        let calls = self.registry.calls(operation);
        if calls.is_empty() {
            return "none".to_string();
        }
        calls
            .iter()
            .map(|args| render(args))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn render(args: &[Value]) -> String {
    let inner = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({inner})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry_with_call() -> MockRegistry {
        let mut registry = MockRegistry::new();
        registry.configure_return("create-identity", json!({"value": 0}));
        registry.invoke("create-identity", &[json!("Test metadata")]);
        registry
    }

    #[test]
    fn passes_for_recorded_call() {
        let registry = registry_with_call();
        let assertions = CallAssertions::new(&registry);
        assertions.assert_called_with("create-identity", &[json!("Test metadata")]);
        assertions.assert_call_count("create-identity", 1);
        assertions.assert_not_called("get-identity");
        assertions.assert_returned("create-identity", &json!({"value": 0}));
    }

    #[test]
    #[should_panic(expected = "recorded calls: (\"Test metadata\")")]
    fn reports_recorded_calls_on_mismatch() {
        let registry = registry_with_call();
        CallAssertions::new(&registry).assert_called_with("create-identity", &[json!("Other")]);
    }

    #[test]
    #[should_panic(expected = "was never called")]
    fn assert_returned_requires_a_call() {
        let registry = MockRegistry::new();
        CallAssertions::new(&registry).assert_returned("get-identity", &Value::Null);
    }
}
