use crate::env::MockEnv;
use crate::mock::MockRegistry;
use crate::HarnessError;
use serde_json::Value;

/// Chain context and mock registry assembled for one test.
#[derive(Debug, Default, Clone)]
pub struct MockHarness {
    pub env: MockEnv,
    pub registry: MockRegistry,
}

pub struct MockEnvBuilder {
    env: MockEnv,
    mock_registry: MockRegistry,
}

impl Default for MockEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvBuilder {
    pub fn new() -> Self {
        Self::from_env(MockEnv::default())
    }

    pub fn from_env(env: MockEnv) -> Self {
        Self {
            env,
            mock_registry: MockRegistry::default(),
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.env.tx_sender = sender.into();
        self
    }

    pub fn with_block_height(mut self, height: u64) -> Self {
        self.env.block_height = height;
        self
    }

    pub fn with_mock_return(mut self, operation: &str, return_value: Value) -> Self {
        self.mock_registry.configure_return(operation, return_value);
        self
    }

    pub fn with_mock_returns_json(mut self, json: &Value) -> Result<Self, HarnessError> {
        self.mock_registry.configure_from_json(json)?;
        Ok(self)
    }

    pub fn build(self) -> MockHarness {
        MockHarness {
            env: self.env,
            registry: self.mock_registry,
        }
    }
}
