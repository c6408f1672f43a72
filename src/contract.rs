use crate::logging;
use identity_mock_harness::{CallAssertions, MockEnv, MockHarness, MockRegistry};
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const CREATE_IDENTITY: &str = "create-identity";
pub const GET_IDENTITY: &str = "get-identity";
pub const GET_IDENTITY_BY_OWNER: &str = "get-identity-by-owner";
pub const DEACTIVATE_IDENTITY: &str = "deactivate-identity";
pub const REACTIVATE_IDENTITY: &str = "reactivate-identity";
pub const UPDATE_METADATA: &str = "update-metadata";

/// Every public function of the identity contract.
pub const OPERATIONS: [&str; 6] = [
    CREATE_IDENTITY,
    GET_IDENTITY,
    GET_IDENTITY_BY_OWNER,
    DEACTIVATE_IDENTITY,
    REACTIVATE_IDENTITY,
    UPDATE_METADATA,
];

/// Stand-in for the identity contract. Each operation records its
/// arguments and returns whatever the test configured.
#[derive(Debug, Clone)]
pub struct IdentityContractMock {
    env: MockEnv,
    registry: MockRegistry,
    defaults: BTreeMap<String, Value>,
}

impl Default for IdentityContractMock {
    fn default() -> Self {
        Self::new(MockEnv::default())
    }
}

impl IdentityContractMock {
    pub fn new(env: MockEnv) -> Self {
        Self::with_defaults(env, BTreeMap::new())
    }

    /// Creates the mock with extra default returns reinstalled on each reset.
    /// Read-only lookups always default to `null`.
    pub fn with_defaults(env: MockEnv, extra: BTreeMap<String, Value>) -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert(GET_IDENTITY.to_string(), Value::Null);
        defaults.insert(GET_IDENTITY_BY_OWNER.to_string(), Value::Null);
        defaults.extend(extra);

        let mut contract = Self {
            env,
            registry: MockRegistry::new(),
            defaults,
        };
        contract.install_defaults();
        contract
    }

    /// Wraps a prebuilt harness. Returns already configured on the harness
    /// take precedence over the defaults until the next reset.
    pub fn from_harness(harness: MockHarness) -> Self {
        let mut contract = Self::new(harness.env);
        contract.registry = harness.registry;
        let missing: Vec<(String, Value)> = contract
            .defaults
            .iter()
            .filter(|(operation, _)| {
                contract
                    .registry
                    .entry(operation)
                    .and_then(|entry| entry.return_value())
                    .is_none()
            })
            .map(|(operation, value)| (operation.clone(), value.clone()))
            .collect();
        for (operation, value) in missing {
            contract.registry.configure_return(&operation, value);
        }
        contract
    }

    /// Clears all configured returns and recorded calls, then reinstalls
    /// the default behavior.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.install_defaults();
        logging::log_reset(self.defaults.len());
    }

    pub fn mock_return(&mut self, operation: &str, value: Value) {
        self.registry.configure_return(operation, value);
    }

    pub fn mock_return_once(&mut self, operation: &str, value: Value) {
        self.registry.configure_return_once(operation, value);
    }

    /// Invokes any operation by name, including ones outside [`OPERATIONS`].
    pub fn call(&mut self, operation: &str, args: &[Value]) -> Value {
        let result = self.registry.invoke(operation, args);
        logging::log_invocation(operation, args.len(), &result);
        result
    }

    pub fn create_identity(&mut self, metadata: &str) -> Value {
        self.call(CREATE_IDENTITY, &[json!(metadata)])
    }

    pub fn get_identity(&mut self, id: u64) -> Value {
        self.call(GET_IDENTITY, &[json!(id)])
    }

    pub fn get_identity_by_owner(&mut self, owner: &str) -> Value {
        self.call(GET_IDENTITY_BY_OWNER, &[json!(owner)])
    }

    pub fn deactivate_identity(&mut self, id: u64) -> Value {
        self.call(DEACTIVATE_IDENTITY, &[json!(id)])
    }

    pub fn reactivate_identity(&mut self, id: u64) -> Value {
        self.call(REACTIVATE_IDENTITY, &[json!(id)])
    }

    pub fn update_metadata(&mut self, id: u64, metadata: &str) -> Value {
        self.call(UPDATE_METADATA, &[json!(id), json!(metadata)])
    }

    pub fn env(&self) -> &MockEnv {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut MockEnv {
        &mut self.env
    }

    pub fn registry(&self) -> &MockRegistry {
        &self.registry
    }

    pub fn assertions(&self) -> CallAssertions<'_> {
        CallAssertions::new(&self.registry)
    }

    fn install_defaults(&mut self) {
        for (operation, value) in &self.defaults {
            self.registry.configure_return(operation, value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{ContractResponse, IdentityRecord, ERR_DUPLICATE_IDENTITY};
    use identity_mock_harness::MockEnvBuilder;

    #[test]
    fn lookups_default_to_null() {
        let mut contract = IdentityContractMock::default();
        assert_eq!(contract.get_identity(999), Value::Null);
        assert_eq!(contract.get_identity_by_owner("ST1"), Value::Null);
        assert_eq!(contract.create_identity("meta"), Value::Null);
    }

    #[test]
    fn reset_reinstalls_defaults() {
        let mut contract = IdentityContractMock::default();
        let record = IdentityRecord::new(1, contract.env().tx_sender.clone(), 100, "Test metadata");
        contract.mock_return(GET_IDENTITY, record.to_value());
        assert_eq!(contract.get_identity(1), record.to_value());

        contract.reset();

        assert_eq!(contract.registry().call_count(GET_IDENTITY), 0);
        assert_eq!(contract.get_identity(1), Value::Null);
    }

    #[test]
    fn extra_defaults_survive_reset() {
        let mut extra = BTreeMap::new();
        extra.insert(CREATE_IDENTITY.to_string(), json!({"error": ERR_DUPLICATE_IDENTITY}));
        let mut contract = IdentityContractMock::with_defaults(MockEnv::default(), extra);
        contract.mock_return(CREATE_IDENTITY, ContractResponse::ok(0).to_value());

        contract.reset();

        assert_eq!(
            ContractResponse::from_value(&contract.create_identity("x")),
            Some(ContractResponse::err(ERR_DUPLICATE_IDENTITY))
        );
    }

    #[test]
    fn from_harness_keeps_configured_lookups() {
        let record = IdentityRecord::new(1, "ST1", 100, "Test metadata");
        let harness = MockEnvBuilder::new()
            .with_block_height(300)
            .with_mock_return(GET_IDENTITY, record.to_value())
            .build();
        let mut contract = IdentityContractMock::from_harness(harness);

        assert_eq!(contract.env().block_height, 300);
        assert_eq!(contract.get_identity(1), record.to_value());
        assert_eq!(contract.get_identity_by_owner("ST1"), Value::Null);

        contract.reset();
        assert_eq!(contract.get_identity(1), Value::Null);
    }

    #[test]
    fn update_metadata_records_both_arguments() {
        let mut contract = IdentityContractMock::default();
        contract.mock_return(UPDATE_METADATA, json!({"value": true}));
        assert_eq!(contract.update_metadata(4, "new"), json!({"value": true}));
        contract
            .assertions()
            .assert_called_with(UPDATE_METADATA, &[json!(4), json!("new")]);
    }
}
