//! Placeholder for the `clarity-bitcoin` dependency of the identity contract.

use crate::logging;
use identity_mock_harness::MockRegistry;
use serde_json::{json, Value};

pub const PARSE_TRANSACTION: &str = "parse-transaction";
pub const VERIFY_TRANSACTION: &str = "verify-transaction";
pub const GET_TRANSACTION_HEIGHT: &str = "get-transaction-height";

#[derive(Debug, Clone, Default)]
pub struct ClarityBitcoinMock {
    registry: MockRegistry,
}

impl ClarityBitcoinMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_return(&mut self, operation: &str, value: Value) {
        self.registry.configure_return(operation, value);
    }

    pub fn parse_transaction(&mut self, tx_hex: &str) -> Value {
        self.call(PARSE_TRANSACTION, &[json!(tx_hex)])
    }

    pub fn verify_transaction(&mut self, tx_hex: &str, block_height: u64) -> Value {
        self.call(VERIFY_TRANSACTION, &[json!(tx_hex), json!(block_height)])
    }

    pub fn get_transaction_height(&mut self, txid: &str) -> Value {
        self.call(GET_TRANSACTION_HEIGHT, &[json!(txid)])
    }

    pub fn reset(&mut self) {
        self.registry.reset();
        logging::log_reset(0);
    }

    pub fn registry(&self) -> &MockRegistry {
        &self.registry
    }

    fn call(&mut self, operation: &str, args: &[Value]) -> Value {
        let result = self.registry.invoke(operation, args);
        logging::log_invocation(operation, args.len(), &result);
        result
    }
}
