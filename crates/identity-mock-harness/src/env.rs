use serde::{Deserialize, Serialize};

/// Principal used as `tx-sender` when a test does not pick one.
pub const DEFAULT_SENDER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Block height the fixtures start from.
pub const DEFAULT_BLOCK_HEIGHT: u64 = 100;

/// Simulated chain context visible to mocked contract calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockEnv {
    pub tx_sender: String,
    pub block_height: u64,
}

impl Default for MockEnv {
    fn default() -> Self {
        Self {
            tx_sender: DEFAULT_SENDER.to_string(),
            block_height: DEFAULT_BLOCK_HEIGHT,
        }
    }
}

impl MockEnv {
    pub fn new(tx_sender: impl Into<String>, block_height: u64) -> Self {
        Self {
            tx_sender: tx_sender.into(),
            block_height,
        }
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.block_height = self.block_height.saturating_add(blocks);
    }
}
