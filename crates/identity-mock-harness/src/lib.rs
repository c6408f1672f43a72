pub mod assertions;
pub mod builder;
pub mod env;
pub mod mock;

pub use assertions::CallAssertions;
pub use builder::{MockEnvBuilder, MockHarness};
pub use env::MockEnv;
pub use mock::{CallRecord, MockEntry, MockRegistry};

/// Errors raised while configuring the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Invalid mock '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error("Mock returns must be a JSON object keyed by operation name, got {0}")]
    NotAnObject(String),
}
