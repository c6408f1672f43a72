pub mod bitcoin;
pub mod cli;
pub mod config;
pub mod contract;
pub mod identity;
pub mod logging;
pub mod scenario;
pub mod ui;
use miette::Diagnostic;

pub use bitcoin::ClarityBitcoinMock;
pub use contract::IdentityContractMock;
pub use identity::{ContractResponse, IdentityRecord};
pub use identity_mock_harness::{CallAssertions, MockEnv, MockEnvBuilder, MockRegistry};

/// Result type alias for the mock harness
pub type Result<T> = miette::Result<T>;

/// Error types for the mock harness
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum MockError {
    #[error("Invalid mock specification: {0}")]
    #[diagnostic(
        code(identity_mock::invalid_mock_spec),
        help("Mocks are written as OPERATION=json_value. Example: --mock 'create-identity={{\"value\": 0}}'")
    )]
    InvalidMockSpec(String),

    #[error("Invalid arguments: {0}")]
    #[diagnostic(
        code(identity_mock::invalid_arguments),
        help("Ensure arguments are provided as a JSON array. Example: --args '[\"Test metadata\"]'")
    )]
    InvalidArguments(String),

    #[error("Scenario error: {0}")]
    #[diagnostic(
        code(identity_mock::scenario_error),
        help("Check that the scenario file is valid TOML and every JSON field parses.")
    )]
    ScenarioError(String),

    #[error("Assertion failed: {0}")]
    #[diagnostic(code(identity_mock::assertion_failed))]
    AssertionFailed(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(identity_mock::config_error),
        help("Fix or remove the .identity-mock.toml file in the working directory.")
    )]
    ConfigError(String),

    #[error("File operation failed: {0}")]
    #[diagnostic(
        code(identity_mock::file_error),
        help("Check if you have necessary permissions and that the path exists.")
    )]
    FileError(String),
}

impl From<identity_mock_harness::HarnessError> for MockError {
    fn from(err: identity_mock_harness::HarnessError) -> Self {
        MockError::InvalidMockSpec(err.to_string())
    }
}
