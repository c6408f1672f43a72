use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::contract::IdentityContractMock;
use crate::logging;
use crate::ui::formatter::Formatter;
use crate::{MockError, Result};
use identity_mock_harness::MockEnv;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Scenario {
    #[serde(default)]
    pub env: Option<ScenarioEnv>,
    #[serde(default)]
    pub cases: Vec<ScenarioCase>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScenarioEnv {
    pub sender: Option<String>,
    pub block_height: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioCase {
    pub name: String,
    /// Operation name to JSON return value
    #[serde(default)]
    pub mocks: BTreeMap<String, String>,
    #[serde(default)]
    pub calls: Vec<ScenarioCall>,
    #[serde(default)]
    pub expect_called_with: Vec<ExpectedCall>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScenarioCall {
    pub operation: String,
    /// JSON array of arguments
    pub args: Option<String>,
    pub expect: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExpectedCall {
    pub operation: String,
    pub args: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    pub results: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub cases: Vec<CaseOutcome>,
}

impl ScenarioReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MockError::FileError(format!("Failed to read scenario file {:?}: {}", path, e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let scenario = toml::from_str(content)
            .map_err(|e| MockError::ScenarioError(format!("Failed to parse scenario TOML: {}", e)))?;
        Ok(scenario)
    }

    /// Applies the scenario's env section on top of `base`.
    pub fn resolve_env(&self, base: MockEnv) -> MockEnv {
        let mut env = base;
        if let Some(overrides) = &self.env {
            if let Some(sender) = &overrides.sender {
                env.tx_sender = sender.clone();
            }
            if let Some(height) = overrides.block_height {
                env.block_height = height;
            }
        }
        env
    }
}

/// Runs scenario cases against an identity contract mock, resetting it
/// before every case.
pub struct ScenarioRunner {
    contract: IdentityContractMock,
    base_env: MockEnv,
}

impl ScenarioRunner {
    pub fn new(contract: IdentityContractMock) -> Self {
        let base_env = contract.env().clone();
        Self { contract, base_env }
    }

    pub fn run(&mut self, scenario: &Scenario) -> Result<ScenarioReport> {
        let mut report = ScenarioReport::default();
        for case in &scenario.cases {
            let outcome = self.run_case(case)?;
            if let Some(reason) = &outcome.failure {
                logging::log_case_failed(&outcome.name, reason);
            }
            report.cases.push(outcome);
        }
        logging::log_scenario_complete(report.passed(), report.failed());
        Ok(report)
    }

    /// Malformed JSON is an error; a mismatch yields a failed outcome.
    pub fn run_case(&mut self, case: &ScenarioCase) -> Result<CaseOutcome> {
        logging::log_scenario_case(&case.name, case.calls.len());
        self.contract.reset();
        *self.contract.env_mut() = self.base_env.clone();

        for (operation, raw) in &case.mocks {
            let value = parse_json(&case.name, raw)?;
            self.contract.mock_return(operation, value);
        }

        let mut outcome = CaseOutcome {
            name: case.name.clone(),
            passed: true,
            results: Vec::with_capacity(case.calls.len()),
            failure: None,
        };

        for call in &case.calls {
            let args = parse_args(&case.name, call.args.as_deref())?;
            let expected = call
                .expect
                .as_deref()
                .map(|raw| parse_json(&case.name, raw))
                .transpose()?;

            let result = self.contract.call(&call.operation, &args);
            outcome.results.push(result.clone());

            if let Some(expected) = expected {
                if result != expected {
                    outcome.passed = false;
                    outcome.failure = Some(format!(
                        "{} returned {}, expected {}",
                        call.operation, result, expected
                    ));
                    return Ok(outcome);
                }
            }
        }

        for expected in &case.expect_called_with {
            let args = parse_args(&case.name, expected.args.as_deref())?;
            if !self.contract.registry().was_called_with(&expected.operation, &args) {
                outcome.passed = false;
                outcome.failure = Some(format!(
                    "{} was not called with {}",
                    expected.operation,
                    Value::Array(args)
                ));
                return Ok(outcome);
            }
        }

        Ok(outcome)
    }

    pub fn contract(&self) -> &IdentityContractMock {
        &self.contract
    }
}

fn parse_json(case: &str, raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| {
        MockError::ScenarioError(format!("Case '{}': invalid JSON '{}': {}", case, raw, e)).into()
    })
}

fn parse_args(case: &str, raw: Option<&str>) -> Result<Vec<Value>> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => match parse_json(case, raw)? {
            Value::Array(items) => Ok(items),
            other => Err(MockError::ScenarioError(format!(
                "Case '{}': arguments must be a JSON array, got {}",
                case, other
            ))
            .into()),
        },
    }
}

/// Execute the `run` command: load, run and report a scenario file.
pub fn run_scenario(args: RunArgs, config: &Config) -> Result<ScenarioReport> {
    let format = OutputFormat::resolve(args.format, config);
    let text = format == OutputFormat::Text;
    if text {
        println!(
            "{}",
            Formatter::info(format!("Loading scenario file: {:?}", args.scenario))
        );
    }
    logging::log_loading_scenario(&args.scenario.to_string_lossy());

    let scenario = Scenario::load(&args.scenario)?;
    let env = scenario.resolve_env(config.mock_env());
    let contract = IdentityContractMock::with_defaults(env, config.default_returns());
    let mut runner = ScenarioRunner::new(contract);

    if text {
        println!(
            "{}",
            Formatter::success(format!("Running {} scenario cases...\n", scenario.cases.len()))
        );
    }
    let report = runner.run(&scenario)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| MockError::ScenarioError(format!("Failed to render report: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for (i, case) in report.cases.iter().enumerate() {
                match &case.failure {
                    None => println!(
                        "{}",
                        Formatter::success(format!("✓ Case {}: {}", i + 1, case.name))
                    ),
                    Some(reason) => println!(
                        "{}",
                        Formatter::error(format!("✗ Case {}: {} ({})", i + 1, case.name, reason))
                    ),
                }
            }
            println!(
                "\n{}",
                Formatter::format_summary(report.passed(), report.failed())
            );
        }
    }

    if report.all_passed() {
        Ok(report)
    } else {
        Err(MockError::AssertionFailed(format!(
            "{} of {} scenario cases failed",
            report.failed(),
            report.cases.len()
        ))
        .into())
    }
}
