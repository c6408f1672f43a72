use crate::cli::args::{CallArgs, OutputFormat, RunArgs};
use crate::config::Config;
use crate::contract::{IdentityContractMock, OPERATIONS};
use crate::logging;
use crate::scenario;
use crate::ui::formatter::Formatter;
use crate::{MockError, Result};
use identity_mock_harness::MockRegistry;
use serde_json::Value;

fn print_info(message: impl AsRef<str>) {
    println!("{}", Formatter::info(message));
}

fn print_warning(message: impl AsRef<str>) {
    println!("{}", Formatter::warning(message));
}

/// Execute the run command
pub fn run(args: RunArgs, config: &Config) -> Result<()> {
    scenario::run_scenario(args, config).map(|_| ())
}

/// Execute the call command
pub fn call(args: CallArgs, config: &Config) -> Result<()> {
    let format = OutputFormat::resolve(args.format, config);
    let mut contract =
        IdentityContractMock::with_defaults(config.mock_env(), config.default_returns());

    for spec in &args.mock {
        let (operation, value) = MockRegistry::parse_spec(spec).map_err(MockError::from)?;
        logging::log_mock_override(&operation);
        contract.mock_return(&operation, value);
    }

    let call_args = match &args.args {
        Some(raw) => parse_args(raw)?,
        None => Vec::new(),
    };

    if format == OutputFormat::Text {
        if !OPERATIONS.contains(&args.operation.as_str()) {
            print_warning(format!(
                "'{}' is not an identity contract operation; calling it anyway",
                args.operation
            ));
        }
        print_info(Formatter::format_call(&args.operation, &call_args));
    }

    let result = contract.call(&args.operation, &call_args);

    match format {
        OutputFormat::Json => println!("{}", result),
        OutputFormat::Text => println!("{}", Formatter::format_result(&result)),
    }
    Ok(())
}

/// Parse a JSON array of call arguments.
pub fn parse_args(json: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| MockError::InvalidArguments(format!("Invalid JSON: {}", e)))?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(MockError::InvalidArguments(format!(
            "Arguments must be a JSON array, got {}",
            other
        ))
        .into()),
    }
}
