//! Implementation of the memokit CLI commands.

use std::path::PathBuf;

use serde::Serialize;

use crate::calc::{gcd as compute_gcd, MemoCalculator};
use crate::types::config::Config;
use crate::version::VersionComparator;
use crate::MemokitResult;

/// JSON shape printed with `--json`.
#[derive(Debug, Serialize)]
struct CommandOutput<'a> {
    operation: &'a str,
    args: Vec<String>,
    /// Decimal string, big results do not fit JSON numbers.
    result: String,
}

fn print_result(
    operation: &str,
    args: Vec<String>,
    result: String,
    json: bool,
) -> MemokitResult<()> {
    if json {
        let output = CommandOutput {
            operation,
            args,
            result,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", result);
    }
    Ok(())
}

/// Writes a default configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> MemokitResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("memokit.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("Configuration created at: {}", config_path.display());
    Ok(())
}

/// Prints the n-th Fibonacci number.
pub fn fib(n: i64, config: &Config, json: bool) -> MemokitResult<()> {
    let mut calculator = MemoCalculator::from_config(config);
    let value = calculator.fibonacci(n)?;
    print_result("fibonacci", vec![n.to_string()], value.to_string(), json)
}

/// Prints C(n, m).
pub fn binom(n: i64, m: i64, config: &Config, json: bool) -> MemokitResult<()> {
    let mut calculator = MemoCalculator::from_config(config);
    let value = calculator.binomial(n, m)?;
    print_result(
        "binomial",
        vec![n.to_string(), m.to_string()],
        value.to_string(),
        json,
    )
}

/// Prints gcd(a, b).
pub fn gcd(a: u64, b: u64, json: bool) -> MemokitResult<()> {
    let value = compute_gcd(a, b);
    print_result(
        "gcd",
        vec![a.to_string(), b.to_string()],
        value.to_string(),
        json,
    )
}

/// Prints -1, 0 or 1.
pub fn compare(lhs: &str, rhs: &str, config: &Config, json: bool) -> MemokitResult<()> {
    let comparator = VersionComparator::from_config(&config.version);
    let signal = comparator.compare_version(lhs, rhs)?;
    print_result(
        "compare",
        vec![lhs.to_string(), rhs.to_string()],
        signal.to_string(),
        json,
    )
}

/// Shows version.
pub fn version() {
    println!("memokit {}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemokitError;

    #[test]
    fn test_version() {
        // Only checks that it does not panic
        version();
    }

    #[test]
    fn test_fib_propagates_errors() {
        let config = Config::default_config();
        assert!(fib(10, &config, false).is_ok());
        assert!(matches!(
            fib(-1, &config, false),
            Err(MemokitError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_compare_propagates_errors() {
        let config = Config::default_config();
        assert!(compare("1.2", "1.2.0", &config, true).is_ok());
        assert!(matches!(
            compare("1.x", "1.2", &config, false),
            Err(MemokitError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_command_output_json() {
        let output = CommandOutput {
            operation: "gcd",
            args: vec!["12".to_string(), "18".to_string()],
            result: "6".to_string(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["operation"], "gcd");
        assert_eq!(json["result"], "6");
        assert_eq!(json["args"][1], "18");
    }
}
