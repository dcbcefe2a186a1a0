use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use infixcalc::{CalcError, parse, render_outcome};
use log::{debug, info};
use rayon::prelude::*;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// infixcalc - Evaluate whitespace-separated infix expressions
#[derive(Parser, Debug)]
#[command(name = "infixcalc")]
#[command(
    about = "Evaluate infix expressions such as '( 2 + 3 ) * log 8'",
    long_about = "Evaluate infix expressions such as '( 2 + 3 ) * log 8'.\n\n\
        Tokens must be separated by whitespace. Operators resolve in tiers: \
        log, then * and /, then + and -, then exp. Without arguments, one \
        expression is read per line of standard input."
)]
#[command(version)]
pub struct CliArgs {
    /// Expressions to evaluate, one per argument
    pub expressions: Vec<String>,

    /// Also print each expression in fully bracketed form
    #[arg(short, long)]
    pub tree: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn read_expressions(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read expressions from standard input")
}

/// Evaluate one expression and render the lines printed for it
pub fn evaluate_line(expression: &str, show_tree: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let outcome: Result<Option<f64>, CalcError> = if expression.trim().is_empty() {
        Ok(None)
    } else {
        parse(expression)
            .map_err(CalcError::from)
            .and_then(|expr| {
                if show_tree {
                    lines.push(expr.to_string());
                }
                expr.evaluate().map(Some).map_err(CalcError::from)
            })
    };

    debug!("'{}' -> {:?}", expression, outcome);
    lines.push(render_outcome(&outcome));
    lines
}

/// Evaluate a batch of expressions in parallel, keeping input order
pub fn evaluate_all(expressions: &[String], show_tree: bool) -> Vec<String> {
    expressions
        .par_iter()
        .map(|expression| evaluate_line(expression, show_tree))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let expressions = if args.expressions.is_empty() {
        info!("Reading expressions from standard input");
        read_expressions(io::stdin().lock())?
    } else {
        args.expressions
    };

    info!("Evaluating {} expression(s)", expressions.len());

    for line in evaluate_all(&expressions, args.tree) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["infixcalc", "-t", "-l", "debug", "1 + 2", "log 4"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.expressions, vec!["1 + 2", "log 4"]);
            assert!(args.tree);
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::try_parse_from(["infixcalc"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.expressions.is_empty());
            assert!(!args.tree);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_read_expressions() {
        let input = "1 + 1\n\n( 2 * 3 )\n";
        let result = read_expressions(input.as_bytes());
        assert!(result.is_ok());
        if let Ok(lines) = result {
            assert_eq!(lines, vec!["1 + 1", "", "( 2 * 3 )"]);
        }
    }

    #[test]
    fn test_evaluate_line() {
        assert_eq!(evaluate_line("2 + 3 * 4", false), vec!["= 14"]);
        assert_eq!(evaluate_line("", true), vec![""]);
        assert_eq!(
            evaluate_line("1 +", true),
            vec!["Error: You can't end with an operator"]
        );
        assert_eq!(
            evaluate_line("2 exp 3 + 1", true),
            vec!["( 2 exp ( 3 + 1 ) )", "= 16"]
        );
    }

    #[test]
    fn test_evaluate_line_tree_with_evaluation_error() {
        assert_eq!(
            evaluate_line("( 4 - 4 ) exp log 0", true),
            vec!["( ( 4 - 4 ) exp log 0 )", "that's too huge?"]
        );
        assert_eq!(
            evaluate_line("5 / ( 2 - 2 )", true),
            vec!["( 5 / ( 2 - 2 ) )", "Error: Division by zero"]
        );
    }

    #[test]
    fn test_evaluate_all_keeps_order() {
        let expressions: Vec<String> = (1..=50).map(|n| format!("{} * 2", n)).collect();
        let lines = evaluate_all(&expressions, false);
        let expected: Vec<String> = (1..=50).map(|n| format!("= {}", n * 2)).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_evaluate_all_mixed_outcomes() {
        let expressions = vec![
            "1 / 0".to_string(),
            "10 exp 400".to_string(),
            "10 exp 20".to_string(),
        ];
        let lines = evaluate_all(&expressions, false);
        assert_eq!(
            lines,
            vec!["Error: Division by zero", "that's too huge?", "~ 1e20"]
        );
    }
}
