//! Application logic for the SQL Review CLI.
//!
//! This module contains the command implementations separated from the main
//! entry point to enable testing.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::{Path, PathBuf}
};

use crate::{
    advisor::{Engine, Status, registry},
    cli::{EngineArg, Format},
    config::ReviewConfig,
    error::{AppResult, file_read_error},
    output::{OutputFormat, OutputOptions, format_report, format_rules},
    review::{ReviewReport, ReviewRunner}
};

/// Parameters for the check command
#[derive(Debug, Clone)]
pub struct CheckParams {
    pub sql_path:      String,
    pub config_path:   Option<PathBuf>,
    pub engine:        Option<EngineArg>,
    pub output_format: Format,
    pub no_color:      bool
}

/// Result of the check command
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub exit_code: i32,
    pub output:    String
}

/// Convert CLI engine to advisor Engine
pub fn convert_engine(engine: EngineArg) -> Engine {
    match engine {
        EngineArg::Mysql => Engine::MySQL,
        EngineArg::Tidb => Engine::TiDB,
        EngineArg::Postgres => Engine::Postgres
    }
}

/// Convert CLI format to internal OutputFormat
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}

/// Calculate exit code based on the most severe advice
pub fn calculate_exit_code(report: &ReviewReport) -> i32 {
    match report.highest_status() {
        Status::Error => 2,
        Status::Warn => 1,
        Status::Success => 0
    }
}

/// Read SQL from file or stdin
pub fn read_sql_input(path: &str) -> AppResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| file_read_error("stdin", e))?;
        Ok(buffer)
    } else {
        read_to_string(path).map_err(|e| file_read_error(path, e))
    }
}

/// Load the review configuration, preferring an explicit path
pub fn load_config(path: Option<&Path>) -> AppResult<ReviewConfig> {
    match path {
        Some(path) => ReviewConfig::load_from(path),
        None => ReviewConfig::load()
    }
}

/// Run the check command
pub fn run_check(params: CheckParams) -> AppResult<CheckResult> {
    let mut config = load_config(params.config_path.as_deref())?;
    if let Some(engine) = params.engine {
        config.engine = convert_engine(engine);
    }
    let sql = read_sql_input(&params.sql_path)?;
    log::info!(
        "reviewing '{}' for {} with {} configured rules",
        params.sql_path,
        config.engine,
        config.rules.len()
    );
    let report = ReviewRunner::new(config).review(&sql)?;
    let opts = OutputOptions {
        format:  convert_format(params.output_format),
        colored: !params.no_color
    };
    Ok(CheckResult {
        exit_code: calculate_exit_code(&report),
        output:    format_report(&report, &opts)?
    })
}

/// Run the rules command
pub fn run_rules(engine: Option<EngineArg>, no_color: bool) -> String {
    let engine = engine.map(convert_engine);
    let entries: Vec<_> = registry()
        .entries()
        .filter(|(registered, _)| engine.is_none_or(|wanted| wanted == *registered))
        .collect();
    let opts = OutputOptions {
        format:  OutputFormat::Text,
        colored: !no_color
    };
    format_rules(&entries, &opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        advisor::{Advice, Code, RuleType},
        review::RuleAdvice
    };

    fn report_with(status: Status) -> ReviewReport {
        ReviewReport {
            advice:      vec![RuleAdvice {
                rule_type: RuleType::ColumnRequireDefault,
                advice:    Advice {
                    status,
                    code: Code::NoDefault,
                    title: RuleType::ColumnRequireDefault.to_string(),
                    content: String::from("Column `t`.`a` doesn't have DEFAULT."),
                    line: 1
                }
            }],
            rules_count: 1
        }
    }

    #[test]
    fn test_convert_engine() {
        assert_eq!(convert_engine(EngineArg::Mysql), Engine::MySQL);
        assert_eq!(convert_engine(EngineArg::Tidb), Engine::TiDB);
        assert_eq!(convert_engine(EngineArg::Postgres), Engine::Postgres);
    }

    #[test]
    fn test_convert_format() {
        assert_eq!(convert_format(Format::Text), OutputFormat::Text);
        assert_eq!(convert_format(Format::Json), OutputFormat::Json);
        assert_eq!(convert_format(Format::Yaml), OutputFormat::Yaml);
    }

    #[test]
    fn test_calculate_exit_code_clean() {
        assert_eq!(calculate_exit_code(&ReviewReport::default()), 0);
    }

    #[test]
    fn test_calculate_exit_code_warning() {
        assert_eq!(calculate_exit_code(&report_with(Status::Warn)), 1);
    }

    #[test]
    fn test_calculate_exit_code_error() {
        assert_eq!(calculate_exit_code(&report_with(Status::Error)), 2);
    }

    #[test]
    fn test_read_sql_input_missing_file() {
        assert!(read_sql_input("/nonexistent/review.sql").is_err());
    }

    #[test]
    fn test_run_rules_filters_engine() {
        let listing = run_rules(Some(EngineArg::Postgres), true);

        assert!(listing.contains("naming.table"));
        assert!(!listing.contains("column.require-default"));
    }
}
