use colored::Colorize;

use crate::{
    advisor::{Engine, RuleType, Status},
    error::{AppResult, output_error},
    review::ReviewReport
};

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Format a review report based on output options
pub fn format_report(report: &ReviewReport, opts: &OutputOptions) -> AppResult<String> {
    match opts.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).map_err(|e| output_error(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| output_error(e.to_string()))
        }
        OutputFormat::Text => Ok(format_text_report(report, opts))
    }
}

fn format_text_report(report: &ReviewReport, opts: &OutputOptions) -> String {
    let mut output = String::new();
    let header = "=== SQL Review ===";
    if opts.colored {
        output.push_str(&header.bold().to_string());
    } else {
        output.push_str(header);
    }
    output.push_str("\n\n");

    if report.is_clean() {
        let message = format!("No issues found ({} rules checked)", report.rules_count);
        if opts.colored {
            output.push_str(&message.green().to_string());
        } else {
            output.push_str(&message);
        }
        output.push('\n');
        return output;
    }

    for entry in &report.advice {
        let advice = &entry.advice;
        let status = format!("[{}]", advice.status);
        let status = if opts.colored {
            match advice.status {
                Status::Error => status.red().bold().to_string(),
                Status::Warn => status.yellow().bold().to_string(),
                Status::Success => status.green().to_string()
            }
        } else {
            status
        };
        output.push_str(&format!(
            "{} line {}: {} ({})\n",
            status, advice.line, advice.title, advice.code
        ));
        output.push_str(&format!("  {}\n", advice.content));
    }

    output.push_str(&format!(
        "\n{} rules checked: {} errors, {} warnings\n",
        report.rules_count,
        report.error_count(),
        report.warning_count()
    ));
    output
}

/// Format the registered (engine, rule type) pairs as a table
pub fn format_rules(entries: &[(Engine, RuleType)], opts: &OutputOptions) -> String {
    let mut output = String::new();
    for (engine, rule_type) in entries {
        let engine = format!("{:<10}", engine.as_str());
        if opts.colored {
            output.push_str(&engine.cyan().to_string());
        } else {
            output.push_str(&engine);
        }
        output.push_str(rule_type.as_str());
        output.push('\n');
    }
    output
}
