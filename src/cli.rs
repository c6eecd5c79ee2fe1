use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Review - Check SQL statements against configurable review rules
#[derive(Parser, Debug)]
#[command(name = "sql-review")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Review SQL statements
    Check {
        /// Path to SQL file (use - for stdin)
        #[arg(short, long)]
        sql: PathBuf,

        /// Review configuration file
        #[arg(short, long, env = "SQL_REVIEW_CONFIG")]
        config: Option<PathBuf>,

        /// Engine to parse and review for, overrides the configuration
        #[arg(short, long, value_enum)]
        engine: Option<EngineArg>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    },
    /// List registered rules per engine
    Rules {
        /// Only list rules for this engine
        #[arg(short, long, value_enum)]
        engine: Option<EngineArg>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EngineArg {
    Mysql,
    Tidb,
    Postgres
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
