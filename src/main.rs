use std::process;

use clap::Parser;
use sql_review::{
    app::{CheckParams, run_check, run_rules},
    cli::{Cli, Commands},
    error::AppResult
};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            sql,
            config,
            engine,
            output_format,
            no_color
        } => {
            let result = run_check(CheckParams {
                sql_path: sql.display().to_string(),
                config_path: config,
                engine,
                output_format,
                no_color
            })?;
            println!("{}", result.output);
            Ok(result.exit_code)
        }
        Commands::Rules {
            engine,
            no_color
        } => {
            print!("{}", run_rules(engine, no_color));
            Ok(0)
        }
    }
}
