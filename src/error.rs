pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create rule payload decode error
pub fn payload_error(shape: &str, message: impl Into<String>) -> AppError {
    AppError::bad_request(format!("Invalid {} rule payload: {}", shape, message.into()))
}

/// Create error for an (engine, rule type) pair without a registered advisor
pub fn advisor_not_found_error(
    engine: impl std::fmt::Display,
    rule: impl std::fmt::Display
) -> AppError {
    AppError::bad_request(format!(
        "No advisor registered for rule '{}' on engine '{}'",
        rule, engine
    ))
}

/// Create output serialization error
pub fn output_error(message: impl Into<String>) -> AppError {
    AppError::internal(message.into())
}

/// Position reported by the SQL parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlPosition {
    pub line:   usize,
    pub column: usize
}

/// Extract the position from a sqlparser error message.
///
/// sqlparser reports positions as `... at Line: X, Column: Y` (older releases
/// omit the colon after `Column`).
pub fn extract_position(message: &str) -> Option<SqlPosition> {
    let line_marker = "Line: ";
    let col_marker = ", Column";

    let line_start = message.rfind(line_marker)?;
    let line_num_start = line_start + line_marker.len();
    let col_start = message[line_num_start..].find(col_marker)?;
    let line_str = &message[line_num_start..line_num_start + col_start];

    let rest = &message[line_num_start + col_start + col_marker.len()..];
    let rest = rest.trim_start_matches(':').trim_start();
    let col_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let col_str = &rest[..col_end];

    match (line_str.parse(), col_str.parse()) {
        (Ok(line), Ok(column)) => Some(SqlPosition {
            line,
            column
        }),
        _ => None
    }
}
