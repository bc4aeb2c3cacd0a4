//! JSON I/O for one-shot commands
//!
//! - Input: one JSON object on stdin (may span lines)
//! - Output: one JSON object per line on stdout

use std::io::{self, Read, Write};

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Reads the whole of stdin as one JSON value
pub fn read_request() -> CliResult<Value> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

/// Parses request text; blank input is an error
pub fn parse_request(input: &str) -> CliResult<Value> {
    if input.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }
    Ok(serde_json::from_str(input)?)
}

/// `{"status":"ok","data":...}`
pub fn ok_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// `{"status":"error","code":...,"message":...}`
pub fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

pub fn write_response(data: Value) -> CliResult<()> {
    write_json(&ok_envelope(data))
}

pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_json(&error_envelope(code, message))
}

fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
