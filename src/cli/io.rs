//! JSON I/O handling for CLI
//!
//! - Input: one JSON document read to end of input
//! - Output: one JSON object per line
//! - UTF-8 only
//!
//! `run` wires these to stdin and stdout.

use std::io::{Read, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::rules::ValidationError;

/// Read one JSON document from `input`
pub fn read_request<R: Read>(input: &mut R) -> CliResult<Value> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;

    if buffer.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    Ok(serde_json::from_str(&buffer)?)
}

/// Write a bare success response
pub fn write_ok<W: Write>(output: &mut W) -> CliResult<()> {
    write_json(output, &json!({ "status": "ok" }))
}

/// Write a success response carrying `data`
pub fn write_response<W: Write>(output: &mut W, data: Value) -> CliResult<()> {
    write_json(output, &json!({ "status": "ok", "data": data }))
}

/// Write a rejection listing every failed check
pub fn write_rejection<W: Write>(output: &mut W, errors: &[ValidationError]) -> CliResult<()> {
    write_json(output, &json!({ "status": "invalid", "errors": errors }))
}

/// Write an error response
pub fn write_error<W: Write>(output: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_json(
        output,
        &json!({ "status": "error", "code": code, "message": message }),
    )
}

fn write_json<W: Write>(output: &mut W, response: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *output, response)?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}
