//! Command output
//!
//! Handlers return a [`CommandOutput`]; `main` writes it to stdout. Logs and
//! errors go to stderr, so stdout only ever carries the payload.

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Payload produced by one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// A single JSON document, written verbatim
    Json(Vec<u8>),
    /// Plain listing, one item per line
    Lines(Vec<String>),
    /// Confirmation of a write-style operation
    Message(String),
}

impl CommandOutput {
    /// Serialize a value into a JSON payload
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(CommandOutput::Json(serde_json::to_vec(value)?))
    }

    /// Write the payload followed by a newline
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            CommandOutput::Json(bytes) => {
                out.write_all(bytes)?;
                writeln!(out)?;
            }
            CommandOutput::Lines(lines) => {
                for line in lines {
                    writeln!(out, "{}", line)?;
                }
            }
            CommandOutput::Message(message) => writeln!(out, "{}", message)?,
        }
        out.flush()
    }
}

/// Write a command's payload to stdout
pub fn emit(output: &CommandOutput) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output.write_to(&mut handle)
}
