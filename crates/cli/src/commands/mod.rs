//! Subcommand implementations.

pub mod carousel;
pub mod search;
pub mod theme;
pub mod totals;

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors shared by the subcommands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Input file is not valid YAML for the expected shape.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    /// Output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Output could not be encoded.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read and decode a YAML file.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: display.clone(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| CommandError::Parse {
        path: display,
        source,
    })
}

/// Write a value to stdout as pretty JSON.
pub fn emit<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
