use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::definition::PathwayDefinition;
use crate::glycolysis::GlycolysisConfig;
use crate::simulation::result::SimulationResult;

/// Loads and parses a pathway definition from a JSON file.
///
/// The definition is not checked for consistency here; that happens when it is turned
/// into a [`Pathway`](crate::simulation::pathway::Pathway).
///
/// # Errors
///
/// * The file cannot be found or opened (`IOError::FileNotFound`)
/// * The file contents cannot be parsed as a pathway definition (`IOError::JsonParseError`)
pub fn load_definition(path: impl Into<PathBuf>) -> Result<PathwayDefinition, IOError> {
    load_json(path)
}

/// Saves a pathway definition to a pretty-printed JSON file.
pub fn save_definition(
    path: impl Into<PathBuf>,
    definition: &PathwayDefinition,
) -> Result<(), IOError> {
    save_json(path, definition)
}

/// Loads a glycolysis configuration. Missing fields take their default values.
pub fn load_config(path: impl Into<PathBuf>) -> Result<GlycolysisConfig, IOError> {
    load_json(path)
}

/// Saves a simulation result to a pretty-printed JSON file.
pub fn save_result(path: impl Into<PathBuf>, result: &SimulationResult) -> Result<(), IOError> {
    save_json(path, result)
}

fn load_json<T: DeserializeOwned>(path: impl Into<PathBuf>) -> Result<T, IOError> {
    let path = path.into();
    let file = std::fs::File::open(path).map_err(IOError::FileNotFound)?;
    serde_json::from_reader(file).map_err(IOError::JsonParseError)
}

fn save_json<T: Serialize>(path: impl Into<PathBuf>, value: &T) -> Result<(), IOError> {
    let path = path.into();
    let file = std::fs::File::create(path).map_err(IOError::FileNotFound)?;
    serde_json::to_writer_pretty(file, value).map_err(IOError::JsonParseError)
}

/// Represents errors that can occur during file I/O operations.
#[derive(Error, Debug)]
pub enum IOError {
    /// The specified file could not be found, opened or created.
    #[error("File not found: {0}")]
    FileNotFound(#[from] std::io::Error),

    /// The file contents could not be parsed as valid JSON of the expected shape.
    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
