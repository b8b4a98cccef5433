//! Error types for the sweep harness.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or driving a sweep.
///
/// Simulator failures are deliberately absent: a child that crashes or
/// cannot be started never aborts the sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Writing the harness's own output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    /// Grid file could not be read
    #[error("Cannot read grid file {}: {source}", path.display())]
    GridFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    
    /// Grid file is not valid JSON (or not an array of integer arrays)
    #[error("Malformed grid: {0}")]
    Json(#[from] serde_json::Error),
    
    /// A grid row does not have exactly seven values
    #[error("Grid row {row} has {len} values, expected 7")]
    TupleShape { row: usize, len: usize },
    
    /// A tuple literal could not be parsed
    #[error("Invalid tuple '{0}': expected seven comma-separated positive integers")]
    InvalidTuple(String),
    
    /// The simulator invocation prefix has no program
    #[error("Simulator prefix must name a program")]
    EmptyPrefix,
}
