//! Error types for the process environment abstraction.

use thiserror::Error;

/// Errors that can occur while starting a simulator process.
///
/// A child that starts and then exits non-zero is not an error here;
/// its exit code travels in [`crate::InvocationOutput`].
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The program is not present in the execution environment
    #[error("Program not found: {0}")]
    NotFound(String),
    
    /// The OS refused to start the process (permissions, resource limits, etc.)
    #[error("Failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Classifies an I/O error returned while spawning `program`.
    pub fn from_io(program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(program)
        } else {
            Self::Spawn { program, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    
    #[test]
    fn test_not_found_is_classified() {
        let err = LaunchError::from_io("go", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, LaunchError::NotFound(ref p) if p == "go"));
        assert_eq!(err.to_string(), "Program not found: go");
    }
    
    #[test]
    fn test_other_io_errors_are_spawn_failures() {
        let err = LaunchError::from_io("go", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, LaunchError::Spawn { .. }));
        assert!(err.to_string().starts_with("Failed to spawn go"));
    }
}
