//! Production implementation of SimulatorLauncher using `std::process`.

use crate::{CommandLine, InvocationOutput, LaunchError, SimulatorLauncher};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Production launcher backed by real child processes.
///
/// Each launch is synchronous: the caller is parked on the child's exit
/// and there is no timeout.
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher {
    /// Working directory for children (inherits the harness's when unset)
    working_dir: Option<PathBuf>,
}

impl ProcessLauncher {
    /// Creates a launcher that runs children in the current directory.
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Runs children in `dir` instead.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
    
    /// Returns the configured working directory, if any.
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }
}

impl SimulatorLauncher for ProcessLauncher {
    fn launch(&self, command: &CommandLine) -> Result<InvocationOutput, LaunchError> {
        let mut child = Command::new(command.program());
        child
            .args(command.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        
        if let Some(dir) = &self.working_dir {
            child.current_dir(dir);
        }
        
        debug!("spawning: {}", command);
        let output = child
            .output()
            .map_err(|e| LaunchError::from_io(command.program(), e))?;
        
        Ok(InvocationOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
