//! Core launcher trait for simulator invocations.

use crate::{CommandLine, InvocationOutput, LaunchError};

/// The central interface for running the external simulator.
///
/// # Implementations
///
/// - **Production**: `ProcessLauncher` - wraps `std::process::Command`
/// - **Tests**: stubs that record commands or echo their arguments
///
/// # Contract
///
/// `launch` blocks until the child has terminated. Both output streams are
/// captured; nothing is inherited from the parent's stdout or stderr.
/// A child that runs and exits non-zero returns `Ok` with its exit code.
/// `Err` means the child never ran.
pub trait SimulatorLauncher {
    /// Runs `command` to completion and returns what it produced.
    fn launch(&self, command: &CommandLine) -> Result<InvocationOutput, LaunchError>;
}

impl<L: SimulatorLauncher + ?Sized> SimulatorLauncher for &L {
    fn launch(&self, command: &CommandLine) -> Result<InvocationOutput, LaunchError> {
        (**self).launch(command)
    }
}
