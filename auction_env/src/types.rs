//! Common types for the process environment abstraction.

use serde::{Deserialize, Serialize};

/// A fully-resolved command: the program to execute and its argument list.
///
/// Arguments are kept as separate strings and handed to the OS as-is;
/// no shell is involved, so nothing is re-split or re-quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandLine {
    /// Program name or path (resolved through `PATH` by the OS)
    program: String,
    
    /// Positional arguments, in order
    args: Vec<String>,
}

impl CommandLine {
    /// Creates a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }
    
    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
    
    /// Appends several arguments, preserving their order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
    
    /// Returns the program.
    pub fn program(&self) -> &str {
        &self.program
    }
    
    /// Returns the argument list.
    pub fn arguments(&self) -> &[String] {
        &self.args
    }
    
    /// Returns the last `n` arguments (fewer if the command is shorter).
    pub fn trailing(&self, n: usize) -> &[String] {
        &self.args[self.args.len().saturating_sub(n)..]
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What one child process left behind.
///
/// The streams are decoded as lossy UTF-8 and are otherwise opaque: callers
/// must not assume any structure in the simulator's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationOutput {
    /// Captured standard output
    pub stdout: String,
    
    /// Captured standard error
    pub stderr: String,
    
    /// Exit code, `None` if the child was killed by a signal
    pub exit_code: Option<i32>,
}

impl InvocationOutput {
    /// Returns true if the child exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}
