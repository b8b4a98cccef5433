//! How the external auction simulator is invoked.

use crate::params::{ParameterTuple, TUPLE_ARITY};
use crate::SweepError;
use auction_env::CommandLine;

/// Default invocation prefix: the simulator is a Go program run from source.
pub const DEFAULT_PREFIX: [&str; 2] = ["go", "run"];

/// Default simulator entry point.
pub const DEFAULT_ENTRY_POINT: &str = "test1.go";

/// Recipe for turning a [`ParameterTuple`] into a simulator command line.
///
/// Layout: `program leading_args.. entry_point arg0 .. arg6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorCommand {
    /// Program to execute
    program: String,
    
    /// Arguments placed before the entry point (e.g. `run`)
    leading_args: Vec<String>,
    
    /// Simulator source file or binary argument
    entry_point: String,
}

impl SimulatorCommand {
    /// Creates a recipe. The first element of `prefix` is the program.
    pub fn new<I, S>(prefix: I, entry_point: impl Into<String>) -> Result<Self, SweepError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefix = prefix.into_iter().map(Into::into);
        let program = prefix.next().ok_or(SweepError::EmptyPrefix)?;
        
        Ok(Self {
            program,
            leading_args: prefix.collect(),
            entry_point: entry_point.into(),
        })
    }
    
    /// Returns the program.
    pub fn program(&self) -> &str {
        &self.program
    }
    
    /// Returns the arguments between the program and the entry point.
    pub fn leading_args(&self) -> &[String] {
        &self.leading_args
    }
    
    /// Returns the entry point.
    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
    
    /// Builds the command line for one tuple.
    pub fn build(&self, tuple: &ParameterTuple) -> CommandLine {
        CommandLine::new(self.program.as_str())
            .args(self.leading_args.iter().map(String::as_str))
            .arg(self.entry_point.as_str())
            .args(tuple.to_args())
    }
    
    /// Number of arguments [`SimulatorCommand::build`] produces.
    pub fn arg_count(&self) -> usize {
        self.leading_args.len() + 1 + TUPLE_ARITY
    }
}

impl Default for SimulatorCommand {
    fn default() -> Self {
        let [program, leading] = DEFAULT_PREFIX;
        Self {
            program: program.to_string(),
            leading_args: vec![leading.to_string()],
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}
