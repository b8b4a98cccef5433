//! Sweep runner - drives the simulator once per parameter tuple.

use crate::params::ParameterGrid;
use crate::simulator::SimulatorCommand;
use crate::SweepError;

use auction_env::SimulatorLauncher;
use std::io::Write;
use std::time::Instant;
use tracing::{info, warn, debug};

/// Runs a parameter grid through the external simulator.
///
/// Strictly sequential: each invocation is waited on before the next one is
/// built. A failing simulator run is never retried and never stops the sweep.
pub struct SweepRunner<L> {
    /// Launches simulator processes
    launcher: L,
    
    /// Command-line recipe
    simulator: SimulatorCommand,
}

impl<L: SimulatorLauncher> SweepRunner<L> {
    /// Creates a runner that invokes the default simulator command.
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            simulator: SimulatorCommand::default(),
        }
    }
    
    /// Sets the simulator command recipe.
    pub fn with_simulator(mut self, simulator: SimulatorCommand) -> Self {
        self.simulator = simulator;
        self
    }
    
    /// Returns the launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }
    
    /// Returns the simulator command recipe.
    pub fn simulator(&self) -> &SimulatorCommand {
        &self.simulator
    }
    
    /// Runs every tuple of `grid` in order and writes each run's captured
    /// stdout, followed by a newline, to `out`.
    ///
    /// The simulator's exit status and stderr are not reported. A run that
    /// fails or cannot start contributes an empty line. Only a failure to
    /// write to `out` is returned as an error.
    ///
    /// Returns the number of invocations performed.
    pub fn run<W: Write>(&self, grid: &ParameterGrid, out: &mut W) -> Result<usize, SweepError> {
        let total = grid.len();
        info!("Starting sweep: {} run(s) of {}", total, self.simulator.entry_point());
        
        let mut invocations = 0;
        for (index, tuple) in grid.iter().enumerate() {
            for advisory in tuple.advisories() {
                warn!("run {}/{}: {}", index + 1, total, advisory);
            }
            
            let command = self.simulator.build(tuple);
            info!("run {}/{}: {}", index + 1, total, tuple);
            
            let started = Instant::now();
            let stdout = match self.launcher.launch(&command) {
                Ok(output) => {
                    debug!(
                        "run {}/{} finished in {:.2?} (exit code {:?})",
                        index + 1,
                        total,
                        started.elapsed(),
                        output.exit_code
                    );
                    output.stdout
                }
                Err(e) => {
                    warn!("run {}/{} did not start: {}", index + 1, total, e);
                    String::new()
                }
            };
            invocations += 1;
            
            writeln!(out, "{}", stdout)?;
            out.flush()?;
        }
        
        info!("Sweep finished: {} invocation(s)", invocations);
        Ok(invocations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterTuple;
    use auction_env::{CommandLine, InvocationOutput, LaunchError};
    use std::sync::Mutex;
    
    /// What the stub simulator does when launched.
    #[derive(Clone, Copy)]
    enum Behavior {
        /// Prints its arguments and exits 0
        Echo,
        /// Prints nothing and exits 1
        Fail,
        /// Is not installed
        Missing,
    }
    
    /// Stub launcher that records every command it is handed.
    struct StubLauncher {
        behavior: Behavior,
        launched: Mutex<Vec<CommandLine>>,
    }
    
    impl StubLauncher {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                launched: Mutex::new(Vec::new()),
            }
        }
        
        fn launched(&self) -> Vec<CommandLine> {
            self.launched.lock().unwrap().clone()
        }
    }
    
    impl SimulatorLauncher for StubLauncher {
        fn launch(&self, command: &CommandLine) -> Result<InvocationOutput, LaunchError> {
            self.launched.lock().unwrap().push(command.clone());
            
            match self.behavior {
                Behavior::Echo => Ok(InvocationOutput {
                    stdout: command.arguments().join(" "),
                    stderr: String::new(),
                    exit_code: Some(0),
                }),
                Behavior::Fail => Ok(InvocationOutput {
                    stdout: String::new(),
                    stderr: "panic: bad key size".to_string(),
                    exit_code: Some(1),
                }),
                Behavior::Missing => Err(LaunchError::NotFound(command.program().to_string())),
            }
        }
    }
    
    fn bidders_grid(bidders: &[u64]) -> ParameterGrid {
        bidders
            .iter()
            .map(|&n| ParameterTuple::new(5, 512, 10_000_000_000, n, 10_000, 100_000, 76))
            .collect()
    }
    
    #[test]
    fn test_one_invocation_per_tuple() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Echo));
        let grid = ParameterGrid::default_sweep();
        let mut out = Vec::new();
        
        let invocations = runner.run(&grid, &mut out).unwrap();
        
        assert_eq!(invocations, 5);
        assert_eq!(runner.launcher().launched().len(), 5);
    }
    
    #[test]
    fn test_invocations_follow_grid_order() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Echo));
        let grid = bidders_grid(&[40, 5, 20, 5]);
        
        runner.run(&grid, &mut Vec::new()).unwrap();
        
        let launched = runner.launcher().launched();
        for (cmd, tuple) in launched.iter().zip(grid.iter()) {
            assert_eq!(cmd.trailing(7), tuple.to_args().as_slice());
        }
        let bidders: Vec<&str> = launched.iter().map(|c| c.arguments()[5].as_str()).collect();
        assert_eq!(bidders, vec!["40", "5", "20", "5"]);
    }
    
    #[test]
    fn test_echoed_output_is_printed_in_order() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Echo));
        let grid = ParameterGrid::default_sweep();
        let mut out = Vec::new();
        
        runner.run(&grid, &mut out).unwrap();
        
        let printed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 5);
        for (line, tuple) in lines.iter().zip(grid.iter()) {
            let expected = format!("run test1.go {}", tuple.to_args().join(" "));
            assert_eq!(*line, expected);
        }
    }
    
    #[test]
    fn test_failing_simulator_does_not_stop_sweep() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Fail));
        let mut out = Vec::new();
        
        let invocations = runner.run(&ParameterGrid::default_sweep(), &mut out).unwrap();
        
        assert_eq!(invocations, 5);
        assert_eq!(runner.launcher().launched().len(), 5);
        // stderr is never surfaced; each failed run prints an empty line
        assert_eq!(String::from_utf8(out).unwrap(), "\n\n\n\n\n");
    }
    
    #[test]
    fn test_missing_simulator_does_not_stop_sweep() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Missing));
        let mut out = Vec::new();
        
        let invocations = runner.run(&bidders_grid(&[5, 10]), &mut out).unwrap();
        
        assert_eq!(invocations, 2);
        assert_eq!(out, b"\n\n");
    }
    
    #[test]
    fn test_empty_grid_is_silent() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Echo));
        let mut out = Vec::new();
        
        let invocations = runner.run(&ParameterGrid::empty(), &mut out).unwrap();
        
        assert_eq!(invocations, 0);
        assert!(out.is_empty());
        assert!(runner.launcher().launched().is_empty());
    }
    
    #[test]
    fn test_duplicate_tuples_rerun_identically() {
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Echo));
        
        runner.run(&bidders_grid(&[10, 10]), &mut Vec::new()).unwrap();
        
        let launched = runner.launcher().launched();
        assert_eq!(launched.len(), 2);
        assert_eq!(launched[0], launched[1]);
    }
    
    #[test]
    fn test_custom_simulator_command() {
        let sim = SimulatorCommand::new(["./bgn-auction"], "simulate").unwrap();
        let runner = SweepRunner::new(StubLauncher::new(Behavior::Echo)).with_simulator(sim);
        
        runner.run(&bidders_grid(&[5]), &mut Vec::new()).unwrap();
        
        let launched = runner.launcher().launched();
        assert_eq!(launched[0].program(), "./bgn-auction");
        assert_eq!(launched[0].arguments()[0], "simulate");
    }
    
    #[cfg(unix)]
    #[test]
    fn test_real_echo_process() {
        use auction_env::ProcessLauncher;
        
        let sim = SimulatorCommand::new(["echo", "run"], "test1.go").unwrap();
        let runner = SweepRunner::new(ProcessLauncher::new()).with_simulator(sim);
        let mut out = Vec::new();
        
        runner.run(&ParameterGrid::default_sweep(), &mut out).unwrap();
        
        // echo's own newline plus the one added per run
        let printed = String::from_utf8(out).unwrap();
        let runs: Vec<&str> = printed.split("\n\n").filter(|s| !s.is_empty()).collect();
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[4], "run test1.go 5 512 10000000000 40 10000 100000 76");
    }
    
    #[cfg(unix)]
    #[test]
    fn test_real_failing_process() {
        use auction_env::ProcessLauncher;
        
        let sim = SimulatorCommand::new(["false"], "test1.go").unwrap();
        let runner = SweepRunner::new(ProcessLauncher::new()).with_simulator(sim);
        let mut out = Vec::new();
        
        let invocations = runner.run(&ParameterGrid::default_sweep(), &mut out).unwrap();
        
        assert_eq!(invocations, 5);
        assert_eq!(out, b"\n\n\n\n\n");
    }
}
