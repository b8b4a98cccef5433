//! Auction Sweep CLI
//!
//! Runs the BGN auction simulator over a parameter grid and prints each
//! run's output. With no flags this is the standard bidder-count sweep
//! against `go run test1.go`.

use auction_env::ProcessLauncher;
use auction_sweep::{ParameterGrid, ParameterTuple, SimulatorCommand, SweepError, SweepRunner};
use auction_sweep::simulator::{DEFAULT_ENTRY_POINT, DEFAULT_PREFIX};
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// BGN auction simulator sweep
#[derive(Parser, Debug)]
#[command(name = "auction-sweep")]
#[command(about = "Run the BGN auction simulator once per parameter tuple", long_about = None)]
struct Args {
    /// Simulator program (default: go, with leading argument "run")
    #[arg(long)]
    program: Option<String>,
    
    /// Argument placed between the program and the entry point (repeatable)
    #[arg(long = "prefix-arg", requires = "program", allow_hyphen_values = true)]
    prefix_args: Vec<String>,
    
    /// Simulator entry point
    #[arg(long, default_value = DEFAULT_ENTRY_POINT)]
    entry_point: String,
    
    /// Working directory for simulator runs
    #[arg(short = 'C', long)]
    working_dir: Option<PathBuf>,
    
    /// JSON grid file: an array of [iterations, key_bits, message_space,
    /// bidders, max_random, max_bid, seed] arrays
    #[arg(long, conflicts_with = "tuple")]
    grid: Option<PathBuf>,
    
    /// Explicit tuple as seven comma-separated integers (repeatable)
    #[arg(long)]
    tuple: Vec<ParameterTuple>,
    
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Resolves the grid to sweep. The embedded grid is the fallback.
    fn grid(&self) -> Result<ParameterGrid, SweepError> {
        if let Some(path) = &self.grid {
            ParameterGrid::from_json_file(path)
        } else if !self.tuple.is_empty() {
            Ok(ParameterGrid::new(self.tuple.clone()))
        } else {
            Ok(ParameterGrid::default_sweep())
        }
    }
    
    /// Resolves the simulator command recipe.
    fn simulator(&self) -> Result<SimulatorCommand, SweepError> {
        let prefix: Vec<String> = match &self.program {
            Some(program) => std::iter::once(program.clone())
                .chain(self.prefix_args.iter().cloned())
                .collect(),
            None => DEFAULT_PREFIX.iter().map(|s| s.to_string()).collect(),
        };
        SimulatorCommand::new(prefix, self.entry_point.as_str())
    }
}

/// Resolves everything a sweep needs before any simulator is launched.
fn configure(args: &Args) -> Result<(ParameterGrid, SimulatorCommand), SweepError> {
    Ok((args.grid()?, args.simulator()?))
}

fn main() {
    let args = Args::parse();
    
    // Logs go to stderr so stdout carries only simulator output
    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
    
    let (grid, simulator) = match configure(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    
    let mut launcher = ProcessLauncher::new();
    if let Some(dir) = &args.working_dir {
        launcher = launcher.with_working_dir(dir);
    }
    
    let runner = SweepRunner::new(launcher).with_simulator(simulator);
    let stdout = std::io::stdout();
    if let Err(e) = runner.run(&grid, &mut stdout.lock()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
