//! Auction Sweep - batch experiment driver for the BGN auction simulator
//!
//! Runs a sealed-bid auction simulator (an external program built on a
//! BGN-style homomorphic cryptosystem) once per parameter tuple and prints
//! whatever each run wrote to stdout.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐    ┌───────────────────┐    ┌───────────────────┐
//! │  ParameterGrid   │───►│    SweepRunner    │───►│ SimulatorLauncher │
//! │ (7-int tuples)   │    │ (sequential loop) │    │ (child process)   │
//! └──────────────────┘    └─────────┬─────────┘    └───────────────────┘
//!                                   │
//!                                   ▼
//!                           captured stdout
//! ```
//!
//! The simulator's output is treated as opaque text. Nothing here parses it,
//! and consumers of the printed log should not rely on its shape.
//!
//! # Usage
//!
//! ```ignore
//! use auction_sweep::{ParameterGrid, SweepRunner};
//! use auction_env::ProcessLauncher;
//!
//! let grid = ParameterGrid::default_sweep();
//! let runner = SweepRunner::new(ProcessLauncher::new());
//! runner.run(&grid, &mut std::io::stdout().lock())?;
//! ```

mod error;
pub mod params;
pub mod simulator;
mod runner;

pub use error::SweepError;
pub use params::{ParameterGrid, ParameterTuple, Advisory};
pub use simulator::SimulatorCommand;
pub use runner::SweepRunner;
