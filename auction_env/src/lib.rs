//! Auction Sweep Environment Abstraction Layer
//!
//! This crate isolates the one piece of I/O the sweep harness performs:
//! launching the external auction simulator as a child process and
//! collecting what it wrote.
//!
//! # Core Concept
//!
//! The harness never touches `std::process` directly. It talks to a
//! [`SimulatorLauncher`], so the same sweep logic runs against:
//! - **Production**: [`ProcessLauncher`] - spawns the real simulator
//! - **Tests**: any stub that records or echoes the command line
//!
//! # Example
//!
//! ```ignore
//! use auction_env::{CommandLine, ProcessLauncher, SimulatorLauncher};
//!
//! let launcher = ProcessLauncher::new();
//! let command = CommandLine::new("go").arg("run").arg("test1.go");
//! let output = launcher.launch(&command)?;
//! println!("{}", output.stdout);
//! ```

mod launcher;
mod types;
mod error;
mod process_impl;

pub use launcher::SimulatorLauncher;
pub use types::{CommandLine, InvocationOutput};
pub use error::LaunchError;
pub use process_impl::ProcessLauncher;
