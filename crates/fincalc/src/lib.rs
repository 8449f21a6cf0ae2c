//! Command-line front end for the fincalc calculators
//!
//! This crate wraps `fincalc_core` in a terminal tool:
//! - One subcommand per calculator, with flags mirroring its parameters
//! - YAML scenario files evaluated as a batch
//! - File-based structured logging in the data directory

pub mod cli;
pub mod format;
pub mod logging;
pub mod scenario;

pub use cli::{Cli, Command, execute};
pub use logging::init_logging;
pub use scenario::{Scenario, ScenarioEntry, ScenarioError};
