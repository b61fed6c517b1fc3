//! Argument assembly for a `go test` wrapper.
//!
//! The core is [`args::assemble`]: a pure function from wrapper options,
//! an optional rerun directive and the environment to the exact argv of
//! the test subprocess.

pub mod args;
pub mod cli;
pub mod config;
pub mod logging;
