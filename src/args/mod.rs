//! Argument handling pipeline for the test runner.
//!
//! Turns wrapper options into the exact argv for the test subprocess:
//!
//! ```text
//! Options → Scan → Resolve target → Assemble → TestCommand
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod env_source;
mod pipeline;
mod rerun;
mod scan;
mod target;

pub use assembler::ArgAssembler;
pub use env_source::{EnvSource, FixedEnv, ProcessEnv, TEST_DIRECTORY};
pub use pipeline::{assemble, build_test_command, TestCommand};
pub use rerun::RerunDirective;
pub use scan::{scan, FlagMatch, ScanResult, ARGS_SEPARATOR};
pub use target::{resolve_target, ResolvedTarget, TargetSource};

/// Per-invocation wrapper options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Treat `args` as the complete command; skip assembly.
    pub raw_command: bool,
    /// User flags and args to forward, in order.
    pub args: Vec<String>,
    /// Explicit package selectors. Empty means environment override or default.
    pub packages: Vec<String>,
}
