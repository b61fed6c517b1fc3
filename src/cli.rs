//! Command-line front-end for the argument assembler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::args::{Options, RerunDirective};

/// Assemble the argument vector for a test run without executing it.
#[derive(Debug, Parser)]
#[command(name = "testrun", version, about)]
pub struct Cli {
    /// Treat ARGS as the complete command instead of building `go test` args
    #[arg(long)]
    pub raw_command: bool,

    /// Space separated list of packages to test
    #[arg(long, env = "TESTRUN_PACKAGES", default_value = "")]
    pub packages: String,

    /// Package holding the failed tests to rerun
    #[arg(long, value_name = "PKG")]
    pub rerun_pkg: Option<String>,

    /// Complete run filter for the rerun, e.g. `-run=TestOne|TestTwo`
    #[arg(
        long,
        value_name = "FILTER",
        requires = "rerun_pkg",
        conflicts_with = "rerun_test",
        allow_hyphen_values = true
    )]
    pub rerun_run: Option<String>,

    /// Failed test name to rerun (repeatable); builds the run filter
    #[arg(long, value_name = "NAME", requires = "rerun_pkg")]
    pub rerun_test: Vec<String>,

    /// How to print the assembled command
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Config file path (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Flags and args forwarded to the test tool
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Output format for the assembled argv.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One token per line
    Lines,
    /// A JSON array of strings
    Json,
}

impl Cli {
    /// Wrapper options from the parsed flags.
    pub fn options(&self) -> Options {
        Options {
            raw_command: self.raw_command,
            args: self.args.clone(),
            packages: self
                .packages
                .split_whitespace()
                .map(String::from)
                .collect(),
        }
    }

    /// Rerun directive from `--rerun-*` flags.
    ///
    /// `None` when `--rerun-pkg` is absent, or when it is given without any
    /// filter (in which case there is nothing to narrow).
    pub fn rerun(&self) -> Option<RerunDirective> {
        let pkg = self.rerun_pkg.as_deref()?;
        match &self.rerun_run {
            Some(filter) => Some(RerunDirective::new(filter.clone(), pkg)),
            None => RerunDirective::for_tests(pkg, self.rerun_test.as_slice()),
        }
    }
}
