//! Argument assembler — the test command's argv, in order.

use crate::args::rerun::RerunDirective;
use crate::args::scan::{FlagMatch, ScanResult};
use crate::config::ToolConfig;

/// Builder for the argument vector handed to the test subprocess.
///
/// Call the `with_*` stages in emission order:
/// prefix, `-json`, run filter, user args, targets, test binary args.
#[derive(Debug, Clone, Default)]
pub struct ArgAssembler {
    args: Vec<String>,
}

impl ArgAssembler {
    /// Start with an empty arg list.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Start with the raw command, untouched.
    pub fn raw(args: &[String]) -> Self {
        Self {
            args: args.to_vec(),
        }
    }

    /// Start with `<program> <subcommand>`, e.g. `go test`.
    pub fn for_tool(tool: &ToolConfig) -> Self {
        Self {
            args: vec![tool.program.clone(), tool.subcommand.clone()],
        }
    }

    /// Force structured output unless the user already asked for it.
    pub fn with_json(mut self, scan: &ScanResult) -> Self {
        if !scan.has_json() {
            self.args.push("-json".into());
        }
        self
    }

    /// Inject the rerun filter, if any.
    pub fn with_run_filter(mut self, rerun: Option<&RerunDirective>) -> Self {
        if let Some(r) = rerun {
            self.args.push(r.run_flag.clone());
        }
        self
    }

    /// User args before the `-args` separator.
    ///
    /// With `strip_run` set, every run filter that carries a value is
    /// dropped together with its value token. A bare run flag with no
    /// value is kept as-is.
    pub fn with_user_args(mut self, args: &[String], scan: &ScanResult, strip_run: bool) -> Self {
        let end = scan.separator.unwrap_or(args.len());
        let mut dropped = vec![false; end];
        if strip_run {
            for (idx, m) in scan.run_flags() {
                if *m == FlagMatch::RunMissingValue {
                    continue;
                }
                for slot in dropped.iter_mut().skip(*idx).take(m.width()) {
                    *slot = true;
                }
            }
        }

        self.args.extend(
            args[..end]
                .iter()
                .zip(dropped)
                .filter(|(_, drop)| !drop)
                .map(|(a, _)| a.clone()),
        );
        self
    }

    /// Package selectors.
    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.args.extend(targets);
        self
    }

    /// The `-args` separator and everything after it, verbatim.
    pub fn with_binary_args(mut self, args: &[String], scan: &ScanResult) -> Self {
        if let Some(sep) = scan.separator {
            self.args.extend(args[sep..].iter().cloned());
        }
        self
    }

    /// Add arbitrary extra arguments.
    pub fn with_extra(mut self, extra: Vec<String>) -> Self {
        self.args.extend(extra);
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}
