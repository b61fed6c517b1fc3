//! Pipeline — ties all argument processing stages together.

use crate::args::assembler::ArgAssembler;
use crate::args::env_source::EnvSource;
use crate::args::rerun::RerunDirective;
use crate::args::scan::{scan, FlagMatch, ScanResult};
use crate::args::target::resolve_target;
use crate::args::Options;
use crate::config::Config;

/// Ready-to-use command for the test subprocess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCommand {
    /// Full argument vector; the first element is the program.
    pub argv: Vec<String>,
    /// Warnings produced during argument processing.
    pub warnings: Vec<String>,
}

impl TestCommand {
    /// Program to execute, `None` only for an empty raw command.
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Assemble the test command argv with the default configuration.
///
/// This is the main entry point for library callers. It never fails:
/// missing inputs fall back to defaults.
pub fn assemble(
    options: &Options,
    rerun: Option<&RerunDirective>,
    env: &dyn EnvSource,
) -> Vec<String> {
    build_test_command(options, rerun, env, &Config::default()).argv
}

/// Build the test command using `config` for the tool name and target defaults.
///
/// # Arguments
///
/// * `options` - Wrapper options: raw mode, user args, explicit packages
/// * `rerun` - Failed tests to re-execute, if this is a rerun
/// * `env` - Source for the directory override variable
/// * `config` - Tool and target settings
pub fn build_test_command(
    options: &Options,
    rerun: Option<&RerunDirective>,
    env: &dyn EnvSource,
    config: &Config,
) -> TestCommand {
    // Raw mode: the tool is unknown, so only append the rerun selection.
    if options.raw_command {
        let extra = rerun
            .map(|r| vec![r.run_flag.clone(), r.pkg.clone()])
            .unwrap_or_default();
        return TestCommand {
            argv: ArgAssembler::raw(&options.args).with_extra(extra).build(),
            warnings: Vec::new(),
        };
    }

    // Stage 1: Scan user args
    let scanned = scan(&options.args);
    if scanned.has_json() {
        tracing::debug!("user args already request -json");
    }

    // Stage 2: Resolve target
    let target = resolve_target(options, rerun, env, &config.target);

    // Stage 3: Collect warnings for superseded or malformed run filters
    let warnings = match rerun {
        Some(r) => run_filter_warnings(&scanned, r),
        None => Vec::new(),
    };

    // Stage 4: Assemble arguments
    let argv = ArgAssembler::for_tool(&config.tool)
        .with_json(&scanned)
        .with_run_filter(rerun)
        .with_user_args(&options.args, &scanned, rerun.is_some())
        .with_targets(target.targets)
        .with_binary_args(&options.args, &scanned)
        .build();

    for w in &warnings {
        tracing::debug!(warning = %w, "run filter adjusted");
    }

    TestCommand { argv, warnings }
}

fn run_filter_warnings(scanned: &ScanResult, rerun: &RerunDirective) -> Vec<String> {
    scanned
        .run_flags()
        .map(|(_, m)| match m {
            FlagMatch::RunInline { value } | FlagMatch::RunSeparate { value } => format!(
                "-run {}: replaced by rerun filter {}",
                value, rerun.run_flag
            ),
            _ => "-run: missing value, passed through unchanged".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::env_source::FixedEnv;

    #[test]
    fn program_and_args_split() {
        let cmd = build_test_command(
            &Options::default(),
            None,
            &FixedEnv::new(),
            &Config::default(),
        );
        assert_eq!(cmd.program(), Some("go"));
        assert_eq!(cmd.args(), ["test", "-json", "./..."]);
    }

    #[test]
    fn empty_raw_command_has_no_program() {
        let opts = Options {
            raw_command: true,
            ..Options::default()
        };
        let cmd = build_test_command(&opts, None, &FixedEnv::new(), &Config::default());
        assert_eq!(cmd.program(), None);
        assert!(cmd.args().is_empty());
    }

    #[test]
    fn superseded_filter_is_reported() {
        let opts = Options {
            args: vec!["-run=TestFoo".into()],
            ..Options::default()
        };
        let rerun = RerunDirective::new("-run=TestBar", "./fails");
        let cmd = build_test_command(&opts, Some(&rerun), &FixedEnv::new(), &Config::default());
        assert_eq!(cmd.warnings.len(), 1);
        assert!(cmd.warnings[0].contains("replaced by rerun filter -run=TestBar"));
    }

    #[test]
    fn missing_value_is_reported() {
        let opts = Options {
            args: vec!["-run".into()],
            ..Options::default()
        };
        let rerun = RerunDirective::new("-run=TestBar", "./fails");
        let cmd = build_test_command(&opts, Some(&rerun), &FixedEnv::new(), &Config::default());
        assert!(cmd.warnings[0].contains("missing value"));
    }

    #[test]
    fn custom_tool_from_config() {
        let mut config = Config::default();
        config.tool.program = "/usr/local/go/bin/go".into();
        let cmd = build_test_command(&Options::default(), None, &FixedEnv::new(), &config);
        assert_eq!(cmd.program(), Some("/usr/local/go/bin/go"));
    }
}
