//! Target resolver — decide which packages the test tool should select.

use crate::args::env_source::EnvSource;
use crate::args::rerun::RerunDirective;
use crate::args::Options;
use crate::config::TargetConfig;

/// Where the resolved target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// The rerun directive's package.
    Rerun,
    /// Explicit `packages` option.
    Packages,
    /// The directory environment variable.
    Environment,
    /// Nothing given, test everything.
    Default,
    /// User args are present and may already name packages; add nothing.
    None,
}

/// Result of target resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Targets to insert, in order. Empty for [`TargetSource::None`].
    pub targets: Vec<String>,
    /// How the target was determined (for logging/debugging).
    pub source: TargetSource,
}

/// Resolve the target from the first satisfied source.
///
/// Precedence: rerun directive > packages > environment > default.
/// An empty environment value counts as unset. The default applies only
/// when there are no user args at all.
pub fn resolve_target(
    options: &Options,
    rerun: Option<&RerunDirective>,
    env: &dyn EnvSource,
    config: &TargetConfig,
) -> ResolvedTarget {
    let (targets, source) = if let Some(rerun) = rerun {
        (vec![rerun.pkg.clone()], TargetSource::Rerun)
    } else if !options.packages.is_empty() {
        (options.packages.clone(), TargetSource::Packages)
    } else if let Some(dir) = env.var(&config.env_var).filter(|d| !d.is_empty()) {
        (vec![dir], TargetSource::Environment)
    } else if options.args.is_empty() {
        (vec![config.default.clone()], TargetSource::Default)
    } else {
        (Vec::new(), TargetSource::None)
    };

    tracing::debug!(?source, ?targets, "resolved test target");
    ResolvedTarget { targets, source }
}
