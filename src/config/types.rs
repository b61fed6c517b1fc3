use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub target: TargetConfig,
}

/// The test tool to invoke in normal (non-raw) mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Executable name or path (default: "go").
    #[serde(default = "default_program")]
    pub program: String,
    /// Subcommand that runs tests (default: "test").
    #[serde(default = "default_subcommand")]
    pub subcommand: String,
}

/// Fallback target selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Target used when nothing else selects one (default: "./...").
    #[serde(default = "default_target")]
    pub default: String,
    /// Environment variable holding a directory override (default: "TEST_DIRECTORY").
    #[serde(default = "default_env_var")]
    pub env_var: String,
}

fn default_program() -> String {
    "go".to_string()
}

fn default_subcommand() -> String {
    "test".to_string()
}

fn default_target() -> String {
    "./...".to_string()
}

fn default_env_var() -> String {
    crate::args::TEST_DIRECTORY.to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            subcommand: default_subcommand(),
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            default: default_target(),
            env_var: default_env_var(),
        }
    }
}
