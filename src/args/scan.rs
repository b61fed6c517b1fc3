//! Token scanner — raw user args → positional flag matches.

/// Separator after which arguments go to the compiled test binary.
pub const ARGS_SEPARATOR: &str = "-args";

/// A flag the assembler cares about, normalized across spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagMatch {
    /// `-json` or `--json`.
    Json,
    /// Run filter with its value in the same token (`-run=X`, `--run=X`).
    RunInline { value: String },
    /// Run filter followed by a separate value token (`-run X`, `--run X`).
    RunSeparate { value: String },
    /// Bare `-run`/`--run` with nothing left to consume.
    RunMissingValue,
}

impl FlagMatch {
    /// Number of tokens this match occupies in the argument list.
    pub fn width(&self) -> usize {
        match self {
            FlagMatch::RunSeparate { .. } => 2,
            FlagMatch::Json | FlagMatch::RunInline { .. } | FlagMatch::RunMissingValue => 1,
        }
    }

    /// Whether this is any spelling of the run filter.
    pub fn is_run(&self) -> bool {
        !matches!(self, FlagMatch::Json)
    }
}

/// Result of scanning the user args.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    /// Matches in order, keyed by the index of their first token.
    pub matches: Vec<(usize, FlagMatch)>,
    /// Index of the first `-args` token, if any.
    pub separator: Option<usize>,
}

impl ScanResult {
    /// True when the user already asked for JSON output.
    pub fn has_json(&self) -> bool {
        self.matches.iter().any(|(_, m)| *m == FlagMatch::Json)
    }

    /// Run filter matches only.
    pub fn run_flags(&self) -> impl Iterator<Item = &(usize, FlagMatch)> {
        self.matches.iter().filter(|(_, m)| m.is_run())
    }
}

/// Scan args up to the `-args` separator.
///
/// Tokens after the separator belong to the test binary and are never
/// matched. A bare run flag consumes the next token as its value even if
/// that token starts with `-`, the way the Go flag parser does, but never
/// consumes the separator itself.
pub fn scan(args: &[String]) -> ScanResult {
    let separator = args.iter().position(|a| a == ARGS_SEPARATOR);
    let end = separator.unwrap_or(args.len());

    let mut matches = Vec::new();
    let mut i = 0;
    while i < end {
        let arg = args[i].as_str();
        let found = match arg {
            "-json" | "--json" => Some(FlagMatch::Json),
            "-run" | "--run" => match args.get(i + 1) {
                Some(next) if i + 1 < end => Some(FlagMatch::RunSeparate {
                    value: next.clone(),
                }),
                _ => Some(FlagMatch::RunMissingValue),
            },
            _ => inline_run_value(arg).map(|value| FlagMatch::RunInline {
                value: value.to_string(),
            }),
        };

        match found {
            Some(m) => {
                let width = m.width();
                matches.push((i, m));
                i += width;
            }
            None => i += 1,
        }
    }

    ScanResult { matches, separator }
}

fn inline_run_value(arg: &str) -> Option<&str> {
    arg.strip_prefix("-run=")
        .or_else(|| arg.strip_prefix("--run="))
}
