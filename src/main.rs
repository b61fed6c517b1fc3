use anyhow::{Context, Result};
use clap::Parser;

use testrun::args::{build_test_command, ProcessEnv};
use testrun::cli::{Cli, OutputFormat};
use testrun::config::Config;
use testrun::logging::init_tracing;

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let options = cli.options();
    let rerun = cli.rerun();
    let command = build_test_command(&options, rerun.as_ref(), &ProcessEnv, &config);

    for w in &command.warnings {
        eprintln!("warning: {w}");
    }

    print!("{}", render(&command.argv, cli.format)?);
    Ok(())
}

fn render(argv: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Lines => Ok(argv.iter().map(|a| format!("{a}\n")).collect()),
        OutputFormat::Json => {
            let json = serde_json::to_string(argv).context("failed to encode argv as JSON")?;
            Ok(format!("{json}\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use testrun::cli::OutputFormat;

    fn argv() -> Vec<String> {
        vec!["go".to_string(), "test".to_string(), "-run=A|B".to_string()]
    }

    #[test]
    fn render_lines() {
        assert_eq!(render(&argv(), OutputFormat::Lines).unwrap(), "go\ntest\n-run=A|B\n");
    }

    #[test]
    fn render_json() {
        assert_eq!(
            render(&argv(), OutputFormat::Json).unwrap(),
            "[\"go\",\"test\",\"-run=A|B\"]\n"
        );
    }
}
