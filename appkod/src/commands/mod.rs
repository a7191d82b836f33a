mod check;
mod completions;
mod generate;
mod info;
mod init;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use init::InitCommand;

/// Extension trait for exiting on blueprint errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for appkod_blueprint::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "appkod")]
#[command(version)]
#[command(about = "Generate a full-stack application skeleton from a blueprint")]
pub(crate) struct Cli {
    /// Log debug events (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a blueprint without generating code
    Check(CheckCommand),

    /// Generate the schema, models, routes and pages
    Generate(GenerateCommand),

    /// Show blueprint metadata and statistics
    Info(InfoCommand),

    /// Write an example blueprint.yaml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let cli = Cli::try_parse_from([
            "appkod", "generate", "-i", "app.json", "-o", "out", "--dry-run", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.input.to_str(), Some("app.json"));
        assert_eq!(cmd.output.to_str(), Some("out"));
        assert!(cmd.dry_run);
        assert!(cmd.config.is_none());
    }
}
