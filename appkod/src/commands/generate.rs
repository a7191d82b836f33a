use std::path::PathBuf;

use appkod_blueprint::Blueprint;
use appkod_engine::{CONFIG_FILENAME, EngineConfig};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the blueprint (YAML or JSON)
    #[arg(short, long, default_value = "blueprint.yaml")]
    pub input: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Path to appkod.toml (defaults to ./appkod.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let blueprint = Blueprint::from_file(&self.input).unwrap_or_exit();
        let config = match &self.config {
            Some(path) => EngineConfig::from_file(path)?,
            None => EngineConfig::load_or_default(CONFIG_FILENAME)?,
        };

        let report = ops::generate(
            blueprint,
            config,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )
        .wrap_err("Generation failed")?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
