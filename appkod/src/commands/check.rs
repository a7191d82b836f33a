use std::path::PathBuf;

use appkod_blueprint::Blueprint;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the blueprint (YAML or JSON)
    #[arg(default_value = "blueprint.yaml")]
    pub blueprint: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let blueprint = Blueprint::from_file(&self.blueprint).unwrap_or_exit();

        let report = ops::check(&blueprint, &self.blueprint);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
