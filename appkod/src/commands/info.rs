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
pub struct InfoCommand {
    /// Path to the blueprint (YAML or JSON)
    #[arg(default_value = "blueprint.yaml")]
    pub blueprint: PathBuf,
}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let blueprint = Blueprint::from_file(&self.blueprint).unwrap_or_exit();

        let report = ops::info(&blueprint, &self.blueprint);
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
